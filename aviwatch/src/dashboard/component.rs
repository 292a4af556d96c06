use super::html::Html;

/// A piece of the dashboard that renders itself from its own props.
pub trait Component: Send + Sync {
	fn render(&self, out: &mut Html);

	fn to_html(&self) -> String {
		let mut out = Html::new();
		self.render(&mut out);
		out.into_string()
	}
}

pub type BoxedComponent = Box<dyn Component>;

/// Page heading with a highlighted subtitle.
pub struct Header {
	pub title: String,
	pub subtitle: String,
}

impl Component for Header {
	fn render(&self, out: &mut Html) {
		out
			.open("header", &[("class", "header")])
			.element("h1", &[], &self.title)
			.element("h6", &[("class", "subtitle")], &self.subtitle)
			.close("header");
	}
}

/// Horizontal group of components.
#[derive(Default)]
pub struct Row {
	pub children: Vec<BoxedComponent>,
}

impl Row {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, child: impl Component + 'static) -> Self {
		self.children.push(Box::new(child));
		self
	}
}

impl Component for Row {
	fn render(&self, out: &mut Html) {
		out.open("div", &[("class", "row")]);
		for child in &self.children {
			child.render(out);
		}
		out.close("div");
	}
}

/// Card holding one widget. `width` is in twelfths of the row, clamped to 1..=12.
pub struct Panel {
	pub width: u8,
	pub child: BoxedComponent,
}

impl Panel {
	pub fn new(width: u8, child: impl Component + 'static) -> Self {
		Self {
			width,
			child: Box::new(child),
		}
	}
}

impl Component for Panel {
	fn render(&self, out: &mut Html) {
		let class = format!("panel col-{}", self.width.clamp(1, 12));
		out.open("div", &[("class", class.as_str())]);
		self.child.render(out);
		out.close("div");
	}
}

use std::borrow::Cow;

/// Escapes text for use in HTML element content and double-quoted attribute values.
pub fn escape(text: &str) -> Cow<'_, str> {
	if !text.contains(['&', '<', '>', '"', '\'']) {
		return Cow::Borrowed(text);
	}
	let mut escaped = String::with_capacity(text.len() + 16);
	for c in text.chars() {
		match c {
			'&' => escaped.push_str("&amp;"),
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#39;"),
			_ => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

/// Append-only HTML writer. Text and attribute values are always escaped.
#[derive(Default)]
pub struct Html {
	buffer: String,
}

impl Html {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn open(&mut self, tag: &str, attributes: &[(&str, &str)]) -> &mut Self {
		self.start_tag(tag, attributes);
		self
	}

	pub fn close(&mut self, tag: &str) -> &mut Self {
		self.buffer.push_str("</");
		self.buffer.push_str(tag);
		self.buffer.push('>');
		self
	}

	/// A void element such as `<input>` or `<link>`.
	pub fn void(&mut self, tag: &str, attributes: &[(&str, &str)]) -> &mut Self {
		self.start_tag(tag, attributes);
		self
	}

	/// `<tag attributes>text</tag>`
	pub fn element(&mut self, tag: &str, attributes: &[(&str, &str)], text: &str) -> &mut Self {
		self.start_tag(tag, attributes);
		self.text(text);
		self.close(tag)
	}

	pub fn text(&mut self, text: &str) -> &mut Self {
		self.buffer.push_str(&escape(text));
		self
	}

	/// Appends markup verbatim. Only for trusted, static content.
	pub fn raw(&mut self, markup: &str) -> &mut Self {
		self.buffer.push_str(markup);
		self
	}

	pub fn into_string(self) -> String {
		self.buffer
	}

	fn start_tag(&mut self, tag: &str, attributes: &[(&str, &str)]) {
		self.buffer.push('<');
		self.buffer.push_str(tag);
		for (key, value) in attributes {
			self.buffer.push(' ');
			self.buffer.push_str(key);
			if !value.is_empty() {
				self.buffer.push_str("=\"");
				self.buffer.push_str(&escape(value));
				self.buffer.push('"');
			}
		}
		self.buffer.push('>');
	}
}

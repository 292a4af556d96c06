//! Filter widgets. Each one renders a `<label>` followed by its control.

use super::{component::Component, html::Html};

/// Single choice shown as radio buttons.
pub struct RadioGroup {
	pub id: String,
	pub label: String,
	pub options: Vec<String>,
	pub selected: Option<String>,
}

impl Component for RadioGroup {
	fn render(&self, out: &mut Html) {
		out
			.element("label", &[("class", "widget-label")], &self.label)
			.open("div", &[("id", self.id.as_str()), ("class", "radio-group")]);
		for (index, option) in self.options.iter().enumerate() {
			let input_id = format!("{}-{index}", self.id);
			let mut attributes = vec![
				("type", "radio"),
				("id", input_id.as_str()),
				("name", self.id.as_str()),
				("value", option.as_str()),
			];
			if self.selected.as_ref() == Some(option) {
				attributes.push(("checked", ""));
			}
			out
				.void("input", &attributes)
				.element("label", &[("for", input_id.as_str())], option);
		}
		out.close("div");
	}
}

/// Single choice shown as a dropdown.
pub struct Dropdown {
	pub id: String,
	pub label: String,
	pub options: Vec<String>,
	pub selected: Option<String>,
}

impl Component for Dropdown {
	fn render(&self, out: &mut Html) {
		out
			.element("label", &[("class", "widget-label"), ("for", self.id.as_str())], &self.label)
			.open("select", &[("id", self.id.as_str())]);
		for option in &self.options {
			render_option(out, option, self.selected.as_ref() == Some(option));
		}
		out.close("select");
	}
}

/// Multi-select of feature names. Its `change` event carries the complete selection to the map.
pub struct FeatureSelector {
	pub id: String,
	pub label: String,
	pub options: Vec<String>,
	pub selected: Vec<String>,
	/// Without the API the selection cannot be changed.
	pub enabled: bool,
}

impl Component for FeatureSelector {
	fn render(&self, out: &mut Html) {
		let size = self.options.len().clamp(1, 8).to_string();
		let mut attributes = vec![
			("id", self.id.as_str()),
			("class", "feature-selector"),
			("multiple", ""),
			("size", size.as_str()),
		];
		if !self.enabled {
			attributes.push(("disabled", ""));
		}
		out
			.element("label", &[("class", "widget-label"), ("for", self.id.as_str())], &self.label)
			.open("select", &attributes);
		for option in &self.options {
			render_option(out, option, self.selected.contains(option));
		}
		out.close("select");
	}
}

fn render_option(out: &mut Html, value: &str, selected: bool) {
	if selected {
		out.element("option", &[("value", value), ("selected", "")], value);
	} else {
		out.element("option", &[("value", value)], value);
	}
}

pub struct TextInput {
	pub id: String,
	pub label: String,
	pub value: String,
}

impl Component for TextInput {
	fn render(&self, out: &mut Html) {
		out
			.element("label", &[("class", "widget-label"), ("for", self.id.as_str())], &self.label)
			.void(
				"input",
				&[("type", "text"), ("id", self.id.as_str()), ("value", self.value.as_str())],
			);
	}
}

/// Integer range slider with its current value printed next to it.
pub struct Slider {
	pub id: String,
	pub label: String,
	pub min: i64,
	pub max: i64,
	pub step: i64,
	pub value: i64,
}

impl Component for Slider {
	fn render(&self, out: &mut Html) {
		let (min, max, step, value) = (
			self.min.to_string(),
			self.max.to_string(),
			self.step.to_string(),
			self.value.to_string(),
		);
		let output_id = format!("{}-value", self.id);
		out
			.element("label", &[("class", "widget-label"), ("for", self.id.as_str())], &self.label)
			.void(
				"input",
				&[
					("type", "range"),
					("id", self.id.as_str()),
					("min", min.as_str()),
					("max", max.as_str()),
					("step", step.as_str()),
					("value", value.as_str()),
				],
			)
			.element("output", &[("id", output_id.as_str()), ("for", self.id.as_str())], &value);
	}
}

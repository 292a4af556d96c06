use super::{
	component::{BoxedComponent, Component, Header, Panel, Row},
	html::Html,
	map_view::{MapEndpoints, MapView},
	widgets::{Dropdown, FeatureSelector, RadioGroup, Slider, TextInput},
};
use crate::config::{DashboardConfig, MapConfig};
use aviwatch_core::MapSnapshot;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const DECORATOR_JS: &str = "https://unpkg.com/leaflet-polylinedecorator@1.6.0/dist/leaflet.polylineDecorator.js";
const LOCATE_CSS: &str = "https://unpkg.com/leaflet.locatecontrol@0.79.0/dist/L.Control.Locate.min.css";
const LOCATE_JS: &str = "https://unpkg.com/leaflet.locatecontrol@0.79.0/dist/L.Control.Locate.min.js";

const STYLE: &str = include_str!("style.css");
const CLIENT_JS: &str = include_str!("client.js");

/// Complete HTML document.
pub struct Page {
	pub title: String,
	pub stylesheets: Vec<String>,
	pub scripts: Vec<String>,
	pub children: Vec<BoxedComponent>,
}

impl Page {
	pub fn new(title: &str) -> Self {
		Self {
			title: title.to_string(),
			stylesheets: vec![LEAFLET_CSS.to_string(), LOCATE_CSS.to_string()],
			scripts: vec![LEAFLET_JS.to_string(), DECORATOR_JS.to_string(), LOCATE_JS.to_string()],
			children: Vec::new(),
		}
	}

	pub fn with(mut self, child: impl Component + 'static) -> Self {
		self.children.push(Box::new(child));
		self
	}
}

impl Component for Page {
	fn render(&self, out: &mut Html) {
		out
			.raw("<!DOCTYPE html>")
			.open("html", &[("lang", "pt")])
			.open("head", &[])
			.void("meta", &[("charset", "utf-8")])
			.void(
				"meta",
				&[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
			)
			.element("title", &[], &self.title);
		for href in &self.stylesheets {
			out.void("link", &[("rel", "stylesheet"), ("href", href.as_str())]);
		}
		out.open("style", &[]).raw(STYLE).close("style").close("head");

		out.open("body", &[]).open("div", &[("class", "container")]);
		for child in &self.children {
			child.render(out);
		}
		out.close("div");

		for src in &self.scripts {
			out.element("script", &[("src", src.as_str())], "");
		}
		out.open("script", &[]).raw(CLIENT_JS).close("script");
		out.close("body").close("html");
	}
}

/// Composes the dashboard: header, filter widgets and the map showing `snapshot`.
///
/// With `api_enabled == false` the feature selector is disabled and the map never calls back.
pub fn build_dashboard(dashboard: &DashboardConfig, map: &MapConfig, snapshot: &MapSnapshot, api_enabled: bool) -> Page {
	let places = Row::new()
		.with(Panel::new(
			4,
			RadioGroup {
				id: "airports".to_string(),
				label: dashboard.airports.label.clone(),
				options: dashboard.airports.options.clone(),
				selected: dashboard.airports.selected.clone(),
			},
		))
		.with(Panel::new(
			4,
			Dropdown {
				id: "years".to_string(),
				label: dashboard.years.label.clone(),
				options: dashboard.years.options.clone(),
				selected: dashboard.years.selected.clone(),
			},
		));

	let sightings = Row::new()
		.with(Panel::new(
			4,
			TextInput {
				id: "animal".to_string(),
				label: dashboard.animal.label.clone(),
				value: dashboard.animal.value.clone(),
			},
		))
		.with(Panel::new(
			4,
			Slider {
				id: "months".to_string(),
				label: dashboard.months.label.clone(),
				min: dashboard.months.min,
				max: dashboard.months.max,
				step: dashboard.months.step,
				value: dashboard.months.value,
			},
		));

	let selector = Row::new().with(Panel::new(
		4,
		FeatureSelector {
			id: "features".to_string(),
			label: dashboard.selector.label.clone(),
			options: snapshot.options.clone(),
			selected: snapshot.visible.clone(),
			enabled: api_enabled,
		},
	));

	let endpoints = api_enabled.then(MapEndpoints::default);

	Page::new(&dashboard.title)
		.with(Header {
			title: dashboard.title.clone(),
			subtitle: dashboard.subtitle.clone(),
		})
		.with(places)
		.with(sightings)
		.with(selector)
		.with(Row::new().with(Panel::new(12, MapView::new(map, snapshot, endpoints))))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::Config;

	fn sample_page(api_enabled: bool) -> String {
		let config = Config::default();
		let state = config.map.initial_state().unwrap();
		build_dashboard(&config.dashboard, &config.map, &MapSnapshot::of(&state, 0), api_enabled).to_html()
	}

	#[test]
	fn sample_dashboard() {
		let html = sample_page(true);
		assert!(html.starts_with("<!DOCTYPE html><html lang=\"pt\"><head><meta charset=\"utf-8\">"));
		assert!(html.contains("<title>Monitoramento de pássaros</title>"));
		assert!(html.contains("<h1>Monitoramento de pássaros</h1>"));
		assert!(html.contains("value=\"Montréal\" checked>"));
		assert!(html.contains("<option value=\"1962\" selected>1962</option>"));
		assert!(html.contains("<option value=\"Pássaro\" selected>Pássaro</option>"));
		assert!(html.contains("<script type=\"application/json\" id=\"aviwatch-config\">"));
		assert!(html.contains("\"api\":{"));
		assert!(html.contains(LEAFLET_JS));
		assert!(html.ends_with("</script></body></html>"));
	}

	#[test]
	fn without_api_the_selector_is_disabled() {
		let html = sample_page(false);
		assert!(html.contains("multiple size=\"1\" disabled>"));
		assert!(html.contains("\"api\":null"));
	}

	#[test]
	fn widget_order() {
		let html = sample_page(true);
		let positions: Vec<usize> = ["id=\"airports\"", "id=\"years\"", "id=\"animal\"", "id=\"months\"", "id=\"features\"", "id=\"map\""]
			.iter()
			.map(|needle| html.find(needle).unwrap())
			.collect();
		assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
	}

	#[test]
	fn widgets_are_paired_in_rows() {
		let html = sample_page(true);
		let rows: Vec<&str> = html.split("<div class=\"row\">").skip(1).collect();
		assert_eq!(rows.len(), 4);
		let ids = |row: &str| {
			["airports", "years", "animal", "months", "features", "map"]
				.into_iter()
				.filter(|id| row.contains(&format!("id=\"{id}\"")))
				.collect::<Vec<_>>()
		};
		assert_eq!(ids(rows[0]), ["airports", "years"]);
		assert_eq!(ids(rows[1]), ["animal", "months"]);
		assert_eq!(ids(rows[2]), ["features"]);
		assert_eq!(ids(rows[3]), ["map"]);
	}

	#[test]
	fn locate_control_asks_for_high_accuracy() {
		assert!(CLIENT_JS.contains("locateOptions: { enableHighAccuracy: true }"));
	}
}

use super::{component::Component, html::Html};
use crate::config::MapConfig;
use aviwatch_core::{MapSnapshot, PathDecoration};
use serde_json::{Value, json};

/// API paths the client script talks to.
#[derive(Clone, Debug, PartialEq)]
pub struct MapEndpoints {
	pub visible: String,
	pub features: String,
}

impl Default for MapEndpoints {
	fn default() -> Self {
		Self {
			visible: "/api/map/visible".to_string(),
			features: "/api/map/features".to_string(),
		}
	}
}

/// The Leaflet map. Renders the map container and the client configuration as an inline JSON script.
pub struct MapView {
	pub id: String,
	pub basemap_url: String,
	pub attribution: String,
	pub max_zoom: u8,
	pub locate_control: bool,
	pub zoom_to_bounds: bool,
	pub height: String,
	/// `None` when the API is disabled. The client then never calls back.
	pub endpoints: Option<MapEndpoints>,
	/// GeoJSON of the render the page is served with.
	pub initial_features: Value,
	pub path: PathDecoration,
}

impl MapView {
	pub fn new(config: &MapConfig, snapshot: &MapSnapshot, endpoints: Option<MapEndpoints>) -> Self {
		Self {
			id: "map".to_string(),
			basemap_url: config.basemap.url.clone(),
			attribution: config.basemap.attribution.clone(),
			max_zoom: config.basemap.max_zoom,
			locate_control: config.locate_control,
			zoom_to_bounds: config.zoom_to_bounds,
			height: config.height.clone(),
			endpoints,
			initial_features: snapshot.rendered.to_geojson(),
			path: config.path.clone(),
		}
	}

	pub fn client_config(&self) -> Value {
		let api = self.endpoints.as_ref().map(|e| {
			json!({
				"visible": e.visible,
				"features": e.features,
			})
		});
		json!({
			"mapId": self.id,
			"basemap": {
				"url": self.basemap_url,
				"attribution": self.attribution,
				"maxZoom": self.max_zoom,
			},
			"locateControl": self.locate_control,
			"zoomToBounds": self.zoom_to_bounds,
			"api": api,
			"features": self.initial_features,
			"path": self.path,
		})
	}
}

/// Makes JSON safe to embed in a `<script>` element.
///
/// `<` only occurs inside JSON strings, where `\u003c` decodes to the same text. Without a literal `<`
/// the parser never sees `</script>` or `<!--`.
fn script_safe(json: &str) -> String {
	json.replace('<', "\\u003c")
}

impl Component for MapView {
	fn render(&self, out: &mut Html) {
		let style = format!("height: {}", self.height);
		out
			.element("div", &[("id", self.id.as_str()), ("class", "map"), ("style", style.as_str())], "")
			.open("script", &[("type", "application/json"), ("id", "aviwatch-config")])
			.raw(&script_safe(&self.client_config().to_string()))
			.close("script");
	}
}

//! Map section of the configuration: basemap, features and the decorated flight path.
//!
//! # Example YAML
//! ```yaml
//! map:
//!   basemap:
//!     url: "https://tile.openstreetmap.org/{z}/{x}/{y}.png"
//!     attribution: "&copy; OpenStreetMap contributors"
//!   features:
//!     - { name: "Pássaro", lat: 29.00636, lon: -81.144778 }
//!     - { name: "Garça", lat: 29.01636, lon: -81.144778, tooltip: "Garça-branca" }
//!   visible: ["Pássaro"]
//! ```

use anyhow::{Context, Result};
use aviwatch_core::{
	FeatureSpec, IconSpec, LatLng, MapState, PathDecoration, PathPattern, PathStyle, PatternSymbol, Spacing,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BasemapConfig {
	/// Tile URL template, e.g. `https://.../{z}/{x}/{y}{r}.png`.
	pub url: String,
	#[serde(default)]
	pub attribution: String,
	#[serde(default = "default_max_zoom")]
	pub max_zoom: u8,
}

fn default_max_zoom() -> u8 {
	15
}

impl Default for BasemapConfig {
	fn default() -> Self {
		Self {
			url: "https://tiles.stadiamaps.com/tiles/alidade_smooth_dark/{z}/{x}/{y}{r}.png".to_string(),
			attribution: "&copy; <a href=\"https://stadiamaps.com/\">Stadia Maps</a>".to_string(),
			max_zoom: default_max_zoom(),
		}
	}
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
	#[serde(default)]
	pub basemap: BasemapConfig,

	/// Show a button that centers the map on the user's location.
	#[serde(default = "default_true")]
	pub locate_control: bool,

	/// Fit the map view to the visible features after every update.
	#[serde(default = "default_true")]
	pub zoom_to_bounds: bool,

	/// CSS height of the map element.
	#[serde(default = "default_height")]
	pub height: String,

	/// Point features. Names may repeat.
	#[serde(default)]
	pub features: Vec<FeatureSpec>,

	/// Names visible at startup. Defaults to all feature names.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub visible: Option<Vec<String>>,

	/// Decorated flight path drawn on top of the basemap.
	#[serde(default, skip_serializing_if = "PathDecoration::is_empty")]
	pub path: PathDecoration,
}

fn default_true() -> bool {
	true
}

fn default_height() -> String {
	"700px".to_string()
}

/// The built-in sample: three detections near Daytona Beach and a flight path over the Bay of Biscay.
impl Default for MapConfig {
	fn default() -> Self {
		let features = [29.006360, 29.016360, 29.026360]
			.iter()
			.map(|lat| FeatureSpec::new("Pássaro", *lat, -81.144778))
			.collect();

		let waypoints = [
			[42.9, -15.0],
			[44.18, -11.4],
			[45.77, -8.0],
			[47.61, -6.4],
			[49.41, -6.1],
			[51.01, -7.2],
		]
		.into_iter()
		.filter_map(|p| LatLng::try_from(p).ok())
		.collect();

		let patterns = vec![
			PathPattern {
				offset: Spacing::Pixels(0.0),
				end_offset: Spacing::Pixels(0.0),
				repeat: Spacing::Pixels(10.0),
				symbol: PatternSymbol::Dash {
					pixel_size: 5.0,
					path_options: PathStyle {
						color: "#000".to_string(),
						weight: 1.0,
						opacity: 0.2,
					},
				},
			},
			PathPattern {
				offset: Spacing::Percent(16.0),
				end_offset: Spacing::Pixels(0.0),
				repeat: Spacing::Percent(33.0),
				symbol: PatternSymbol::Marker {
					icon: IconSpec {
						url: "https://www.pngplay.com/wp-content/uploads/13/Bird-Silhouette-No-Background.png".to_string(),
						anchor: [16.0, 16.0],
					},
					rotate: true,
				},
			},
		];

		Self {
			basemap: BasemapConfig::default(),
			locate_control: true,
			zoom_to_bounds: true,
			height: default_height(),
			features,
			visible: None,
			path: PathDecoration { waypoints, patterns },
		}
	}
}

impl MapConfig {
	/// Validates the features and builds the initial map state.
	pub fn initial_state(&self) -> Result<MapState> {
		let state = MapState::initialize(self.features.clone(), Vec::<String>::new())?;
		let visible = match &self.visible {
			Some(names) => names.clone(),
			None => state.feature_names(),
		};
		Ok(state.set_visible_names(visible))
	}

	pub fn verify(&self) -> Result<()> {
		self.path.verify().context("invalid map path")?;
		self.initial_state().map(|_| ())
	}
}

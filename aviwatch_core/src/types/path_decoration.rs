//! Styled flight paths drawn independently of feature filtering.
//!
//! A [`PathDecoration`] is an ordered list of waypoints and the patterns repeated along it,
//! e.g. a faint dashed line plus a rotated bird marker every third of the way:
//!
//! ```yaml
//! path:
//!   waypoints: [[42.9, -15], [44.18, -11.4], [45.77, -8.0]]
//!   patterns:
//!     - repeat: "10"
//!       dash: { pixel_size: 5, path_options: { color: "#000", weight: 1, opacity: 0.2 } }
//!     - offset: "16%"
//!       repeat: "33%"
//!       marker: { rotate: true, icon: { url: "bird.png", anchor: [16, 16] } }
//! ```

use super::{LatLng, Spacing};
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

/// Stroke options of a dash symbol.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathStyle {
	#[serde(default = "default_color")]
	pub color: String,
	#[serde(default = "default_weight")]
	pub weight: f64,
	#[serde(default = "default_opacity")]
	pub opacity: f64,
}

fn default_color() -> String {
	"#3388ff".to_string()
}

fn default_weight() -> f64 {
	3.0
}

fn default_opacity() -> f64 {
	1.0
}

impl Default for PathStyle {
	fn default() -> Self {
		Self {
			color: default_color(),
			weight: default_weight(),
			opacity: default_opacity(),
		}
	}
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct IconSpec {
	pub url: String,
	/// Pixel offset of the icon point that sits on the path.
	#[serde(default)]
	pub anchor: [f64; 2],
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSymbol {
	Dash {
		pixel_size: f64,
		#[serde(default)]
		path_options: PathStyle,
	},
	Marker {
		icon: IconSpec,
		/// Rotate the icon to follow the path direction.
		#[serde(default)]
		rotate: bool,
	},
}

/// One symbol repeated along a path.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PathPattern {
	#[serde(default)]
	pub offset: Spacing,
	#[serde(default)]
	pub end_offset: Spacing,
	pub repeat: Spacing,
	#[serde(flatten)]
	pub symbol: PatternSymbol,
}

impl PathPattern {
	fn verify(&self) -> Result<()> {
		match &self.symbol {
			PatternSymbol::Dash {
				pixel_size,
				path_options,
			} => {
				ensure!(
					pixel_size.is_finite() && *pixel_size >= 0.0,
					"dash pixel size must be a non-negative number, but is {pixel_size}"
				);
				ensure!(
					(0.0..=1.0).contains(&path_options.opacity),
					"opacity must be within [0, 1], but is {}",
					path_options.opacity
				);
			}
			PatternSymbol::Marker { icon, .. } => {
				ensure!(!icon.url.trim().is_empty(), "marker icon url is empty");
			}
		}
		Ok(())
	}
}

/// An ordered path with rendering patterns. Purely presentational and never filtered.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathDecoration {
	#[serde(default)]
	pub waypoints: Vec<LatLng>,
	#[serde(default)]
	pub patterns: Vec<PathPattern>,
}

impl PathDecoration {
	pub fn new(waypoints: Vec<LatLng>, patterns: Vec<PathPattern>) -> Result<Self> {
		let path = Self { waypoints, patterns };
		path.verify()?;
		Ok(path)
	}

	/// A path needs at least two waypoints; no waypoints at all means "no path".
	pub fn verify(&self) -> Result<()> {
		ensure!(
			self.waypoints.is_empty() || self.waypoints.len() >= 2,
			"a path needs at least 2 waypoints, but has {}",
			self.waypoints.len()
		);
		for (index, pattern) in self.patterns.iter().enumerate() {
			pattern
				.verify()
				.map_err(|err| err.context(format!("invalid path pattern #{index}")))?;
		}
		Ok(())
	}

	pub fn is_empty(&self) -> bool {
		self.waypoints.is_empty()
	}

	/// Returns `[west, south, east, north]` of all waypoints.
	pub fn bounds(&self) -> Option<[f64; 4]> {
		bounds_of(self.waypoints.iter().copied())
	}
}

/// Computes `[west, south, east, north]` of a set of positions.
pub fn bounds_of(positions: impl Iterator<Item = LatLng>) -> Option<[f64; 4]> {
	positions.fold(None, |acc, p| {
		Some(match acc {
			None => [p.lng(), p.lat(), p.lng(), p.lat()],
			Some([w, s, e, n]) => [w.min(p.lng()), s.min(p.lat()), e.max(p.lng()), n.max(p.lat())],
		})
	})
}

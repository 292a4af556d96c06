use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt::Display, str::FromStr};

/// A distance along a path: either absolute pixels or a share of the path length.
///
/// Written as `"10"` (pixels) or `"16%"` (percent), the notation of Leaflet's polyline decorator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Spacing {
	Pixels(f64),
	Percent(f64),
}

impl Spacing {
	fn checked(self) -> Result<Self> {
		match self {
			Spacing::Pixels(v) | Spacing::Percent(v) => {
				ensure!(v.is_finite() && v >= 0.0, "spacing must be a non-negative number, but is {v}");
			}
		}
		if let Spacing::Percent(v) = self {
			ensure!(v <= 100.0, "percentage must not exceed 100, but is {v}");
		}
		Ok(self)
	}
}

impl Default for Spacing {
	fn default() -> Self {
		Spacing::Pixels(0.0)
	}
}

impl FromStr for Spacing {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		let s = s.trim();
		if s.is_empty() {
			bail!("spacing is empty");
		}
		let spacing = if let Some(number) = s.strip_suffix('%') {
			Spacing::Percent(
				number
					.trim()
					.parse()
					.with_context(|| format!("invalid percentage '{s}'"))?,
			)
		} else {
			Spacing::Pixels(s.parse().with_context(|| format!("invalid pixel value '{s}'"))?)
		};
		spacing.checked()
	}
}

impl Display for Spacing {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Spacing::Pixels(v) => write!(f, "{v}"),
			Spacing::Percent(v) => write!(f, "{v}%"),
		}
	}
}

impl Serialize for Spacing {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.to_string())
	}
}

impl<'de> Deserialize<'de> for Spacing {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			Number(f64),
			Text(String),
		}

		match Raw::deserialize(deserializer)? {
			Raw::Number(v) => Spacing::Pixels(v).checked(),
			Raw::Text(s) => s.parse(),
		}
		.map_err(serde::de::Error::custom)
	}
}

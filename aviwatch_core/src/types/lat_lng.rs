use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Debug;

/// A validated geographic position in degrees (WGS 84).
///
/// Latitude comes first, as in Leaflet. GeoJSON output uses `[lng, lat]`, see [`LatLng::to_geojson`].
#[derive(Clone, Copy, PartialEq)]
pub struct LatLng {
	lat: f64,
	lng: f64,
}

impl LatLng {
	/// Checks that both values are finite and inside the valid degree ranges.
	pub fn new(lat: f64, lng: f64) -> Result<Self> {
		ensure!(lat.is_finite(), "latitude must be a finite number, but is {lat}");
		ensure!(lng.is_finite(), "longitude must be a finite number, but is {lng}");
		ensure!(
			(-90.0..=90.0).contains(&lat),
			"latitude must be within [-90, 90], but is {lat}"
		);
		ensure!(
			(-180.0..=180.0).contains(&lng),
			"longitude must be within [-180, 180], but is {lng}"
		);
		Ok(Self { lat, lng })
	}

	#[must_use]
	pub fn lat(&self) -> f64 {
		self.lat
	}

	#[must_use]
	pub fn lng(&self) -> f64 {
		self.lng
	}

	/// Returns the position in GeoJSON axis order.
	#[must_use]
	pub fn to_geojson(&self) -> [f64; 2] {
		[self.lng, self.lat]
	}
}

impl Debug for LatLng {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		[self.lat, self.lng].fmt(f)
	}
}

impl TryFrom<[f64; 2]> for LatLng {
	type Error = anyhow::Error;

	fn try_from(value: [f64; 2]) -> Result<Self> {
		LatLng::new(value[0], value[1])
	}
}

impl From<LatLng> for [f64; 2] {
	fn from(value: LatLng) -> Self {
		[value.lat, value.lng]
	}
}

// Serialized as `[lat, lng]`, matching the waypoint notation used in configuration files.
impl Serialize for LatLng {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		[self.lat, self.lng].serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for LatLng {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let pair = <[f64; 2]>::deserialize(deserializer)?;
		LatLng::try_from(pair).map_err(serde::de::Error::custom)
	}
}

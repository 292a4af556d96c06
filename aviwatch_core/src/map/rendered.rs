use crate::types::{Feature, FeatureId, LatLng, bounds_of};
use serde_json::{Value, json};

/// One feature as handed to the rendering surface.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedFeature {
	pub id: FeatureId,
	pub name: String,
	pub position: LatLng,
	pub tooltip: String,
}

impl From<&Feature> for RenderedFeature {
	fn from(feature: &Feature) -> Self {
		Self {
			id: feature.id(),
			name: feature.name().to_string(),
			position: feature.position(),
			tooltip: feature.tooltip().to_string(),
		}
	}
}

impl RenderedFeature {
	pub fn to_geojson(&self) -> Value {
		json!({
			"type": "Feature",
			"geometry": {
				"type": "Point",
				"coordinates": self.position.to_geojson(),
			},
			"properties": {
				"id": self.id.0,
				"name": self.name,
				"tooltip": self.tooltip,
			},
		})
	}
}

/// The filtered features of one render pass, in collection order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderedFeatureList {
	features: Vec<RenderedFeature>,
}

impl RenderedFeatureList {
	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, RenderedFeature> {
		self.features.iter()
	}

	pub fn ids(&self) -> Vec<FeatureId> {
		self.features.iter().map(|f| f.id).collect()
	}

	/// `[west, south, east, north]` of the rendered features, used to zoom the map onto them.
	pub fn bounds(&self) -> Option<[f64; 4]> {
		bounds_of(self.features.iter().map(|f| f.position))
	}

	/// Converts the list into a GeoJSON `FeatureCollection` of points.
	pub fn to_geojson(&self) -> Value {
		json!({
			"type": "FeatureCollection",
			"features": self.features.iter().map(RenderedFeature::to_geojson).collect::<Vec<_>>(),
		})
	}
}

impl FromIterator<RenderedFeature> for RenderedFeatureList {
	fn from_iter<T: IntoIterator<Item = RenderedFeature>>(iter: T) -> Self {
		Self {
			features: iter.into_iter().collect(),
		}
	}
}

impl<'a> IntoIterator for &'a RenderedFeatureList {
	type Item = &'a RenderedFeature;
	type IntoIter = std::slice::Iter<'a, RenderedFeature>;

	fn into_iter(self) -> Self::IntoIter {
		self.features.iter()
	}
}

use super::LatLng;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identity of a feature inside its collection.
///
/// Names may repeat, so features are told apart by their position in the collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FeatureId(pub u32);

impl Display for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A feature entry as it appears in configuration, before validation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureSpec {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lat: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lon: Option<f64>,
	/// Text shown when hovering the marker. Defaults to the name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tooltip: Option<String>,
}

impl FeatureSpec {
	pub fn new(name: &str, lat: f64, lon: f64) -> Self {
		Self {
			name: Some(name.to_string()),
			lat: Some(lat),
			lon: Some(lon),
			tooltip: None,
		}
	}

	pub fn with_tooltip(mut self, tooltip: &str) -> Self {
		self.tooltip = Some(tooltip.to_string());
		self
	}
}

/// A named point eligible for map rendering. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
	id: FeatureId,
	name: String,
	position: LatLng,
	tooltip: String,
}

impl Feature {
	/// Validates a [`FeatureSpec`] and assigns it the given identity.
	pub fn from_spec(id: FeatureId, spec: FeatureSpec) -> Result<Self> {
		Self::validate(id, spec).with_context(|| format!("invalid feature {id}"))
	}

	fn validate(id: FeatureId, spec: FeatureSpec) -> Result<Self> {
		let Some(name) = spec.name else {
			bail!("name is missing");
		};
		if name.trim().is_empty() {
			bail!("name is empty");
		}
		let (Some(lat), Some(lon)) = (spec.lat, spec.lon) else {
			bail!("coordinates of '{name}' are missing");
		};
		let position = LatLng::new(lat, lon).with_context(|| format!("coordinates of '{name}' are invalid"))?;
		let tooltip = spec.tooltip.unwrap_or_else(|| name.clone());

		Ok(Self {
			id,
			name,
			position,
			tooltip,
		})
	}

	pub fn id(&self) -> FeatureId {
		self.id
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn position(&self) -> LatLng {
		self.position
	}

	pub fn tooltip(&self) -> &str {
		&self.tooltip
	}

	pub(crate) fn with_id(mut self, id: FeatureId) -> Self {
		self.id = id;
		self
	}
}

/// Validates a list of specs, numbering the features in order.
pub fn features_from_specs(specs: Vec<FeatureSpec>) -> Result<Vec<Feature>> {
	specs
		.into_iter()
		.enumerate()
		.map(|(index, spec)| Feature::from_spec(FeatureId(index as u32), spec))
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn error_chain(err: &anyhow::Error) -> Vec<String> {
		err.chain().map(ToString::to_string).collect()
	}

	#[test]
	fn from_spec_defaults_tooltip_to_name() {
		let feature = Feature::from_spec(FeatureId(3), FeatureSpec::new("Pássaro", 29.00636, -81.144778)).unwrap();
		assert_eq!(feature.id(), FeatureId(3));
		assert_eq!(feature.name(), "Pássaro");
		assert_eq!(feature.tooltip(), "Pássaro");
		assert_eq!(feature.position(), LatLng::new(29.00636, -81.144778).unwrap());
	}

	#[test]
	fn from_spec_keeps_explicit_tooltip() {
		let spec = FeatureSpec::new("Garça", 1.0, 2.0).with_tooltip("Garça-branca, pista 09");
		let feature = Feature::from_spec(FeatureId(0), spec).unwrap();
		assert_eq!(feature.tooltip(), "Garça-branca, pista 09");
	}

	#[rstest]
	#[case(FeatureSpec { name: None, lat: Some(1.0), lon: Some(2.0), tooltip: None }, "name is missing")]
	#[case(FeatureSpec { name: Some("  ".into()), lat: Some(1.0), lon: Some(2.0), tooltip: None }, "name is empty")]
	#[case(FeatureSpec { name: Some("X".into()), lat: None, lon: Some(2.0), tooltip: None }, "coordinates of 'X' are missing")]
	#[case(FeatureSpec { name: Some("X".into()), lat: Some(1.0), lon: None, tooltip: None }, "coordinates of 'X' are missing")]
	#[case(FeatureSpec { name: Some("X".into()), lat: Some(95.0), lon: Some(2.0), tooltip: None }, "coordinates of 'X' are invalid")]
	fn from_spec_rejects_malformed(#[case] spec: FeatureSpec, #[case] cause: &str) {
		let err = Feature::from_spec(FeatureId(7), spec).unwrap_err();
		let chain = error_chain(&err);
		assert_eq!(chain[0], "invalid feature #7");
		assert_eq!(chain[1], cause);
	}

	#[test]
	fn features_from_specs_numbers_in_order() {
		let features = features_from_specs(vec![
			FeatureSpec::new("A", 0.0, 0.0),
			FeatureSpec::new("A", 0.0, 1.0),
			FeatureSpec::new("B", 0.0, 2.0),
		])
		.unwrap();
		let ids: Vec<_> = features.iter().map(Feature::id).collect();
		assert_eq!(ids, vec![FeatureId(0), FeatureId(1), FeatureId(2)]);
	}

	#[test]
	fn features_from_specs_reports_offending_index() {
		let err = features_from_specs(vec![FeatureSpec::new("A", 0.0, 0.0), FeatureSpec::default()]).unwrap_err();
		assert_eq!(err.to_string(), "invalid feature #1");
	}

	#[test]
	fn spec_deserializes_with_defaults() {
		let spec: FeatureSpec = serde_json::from_str(r#"{"name":"Pássaro","lat":29.0}"#).unwrap();
		assert_eq!(
			spec,
			FeatureSpec {
				name: Some("Pássaro".into()),
				lat: Some(29.0),
				lon: None,
				tooltip: None
			}
		);
		assert!(serde_json::from_str::<FeatureSpec>(r#"{"nome":"x"}"#).is_err());
	}
}

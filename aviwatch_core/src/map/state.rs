//! The live filtered map view.
//!
//! A [`MapState`] holds a fixed collection of features and the current [`VisibleSet`]. Rendering is
//! a pure projection: exactly the features whose name is in the visible set, in collection order.
//!
//! Filtering is per feature, not per distinct name, so several features sharing a name are all
//! shown or all hidden together. Names in the visible set that match no feature are allowed and
//! simply match nothing.

use super::{RenderedFeature, RenderedFeatureList};
use crate::types::{Feature, FeatureId, FeatureSpec, VisibleSet, features_from_specs};
use anyhow::{Context, Result};
use itertools::Itertools;
use std::sync::Arc;

/// Lifecycle phase of a map view.
///
/// Feature data is static and local, so a map is ready as soon as it exists. Fetching features
/// from a remote source would add a loading and an error phase in front of `Ready`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapPhase {
	Ready,
}

#[derive(Clone, Debug)]
pub struct MapState {
	features: Arc<[Feature]>,
	visible: VisibleSet,
	phase: MapPhase,
}

impl MapState {
	/// Validates the raw feature entries and builds a map showing `initial_visible`.
	///
	/// Malformed entries (missing name or coordinates, coordinates out of range) fail the whole call.
	/// An empty feature list is valid.
	pub fn initialize<I, S>(features: Vec<FeatureSpec>, initial_visible: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let features = features_from_specs(features).context("initializing map features")?;
		Ok(Self::from_features(features, initial_visible))
	}

	/// Builds a map from already validated features. Identities are renumbered by position.
	pub fn from_features<I, S>(features: Vec<Feature>, initial_visible: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let features: Arc<[Feature]> = features
			.into_iter()
			.enumerate()
			.map(|(index, feature)| feature.with_id(FeatureId(index as u32)))
			.collect();
		let visible = VisibleSet::from_iter(initial_visible);

		log::debug!(
			"map initialized with {} features and {} visible names",
			features.len(),
			visible.len()
		);

		Self {
			features,
			visible,
			phase: MapPhase::Ready,
		}
	}

	/// Replaces the whole visible set and returns the updated state.
	pub fn set_visible_names<I, S>(mut self, names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.replace_visible_names(names);
		self
	}

	/// In-place variant of [`MapState::set_visible_names`].
	pub fn replace_visible_names<I, S>(&mut self, names: I)
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.visible = VisibleSet::from_iter(names);
		log::debug!("visible names replaced: {:?}", self.visible.sorted());
	}

	/// Swaps in a new feature collection, keeping the current visible set.
	pub fn replace_features(mut self, features: Vec<FeatureSpec>) -> Result<Self> {
		let features = features_from_specs(features).context("replacing map features")?;
		self.features = features.into();
		log::debug!("map features replaced: {} features", self.features.len());
		Ok(self)
	}

	/// Projects the features that are currently visible.
	pub fn render(&self) -> RenderedFeatureList {
		self
			.features
			.iter()
			.filter(|feature| self.visible.contains(feature.name()))
			.map(RenderedFeature::from)
			.collect()
	}

	pub fn features(&self) -> &[Feature] {
		&self.features
	}

	/// Distinct feature names in order of first appearance, e.g. as selector options.
	pub fn feature_names(&self) -> Vec<String> {
		self
			.features
			.iter()
			.map(|f| f.name().to_string())
			.unique()
			.collect()
	}

	pub fn visible(&self) -> &VisibleSet {
		&self.visible
	}

	pub fn visible_names(&self) -> Vec<String> {
		self.visible.sorted()
	}

	pub fn phase(&self) -> MapPhase {
		self.phase
	}
}

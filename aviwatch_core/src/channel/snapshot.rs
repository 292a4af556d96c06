use crate::map::{MapState, RenderedFeatureList};

/// Read-only view of a [`MapState`] after an update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapSnapshot {
	/// Monotonic counter, incremented by every applied event.
	pub revision: u64,
	pub rendered: RenderedFeatureList,
	/// Distinct feature names, in order of first appearance.
	pub options: Vec<String>,
	/// Currently visible names, sorted.
	pub visible: Vec<String>,
}

impl MapSnapshot {
	pub fn of(state: &MapState, revision: u64) -> Self {
		Self {
			revision,
			rendered: state.render(),
			options: state.feature_names(),
			visible: state.visible_names(),
		}
	}
}

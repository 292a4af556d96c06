use itertools::Itertools;
use std::collections::HashSet;

/// The set of feature names currently allowed to render.
///
/// There is no incremental add/remove: a selection change builds a new set and replaces the old one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleSet {
	names: HashSet<String>,
}

impl VisibleSet {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.names.contains(name)
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	/// Names in lexical order, for stable output.
	pub fn sorted(&self) -> Vec<String> {
		self.names.iter().sorted().cloned().collect()
	}
}

impl<S: Into<String>> FromIterator<S> for VisibleSet {
	fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
		Self {
			names: iter.into_iter().map(Into::into).collect(),
		}
	}
}

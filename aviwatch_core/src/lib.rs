//! Contains the data model of AviWatch and the live filtered map view.
//!
//! - [`types`]: validated coordinates, features, the visible-name set and path decorations.
//! - [`map`]: [`MapState`], the filtered projection of features onto a rendering surface.
//! - [`channel`]: the controller task that owns a [`MapState`] and applies selection events in order.
//!
//! ## Usage Example
//!
//! ```rust
//! use aviwatch_core::{FeatureSpec, MapState};
//!
//! let features = vec![
//!     FeatureSpec::new("Pássaro", 29.006360, -81.144778),
//!     FeatureSpec::new("Pássaro", 29.016360, -81.144778),
//!     FeatureSpec::new("Garça", 29.026360, -81.144778),
//! ];
//!
//! let state = MapState::initialize(features, ["Pássaro"]).unwrap();
//! assert_eq!(state.render().len(), 2);
//!
//! let state = state.set_visible_names(Vec::<String>::new());
//! assert!(state.render().is_empty());
//! ```

pub mod channel;
pub mod map;
pub mod types;

pub use channel::*;
pub use map::*;
pub use types::*;

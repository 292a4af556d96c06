//! Explicit update channel between the selection widget and the map view.
//!
//! A single [`MapController`] task owns the [`MapState`]. Producers send [`MapEvent`]s through a
//! [`MapHandle`]; the controller applies them strictly one after another and publishes a fresh
//! [`MapSnapshot`] after each one. Nothing outside the controller task mutates the state.

mod controller;
mod snapshot;

pub use controller::*;
pub use snapshot::*;

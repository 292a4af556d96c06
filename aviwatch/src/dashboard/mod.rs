//! Server-rendered dashboard page.
//!
//! The page is a tree of [`Component`]s, each rendering itself from its own props. Only the
//! [`FeatureSelector`] talks back to the server; its `change` event sends the full selection to
//! `PUT /api/map/visible` and the embedded client script redraws the map from the response.

mod component;
mod html;
mod map_view;
mod page;
mod widgets;

pub use component::{BoxedComponent, Component, Header, Panel, Row};
pub use html::{Html, escape};
pub use map_view::{MapEndpoints, MapView};
pub use page::{Page, build_dashboard};
pub use widgets::{Dropdown, FeatureSelector, RadioGroup, Slider, TextInput};

//! AviWatch configuration system.
//!
//! - [`Config`](crate::config::Config): top-level configuration loader and YAML parser
//! - [`ServerConfig`](crate::config::ServerConfig): network and API settings
//! - [`CorsConfig`](crate::config::CorsConfig): CORS policy configuration
//! - [`DashboardConfig`](crate::config::DashboardConfig): texts and filter widgets of the page
//! - [`MapConfig`](crate::config::MapConfig): basemap, features and the decorated path
//!
//! Configuration is read once at startup from a YAML file (`aviwatch.yml`); it is not reloadable.
//! Every section is optional. Without a file the built-in sample dashboard is served.

mod cors;
mod dashboard;
mod main;
mod map;
mod server;

pub use cors::CorsConfig;
pub use dashboard::{ChoiceConfig, DashboardConfig, SelectorConfig, SliderConfig, TextConfig};
pub use main::Config;
pub use map::{BasemapConfig, MapConfig};
pub use server::ServerConfig;

//! # AviWatch
//!
//! A dashboard for wildlife detections near airports. Point features are drawn on a Leaflet map and
//! filtered by a multi-select of feature names; a decorated flight path is drawn on top.
//!
//! - [`config`]: YAML configuration with the built-in sample dashboard as default
//! - [`dashboard`]: server-rendered page components
//! - [`server`]: the HTTP server and its JSON API
//! - [`context`]: starts and stops the map controller together with the server
//!
//! The map data model and the filtering itself live in [`aviwatch_core`].
//!
//! ## Usage Example
//!
//! ```no_run
//! use aviwatch::{config::Config, context::AppContext};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let context = AppContext::start(Config::default()).await?;
//!     context.map().select(["Pássaro"]).await?;
//!     context.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod context;
pub mod dashboard;
pub mod server;

pub use aviwatch_core as core;

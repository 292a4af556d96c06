pub mod check;
pub mod config;
pub mod serve;

use anyhow::Result;
use aviwatch::config::Config;
use std::path::Path;

/// Reads the configuration file if one is given, otherwise the built-in sample.
fn load_config(path: Option<&Path>) -> Result<Config> {
	match path {
		Some(path) => {
			log::info!("reading config file {path:?}");
			Config::from_path(path)
		}
		None => Ok(Config::default()),
	}
}

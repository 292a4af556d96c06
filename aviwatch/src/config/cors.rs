//! Cross-Origin Resource Sharing (CORS) configuration for the AviWatch server.
//!
//! By default, all origins are allowed (`*`). Access can be restricted by listing origins.
//!
//! # Example YAML
//! ```yaml
//! cors:
//!   allowed_origins:
//!     - "https://example.org"
//!     - "*.example.net"
//!   max_age_seconds: 86400
//! ```
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// CORS policy configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CorsConfig {
	/// Allowed origins for CORS requests. Supports:
	/// - `*` to allow all origins
	/// - exact origins like `https://example.com`
	/// - globs at the start of the domain like `*.example.com`
	/// - globs at the end of the domain like `example.*`
	/// - regular expressions enclosed in slashes like `/domain\..*$/`
	#[serde(default = "default_allowed_origins")]
	pub allowed_origins: Vec<String>,

	/// Duration for the preflight cache in seconds. Defaults to 86400 (1 day).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_age_seconds: Option<u64>,
}

fn default_allowed_origins() -> Vec<String> {
	vec!["*".to_string()]
}

impl Default for CorsConfig {
	fn default() -> Self {
		Self {
			allowed_origins: default_allowed_origins(),
			max_age_seconds: None,
		}
	}
}

impl CorsConfig {
	/// Compiles every origin pattern once, so bad regexes show up before the server starts.
	pub fn verify(&self) -> Result<()> {
		crate::server::check_origin_patterns(&self.allowed_origins)
	}
}

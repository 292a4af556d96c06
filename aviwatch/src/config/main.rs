use super::{CorsConfig, DashboardConfig, MapConfig, ServerConfig};
use anyhow::{Context, Result};
use axum::http::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fs::File, io::BufReader, io::Read, path::Path};

#[derive(Default, Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// HTTP server configuration
	#[serde(default)]
	pub server: ServerConfig,

	/// Cross-Origin Resource Sharing (CORS) settings
	#[serde(default)]
	pub cors: CorsConfig,

	/// Extra response headers added to every HTTP response.
	#[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
	pub extra_response_headers: BTreeMap<String, String>,

	/// Page texts and filter widgets
	#[serde(default)]
	pub dashboard: DashboardConfig,

	/// Basemap, features and flight path
	#[serde(default)]
	pub map: MapConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))
	}

	/// Checks everything that can only be checked after parsing.
	pub fn verify(&self) -> Result<()> {
		self.cors.verify().context("invalid cors configuration")?;
		self.response_headers()?;
		self.dashboard.verify().context("invalid dashboard configuration")?;
		self.map.verify().context("invalid map configuration")
	}

	/// Parses `extra_response_headers` into typed header pairs.
	pub fn response_headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>> {
		self.extra_response_headers
			.iter()
			.map(|(name, value)| -> Result<(HeaderName, HeaderValue)> {
				let context = || format!("invalid extra response header '{name}: {value}'");
				let header_name = HeaderName::try_from(name.as_str()).with_context(context)?;
				let header_value = HeaderValue::try_from(value.as_str()).with_context(context)?;
				Ok((header_name, header_value))
			})
			.collect()
	}

	pub fn to_yaml(&self) -> Result<String> {
		Ok(serde_yaml_ng::to_string(self)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use aviwatch_core::FeatureSpec;
	use pretty_assertions::assert_eq;

	#[test]
	fn parse_example_config() {
		let path = Path::new("../testdata/config.yml");
		let cfg = Config::from_path(path).unwrap();

		assert_eq!(
			cfg.server,
			ServerConfig {
				ip: Some("127.0.0.1".to_string()),
				port: Some(51234),
				disable_api: None,
			}
		);
		assert_eq!(
			cfg.cors,
			CorsConfig {
				allowed_origins: vec!["https://example.org".to_string(), "*.other-example.org".to_string()],
				max_age_seconds: Some(86400)
			}
		);
		assert_eq!(
			cfg.extra_response_headers,
			[("Cache-Control", "no-cache"), ("X-Frame-Options", "DENY")]
				.iter()
				.map(|(a, b)| (a.to_string(), b.to_string()))
				.collect::<BTreeMap<String, String>>()
		);
		assert_eq!(cfg.dashboard.title, "Bird strike watch");
		assert_eq!(cfg.dashboard.months, DashboardConfig::default().months);
		assert_eq!(
			cfg.map.features,
			vec![
				FeatureSpec::new("Pássaro", 29.00636, -81.144778),
				FeatureSpec::new("Pássaro", 29.01636, -81.144778),
				FeatureSpec::new("Garça", 29.02636, -81.144778).with_tooltip("Garça-branca"),
			]
		);
		assert_eq!(cfg.map.visible, Some(vec!["Pássaro".to_string()]));
		assert_eq!(cfg.map.path.waypoints.len(), 3);
		cfg.verify().unwrap();
	}

	#[test]
	fn parse_empty_config() {
		assert_eq!(Config::from_string("").unwrap(), Config::default());
	}

	#[test]
	fn parse_invalid_config() {
		let err = Config::from_string("server:\n  pi: 3.14.15.9").unwrap_err();
		assert!(err.to_string().contains("unknown field `pi`"), "{err}");
	}

	#[test]
	fn missing_file() {
		let err = Config::from_path(Path::new("../testdata/does-not-exist.yml")).unwrap_err();
		assert!(err.to_string().starts_with("opening config file"));
	}

	#[test]
	fn default_config_roundtrips_through_yaml() {
		let yaml = Config::default().to_yaml().unwrap();
		assert_eq!(Config::from_string(&yaml).unwrap(), Config::default());
	}

	#[test]
	fn verify_rejects_bad_origin_regex() {
		let cfg = Config::from_string("cors:\n  allowed_origins: [\"/(unclosed/\"]").unwrap();
		let err = cfg.verify().unwrap_err();
		assert_eq!(err.to_string(), "invalid cors configuration");
		assert_eq!(err.chain().nth(1).unwrap().to_string(), "invalid origin regex /(unclosed/");
	}

	#[test]
	fn verify_rejects_bad_header() {
		let cfg = Config::from_string("extra_response_headers:\n  \"Bad Header\": x").unwrap();
		assert_eq!(
			cfg.verify().unwrap_err().to_string(),
			"invalid extra response header 'Bad Header: x'"
		);
	}

	#[test]
	fn response_headers_are_parsed() {
		let cfg = Config::from_path(Path::new("../testdata/config.yml")).unwrap();
		let headers = cfg.response_headers().unwrap();
		assert_eq!(headers.len(), 2);
		assert_eq!(headers[0].0, "cache-control");
		assert_eq!(headers[1].1, "DENY");
	}

	#[test]
	fn verify_reports_section() {
		let cfg = Config::from_string("map:\n  features:\n    - { lat: 1, lon: 2 }").unwrap();
		assert_eq!(cfg.verify().unwrap_err().to_string(), "invalid map configuration");
	}
}

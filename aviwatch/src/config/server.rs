use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
	/// IP to bind to. Defaults to `0.0.0.0`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ip: Option<String>,

	/// TCP port to bind to. Defaults to `8080`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub port: Option<u16>,

	/// Disable the JSON API. The page then shows the initial selection only.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub disable_api: Option<bool>,
}

impl ServerConfig {
	pub fn override_optional_ip(&mut self, ip: &Option<String>) {
		if ip.is_some() {
			self.ip = ip.clone();
		}
	}
	pub fn override_optional_port(&mut self, port: &Option<u16>) {
		if port.is_some() {
			self.port = *port;
		}
	}
	pub fn override_optional_disable_api(&mut self, disable_api: &Option<bool>) {
		if disable_api.is_some() {
			self.disable_api = *disable_api;
		}
	}
}

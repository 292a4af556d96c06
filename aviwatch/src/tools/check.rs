use anyhow::Result;
use aviwatch::config::Config;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// Configuration file (YAML) to check. Without one the built-in sample is checked.
	#[arg(short = 'c', long, value_name = "FILE")]
	pub config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = super::load_config(arguments.config.as_deref())?;
	print!("{}", summarize(&config)?);
	Ok(())
}

fn summarize(config: &Config) -> Result<String> {
	config.verify()?;

	let state = config.map.initial_state()?;
	let rendered = state.render();
	let path = &config.map.path;

	let mut text = String::from("configuration is valid\n");
	text.push_str(&format!("features: {}\n", state.features().len()));
	text.push_str(&format!("names: {}\n", state.feature_names().join(", ")));
	text.push_str(&format!(
		"visible: {} of {} ({})\n",
		rendered.len(),
		state.features().len(),
		state.visible_names().join(", ")
	));
	text.push_str(&format!(
		"path: {} waypoints, {} patterns\n",
		path.waypoints.len(),
		path.patterns.len()
	));
	let api = if config.server.disable_api.unwrap_or(false) { "disabled" } else { "enabled" };
	text.push_str(&format!("api: {api}\n"));
	Ok(text)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tests::run_command;
	use pretty_assertions::assert_eq;
	use std::path::Path;

	#[test]
	fn summary_of_config_file() {
		let config = Config::from_path(Path::new("../testdata/config.yml")).unwrap();
		assert_eq!(
			summarize(&config).unwrap(),
			"configuration is valid\nfeatures: 3\nnames: Pássaro, Garça\nvisible: 2 of 3 (Pássaro)\npath: 3 waypoints, 2 patterns\napi: enabled\n"
		);
	}

	#[test]
	fn summary_of_sample() {
		let summary = summarize(&Config::default()).unwrap();
		assert!(summary.contains("visible: 3 of 3 (Pássaro)\n"), "{summary}");
		assert!(summary.contains("path: 6 waypoints, 2 patterns\n"), "{summary}");
	}

	#[test]
	fn server_sections_are_checked() {
		let config = Config::from_string(
			"cors:\n  allowed_origins: [\"/(unclosed/\"]\nextra_response_headers:\n  \"Bad Header\": x\n",
		)
		.unwrap();
		let err = summarize(&config).unwrap_err();
		assert_eq!(err.to_string(), "invalid cors configuration");
		assert_eq!(err.chain().nth(1).unwrap().to_string(), "invalid origin regex /(unclosed/");

		let mut config = Config::default();
		config
			.extra_response_headers
			.insert("Bad Header".to_string(), "x".to_string());
		assert_eq!(
			summarize(&config).unwrap_err().to_string(),
			"invalid extra response header 'Bad Header: x'"
		);
	}

	#[test]
	fn invalid_config_fails() {
		let err = run_command(vec!["aviwatch", "check", "-c", "../testdata/invalid_feature.yml"]).unwrap_err();
		assert_eq!(err.to_string(), "invalid map configuration");
		assert_eq!(
			err.root_cause().to_string(),
			"latitude must be within [-90, 90], but is 129"
		);
	}
}

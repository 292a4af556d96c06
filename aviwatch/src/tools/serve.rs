use anyhow::Result;
use aviwatch::context::AppContext;
use std::path::PathBuf;
use tokio::time::{Duration, sleep};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// Path to a configuration file (YAML format) with server, CORS, dashboard and map settings.
	/// Command line arguments override configuration file settings.
	/// Without a file the built-in sample dashboard is served.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0, verbatim_doc_comment)]
	pub config: Option<PathBuf>,

	/// Serve via socket ip. Default: 0.0.0.0
	#[arg(short = 'i', long, display_order = 0)]
	pub ip: Option<String>,

	/// Serve via port. Default: 8080
	#[arg(short, long, display_order = 0)]
	pub port: Option<u16>,

	/// Disable the JSON API. The page then shows the initial selection only.
	#[arg(long, display_order = 1)]
	pub disable_api: bool,

	/// Shutdown server automatically after x milliseconds.
	#[arg(long, display_order = 2)]
	pub auto_shutdown: Option<u64>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = super::load_config(arguments.config.as_deref())?;

	config.server.override_optional_ip(&arguments.ip);
	config.server.override_optional_port(&arguments.port);
	config
		.server
		.override_optional_disable_api(&arguments.disable_api.then_some(true));

	let context = AppContext::start(config).await?;
	if let Some(addr) = context.local_addr() {
		eprintln!("dashboard available at http://{addr}/");
	}

	if let Some(milliseconds) = arguments.auto_shutdown {
		sleep(Duration::from_millis(milliseconds)).await;
	} else {
		tokio::signal::ctrl_c().await?;
		log::info!("received Ctrl-C");
	}

	context.shutdown().await?;

	Ok(())
}

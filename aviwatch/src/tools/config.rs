use anyhow::Result;
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// Print this configuration file with all defaults filled in, instead of the built-in sample.
	#[arg(short = 'c', long, value_name = "FILE")]
	pub config: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let config = super::load_config(arguments.config.as_deref())?;
	print!("{}", config.to_yaml()?);
	Ok(())
}

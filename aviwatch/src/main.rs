// CLI entry point of the aviwatch binary
mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{ErrorLevel, Verbosity};

// Top-level command line: one subcommand plus verbosity flags
#[derive(Parser, Debug)]
#[command(
	author, // Taken from Cargo.toml
	version, // Taken from Cargo.toml
	about, // Crate description
	long_about = None, // No long description
	propagate_version = true, // Subcommands report the same version
	disable_help_subcommand = true, // Use --help instead of a help subcommand
)]
struct Cli {
	#[command(subcommand)]
	command: Commands, // The subcommand to run

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>, // -v / -q, errors only by default
}

// Available subcommands
#[derive(Subcommand, Debug)]
enum Commands {
	#[clap(alias = "server")]
	/// Serve the dashboard via http
	Serve(tools::serve::Subcommand),

	/// Validate a configuration file and print a summary
	Check(tools::check::Subcommand),

	/// Print the default configuration as YAML
	Config(tools::config::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Log level follows the verbosity flags
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

// Dispatches to the subcommand, also used by the unit tests
fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Serve(arguments) => tools::serve::run(arguments),
		Commands::Check(arguments) => tools::check::run(arguments),
		Commands::Config(arguments) => tools::config::run(arguments),
	}
}

//! stickyard command-line host.

mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Cli;
use stickyard_config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	let config = Config::load_or_default(cli.config.as_deref())?;
	logging::setup_tracing(cli.verbose, config.log.filter.as_deref());
	tracing::debug!(command = ?cli.command, "stickyard.start");

	let mut stdout = std::io::stdout();
	commands::run(&cli.command, &config, cli.library.as_deref(), &mut stdout).await
}

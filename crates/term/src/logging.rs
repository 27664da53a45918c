use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Directory that receives `stickyard.<pid>.log` instead of stderr.
pub const LOG_DIR_ENV: &str = "STICKYARD_LOG_DIR";

/// Filter precedence: `RUST_LOG`, then the config's `log.filter`, then a
/// verbosity-based default.
fn filter(verbose: bool, configured: Option<&str>) -> EnvFilter {
	EnvFilter::try_from_default_env()
		.ok()
		.or_else(|| configured.and_then(|directives| EnvFilter::try_new(directives).ok()))
		.unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "info" }))
}

pub fn setup_tracing(verbose: bool, configured: Option<&str>) {
	if let Some(log_dir) = std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("stickyard.{}.log", std::process::id()));
		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);
			tracing_subscriber::registry()
				.with(filter(verbose, configured))
				.with(file_layer)
				.init();
			tracing::info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	// Stdout carries command output.
	tracing_subscriber::fmt()
		.with_env_filter(filter(verbose, configured))
		.with_writer(std::io::stderr)
		.init();
}

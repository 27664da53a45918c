//! Configuration for stickyard.
//!
//! Settings are written in TOML with kebab-case keys. Every section and key
//! is optional; unknown keys are rejected.
//!
//! ```toml
//! [library]
//! sticker-dir = "/home/me/stickers"
//!
//! [search]
//! page-size = 30
//!
//! [query]
//! timeout-ms = 2000
//!
//! [log]
//! filter = "stickyard=debug"
//! ```
//!
//! # Configuration Files
//!
//! Without an explicit path, stickyard reads
//! `$XDG_CONFIG_HOME/stickyard/config.toml` (or `~/.config/stickyard/config.toml`).
//! A missing default file means "all defaults"; a missing explicit file is an error.

mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

pub use crate::error::{ConfigError, Result};

/// Name of the library index inside the sticker directory.
pub const LIBRARY_FILE: &str = "library.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	pub library: LibraryConfig,
	pub search: SearchConfig,
	pub query: QueryConfig,
	pub log: LogConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LibraryConfig {
	/// Directory holding stickies and the library index.
	pub sticker_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct SearchConfig {
	pub page_size: usize,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self { page_size: 30 }
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct QueryConfig {
	/// How long the CLI waits for a lookup. The coordinator itself never times out.
	pub timeout_ms: u64,
}

impl Default for QueryConfig {
	fn default() -> Self {
		Self { timeout_ms: 2000 }
	}
}

impl QueryConfig {
	pub fn timeout(&self) -> Duration {
		Duration::from_millis(self.timeout_ms)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LogConfig {
	/// `tracing` filter directive, used when `RUST_LOG` is unset.
	pub filter: Option<String>,
}

impl Config {
	/// Parses and validates config text. `path` is only used in errors.
	pub fn parse(path: &Path, text: &str) -> Result<Self> {
		let config: Self = toml::from_str(text).map_err(|error| ConfigError::Toml {
			path: path.to_path_buf(),
			error,
		})?;
		config.validate()?;
		Ok(config)
	}

	/// Reads the config at `path`. The file must exist.
	pub fn load(path: &Path) -> Result<Self> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(path, &text)
	}

	/// Reads `path` if given, else the default location when it exists,
	/// else returns defaults.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
		if let Some(path) = path {
			return Self::load(path);
		}
		match default_path() {
			Some(path) if path.is_file() => Self::load(&path),
			_ => Ok(Self::default()),
		}
	}

	/// Configured sticker directory, or the platform data directory.
	pub fn sticker_dir(&self) -> Option<PathBuf> {
		self.library
			.sticker_dir
			.clone()
			.or_else(|| dirs::data_dir().map(|dir| dir.join("stickyard")))
	}

	/// Library index path inside [`Config::sticker_dir`].
	pub fn library_path(&self) -> Option<PathBuf> {
		self.sticker_dir().map(|dir| dir.join(LIBRARY_FILE))
	}

	fn validate(&self) -> Result<()> {
		if self.search.page_size == 0 {
			return Err(ConfigError::InvalidValue {
				key: "search.page-size",
				reason: "must be at least 1".to_string(),
			});
		}
		Ok(())
	}
}

/// Default config file location.
pub fn default_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("stickyard").join("config.toml"))
}

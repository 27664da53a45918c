//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or schema.
	#[error("TOML parse error in {path}: {error}")]
	Toml {
		/// Path to the file that failed to parse.
		path: PathBuf,
		/// The underlying parse error.
		#[source]
		error: toml::de::Error,
	},

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		error: std::io::Error,
	},

	/// A value is syntactically valid but unusable.
	#[error("invalid value for {key}: {reason}")]
	InvalidValue {
		key: &'static str,
		reason: String,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

//! CLI schema for the stickyard binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "stickyard")]
#[command(about = "Browse and organise a sticky library")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Config file (defaults to ~/.config/stickyard/config.toml)
	#[arg(long, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Library index, overriding `library.sticker-dir`
	#[arg(long, global = true, value_name = "PATH")]
	pub library: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// Run one search and print the matching stickies
	Search {
		/// Search text, e.g. `cat -misc:nsfw package:Cats sort:name`
		#[arg(default_value = "")]
		query: String,
		/// Zero-based result page
		#[arg(long, short, default_value_t = 0)]
		page: usize,
	},
	/// Print package candidates for partially typed input
	Suggest {
		/// Package input text
		text: String,
	},
	/// Print the SQLite statement for a search
	Sql {
		/// Search text
		query: String,
		/// Zero-based result page
		#[arg(long, short, default_value_t = 0)]
		page: usize,
		/// Emit the count statement instead of the page statement
		#[arg(long)]
		count: bool,
	},
}

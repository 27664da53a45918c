use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Package every sticky falls back to when none is chosen.
pub const DEFAULT_PACKAGE: &str = "Inbox";

/// Kind of stored sticky.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StickyKind {
	#[default]
	Pic,
	Text,
}

impl StickyKind {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Pic => "pic",
			Self::Text => "text",
		}
	}
}

impl fmt::Display for StickyKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for StickyKind {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"pic" => Ok(Self::Pic),
			"text" => Ok(Self::Text),
			other => Err(format!("unknown sticky type '{other}' (expected 'pic' or 'text')")),
		}
	}
}

/// Thumbnail record returned by a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickyThumb {
	pub id: u64,
	pub name: String,
	pub package: String,
	pub kind: StickyKind,
	#[serde(default)]
	pub path: Option<PathBuf>,
	#[serde(default)]
	pub fav: bool,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kind_round_trips_through_text() {
		assert_eq!("text".parse::<StickyKind>(), Ok(StickyKind::Text));
		assert_eq!(StickyKind::Pic.to_string(), "pic");
		assert!("gif".parse::<StickyKind>().is_err());
	}
}

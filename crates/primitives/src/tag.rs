use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error produced when text does not describe a `namespace:value` tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TagParseError {
	#[error("tag '{0}' is missing a ':' separator")]
	MissingSeparator(String),
	#[error("tag '{0}' has an empty namespace")]
	EmptyNamespace(String),
	#[error("tag '{0}' has an empty value")]
	EmptyValue(String),
}

/// Namespaced tag attached to a sticky, written as `namespace:value`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag {
	namespace: String,
	value: String,
}

impl Tag {
	pub fn new(namespace: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			namespace: namespace.into(),
			value: value.into(),
		}
	}

	pub fn namespace(&self) -> &str {
		&self.namespace
	}

	pub fn value(&self) -> &str {
		&self.value
	}
}

impl fmt::Display for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}", self.namespace, self.value)
	}
}

impl FromStr for Tag {
	type Err = TagParseError;

	/// Splits on the first `:`; the value may itself contain colons.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let text = s.trim();
		let Some((namespace, value)) = text.split_once(':') else {
			return Err(TagParseError::MissingSeparator(text.to_string()));
		};
		let (namespace, value) = (namespace.trim(), value.trim());
		if namespace.is_empty() {
			return Err(TagParseError::EmptyNamespace(text.to_string()));
		}
		if value.is_empty() {
			return Err(TagParseError::EmptyValue(text.to_string()));
		}
		Ok(Self::new(namespace, value))
	}
}

impl TryFrom<String> for Tag {
	type Error = TagParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<Tag> for String {
	fn from(tag: Tag) -> Self {
		tag.to_string()
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn parse_trims_both_halves() {
		let tag: Tag = "  female : cat ears ".parse().unwrap();
		assert_eq!(tag.namespace(), "female");
		assert_eq!(tag.value(), "cat ears");
	}

	#[test]
	fn parse_keeps_colons_in_value() {
		let tag: Tag = "source:http://example".parse().unwrap();
		assert_eq!(tag.value(), "http://example");
	}

	#[test]
	fn parse_rejects_incomplete_tags() {
		assert_eq!("cat".parse::<Tag>(), Err(TagParseError::MissingSeparator("cat".into())));
		assert_eq!(":cat".parse::<Tag>(), Err(TagParseError::EmptyNamespace(":cat".into())));
		assert_eq!("misc:".parse::<Tag>(), Err(TagParseError::EmptyValue("misc:".into())));
	}

	#[test]
	fn serde_uses_textual_form() {
		let tag = Tag::new("misc", "nsfw");
		let json = serde_json::to_string(&tag).unwrap();
		assert_eq!(json, "\"misc:nsfw\"");
		let back: Tag = serde_json::from_str(&json).unwrap();
		assert_eq!(back, tag);
		assert!(serde_json::from_str::<Tag>("\"nsfw\"").is_err());
	}

	proptest! {
		#[test]
		fn display_then_parse_is_identity(ns in "[a-z]{1,8}", value in "[a-z0-9:]{0,8}[a-z0-9]") {
			let tag = Tag::new(ns, value);
			prop_assert_eq!(tag.to_string().parse::<Tag>(), Ok(tag));
		}
	}
}

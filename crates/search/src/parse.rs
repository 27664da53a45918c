//! Free-text search language.
//!
//! Whitespace separates tokens; `"..."` groups spaces inside a token and a
//! leading `-` negates it. Each token is classified as:
//!
//! * `key:value` with a known [`MetaKey`] → meta filter (`package:Cats`, `sort:name`)
//! * any other `namespace:value` → tag filter (`female:cat`)
//! * anything else → keyword matched against the sticky name

use itertools::Itertools;
use stickyard_primitives::{StickyKind, Tag};

/// Errors for search text that cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
	#[error("unterminated quote starting at column {0}")]
	UnterminatedQuote(usize),
	#[error("'-' at column {0} does not negate anything")]
	DanglingNegation(usize),
	#[error("{0} is not sortable; it must be one of 'name', 'create' or 'modify'")]
	Unsortable(String),
	#[error("order must be 'asc' or 'desc', got '{0}'")]
	InvalidOrder(String),
	#[error("{key} expects a unix timestamp, got '{value}'")]
	InvalidDate { key: &'static str, value: String },
	#[error("{0}")]
	InvalidType(String),
}

/// Reserved keys that turn a `key:value` token into a meta filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaKey {
	Package,
	Ty,
	Sort,
	Order,
	After,
	Before,
}

impl MetaKey {
	pub fn from_key(key: &str) -> Option<Self> {
		Some(match key.to_ascii_lowercase().as_str() {
			"package" | "pkg" => Self::Package,
			"type" => Self::Ty,
			"sort" => Self::Sort,
			"order" => Self::Order,
			"after" => Self::After,
			"before" => Self::Before,
			_ => return None,
		})
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Package => "package",
			Self::Ty => "type",
			Self::Sort => "sort",
			Self::Order => "order",
			Self::After => "after",
			Self::Before => "before",
		}
	}
}

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
	Name,
	Create,
	Modify,
}

impl SortField {
	fn parse(value: &str) -> Result<Self, SearchError> {
		match value {
			"name" => Ok(Self::Name),
			"create" => Ok(Self::Create),
			"modify" => Ok(Self::Modify),
			other => Err(SearchError::Unsortable(other.to_string())),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTag {
	pub tag: Tag,
	pub not: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKeyword {
	pub value: String,
	pub not: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMeta {
	pub key: MetaKey,
	pub value: String,
	pub not: bool,
}

/// Structured form of one search text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Search {
	pub tags: Vec<ParsedTag>,
	pub keywords: Vec<ParsedKeyword>,
	pub meta: Vec<ParsedMeta>,
}

impl Search {
	pub fn is_empty(&self) -> bool {
		self.tags.is_empty() && self.keywords.is_empty() && self.meta.is_empty()
	}

	/// Meta filters with repeated keys dropped; the first occurrence wins.
	pub fn unique_meta(&self) -> impl Iterator<Item = &ParsedMeta> {
		self.meta.iter().unique_by(|m| m.key)
	}

	pub fn meta(&self, key: MetaKey) -> Option<&ParsedMeta> {
		self.meta.iter().find(|m| m.key == key)
	}

	pub fn sort_field(&self) -> Option<SortField> {
		self.meta(MetaKey::Sort).and_then(|m| SortField::parse(&m.value).ok())
	}

	pub fn descending(&self) -> bool {
		self.meta(MetaKey::Order).is_some_and(|m| m.value == "desc")
	}

	pub fn kind(&self) -> Option<StickyKind> {
		self.meta(MetaKey::Ty).and_then(|m| m.value.parse().ok())
	}

	pub fn date_bound(&self, key: MetaKey) -> Option<i64> {
		self.meta(key).and_then(|m| m.value.parse().ok())
	}
}

#[derive(Debug)]
struct RawToken {
	not: bool,
	text: String,
	/// Char offset of the first unquoted ':' within `text`.
	colon: Option<usize>,
}

fn tokenize(input: &str) -> Result<Vec<RawToken>, SearchError> {
	let chars: Vec<char> = input.chars().collect();
	let mut out = Vec::new();
	let mut i = 0usize;
	while i < chars.len() {
		while i < chars.len() && chars[i].is_whitespace() {
			i += 1;
		}
		if i >= chars.len() {
			break;
		}

		let mut not = false;
		if chars[i] == '-' {
			if i + 1 >= chars.len() || chars[i + 1].is_whitespace() {
				return Err(SearchError::DanglingNegation(i));
			}
			not = true;
			i += 1;
		}

		let mut text = String::new();
		let mut len = 0usize;
		let mut colon = None;
		while i < chars.len() && !chars[i].is_whitespace() {
			if chars[i] == '"' {
				let open = i;
				i += 1;
				while i < chars.len() && chars[i] != '"' {
					text.push(chars[i]);
					len += 1;
					i += 1;
				}
				if i >= chars.len() {
					return Err(SearchError::UnterminatedQuote(open));
				}
			} else {
				if chars[i] == ':' && colon.is_none() {
					colon = Some(len);
				}
				text.push(chars[i]);
				len += 1;
			}
			i += 1;
		}

		if !text.is_empty() {
			out.push(RawToken { not, text, colon });
		}
	}
	Ok(out)
}

fn validate_meta(key: MetaKey, value: &str) -> Result<(), SearchError> {
	match key {
		MetaKey::Sort => SortField::parse(value).map(|_| ()),
		MetaKey::Order => match value {
			"asc" | "desc" => Ok(()),
			other => Err(SearchError::InvalidOrder(other.to_string())),
		},
		MetaKey::After | MetaKey::Before => value.parse::<i64>().map(|_| ()).map_err(|_| SearchError::InvalidDate {
			key: key.as_str(),
			value: value.to_string(),
		}),
		MetaKey::Ty => value.parse::<StickyKind>().map(|_| ()).map_err(SearchError::InvalidType),
		MetaKey::Package => Ok(()),
	}
}

/// Parses search text. Empty or whitespace-only text yields an empty [`Search`].
pub fn parse_search(input: &str) -> Result<Search, SearchError> {
	let mut search = Search::default();
	for token in tokenize(input)? {
		let Some(colon) = token.colon else {
			search.keywords.push(ParsedKeyword {
				value: token.text,
				not: token.not,
			});
			continue;
		};

		let key: String = token.text.chars().take(colon).collect();
		let value: String = token.text.chars().skip(colon + 1).collect();
		let (key, value) = (key.trim(), value.trim());

		if let Some(meta_key) = MetaKey::from_key(key) {
			validate_meta(meta_key, value)?;
			search.meta.push(ParsedMeta {
				key: meta_key,
				value: value.to_string(),
				not: token.not,
			});
		} else if !key.is_empty() && !value.is_empty() {
			search.tags.push(ParsedTag {
				tag: Tag::new(key, value),
				not: token.not,
			});
		} else {
			search.keywords.push(ParsedKeyword {
				value: token.text,
				not: token.not,
			});
		}
	}
	Ok(search)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[test]
	fn classifies_keywords_tags_and_meta() {
		let search = parse_search("cat -female:guro package:Inbox sort:name -dog").unwrap();
		assert_eq!(
			search.keywords,
			vec![
				ParsedKeyword {
					value: "cat".into(),
					not: false
				},
				ParsedKeyword {
					value: "dog".into(),
					not: true
				},
			]
		);
		assert_eq!(
			search.tags,
			vec![ParsedTag {
				tag: Tag::new("female", "guro"),
				not: true
			}]
		);
		assert_eq!(search.meta(MetaKey::Package).map(|m| m.value.as_str()), Some("Inbox"));
		assert_eq!(search.sort_field(), Some(SortField::Name));
		assert!(!search.descending());
	}

	#[test]
	fn quotes_group_spaces() {
		let search = parse_search(r#""big cat" misc:"cat ears" package:"My Pack""#).unwrap();
		assert_eq!(search.keywords[0].value, "big cat");
		assert_eq!(search.tags[0].tag, Tag::new("misc", "cat ears"));
		assert_eq!(search.meta[0].value, "My Pack");
	}

	#[test]
	fn quoted_colon_is_not_a_separator() {
		let search = parse_search(r#""12:30""#).unwrap();
		assert!(search.tags.is_empty());
		assert_eq!(search.keywords[0].value, "12:30");
	}

	#[test]
	fn first_meta_occurrence_wins() {
		let search = parse_search("order:desc order:asc").unwrap();
		assert_eq!(search.unique_meta().count(), 1);
		assert!(search.descending());
	}

	#[test]
	fn blank_input_is_empty_search() {
		assert!(parse_search("   ").unwrap().is_empty());
	}

	#[rstest]
	#[case("\"open", SearchError::UnterminatedQuote(0))]
	#[case("cat - dog", SearchError::DanglingNegation(4))]
	#[case("sort:size", SearchError::Unsortable("size".into()))]
	#[case("order:up", SearchError::InvalidOrder("up".into()))]
	#[case("after:yesterday", SearchError::InvalidDate { key: "after", value: "yesterday".into() })]
	fn rejects_malformed_text(#[case] input: &str, #[case] expected: SearchError) {
		assert_eq!(parse_search(input), Err(expected));
	}

	#[test]
	fn rejects_unknown_type() {
		assert!(matches!(parse_search("type:gif"), Err(SearchError::InvalidType(_))));
	}
}

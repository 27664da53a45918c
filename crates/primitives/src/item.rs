use std::hash::{Hash, Hasher};

use crate::Tag;

/// Value type that can back a selectable item.
///
/// Blank values are treated as "no value" by reconciliation and are never
/// rendered as a selection.
pub trait ItemValue: Clone + PartialEq {
	/// Returns true when this value carries no selection.
	fn is_blank(&self) -> bool;

	/// Label shown when the value is adopted without a synthesized label.
	fn display_label(&self) -> String;
}

impl ItemValue for String {
	fn is_blank(&self) -> bool {
		self.is_empty()
	}

	fn display_label(&self) -> String {
		self.clone()
	}
}

impl ItemValue for Tag {
	fn is_blank(&self) -> bool {
		self.namespace().is_empty() && self.value().is_empty()
	}

	fn display_label(&self) -> String {
		self.to_string()
	}
}

/// One candidate offered by a suggestion source.
///
/// Equality and hashing look at `value` only. Labels may be synthesized
/// (e.g. `Create "cats"`) and never participate in identity.
#[derive(Debug, Clone)]
pub struct SuggestionItem<V> {
	pub value: V,
	pub label: String,
}

impl<V> SuggestionItem<V> {
	pub fn new(value: V, label: impl Into<String>) -> Self {
		Self { value, label: label.into() }
	}
}

impl<V: ItemValue> SuggestionItem<V> {
	/// Builds an item whose label is derived from the value itself.
	pub fn plain(value: V) -> Self {
		let label = value.display_label();
		Self { value, label }
	}
}

impl<V: PartialEq> PartialEq for SuggestionItem<V> {
	fn eq(&self, other: &Self) -> bool {
		self.value == other.value
	}
}

impl<V: Eq> Eq for SuggestionItem<V> {}

impl<V: Hash> Hash for SuggestionItem<V> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.value.hash(state);
	}
}

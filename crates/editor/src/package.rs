//! "Choose or create a package" suggestions.

use async_trait::async_trait;
use stickyard_primitives::{DEFAULT_PACKAGE, SuggestionItem};
use stickyard_query::{PackageSource, SourceError, SuggestionSource};

use crate::Combobox;

/// Combobox over package names, defaulting to [`DEFAULT_PACKAGE`].
pub type PackageCombobox<P> = Combobox<String, PackageSuggestions<P>>;

/// Label of the synthetic entry that creates a package named `input`.
pub fn create_label(input: &str) -> String {
	format!("Create \"{input}\"")
}

/// Candidates for a package input: the default package, then a synthetic
/// create entry for unknown names, then persisted matches.
pub struct PackageSuggestions<P> {
	packages: P,
}

impl<P: PackageSource> PackageSuggestions<P> {
	pub fn new(packages: P) -> Self {
		Self { packages }
	}

	pub fn packages(&self) -> &P {
		&self.packages
	}
}

#[async_trait]
impl<P: PackageSource> SuggestionSource<String> for PackageSuggestions<P> {
	async fn suggest(&self, input: &str) -> Result<Vec<SuggestionItem<String>>, SourceError> {
		let input = input.trim();
		let persisted = self.packages.search_packages(input).await?;

		let mut items = vec![SuggestionItem::plain(DEFAULT_PACKAGE.to_string())];
		let known = input == DEFAULT_PACKAGE || persisted.iter().any(|name| name == input);
		if !input.is_empty() && !known {
			items.push(SuggestionItem::new(input.to_string(), create_label(input)));
		}
		items.extend(
			persisted
				.into_iter()
				.filter(|name| name != DEFAULT_PACKAGE)
				.map(SuggestionItem::plain),
		);
		Ok(items)
	}
}

pub fn package_combobox<P: PackageSource>(packages: P) -> PackageCombobox<P> {
	Combobox::new("package", PackageSuggestions::new(packages), DEFAULT_PACKAGE.to_string())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use stickyard_search::Library;

	use super::*;

	fn library() -> Library {
		let mut library = Library::new();
		library.add_package("Cats");
		library.add_package("Catalogue");
		library
	}

	fn labels(items: &[SuggestionItem<String>]) -> Vec<&str> {
		items.iter().map(|item| item.label.as_str()).collect()
	}

	#[tokio::test]
	async fn unknown_name_gets_create_entry() {
		let source = PackageSuggestions::new(library());
		let items = source.suggest("newpkg").await.unwrap();
		assert_eq!(labels(&items), ["Inbox", "Create \"newpkg\""]);
		assert_eq!(items[1].value, "newpkg");
	}

	#[tokio::test]
	async fn partial_name_lists_matches_after_create_entry() {
		let source = PackageSuggestions::new(library());
		let items = source.suggest(" cat ").await.unwrap();
		assert_eq!(labels(&items), ["Inbox", "Create \"cat\"", "Catalogue", "Cats"]);
	}

	#[tokio::test]
	async fn existing_or_blank_name_has_no_create_entry() {
		let source = PackageSuggestions::new(library());
		assert_eq!(labels(&source.suggest("Cats").await.unwrap()), ["Inbox", "Cats"]);
		assert_eq!(labels(&source.suggest("Inbox").await.unwrap()), ["Inbox"]);
		assert_eq!(labels(&source.suggest("").await.unwrap()), ["Inbox", "Catalogue", "Cats"]);
	}

	#[tokio::test]
	async fn selecting_create_entry_yields_plain_value() {
		let mut combo = package_combobox(library());
		combo.set_input("Dogs");
		combo.open();
		combo.settle().await;

		assert_eq!(combo.select(1), Some("Dogs".to_string()));
		assert_eq!(combo.label(), "Dogs");
	}
}

//! In-memory sticky library backed by a JSON file.

mod sources;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stickyard_primitives::{DEFAULT_PACKAGE, StickyKind, StickyThumb, Tag};

use crate::parse::{MetaKey, Search, SearchError, SortField, parse_search};
use crate::sql::page_count;

/// Default number of rows per search page.
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// Errors raised while loading a library file.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
	#[error("failed to read library {path}: {error}")]
	Io {
		path: PathBuf,
		#[source]
		error: std::io::Error,
	},
	#[error("malformed library {path}: {error}")]
	Json {
		path: PathBuf,
		#[source]
		error: serde_json::Error,
	},
}

/// One stored sticky.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StickerRecord {
	pub id: u64,
	pub name: String,
	#[serde(default = "default_package")]
	pub package: String,
	#[serde(default)]
	pub kind: StickyKind,
	#[serde(default)]
	pub tags: Vec<Tag>,
	#[serde(default)]
	pub create_date: i64,
	#[serde(default)]
	pub modify_date: i64,
	#[serde(default)]
	pub path: Option<PathBuf>,
	#[serde(default)]
	pub fav: bool,
}

fn default_package() -> String {
	DEFAULT_PACKAGE.to_string()
}

impl StickerRecord {
	pub fn thumb(&self) -> StickyThumb {
		StickyThumb {
			id: self.id,
			name: self.name.clone(),
			package: self.package.clone(),
			kind: self.kind,
			path: self.path.clone(),
			fav: self.fav,
		}
	}

	fn matches(&self, search: &Search) -> bool {
		let name = self.name.to_lowercase();
		let keywords_ok = search
			.keywords
			.iter()
			.all(|kwd| name.contains(&kwd.value.to_lowercase()) != kwd.not);
		let tags_ok = search.tags.iter().all(|t| self.tags.contains(&t.tag) != t.not);
		let meta_ok = search.unique_meta().all(|meta| match meta.key {
			MetaKey::Package => (self.package == meta.value) != meta.not,
			MetaKey::Ty => search.kind().is_none_or(|kind| (self.kind == kind) != meta.not),
			MetaKey::After => search.date_bound(MetaKey::After).is_none_or(|bound| self.modify_date >= bound),
			MetaKey::Before => search.date_bound(MetaKey::Before).is_none_or(|bound| self.modify_date <= bound),
			MetaKey::Sort | MetaKey::Order => true,
		});
		keywords_ok && tags_ok && meta_ok
	}
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LibraryFile {
	#[serde(default)]
	packages: Vec<String>,
	#[serde(default)]
	stickers: Vec<StickerRecord>,
}

/// Packages and stickies held in memory.
#[derive(Debug, Clone)]
pub struct Library {
	packages: BTreeSet<String>,
	stickers: Vec<StickerRecord>,
	page_size: usize,
}

impl Default for Library {
	fn default() -> Self {
		Self::new()
	}
}

impl Library {
	/// Empty library holding only the default package.
	pub fn new() -> Self {
		Self {
			packages: BTreeSet::from([DEFAULT_PACKAGE.to_string()]),
			stickers: Vec::new(),
			page_size: DEFAULT_PAGE_SIZE,
		}
	}

	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size.max(1);
		self
	}

	pub fn from_json(path: &Path, text: &str) -> Result<Self, LibraryError> {
		let file: LibraryFile = serde_json::from_str(text).map_err(|error| LibraryError::Json {
			path: path.to_path_buf(),
			error,
		})?;
		let mut library = Self::new();
		library.packages.extend(file.packages);
		for sticker in file.stickers {
			library.add_sticker(sticker);
		}
		Ok(library)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
		let path = path.as_ref();
		let text = std::fs::read_to_string(path).map_err(|error| LibraryError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let library = Self::from_json(path, &text)?;
		tracing::debug!(path = %path.display(), stickers = library.stickers.len(), packages = library.packages.len(), "library.load");
		Ok(library)
	}

	pub fn add_package(&mut self, name: impl Into<String>) {
		self.packages.insert(name.into());
	}

	/// Adds a sticky, registering its package when unseen.
	pub fn add_sticker(&mut self, sticker: StickerRecord) {
		self.packages.insert(sticker.package.clone());
		self.stickers.push(sticker);
	}

	pub fn page_size(&self) -> usize {
		self.page_size
	}

	pub fn packages(&self) -> impl Iterator<Item = &str> {
		self.packages.iter().map(String::as_str)
	}

	fn matching(&self, search: &Search) -> Vec<&StickerRecord> {
		let mut rows: Vec<&StickerRecord> = self.stickers.iter().filter(|s| s.matches(search)).collect();
		let descending = search.descending();
		let order = |a: &&StickerRecord, b: &&StickerRecord| -> Ordering {
			let by_field = match search.sort_field() {
				Some(SortField::Name) => a.name.cmp(&b.name),
				Some(SortField::Create) => a.create_date.cmp(&b.create_date),
				Some(SortField::Modify) => a.modify_date.cmp(&b.modify_date),
				None => Ordering::Equal,
			};
			let by_field = if descending { by_field.reverse() } else { by_field };
			by_field.then(a.id.cmp(&b.id))
		};
		rows.sort_by(order);
		rows
	}

	/// One page of stickies matching `text`.
	pub fn search(&self, text: &str, page: usize) -> Result<Vec<StickyThumb>, SearchError> {
		let search = parse_search(text)?;
		Ok(self
			.matching(&search)
			.into_iter()
			.skip(page.saturating_mul(self.page_size))
			.take(self.page_size)
			.map(StickerRecord::thumb)
			.collect())
	}

	/// Number of pages `text` spans.
	pub fn count_pages(&self, text: &str) -> Result<usize, SearchError> {
		let search = parse_search(text)?;
		Ok(page_count(self.matching(&search).len(), self.page_size))
	}

	/// Package names containing `input`, case-insensitively, in name order.
	pub fn search_packages(&self, input: &str) -> Vec<String> {
		let needle = input.trim().to_lowercase();
		self.packages
			.iter()
			.filter(|name| name.to_lowercase().contains(&needle))
			.cloned()
			.collect()
	}

	/// Distinct tags whose `namespace:value` text contains `input`.
	pub fn search_tags(&self, input: &str) -> Vec<Tag> {
		let needle = input.trim().to_lowercase();
		self.stickers
			.iter()
			.flat_map(|s| s.tags.iter())
			.filter(|tag| tag.to_string().to_lowercase().contains(&needle))
			.cloned()
			.collect::<BTreeSet<_>>()
			.into_iter()
			.collect()
	}
}

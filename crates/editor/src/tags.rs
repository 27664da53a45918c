//! Working tag list with pinned tags, plus tag suggestions.

use async_trait::async_trait;
use stickyard_primitives::{SuggestionItem, Tag};
use stickyard_query::{SourceError, SuggestionSource, TagSource};

use crate::{ChangeCallback, Combobox, create_label};

pub type TagCombobox<T> = Combobox<Tag, TagSuggestions<T>>;

/// Persisted tags matching the input, preceded by a synthetic create entry
/// when the input is itself a valid, unknown tag.
pub struct TagSuggestions<T> {
	tags: T,
}

impl<T: TagSource> TagSuggestions<T> {
	pub fn new(tags: T) -> Self {
		Self { tags }
	}
}

#[async_trait]
impl<T: TagSource> SuggestionSource<Tag> for TagSuggestions<T> {
	async fn suggest(&self, input: &str) -> Result<Vec<SuggestionItem<Tag>>, SourceError> {
		let persisted = self.tags.search_tags(input).await?;
		let mut items = Vec::with_capacity(persisted.len() + 1);
		if let Ok(tag) = input.parse::<Tag>()
			&& !persisted.contains(&tag)
		{
			let label = create_label(&tag.to_string());
			items.push(SuggestionItem::new(tag, label));
		}
		items.extend(persisted.into_iter().map(SuggestionItem::plain));
		Ok(items)
	}
}

pub fn tag_combobox<T: TagSource>(tags: T) -> TagCombobox<T> {
	Combobox::new("tag", TagSuggestions::new(tags), Tag::new("", ""))
}

/// Tags on the edited sticky and the pinned subset kept across resets.
///
/// Every change to the working list is reported through the change
/// callback. Pins are local state and are never reported.
pub struct TagList {
	tags: Vec<Tag>,
	pinned: Vec<Tag>,
	lockable: bool,
	on_changed: Option<ChangeCallback<Vec<Tag>>>,
}

impl TagList {
	pub fn new(on_changed: Option<ChangeCallback<Vec<Tag>>>) -> Self {
		Self {
			tags: Vec::new(),
			pinned: Vec::new(),
			lockable: false,
			on_changed,
		}
	}

	pub fn tags(&self) -> &[Tag] {
		&self.tags
	}

	pub fn pinned(&self) -> &[Tag] {
		&self.pinned
	}

	pub fn is_pinned(&self, tag: &Tag) -> bool {
		self.pinned.contains(tag)
	}

	pub fn is_lockable(&self) -> bool {
		self.lockable
	}

	pub fn set_lockable(&mut self, lockable: bool) {
		self.lockable = lockable;
	}

	/// Mirrors the owner's tag list without notifying.
	pub fn sync(&mut self, tags: Vec<Tag>) {
		self.tags = tags;
	}

	pub fn set_pinned(&mut self, pinned: Vec<Tag>) {
		self.pinned.clear();
		for tag in pinned {
			if !self.pinned.contains(&tag) {
				self.pinned.push(tag);
			}
		}
	}

	/// Appends `tag` unless present.
	pub fn add(&mut self, tag: Tag) -> bool {
		if self.tags.contains(&tag) {
			return false;
		}
		self.tags.push(tag);
		self.notify();
		true
	}

	/// Removes `tag`, unpinning it too.
	pub fn remove(&mut self, tag: &Tag) -> bool {
		let Some(index) = self.tags.iter().position(|t| t == tag) else {
			return false;
		};
		self.tags.remove(index);
		self.pinned.retain(|t| t != tag);
		self.notify();
		true
	}

	/// Flips the pin on a listed tag. Only allowed when lockable.
	pub fn toggle_pin(&mut self, tag: &Tag) -> bool {
		if !self.lockable || !self.tags.contains(tag) {
			return false;
		}
		match self.pinned.iter().position(|t| t == tag) {
			Some(index) => {
				self.pinned.remove(index);
			}
			None => self.pinned.push(tag.clone()),
		}
		true
	}

	/// Collapses the working list to the pinned tags and reports them.
	pub fn reset(&mut self) -> Vec<Tag> {
		self.tags = self.pinned.clone();
		self.notify();
		self.pinned.clone()
	}

	fn notify(&mut self) {
		if let Some(on_changed) = self.on_changed.as_mut() {
			on_changed(self.tags.clone());
		}
	}
}

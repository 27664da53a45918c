//! Lockable fields and the form-level reset that respects them.
//! Anchor ID: STICKYARD_ANCHOR_FORM_LOCKS
//!
//! # Purpose
//!
//! * Lets a batch-entry host keep some fields constant across submissions
//!   while clearing the rest.
//! * Exposes reset as an imperative call, independent of any button.
//!
//! # Mental model
//!
//! * Field values mirror the owner's values (`sync`, silent). Edits and
//!   resets report through the field's change callback.
//! * Scalar fields freeze as a whole. Tags never freeze as a whole: reset
//!   collapses them to the pinned subset.
//! * Raw inputs are uncontrolled text handles. Reset clears them directly
//!   because no change callback reaches them.
//!
//! # Invariants
//!
//! * Must not touch a locked field or fire its callback on reset.
//! * Must reset an unlocked field to its default and fire its callback once.
//! * Must report exactly the pinned tags on reset.
//! * Must clear the raw input of every unlocked field that exposes one.

use stickyard_primitives::{DEFAULT_PACKAGE, Tag};

use crate::{ChangeCallback, RawInput, TagList};

/// One form value that may be frozen against reset.
pub struct LockableField<T> {
	value: T,
	default: T,
	locked: bool,
	on_changed: Option<ChangeCallback<T>>,
}

impl<T: Clone> LockableField<T> {
	pub fn new(default: T, on_changed: Option<ChangeCallback<T>>) -> Self {
		Self {
			value: default.clone(),
			default,
			locked: false,
			on_changed,
		}
	}

	pub fn value(&self) -> &T {
		&self.value
	}

	pub fn default_value(&self) -> &T {
		&self.default
	}

	pub fn is_locked(&self) -> bool {
		self.locked
	}

	pub fn set_locked(&mut self, locked: bool) {
		self.locked = locked;
	}

	/// False when nobody listens, i.e. the field is read-only to its owner.
	#[cfg(test)]
	pub(crate) fn is_controlled(&self) -> bool {
		self.on_changed.is_some()
	}

	/// Mirrors the owner's value without notifying.
	pub fn sync(&mut self, value: T) {
		self.value = value;
	}

	/// Stores an edit and reports it.
	pub fn set_value(&mut self, value: T) {
		self.value = value;
		self.notify();
	}

	/// Restores the default unless locked. Returns whether it did.
	pub fn reset(&mut self) -> bool {
		if self.locked {
			return false;
		}
		self.value = self.default.clone();
		self.notify();
		true
	}

	fn notify(&mut self) {
		if let Some(on_changed) = self.on_changed.as_mut() {
			on_changed(self.value.clone());
		}
	}
}

/// What a reset did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetReport {
	pub name_cleared: bool,
	pub package_cleared: bool,
	/// Tags the list was collapsed to.
	pub tags: Vec<Tag>,
}

/// Name, package and tag fields of one editor instance.
pub struct FormLockController {
	name: LockableField<String>,
	package: LockableField<String>,
	tags: TagList,
	name_input: RawInput,
	package_input: Option<RawInput>,
}

impl FormLockController {
	pub fn new(
		name: LockableField<String>,
		package: LockableField<String>,
		tags: TagList,
		name_input: RawInput,
		package_input: Option<RawInput>,
	) -> Self {
		Self {
			name,
			package,
			tags,
			name_input,
			package_input,
		}
	}

	/// Controller with the usual defaults: empty name, [`DEFAULT_PACKAGE`].
	pub fn with_callbacks(
		on_name_changed: Option<ChangeCallback<String>>,
		on_package_changed: Option<ChangeCallback<String>>,
		on_tags_changed: Option<ChangeCallback<Vec<Tag>>>,
		package_input: Option<RawInput>,
	) -> Self {
		Self::new(
			LockableField::new(String::new(), on_name_changed),
			LockableField::new(DEFAULT_PACKAGE.to_string(), on_package_changed),
			TagList::new(on_tags_changed),
			RawInput::default(),
			package_input,
		)
	}

	pub fn name(&self) -> &LockableField<String> {
		&self.name
	}

	pub fn name_mut(&mut self) -> &mut LockableField<String> {
		&mut self.name
	}

	pub fn package(&self) -> &LockableField<String> {
		&self.package
	}

	pub fn package_mut(&mut self) -> &mut LockableField<String> {
		&mut self.package
	}

	pub fn tags(&self) -> &TagList {
		&self.tags
	}

	pub fn tags_mut(&mut self) -> &mut TagList {
		&mut self.tags
	}

	pub fn name_input(&self) -> &RawInput {
		&self.name_input
	}

	pub fn package_input(&self) -> Option<&RawInput> {
		self.package_input.as_ref()
	}

	/// Clears every unlocked field and collapses tags to the pinned subset.
	pub fn reset(&mut self) -> ResetReport {
		let name_cleared = self.name.reset();
		if name_cleared {
			self.name_input.clear();
		}

		let package_cleared = self.package.reset();
		if package_cleared && let Some(input) = &self.package_input {
			input.clear();
		}

		let tags = self.tags.reset();
		tracing::debug!(name_cleared, package_cleared, tags = tags.len(), "editor.reset");
		ResetReport {
			name_cleared,
			package_cleared,
			tags,
		}
	}
}

#[cfg(test)]
mod invariants;

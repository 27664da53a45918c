//! Sticky editor: name, package, tags and favourite of one sticky.
//!
//! Two variants share the same controller. [`EditorVariant::Sticker`] hands
//! the host only the raw name input; [`EditorVariant::Sticky`] also hands out
//! the raw package input. Both pick packages through the async package
//! combobox and reset the package to [`stickyard_primitives::DEFAULT_PACKAGE`].

use std::path::{Path, PathBuf};

use stickyard_primitives::Tag;
use stickyard_query::{PackageSource, TagSource};

use crate::{
	ChangeCallback, EditorHandle, FormLockController, PackageCombobox, RawInput, ResetReport, SyncOutcome,
	TagCombobox, package_combobox, tag_combobox,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorVariant {
	/// Image sticker editor.
	#[default]
	Sticker,
	/// Free-form sticky editor.
	Sticky,
}

/// Owner-held values the editor mirrors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StickerForm {
	pub name: String,
	/// `None` or blank falls back to the default package.
	pub package: Option<String>,
	pub tags: Vec<Tag>,
	pub fav: bool,
	pub path: Option<PathBuf>,
}

/// Owner notifications. A missing callback makes that field read-only to the owner.
#[derive(Default)]
pub struct EditorCallbacks {
	pub on_name_changed: Option<ChangeCallback<String>>,
	pub on_package_changed: Option<ChangeCallback<String>>,
	pub on_tags_changed: Option<ChangeCallback<Vec<Tag>>>,
	pub on_fav_changed: Option<ChangeCallback<bool>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
	Image(PathBuf),
	Missing,
}

impl Preview {
	fn from_path(path: Option<&Path>) -> Self {
		match path {
			Some(path) => Self::Image(path.to_path_buf()),
			None => Self::Missing,
		}
	}
}

/// Aggregate of every field value and lock in one editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
	pub name: String,
	pub package: String,
	pub tags: Vec<Tag>,
	pub locked_tags: Vec<Tag>,
	pub lock_name: bool,
	pub lock_package: bool,
	pub fav: bool,
}

pub struct StickerEditor<P: PackageSource, T: TagSource> {
	variant: EditorVariant,
	form: FormLockController,
	packages: PackageCombobox<P>,
	tag_box: TagCombobox<T>,
	fav: bool,
	on_fav_changed: Option<ChangeCallback<bool>>,
	preview: Preview,
}

impl<P: PackageSource, T: TagSource> StickerEditor<P, T> {
	pub fn new(variant: EditorVariant, packages: P, tags: T, callbacks: EditorCallbacks) -> Self {
		let packages = package_combobox(packages);
		let package_input = match variant {
			EditorVariant::Sticker => None,
			EditorVariant::Sticky => Some(packages.input_ref()),
		};
		let form = FormLockController::with_callbacks(
			callbacks.on_name_changed,
			callbacks.on_package_changed,
			callbacks.on_tags_changed,
			package_input,
		);
		Self {
			variant,
			form,
			packages,
			tag_box: tag_combobox(tags),
			fav: false,
			on_fav_changed: callbacks.on_fav_changed,
			preview: Preview::Missing,
		}
	}

	/// Enables tag pinning for batch entry.
	pub fn with_lockable(mut self, lockable: bool) -> Self {
		self.form.tags_mut().set_lockable(lockable);
		self
	}

	pub fn variant(&self) -> EditorVariant {
		self.variant
	}

	/// Mirrors new owner values. Runs package reconciliation, which may
	/// report the default package back to the owner.
	pub fn set_props(&mut self, props: &StickerForm) {
		if *self.form.name().value() != props.name {
			self.form.name_input().set_value(props.name.as_str());
		}
		self.form.name_mut().sync(props.name.clone());

		match self.packages.reconcile(props.package.as_ref()) {
			SyncOutcome::FellBack(default) => self.form.package_mut().set_value(default),
			SyncOutcome::Adopted | SyncOutcome::Unchanged => {
				let current = self.packages.value().value.clone();
				self.form.package_mut().sync(current);
			}
		}

		self.form.tags_mut().sync(props.tags.clone());
		self.fav = props.fav;
		self.preview = Preview::from_path(props.path.as_deref());
	}

	/// Typing in the name box.
	pub fn set_name(&mut self, name: impl Into<String>) {
		let name = name.into();
		self.form.name_input().set_value(name.as_str());
		self.form.name_mut().set_value(name);
	}

	pub fn packages(&self) -> &PackageCombobox<P> {
		&self.packages
	}

	pub fn packages_mut(&mut self) -> &mut PackageCombobox<P> {
		&mut self.packages
	}

	/// Picks a package candidate and reports it to the owner.
	pub fn select_package(&mut self, index: usize) -> Option<String> {
		let package = self.packages.select(index)?;
		self.form.package_mut().set_value(package.clone());
		Some(package)
	}

	pub fn tag_box(&self) -> &TagCombobox<T> {
		&self.tag_box
	}

	pub fn tag_box_mut(&mut self) -> &mut TagCombobox<T> {
		&mut self.tag_box
	}

	/// Adds tag candidate `index` and clears the tag input.
	pub fn pick_tag(&mut self, index: usize) -> Option<Tag> {
		let tag = self.tag_box.select(index)?;
		self.tag_box.input_ref().clear();
		self.form.tags_mut().add(tag.clone());
		Some(tag)
	}

	pub fn add_tag(&mut self, tag: Tag) -> bool {
		self.form.tags_mut().add(tag)
	}

	pub fn remove_tag(&mut self, tag: &Tag) -> bool {
		self.form.tags_mut().remove(tag)
	}

	pub fn toggle_tag_pin(&mut self, tag: &Tag) -> bool {
		self.form.tags_mut().toggle_pin(tag)
	}

	pub fn tags(&self) -> &[Tag] {
		self.form.tags().tags()
	}

	pub fn fav(&self) -> bool {
		self.fav
	}

	pub fn toggle_fav(&mut self) {
		self.fav = !self.fav;
		if let Some(on_fav_changed) = self.on_fav_changed.as_mut() {
			on_fav_changed(self.fav);
		}
	}

	pub fn preview(&self) -> &Preview {
		&self.preview
	}

	/// Applies completed package and tag lookups.
	pub fn pump(&mut self) -> bool {
		let packages = self.packages.pump();
		let tags = self.tag_box.pump();
		packages || tags
	}

	pub fn snapshot(&self) -> FormSnapshot {
		FormSnapshot {
			name: self.form.name().value().clone(),
			package: self.form.package().value().clone(),
			tags: self.form.tags().tags().to_vec(),
			locked_tags: self.form.tags().pinned().to_vec(),
			lock_name: self.form.name().is_locked(),
			lock_package: self.form.package().is_locked(),
			fav: self.fav,
		}
	}
}

impl<P: PackageSource, T: TagSource> EditorHandle for StickerEditor<P, T> {
	fn lock_name(&self) -> bool {
		self.form.name().is_locked()
	}

	fn set_lock_name(&mut self, locked: bool) {
		self.form.name_mut().set_locked(locked);
	}

	fn lock_package(&self) -> bool {
		self.form.package().is_locked()
	}

	fn set_lock_package(&mut self, locked: bool) {
		self.form.package_mut().set_locked(locked);
	}

	fn locked_tags(&self) -> &[Tag] {
		self.form.tags().pinned()
	}

	fn set_locked_tags(&mut self, tags: Vec<Tag>) {
		self.form.tags_mut().set_pinned(tags);
	}

	fn name_input(&self) -> RawInput {
		self.form.name_input().clone()
	}

	fn package_input(&self) -> Option<RawInput> {
		self.form.package_input().cloned()
	}

	fn reset(&mut self) -> ResetReport {
		let report = self.form.reset();
		if report.package_cleared {
			self.packages.reset_to_default();
		}
		report
	}
}

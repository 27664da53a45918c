#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Editing and browsing controllers for the sticky library.
//!
//! # Main Types
//!
//! - [`Combobox`] - async suggestion list with reconciled selection
//! - [`FormLockController`] - lockable fields and lock-aware reset
//! - [`StickerEditor`] - both editor variants behind one [`EditorHandle`]
//! - [`SearchPage`] - search box and pager over a [`stickyard_query::SearchSource`]
//!
//! Everything here is driven from one owner event loop. Lookups run on the
//! query runtime; their results are applied only when the owner pumps.

pub mod combobox;
mod handle;
pub mod lock;
pub mod package;
mod raw_input;
pub mod search_page;
pub mod sticker;
pub mod tags;

pub use combobox::{Combobox, KeyFn, SyncOutcome, SyncedValue};
pub use handle::EditorHandle;
pub use lock::{FormLockController, LockableField, ResetReport};
pub use package::{PackageCombobox, PackageSuggestions, create_label, package_combobox};
pub use raw_input::RawInput;
pub use search_page::SearchPage;
pub use sticker::{EditorCallbacks, EditorVariant, FormSnapshot, Preview, StickerEditor, StickerForm};
pub use tags::{TagCombobox, TagList, TagSuggestions, tag_combobox};

/// Owner notification for one field.
pub type ChangeCallback<T> = Box<dyn FnMut(T)>;

//! Core value types shared by the query, search, and editor crates.

/// Value/label pairs offered by comboboxes.
pub mod item;
/// Search result records and package defaults.
pub mod sticky;
/// Namespaced tags.
pub mod tag;

pub use item::{ItemValue, SuggestionItem};
pub use sticky::{DEFAULT_PACKAGE, StickyKind, StickyThumb};
pub use tag::{Tag, TagParseError};

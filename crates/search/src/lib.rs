//! Search language and data sources for the sticky library.
//!
//! * [`parse`] turns free text into a structured [`Search`].
//! * [`sql`] renders a [`Search`] as SQLite statements for a persisted store.
//! * [`Library`] evaluates a [`Search`] in memory and implements every
//!   `stickyard-query` source contract.

pub mod library;
pub mod parse;
pub mod sql;

pub use library::{Library, LibraryError, StickerRecord};
pub use parse::{MetaKey, ParsedKeyword, ParsedMeta, ParsedTag, Search, SearchError, SortField, parse_search};

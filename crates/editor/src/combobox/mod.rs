//! Selectable combobox over an async suggestion source.
//! Anchor ID: STICKYARD_ANCHOR_COMBOBOX
//!
//! # Purpose
//!
//! * Shows candidates for partially typed input, fetched through a
//!   [`QueryService`] so that only the latest lookup is ever rendered.
//! * Holds the current selection as a [`SyncedValue`] mirrored against the
//!   owner's value.
//!
//! # Mental model
//!
//! * Typing while open issues a lookup; typing while closed only edits text.
//! * Lookups complete on the query runtime and are applied when the owner
//!   calls [`Combobox::pump`] or [`Combobox::settle`].
//! * Selecting is a direct user action: it never goes through the query
//!   service, it updates the cache at once and closes the list.
//! * The owner passes its value to [`Combobox::reconcile`] on every update.
//!   A [`SyncOutcome::FellBack`] must be forwarded to the owner.
//!
//! # Key types
//!
//! | Type | Meaning | Constraints | Constructed / mutated in |
//! |---|---|---|---|
//! | [`Combobox`] | Input text, open flag, highlight and cached selection | Must only show accepted candidates | this module |
//! | [`SyncedValue`] | Cached selection plus the last observed owner value | Must not notify twice for one owner value | `reconcile`, `select` |
//! | [`SyncOutcome`] | What reconciliation did | `FellBack` carries the value to report | `SyncedValue::reconcile` |
//!
//! # Invariants
//!
//! * Must adopt a present, non-blank owner value verbatim.
//! * Must replace an absent or blank owner value with the default and report it once.
//! * Must be a no-op for an owner value already reconciled.
//! * Must compare candidates by key, never by label.

mod sync;

use stickyard_primitives::{ItemValue, SuggestionItem};
use stickyard_query::{QueryService, SuggestQuery, SuggestionSource, TaskClass};

pub use self::sync::{SyncOutcome, SyncedValue};
use crate::RawInput;

/// Extracts the identity a candidate is compared by.
pub type KeyFn<V> = Box<dyn Fn(&V) -> String>;

/// Controlled selection widget generic over its value type.
pub struct Combobox<V, S>
where
	V: ItemValue + Send + 'static,
	S: SuggestionSource<V>,
{
	name: &'static str,
	service: QueryService<SuggestQuery<S, V>>,
	value: SyncedValue<V>,
	input: RawInput,
	open: bool,
	highlighted: Option<usize>,
	key: KeyFn<V>,
}

impl<V, S> Combobox<V, S>
where
	V: ItemValue + Send + 'static,
	S: SuggestionSource<V>,
{
	/// Creates a closed combobox whose selection starts at `default`.
	pub fn new(name: &'static str, source: S, default: V) -> Self {
		Self {
			name,
			service: QueryService::new(name, TaskClass::Interactive, SuggestQuery::new(source)),
			value: SyncedValue::new(default),
			input: RawInput::default(),
			open: false,
			highlighted: None,
			key: Box::new(|value: &V| value.display_label()),
		}
	}

	/// Replaces the identity used to match candidates against the selection.
	pub fn with_key(mut self, key: impl Fn(&V) -> String + 'static) -> Self {
		self.key = Box::new(key);
		self
	}

	pub fn source(&self) -> &S {
		self.service.source().inner()
	}

	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Opens the list and looks up the current input.
	///
	/// Candidates from the previous lookup stay visible until the new one
	/// lands, so the highlight is placed on them right away.
	/// Returns the issued sequence, or `None` if already open.
	pub fn open(&mut self) -> Option<u64> {
		if self.open {
			return None;
		}
		self.open = true;
		self.sync_highlight();
		Some(self.service.issue(self.input.value(), 0))
	}

	pub fn close(&mut self) {
		self.open = false;
		self.highlighted = None;
	}

	pub fn input(&self) -> String {
		self.input.value()
	}

	/// Shared handle to the text input.
	pub fn input_ref(&self) -> RawInput {
		self.input.clone()
	}

	/// Replaces the typed text. Issues a lookup only while open.
	pub fn set_input(&mut self, text: impl Into<String>) -> Option<u64> {
		self.input.set_value(text);
		self.open.then(|| self.service.issue(self.input.value(), 0))
	}

	/// Applies lookups that already completed. Returns true when the
	/// candidate list changed.
	pub fn pump(&mut self) -> bool {
		let changed = self.service.drain_events();
		if changed {
			self.sync_highlight();
		}
		changed
	}

	/// Waits for the latest lookup to complete and applies it.
	pub async fn settle(&mut self) -> bool {
		let changed = self.service.settle().await;
		if changed {
			self.sync_highlight();
		}
		changed
	}

	pub fn is_pending(&self) -> bool {
		self.service.is_pending()
	}

	/// Candidates from the latest accepted lookup.
	pub fn candidates(&self) -> &[SuggestionItem<V>] {
		self.service.results()
	}

	pub fn highlighted(&self) -> Option<usize> {
		self.highlighted
	}

	/// Moves the highlight by `delta`, wrapping at both ends.
	pub fn move_highlight(&mut self, delta: isize) {
		let total = self.candidates().len();
		if total == 0 {
			return;
		}
		let current = self.highlighted.unwrap_or(0) as isize;
		let mut next = current + delta;
		if next < 0 {
			next = total as isize - 1;
		} else if next as usize >= total {
			next = 0;
		}
		self.highlighted = Some(next as usize);
	}

	/// Picks candidate `index`, caches it and closes the list.
	///
	/// Returns the chosen value for the caller to hand to the owner.
	pub fn select(&mut self, index: usize) -> Option<V> {
		let item = self.candidates().get(index)?.clone();
		tracing::debug!(combobox = self.name, index, label = %item.label, "combobox.select");
		self.value.set_cached(item.value.clone());
		self.close();
		Some(item.value)
	}

	pub fn select_highlighted(&mut self) -> Option<V> {
		self.select(self.highlighted?)
	}

	/// Cached selection.
	pub fn value(&self) -> &SuggestionItem<V> {
		self.value.current()
	}

	pub fn label(&self) -> &str {
		&self.value.current().label
	}

	/// Overwrites the cached selection without consulting the owner.
	pub fn set_cached(&mut self, value: V) {
		self.value.set_cached(value);
	}

	/// Caches the default selection given at construction.
	pub fn reset_to_default(&mut self) {
		let default = self.value.default_value().clone();
		self.value.set_cached(default);
	}

	pub fn is_selected(&self, value: &V) -> bool {
		(self.key)(value) == (self.key)(&self.value.current().value)
	}

	/// Reconciles the cache with the owner's value. See [`SyncedValue::reconcile`].
	pub fn reconcile(&mut self, external: Option<&V>) -> SyncOutcome<V> {
		let outcome = self.value.reconcile(external);
		match &outcome {
			SyncOutcome::Unchanged => {}
			SyncOutcome::Adopted => {
				tracing::trace!(combobox = self.name, label = %self.label(), "combobox.adopt");
			}
			SyncOutcome::FellBack(default) => {
				tracing::debug!(combobox = self.name, default = %default.display_label(), "combobox.fallback");
			}
		}
		outcome
	}

	fn sync_highlight(&mut self) {
		let next = match self.candidates() {
			[] => None,
			items => Some(items.iter().position(|item| self.is_selected(&item.value)).unwrap_or(0)),
		};
		self.highlighted = next;
	}
}

#[cfg(test)]
mod invariants;

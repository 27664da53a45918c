use stickyard_primitives::{ItemValue, SuggestionItem};

/// Result of reconciling the cached selection with the owner's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome<V> {
	/// Nothing to do; no notification.
	Unchanged,
	/// The owner's value replaced the cache.
	Adopted,
	/// The owner has no value. The cache now holds the default, which the
	/// caller must report to the owner.
	FellBack(V),
}

/// Selection mirrored between an owner-held value and a local display cache.
///
/// Reconciliation is keyed on the owner's value: it only runs when that value
/// differs from the one seen on the previous call, so repeated calls with the
/// same input never notify twice.
#[derive(Debug, Clone)]
pub struct SyncedValue<V> {
	cached: SuggestionItem<V>,
	observed: Option<Option<V>>,
	default: V,
}

impl<V: ItemValue> SyncedValue<V> {
	pub fn new(default: V) -> Self {
		Self {
			cached: SuggestionItem::plain(default.clone()),
			observed: None,
			default,
		}
	}

	pub fn current(&self) -> &SuggestionItem<V> {
		&self.cached
	}

	pub fn default_value(&self) -> &V {
		&self.default
	}

	/// Stores a locally chosen value. Synthesized labels are dropped.
	pub fn set_cached(&mut self, value: V) {
		self.cached = SuggestionItem::plain(value);
	}

	/// Brings the cache in line with the owner's value.
	///
	/// Blank values count as absent.
	pub fn reconcile(&mut self, external: Option<&V>) -> SyncOutcome<V> {
		let external = external.filter(|value| !value.is_blank());
		if self.observed.as_ref().is_some_and(|seen| seen.as_ref() == external) {
			return SyncOutcome::Unchanged;
		}
		self.observed = Some(external.cloned());

		match external {
			Some(value) if *value == self.cached.value => SyncOutcome::Unchanged,
			Some(value) => {
				self.cached = SuggestionItem::plain(value.clone());
				SyncOutcome::Adopted
			}
			None => {
				self.cached = SuggestionItem::plain(self.default.clone());
				SyncOutcome::FellBack(self.default.clone())
			}
		}
	}
}

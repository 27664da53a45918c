/// Priority of a fetch relative to other lookups on the query runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskClass {
	/// Suggestion lookups for an open combobox. Start immediately.
	Interactive,
	/// Result-page fetches. Yield once before querying the source so that
	/// suggestion lookups issued in the same tick reach their source first.
	Background,
}

impl TaskClass {
	pub(crate) const fn label(self) -> &'static str {
		match self {
			Self::Interactive => "interactive",
			Self::Background => "background",
		}
	}

	pub(crate) const fn yields_first(self) -> bool {
		matches!(self, Self::Background)
	}
}

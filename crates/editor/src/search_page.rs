//! Page-level search box and pager.

use stickyard_primitives::StickyThumb;
use stickyard_query::{QueryService, SearchQuery, SearchSource, TaskClass};

/// Free-text search plus a page index, coordinated as one query.
///
/// Changing either issues exactly one fetch. Fetches already in flight are
/// superseded, never cancelled. Changing the text keeps the current page.
pub struct SearchPage<S: SearchSource> {
	service: QueryService<SearchQuery<S>>,
	input: String,
	page: usize,
}

impl<S: SearchSource> SearchPage<S> {
	/// Creates the page and issues the initial blank search.
	pub fn new(source: S) -> Self {
		let mut service = QueryService::new("search", TaskClass::Background, SearchQuery::new(source));
		service.issue("", 0);
		Self {
			service,
			input: String::new(),
			page: 0,
		}
	}

	pub fn search_input(&self) -> &str {
		&self.input
	}

	pub fn page(&self) -> usize {
		self.page
	}

	/// Returns the issued sequence, or `None` when the text did not change.
	pub fn set_search_input(&mut self, text: impl Into<String>) -> Option<u64> {
		let text = text.into();
		if text == self.input {
			return None;
		}
		self.input = text;
		Some(self.service.issue(self.input.as_str(), self.page))
	}

	/// Returns the issued sequence, or `None` when the page did not change.
	pub fn set_page(&mut self, page: usize) -> Option<u64> {
		if page == self.page {
			return None;
		}
		self.page = page;
		Some(self.service.issue(self.input.as_str(), self.page))
	}

	/// Rows from the latest accepted search.
	pub fn stickies(&self) -> &[StickyThumb] {
		self.service.results()
	}

	pub fn pump(&mut self) -> bool {
		self.service.drain_events()
	}

	pub async fn settle(&mut self) -> bool {
		self.service.settle().await
	}

	pub fn is_pending(&self) -> bool {
		self.service.is_pending()
	}
}

//! Contracts for the async data sources the coordinator fetches from.
//!
//! Every source must tolerate overlapping calls; the coordinator never waits
//! for one lookup to finish before issuing the next.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use stickyard_primitives::{StickyThumb, SuggestionItem, Tag};

/// Failure reported by a source. Never surfaced to hosts; a failed request
/// simply shows zero results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
	#[error("source unavailable: {0}")]
	Unavailable(String),
	#[error("invalid query: {0}")]
	InvalidQuery(String),
	#[error("source backend error: {0}")]
	Backend(String),
}

/// Uniform fetch surface driven by [`crate::QueryService`].
///
/// `Ok(None)` means "not ready yet" and leaves the visible result alone;
/// `Ok(Some(vec![]))` means "zero results".
#[async_trait]
pub trait QuerySource: Send + Sync + 'static {
	type Item: Send + 'static;

	async fn fetch(&self, query: &str, page: usize) -> Result<Option<Vec<Self::Item>>, SourceError>;
}

/// Candidate provider for a selectable combobox.
#[async_trait]
pub trait SuggestionSource<V: Send + 'static>: Send + Sync + 'static {
	/// Returns ordered candidates for partially typed input.
	async fn suggest(&self, input: &str) -> Result<Vec<SuggestionItem<V>>, SourceError>;
}

/// Paged full-text search over stored stickies.
#[async_trait]
pub trait SearchSource: Send + Sync + 'static {
	async fn search(&self, query: &str, page: usize) -> Result<Option<Vec<StickyThumb>>, SourceError>;
}

/// Persisted package names matching partial input.
#[async_trait]
pub trait PackageSource: Send + Sync + 'static {
	async fn search_packages(&self, input: &str) -> Result<Vec<String>, SourceError>;
}

/// Persisted tags matching partial input.
#[async_trait]
pub trait TagSource: Send + Sync + 'static {
	async fn search_tags(&self, input: &str) -> Result<Vec<Tag>, SourceError>;
}

#[async_trait]
impl<S: SearchSource + ?Sized> SearchSource for Arc<S> {
	async fn search(&self, query: &str, page: usize) -> Result<Option<Vec<StickyThumb>>, SourceError> {
		(**self).search(query, page).await
	}
}

#[async_trait]
impl<S: PackageSource + ?Sized> PackageSource for Arc<S> {
	async fn search_packages(&self, input: &str) -> Result<Vec<String>, SourceError> {
		(**self).search_packages(input).await
	}
}

#[async_trait]
impl<S: TagSource + ?Sized> TagSource for Arc<S> {
	async fn search_tags(&self, input: &str) -> Result<Vec<Tag>, SourceError> {
		(**self).search_tags(input).await
	}
}

/// Adapts a [`SuggestionSource`] to the coordinator. Paging is ignored.
pub struct SuggestQuery<S, V> {
	source: S,
	_value: PhantomData<fn() -> V>,
}

impl<S, V> SuggestQuery<S, V> {
	pub fn new(source: S) -> Self {
		Self {
			source,
			_value: PhantomData,
		}
	}

	pub fn inner(&self) -> &S {
		&self.source
	}
}

#[async_trait]
impl<S, V> QuerySource for SuggestQuery<S, V>
where
	S: SuggestionSource<V>,
	V: Send + 'static,
{
	type Item = SuggestionItem<V>;

	async fn fetch(&self, query: &str, _page: usize) -> Result<Option<Vec<Self::Item>>, SourceError> {
		self.source.suggest(query).await.map(Some)
	}
}

/// Adapts a [`SearchSource`] to the coordinator.
pub struct SearchQuery<S> {
	source: S,
}

impl<S> SearchQuery<S> {
	pub fn new(source: S) -> Self {
		Self { source }
	}

	pub fn inner(&self) -> &S {
		&self.source
	}
}

#[async_trait]
impl<S: SearchSource> QuerySource for SearchQuery<S> {
	type Item = StickyThumb;

	async fn fetch(&self, query: &str, page: usize) -> Result<Option<Vec<StickyThumb>>, SourceError> {
		self.source.search(query, page).await
	}
}

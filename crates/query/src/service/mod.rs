//! Async driver that issues fetches and applies only current completions.
//! Anchor ID: STICKYARD_ANCHOR_QUERY_SERVICE
//!
//! # Purpose
//!
//! * Owns one [`QueryCoordinator`] plus the visible result list for one widget.
//! * Spawns one fetch task per issued request; never cancels an earlier one.
//! * Applies completions on the owner's side of a channel, gated by sequence.
//!
//! # Mental model
//!
//! * `issue` is synchronous: it bumps the sequence and spawns the fetch.
//! * Fetch tasks only send `QueryResponse`s; they never touch visible state.
//! * The owner drains responses (`drain_events`, `recv_and_apply`, `settle`)
//!   from its own event loop. Acceptance is decided at that point, so a
//!   request superseded while in flight is stale even if it arrives first.
//!
//! # Key types
//!
//! | Type | Meaning | Constraints | Constructed / mutated in |
//! |---|---|---|---|
//! | [`QueryService`] | Owner-side handle and visible result cache | Must only mutate `results` through `apply` | this module |
//! | [`QueryCoordinator`] | Issued/accepted counters | Must be bumped synchronously on issue | `issue` |
//! | [`QueryResponse`] | One completion | Must carry the issue-time sequence | fetch task |
//!
//! # Invariants
//!
//! * Must ignore any completion whose sequence is not the latest issued one.
//! * Must map source errors to an empty accepted result, logged at `warn`, without retry.
//! * Must leave visible results untouched on `QueryOutcome::NotReady`.
//! * Must not block new issues on unresolved fetches.
//!
//! # Concurrency & ordering
//!
//! * Fetches may run concurrently and complete in any order.
//! * All visible-state mutation happens through `&mut self`, so the owner's
//!   event loop serialises it; no locks are needed.
//! * There is no timeout: a fetch that never resolves simply never applies.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::coordinator::{Acceptance, QueryCoordinator, QueryOutcome, QueryRequest, QueryResponse};
use crate::source::QuerySource;
use crate::{TaskClass, spawn_fetch};

/// Coordinated query handle for one widget or page.
pub struct QueryService<S: QuerySource> {
	name: &'static str,
	class: TaskClass,
	source: Arc<S>,
	coordinator: QueryCoordinator,
	tx: mpsc::UnboundedSender<QueryResponse<S::Item>>,
	rx: mpsc::UnboundedReceiver<QueryResponse<S::Item>>,
	results: Vec<S::Item>,
	result_query: Option<QueryRequest>,
	last_request: Option<QueryRequest>,
}

impl<S: QuerySource> QueryService<S> {
	/// Creates a service with no request issued yet.
	pub fn new(name: &'static str, class: TaskClass, source: S) -> Self {
		let (tx, rx) = mpsc::unbounded_channel();
		Self {
			name,
			class,
			source: Arc::new(source),
			coordinator: QueryCoordinator::new(),
			tx,
			rx,
			results: Vec::new(),
			result_query: None,
			last_request: None,
		}
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// Issues a new request and returns its sequence number.
	///
	/// Every earlier request in flight becomes stale at this point.
	pub fn issue(&mut self, query: impl Into<String>, page: usize) -> u64 {
		let request = self.coordinator.issue(query, page);
		let seq = request.seq;
		tracing::debug!(service = self.name, seq, query = %request.query, page, "query.issue");
		self.last_request = Some(request.clone());

		let source = Arc::clone(&self.source);
		let tx = self.tx.clone();
		let name = self.name;
		spawn_fetch(self.class, name, seq, async move {
			let outcome = match source.fetch(&request.query, request.page).await {
				Ok(Some(items)) => QueryOutcome::Ready(items),
				Ok(None) => QueryOutcome::NotReady,
				Err(error) => {
					tracing::warn!(service = name, seq, query = %request.query, %error, "query.source_failed");
					QueryOutcome::Failed(Arc::from(error.to_string()))
				}
			};
			// Owner dropped: nothing left to update.
			let _ = tx.send(QueryResponse { seq, outcome });
		});
		seq
	}

	/// Applies one completion. Returns true when visible results changed.
	pub fn apply(&mut self, response: QueryResponse<S::Item>) -> bool {
		let seq = response.seq;
		match self.coordinator.accept(response) {
			Acceptance::Apply(items) => {
				tracing::trace!(service = self.name, seq, count = items.len(), "query.apply");
				self.results = items;
				self.result_query = self.last_request.clone();
				true
			}
			Acceptance::Keep => {
				tracing::trace!(service = self.name, seq, "query.not_ready");
				false
			}
			Acceptance::Stale => {
				tracing::trace!(service = self.name, seq, latest = self.coordinator.issued(), "query.stale");
				false
			}
		}
	}

	/// Applies every completion already delivered, without waiting.
	pub fn drain_events(&mut self) -> bool {
		let mut changed = false;
		while let Ok(response) = self.rx.try_recv() {
			changed |= self.apply(response);
		}
		changed
	}

	/// Waits for the next completion (current or stale) and applies it.
	pub async fn recv_and_apply(&mut self) -> bool {
		match self.rx.recv().await {
			Some(response) => self.apply(response),
			None => false,
		}
	}

	/// Waits until the latest issued request has completed.
	///
	/// Returns immediately when nothing is pending. Never resolves if the
	/// latest fetch never does; callers wanting a bound wrap it in a timeout.
	pub async fn settle(&mut self) -> bool {
		let mut changed = false;
		while self.coordinator.is_pending() {
			changed |= self.recv_and_apply().await;
		}
		changed
	}

	/// Visible results from the latest accepted completion.
	pub fn results(&self) -> &[S::Item] {
		&self.results
	}

	/// Request whose completion produced the visible results.
	pub fn result_query(&self) -> Option<&QueryRequest> {
		self.result_query.as_ref()
	}

	/// Latest issued request.
	pub fn last_request(&self) -> Option<&QueryRequest> {
		self.last_request.as_ref()
	}

	pub fn is_pending(&self) -> bool {
		self.coordinator.is_pending()
	}

	pub fn coordinator(&self) -> &QueryCoordinator {
		&self.coordinator
	}
}

#[cfg(test)]
mod tests;

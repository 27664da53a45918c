//! Sequence-gated acceptance of async query completions.
//!
//! The coordinator never cancels anything. It assigns each request a
//! monotonic sequence number at issue time and, when a completion arrives,
//! accepts it only if no newer request has been issued since. Everything
//! else is a stale response and is dropped without touching visible state.

use std::sync::Arc;

/// One issued query. Identity is `seq`; requests are never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
	pub seq: u64,
	pub query: String,
	pub page: usize,
}

/// Result shape reported by a source for one request.
///
/// `NotReady` and `Ready(vec![])` are deliberately different: the former
/// leaves the previously accepted result visible, the latter clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome<T> {
	Ready(Vec<T>),
	NotReady,
	Failed(Arc<str>),
}

/// Completion of exactly one [`QueryRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse<T> {
	pub seq: u64,
	pub outcome: QueryOutcome<T>,
}

impl<T> QueryResponse<T> {
	pub fn ready(seq: u64, items: Vec<T>) -> Self {
		Self {
			seq,
			outcome: QueryOutcome::Ready(items),
		}
	}
}

/// What the owner should do with a completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acceptance<T> {
	/// Replace visible state with these items. Failures arrive here as an empty list.
	Apply(Vec<T>),
	/// Current request reported "not ready"; keep what is visible.
	Keep,
	/// Superseded or already-accepted request; drop it.
	Stale,
}

/// Two counters: the latest issued sequence and the latest accepted one.
#[derive(Debug, Clone, Default)]
pub struct QueryCoordinator {
	issued: u64,
	accepted: u64,
}

impl QueryCoordinator {
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocates the next request. Synchronous, so any completion captured
	/// before this call becomes stale immediately.
	pub fn issue(&mut self, query: impl Into<String>, page: usize) -> QueryRequest {
		self.issued = self.issued.wrapping_add(1);
		QueryRequest {
			seq: self.issued,
			query: query.into(),
			page,
		}
	}

	/// Highest sequence number issued so far (0 before the first issue).
	pub const fn issued(&self) -> u64 {
		self.issued
	}

	/// Highest sequence number whose completion was accepted.
	pub const fn accepted(&self) -> u64 {
		self.accepted
	}

	/// True when `seq` is the newest issue and has not been accepted yet.
	pub const fn is_current(&self, seq: u64) -> bool {
		seq == self.issued && seq > self.accepted
	}

	/// True while the newest request has not completed.
	pub const fn is_pending(&self) -> bool {
		self.issued > self.accepted
	}

	/// Decides whether a completion may touch visible state.
	pub fn accept<T>(&mut self, response: QueryResponse<T>) -> Acceptance<T> {
		if !self.is_current(response.seq) {
			return Acceptance::Stale;
		}
		self.accepted = response.seq;
		match response.outcome {
			QueryOutcome::Ready(items) => Acceptance::Apply(items),
			QueryOutcome::Failed(_) => Acceptance::Apply(Vec::new()),
			QueryOutcome::NotReady => Acceptance::Keep,
		}
	}
}

#[cfg(test)]
mod invariants;

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::oneshot;
use tokio::time::timeout;

use super::QueryService;
use crate::{QueryOutcome, QueryResponse, QuerySource, SourceError, TaskClass};

type Gate = oneshot::Receiver<Result<Option<Vec<&'static str>>, SourceError>>;

/// Source whose completions are released by the test, one query at a time.
#[derive(Default)]
struct GatedSource {
	gates: Mutex<HashMap<String, Gate>>,
	calls: AtomicUsize,
}

impl GatedSource {
	fn gate(&self, query: &str) -> oneshot::Sender<Result<Option<Vec<&'static str>>, SourceError>> {
		let (tx, rx) = oneshot::channel();
		self.gates.lock().insert(query.to_string(), rx);
		tx
	}
}

#[async_trait]
impl QuerySource for GatedSource {
	type Item = &'static str;

	async fn fetch(&self, query: &str, _page: usize) -> Result<Option<Vec<&'static str>>, SourceError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		let gate = self.gates.lock().remove(query);
		match gate {
			Some(rx) => rx.await.unwrap_or_else(|_| Err(SourceError::Unavailable("gate dropped".into()))),
			None => Ok(Some(Vec::new())),
		}
	}
}

fn gated_service() -> QueryService<GatedSource> {
	QueryService::new("test", TaskClass::Interactive, GatedSource::default())
}

#[tokio::test]
async fn newer_issue_wins_when_older_resolves_first() {
	let mut service = gated_service();
	let first = service.source().gate("a");
	let second = service.source().gate("ab");

	service.issue("a", 0);
	service.issue("ab", 0);

	first.send(Ok(Some(vec!["R1"]))).unwrap();
	assert!(!service.recv_and_apply().await, "superseded response must be dropped");
	assert!(service.results().is_empty());

	second.send(Ok(Some(vec!["R2"]))).unwrap();
	assert!(service.recv_and_apply().await);
	assert_eq!(service.results(), ["R2"]);
	assert_eq!(service.result_query().map(|r| r.query.as_str()), Some("ab"));
}

#[tokio::test]
async fn newer_issue_wins_when_older_resolves_last() {
	let mut service = gated_service();
	let first = service.source().gate("a");
	let second = service.source().gate("ab");

	service.issue("a", 0);
	service.issue("ab", 0);

	second.send(Ok(Some(vec!["R2"]))).unwrap();
	assert!(service.recv_and_apply().await);
	first.send(Ok(Some(vec!["R1"]))).unwrap();
	assert!(!service.recv_and_apply().await);
	assert_eq!(service.results(), ["R2"]);
}

#[tokio::test]
async fn previous_result_stays_visible_while_newer_request_is_pending() {
	let mut service = gated_service();
	let first = service.source().gate("cat");
	service.issue("cat", 0);
	first.send(Ok(Some(vec!["cat"]))).unwrap();
	service.settle().await;

	let _pending = service.source().gate("cats");
	service.issue("cats", 0);
	tokio::task::yield_now().await;
	assert!(!service.drain_events());
	assert!(service.is_pending());
	assert_eq!(service.results(), ["cat"]);
}

#[tokio::test]
async fn source_failure_clears_results_without_blocking_later_issues() {
	let mut service = gated_service();
	let ok = service.source().gate("a");
	service.issue("a", 0);
	ok.send(Ok(Some(vec!["R1"]))).unwrap();
	service.settle().await;

	let failing = service.source().gate("ab");
	service.issue("ab", 0);
	failing.send(Err(SourceError::Backend("disk gone".into()))).unwrap();
	assert!(service.settle().await);
	assert!(service.results().is_empty());

	let recovered = service.source().gate("abc");
	service.issue("abc", 0);
	recovered.send(Ok(Some(vec!["R3"]))).unwrap();
	service.settle().await;
	assert_eq!(service.results(), ["R3"]);
}

#[tokio::test]
async fn not_ready_keeps_previous_results() {
	let mut service = gated_service();
	let first = service.source().gate("a");
	service.issue("a", 0);
	first.send(Ok(Some(vec!["R1"]))).unwrap();
	service.settle().await;

	let second = service.source().gate("ab");
	service.issue("ab", 0);
	second.send(Ok(None)).unwrap();
	assert!(!service.settle().await);
	assert_eq!(service.results(), ["R1"]);
	assert!(!service.is_pending());
}

#[tokio::test]
async fn unresolved_request_does_not_block_new_issues() {
	let mut service = gated_service();
	let _never = service.source().gate("slow");
	service.issue("slow", 0);

	let fast = service.source().gate("fast");
	service.issue("fast", 0);
	fast.send(Ok(Some(vec!["fast"]))).unwrap();

	timeout(Duration::from_secs(2), service.settle()).await.expect("latest request should settle");
	assert_eq!(service.results(), ["fast"]);
	assert_eq!(service.source().calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn injected_stale_response_is_ignored() {
	let mut service = gated_service();
	let first = service.issue("a", 0);
	let _second = service.issue("ab", 0);

	assert!(!service.apply(QueryResponse {
		seq: first,
		outcome: QueryOutcome::Ready(vec!["R1"]),
	}));
	assert!(service.is_pending());
}

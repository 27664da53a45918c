use proptest::prelude::*;

use super::{Acceptance, QueryCoordinator, QueryOutcome, QueryResponse};

/// Must drop a completion whose request was superseded before it arrived.
///
/// * Enforced in: `QueryCoordinator::accept`
/// * Failure symptom: results for "a" flash over the list after the user typed "ab".
#[cfg_attr(test, test)]
pub(crate) fn test_superseded_response_is_stale_even_when_first() {
	let mut coordinator = QueryCoordinator::new();
	let first = coordinator.issue("a", 0);
	let second = coordinator.issue("ab", 0);

	assert_eq!(coordinator.accept(QueryResponse::ready(first.seq, vec!["R1"])), Acceptance::Stale);
	assert_eq!(coordinator.accept(QueryResponse::ready(second.seq, vec!["R2"])), Acceptance::Apply(vec!["R2"]));
}

/// Must never let an older completion overwrite a fresher accepted one.
///
/// * Enforced in: `QueryCoordinator::is_current`
/// * Failure symptom: slow response for "a" replaces the visible "ab" results.
#[cfg_attr(test, test)]
pub(crate) fn test_late_older_response_cannot_overwrite_newer() {
	let mut coordinator = QueryCoordinator::new();
	let first = coordinator.issue("a", 0);
	let second = coordinator.issue("ab", 0);

	assert_eq!(coordinator.accept(QueryResponse::ready(second.seq, vec!["R2"])), Acceptance::Apply(vec!["R2"]));
	assert_eq!(coordinator.accept(QueryResponse::ready(first.seq, vec!["R1"])), Acceptance::Stale);
	assert_eq!(coordinator.accepted(), second.seq);
}

/// Must accept each request at most once.
///
/// * Enforced in: `QueryCoordinator::is_current` (`seq > accepted`)
/// * Failure symptom: a duplicated delivery re-applies and clobbers local edits.
#[cfg_attr(test, test)]
pub(crate) fn test_duplicate_delivery_is_stale() {
	let mut coordinator = QueryCoordinator::new();
	let request = coordinator.issue("cat", 1);
	assert_eq!(coordinator.accept(QueryResponse::ready(request.seq, vec![1])), Acceptance::Apply(vec![1]));
	assert_eq!(coordinator.accept(QueryResponse::ready(request.seq, vec![2])), Acceptance::Stale);
	assert!(!coordinator.is_pending());
}

/// Must keep visible state when the current source reports "not ready".
///
/// * Enforced in: `QueryCoordinator::accept` (`QueryOutcome::NotReady`)
/// * Failure symptom: a valid result list blanks out while a backend warms up.
#[cfg_attr(test, test)]
pub(crate) fn test_not_ready_keeps_previous_result() {
	let mut coordinator = QueryCoordinator::new();
	let request = coordinator.issue("", 0);
	let outcome = coordinator.accept::<u32>(QueryResponse {
		seq: request.seq,
		outcome: QueryOutcome::NotReady,
	});
	assert_eq!(outcome, Acceptance::Keep);
}

/// Must turn a source failure into an empty result for that request only.
///
/// * Enforced in: `QueryCoordinator::accept` (`QueryOutcome::Failed`)
/// * Failure symptom: a rejected lookup leaves stale candidates on screen or wedges the coordinator.
#[cfg_attr(test, test)]
pub(crate) fn test_failure_applies_empty_and_allows_next_issue() {
	let mut coordinator = QueryCoordinator::new();
	let failed = coordinator.issue("x", 0);
	let outcome = coordinator.accept::<u32>(QueryResponse {
		seq: failed.seq,
		outcome: QueryOutcome::Failed("backend offline".into()),
	});
	assert_eq!(outcome, Acceptance::Apply(Vec::new()));

	let next = coordinator.issue("xy", 0);
	assert_eq!(coordinator.accept(QueryResponse::ready(next.seq, vec![7])), Acceptance::Apply(vec![7]));
}

proptest! {
	/// Must converge on the last issued request for any completion order.
	///
	/// * Enforced in: `QueryCoordinator::accept`
	/// * Failure symptom: final list depends on network timing instead of the last keystroke.
	#[test]
	fn test_last_issue_wins_for_any_completion_order(order in (1usize..12).prop_flat_map(|n| Just((0..n).collect::<Vec<_>>()).prop_shuffle())) {
		let mut coordinator = QueryCoordinator::new();
		let requests: Vec<_> = order.iter().map(|i| coordinator.issue(format!("q{i}"), 0)).collect();
		let last_seq = requests.last().map(|r| r.seq).unwrap_or_default();

		let mut visible: Option<u64> = None;
		for &index in &order {
			let seq = requests[index].seq;
			if let Acceptance::Apply(items) = coordinator.accept(QueryResponse::ready(seq, vec![seq])) {
				prop_assert_eq!(seq, last_seq);
				visible = items.first().copied();
			}
		}
		prop_assert_eq!(visible, Some(last_seq));
	}
}

use stickyard_primitives::SuggestionItem;

use super::{SyncOutcome, SyncedValue};

fn inbox() -> SyncedValue<String> {
	SyncedValue::new("Inbox".to_string())
}

/// Must adopt a present owner value, label included.
///
/// * Enforced in: `SyncedValue::reconcile`
/// * Failure symptom: the package box keeps showing the previous sticky's package.
#[cfg_attr(test, test)]
pub(crate) fn test_present_owner_value_is_adopted() {
	let mut value = inbox();
	assert_eq!(value.reconcile(Some(&"Cats".to_string())), SyncOutcome::Adopted);
	assert_eq!(value.current().value, "Cats");
	assert_eq!(value.current().label, "Cats");
}

/// Must fall back to the default and report it exactly once.
///
/// * Enforced in: `SyncedValue::reconcile` (`observed` key)
/// * Failure symptom: an owner without a value is notified on every render.
#[cfg_attr(test, test)]
pub(crate) fn test_absent_owner_value_falls_back_once() {
	let mut value = inbox();
	value.set_cached("Cats".to_string());

	assert_eq!(value.reconcile(None), SyncOutcome::FellBack("Inbox".to_string()));
	assert_eq!(value.current(), &SuggestionItem::plain("Inbox".to_string()));
	assert_eq!(value.current().label, "Inbox");

	assert_eq!(value.reconcile(None), SyncOutcome::Unchanged);
	assert_eq!(value.reconcile(Some(&String::new())), SyncOutcome::Unchanged, "blank counts as absent");
}

/// Must do nothing when the owner value already matches the cache.
///
/// * Enforced in: `SyncedValue::reconcile`
/// * Failure symptom: notify, mutate, notify cycle between editor and host.
#[cfg_attr(test, test)]
pub(crate) fn test_reconcile_is_idempotent() {
	let mut value = inbox();
	assert_eq!(value.reconcile(Some(&"Inbox".to_string())), SyncOutcome::Unchanged);

	assert_eq!(value.reconcile(Some(&"Cats".to_string())), SyncOutcome::Adopted);
	for _ in 0..3 {
		assert_eq!(value.reconcile(Some(&"Cats".to_string())), SyncOutcome::Unchanged);
	}
	assert_eq!(value.current().value, "Cats");
}

/// Must only react to owner changes, not to local selections.
///
/// * Enforced in: `SyncedValue::reconcile` (keyed on the owner value)
/// * Failure symptom: a read-only owner snaps the user's pick back on the next update.
#[cfg_attr(test, test)]
pub(crate) fn test_local_selection_survives_unchanged_owner_value() {
	let mut value = inbox();
	assert_eq!(value.reconcile(Some(&"Cats".to_string())), SyncOutcome::Adopted);
	value.set_cached("Dogs".to_string());
	assert_eq!(value.reconcile(Some(&"Cats".to_string())), SyncOutcome::Unchanged);
	assert_eq!(value.current().value, "Dogs");

	assert_eq!(value.reconcile(Some(&"Birds".to_string())), SyncOutcome::Adopted);
	assert_eq!(value.current().value, "Birds");
}

/// Must drop synthesized labels when caching a choice.
///
/// * Enforced in: `SyncedValue::set_cached`
/// * Failure symptom: the closed box reads `Create "cats"` after the package exists.
#[cfg_attr(test, test)]
pub(crate) fn test_cached_choice_uses_plain_label() {
	let mut value = inbox();
	let created = SuggestionItem::new("cats".to_string(), "Create \"cats\"");
	value.set_cached(created.value);
	assert_eq!(value.current().label, "cats");
}

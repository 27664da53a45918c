use std::cell::RefCell;
use std::rc::Rc;

use stickyard_primitives::Tag;

use super::{FormLockController, LockableField};
use crate::{ChangeCallback, RawInput};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
	Name(String),
	Package(String),
	Tags(Vec<Tag>),
}

type Log = Rc<RefCell<Vec<Event>>>;

fn record<T: 'static>(log: &Log, wrap: fn(T) -> Event) -> Option<ChangeCallback<T>> {
	let log = Rc::clone(log);
	Some(Box::new(move |value: T| log.borrow_mut().push(wrap(value))))
}

fn tag(text: &str) -> Tag {
	text.parse().unwrap()
}

fn controller(log: &Log) -> FormLockController {
	FormLockController::with_callbacks(
		record(log, Event::Name),
		record(log, Event::Package),
		record(log, Event::Tags),
		Some(RawInput::default()),
	)
}

/// Must leave locked fields alone and reset the others.
///
/// * Enforced in: `FormLockController::reset`, `LockableField::reset`
/// * Failure symptom: a pinned name is wiped between batch submissions.
#[cfg_attr(test, test)]
pub(crate) fn test_reset_respects_locks() {
	let log = Log::default();
	let mut form = controller(&log);
	form.name_mut().sync("Foo".into());
	form.name_mut().set_locked(true);
	form.package_mut().sync("Bar".into());
	form.tags_mut().sync(vec![tag("t:a"), tag("t:b"), tag("t:c")]);
	form.tags_mut().set_pinned(vec![tag("t:a")]);

	let report = form.reset();

	assert!(!report.name_cleared);
	assert!(report.package_cleared);
	assert_eq!(report.tags, [tag("t:a")]);
	assert_eq!(form.name().value(), "Foo");
	assert_eq!(form.package().value(), "Inbox");
	assert_eq!(
		*log.borrow(),
		[Event::Package("Inbox".into()), Event::Tags(vec![tag("t:a")])]
	);
}

/// Must clear raw inputs of unlocked fields and keep locked ones.
///
/// * Enforced in: `FormLockController::reset`
/// * Failure symptom: the uncontrolled name box still shows the old text after reset.
#[cfg_attr(test, test)]
pub(crate) fn test_reset_drives_raw_inputs() {
	let log = Log::default();
	let mut form = controller(&log);
	form.name_input().set_value("typed");
	let package_input = form.package_input().cloned().unwrap();
	package_input.set_value("Pack");
	form.package_mut().set_locked(true);

	form.reset();

	assert!(form.name_input().is_empty());
	assert_eq!(package_input.value(), "Pack");
}

/// Must fire an unlocked field's callback on reset even when already default.
///
/// * Enforced in: `LockableField::reset`
/// * Failure symptom: host keeps a stale value it never saw cleared.
#[cfg_attr(test, test)]
pub(crate) fn test_unlocked_reset_always_reports() {
	let calls = Rc::new(RefCell::new(0));
	let counter = Rc::clone(&calls);
	let mut field = LockableField::new(String::new(), Some(Box::new(move |_: String| *counter.borrow_mut() += 1)));
	assert!(field.reset());
	assert!(field.reset());
	assert_eq!(*calls.borrow(), 2);

	field.set_locked(true);
	assert!(!field.reset());
	assert_eq!(*calls.borrow(), 2);
}

/// Must treat a field without a listener as read-only to its owner.
///
/// * Enforced in: `LockableField::is_controlled`
/// * Failure symptom: editor offers edits the host will silently drop.
#[cfg_attr(test, test)]
pub(crate) fn test_listener_marks_field_controlled() {
	let field: LockableField<String> = LockableField::new(String::new(), None);
	assert!(!field.is_controlled());
	let log = Log::default();
	assert!(controller(&log).name().is_controlled());
}

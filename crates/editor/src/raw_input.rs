use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an uncontrolled text input.
///
/// The editor and its host hold clones of the same handle. Writes through
/// either clone are visible to both; no change callback is involved.
#[derive(Debug, Clone, Default)]
pub struct RawInput(Rc<RefCell<String>>);

impl RawInput {
	pub fn new(text: impl Into<String>) -> Self {
		Self(Rc::new(RefCell::new(text.into())))
	}

	pub fn value(&self) -> String {
		self.0.borrow().clone()
	}

	pub fn set_value(&self, text: impl Into<String>) {
		*self.0.borrow_mut() = text.into();
	}

	pub fn clear(&self) {
		self.0.borrow_mut().clear();
	}

	pub fn is_empty(&self) -> bool {
		self.0.borrow().is_empty()
	}

	/// Returns true when both handles point at the same input.
	#[cfg(test)]
	pub(crate) fn same_input(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

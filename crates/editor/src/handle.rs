use stickyard_primitives::Tag;

use crate::{RawInput, ResetReport};

/// Imperative surface a host dialog holds on an open editor.
///
/// Lock flags and pinned tags live in the editor; the host reads and writes
/// them through this handle and may trigger a reset at any time.
pub trait EditorHandle {
	fn lock_name(&self) -> bool;
	fn set_lock_name(&mut self, locked: bool);

	fn lock_package(&self) -> bool;
	fn set_lock_package(&mut self, locked: bool);

	fn locked_tags(&self) -> &[Tag];
	fn set_locked_tags(&mut self, tags: Vec<Tag>);

	/// Raw name input.
	fn name_input(&self) -> RawInput;

	/// Raw package input, for editors that expose one.
	fn package_input(&self) -> Option<RawInput>;

	fn reset(&mut self) -> ResetReport;
}

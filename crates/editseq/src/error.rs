//! Error types for edit sequence construction and algebra.

use thiserror::Error;

use crate::item::EditItem;

/// Errors reported by checked edit sequence operations.
///
/// Unchecked operators treat invalid input as a programming error instead;
/// these variants cover data that arrives from outside the engine and the
/// expected divergence of [`merge_sequence`](crate::merge_sequence).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
	/// A packed item asks to insert the invalid character.
	#[error("edit item at position {pos} inserts the invalid character")]
	MalformedItem {
		/// Position of the offending item.
		pos: usize,
	},

	/// A packed item carries a value that is not a Unicode scalar value.
	#[error("edit item at position {pos} carries invalid code point {value:#x}")]
	InvalidCodePoint {
		/// Position of the offending item.
		pos: usize,
		/// The raw character value.
		value: u32,
	},

	/// Items are not ordered by position, or a non-insertion shares its
	/// position with the item after it.
	#[error("edit sequence is out of order at index {index}")]
	OutOfOrder {
		/// Index of the first item that breaks the ordering.
		index: usize,
	},

	/// Two sequences disagree at a shared position.
	#[error("conflicting edits at position {pos}: {left:?} vs {right:?}")]
	Conflict {
		/// The shared position.
		pos: usize,
		/// Item from the left-hand sequence.
		left: EditItem,
		/// Item from the right-hand sequence.
		right: EditItem,
	},

	/// Generation was refused because the DP table would exceed the limit.
	#[error("input needs {cells} DP cells, limit is {limit}")]
	InputTooLarge {
		/// Cells the DP table would need.
		cells: usize,
		/// Configured limit.
		limit: usize,
	},
}

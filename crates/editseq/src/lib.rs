//! Minimal edit sequences between code-point strings, and the algebra over them.
//!
//! An edit sequence is an ordered list of insertions, deletions and
//! substitutions, each positioned in the coordinates of the original string.
//! [`Generator`] computes the shortest such sequence (or a longest common
//! subsequence) between two strings; the [`algebra`] operators apply,
//! compose, merge, intersect, subtract and squeeze sequences without going
//! back to the strings they came from.

/// Operators over edit sequences.
pub mod algebra;
/// Refcounted arena of backtrace chains.
pub mod backtrace;
/// Levenshtein distance.
pub mod distance;
/// Error type shared by the checked entry points.
pub mod error;
/// Diff and longest common subsequence generation.
pub mod generate;
/// Edit items and their packed storage form.
pub mod item;
/// Input bounds for checked generation.
pub mod limits;
/// Bridge to rope-backed text.
pub mod rope;
/// Owned, validated edit sequences.
pub mod seq;

pub use algebra::{
	apply_sequence, compose_sequence, except_sequence, intersect_sequence, merge_sequence,
	squeeze_sequence,
};
pub use backtrace::{BacktracePool, CellId};
pub use distance::distance;
pub use error::EditError;
pub use generate::{Generator, generate_lcs, generate_sequence};
pub use item::{EditItem, EditOp, INSERT_FLAG, INVALID_CHAR, RawEditItem};
pub use limits::Limits;
pub use seq::{EditSeq, is_valid, sequences_equal, validate};

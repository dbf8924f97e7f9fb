//! Operators over edit sequences.
//!
//! Every operator expects inputs that satisfy [`is_valid`]; this is checked
//! in debug builds only. Output is appended to the caller's buffer.
//! Operators never read back what they wrote.

use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::error::EditError;
use crate::item::{EditItem, EditOp};
use crate::seq::is_valid;

/// Appends the result of replaying `edits` over `base` to `dest`.
///
/// An item positioned past the end of `base` stops processing; it and every
/// later item are ignored. A substitution or deletion positioned exactly at
/// the end has nothing to act on and is a no-op.
pub fn apply_sequence(base: &[char], edits: &[EditItem], dest: &mut Vec<char>) {
	debug_assert!(is_valid(edits));
	let len = base.len();
	let mut last = 0;

	for (index, item) in edits.iter().enumerate() {
		let pos = item.pos;
		if pos > len {
			trace!(index, pos, len, "edit past end of base, truncating");
			break;
		}
		if pos > last {
			dest.extend_from_slice(&base[last..pos]);
		}
		match item.op {
			EditOp::Insert(ch) => {
				dest.push(ch);
				last = pos;
			}
			EditOp::Delete => last = pos + 1,
			EditOp::Substitute(ch) if pos != len => {
				dest.push(ch);
				last = pos + 1;
			}
			// Nothing to substitute at the end; the run before it is already out.
			EditOp::Substitute(_) => last = pos,
		}
	}

	if last < len {
		dest.extend_from_slice(&base[last..]);
	}
}

/// Orders the head of the first sequence against the head of the second,
/// with `delta` translating positions of `first` into the coordinate space
/// the second sequence applies to.
///
/// At the same slot, an insertion of the second sequence goes first unless
/// `first` deletes, and a deletion of `first` goes first unless `second`
/// inserts; the remaining pairs act on the same element and are combined.
fn compose_order(first: &EditItem, second: &EditItem, delta: isize) -> Ordering {
	let shifted = first.pos.saturating_add_signed(delta);
	match shifted.cmp(&second.pos) {
		Ordering::Equal => {}
		ord => return ord,
	}
	if second.is_insert() && !first.is_delete() {
		Ordering::Greater
	} else if first.is_delete() && !second.is_insert() {
		Ordering::Less
	} else {
		Ordering::Equal
	}
}

/// Combines two items acting on the same slot, or `None` if they cancel.
fn compose_items(first: &EditItem, second: &EditItem) -> Option<EditItem> {
	let op = match (first.op, second.op) {
		(EditOp::Insert(_), EditOp::Delete) => return None,
		(EditOp::Insert(_), EditOp::Insert(ch) | EditOp::Substitute(ch)) => EditOp::Insert(ch),
		(_, EditOp::Delete) => EditOp::Delete,
		(_, EditOp::Insert(ch) | EditOp::Substitute(ch)) => EditOp::Substitute(ch),
	};
	Some(EditItem { pos: first.pos, op })
}

/// Appends to `dest` the single sequence equivalent to applying `first`,
/// then `second`.
///
/// `second` is expressed against the output of `first`; its items are
/// shifted back into the coordinates of the original sequence.
pub fn compose_sequence(first: &[EditItem], second: &[EditItem], dest: &mut Vec<EditItem>) {
	debug_assert!(is_valid(first) && is_valid(second));
	let (mut i, mut j) = (0, 0);
	let mut delta: isize = 0;

	while i < first.len() && j < second.len() {
		let (a, b) = (&first[i], &second[j]);
		match compose_order(a, b, delta) {
			Ordering::Less => {
				dest.push(*a);
				delta += a.op.len_delta();
				i += 1;
			}
			Ordering::Greater => {
				dest.push(b.shifted(-delta));
				j += 1;
			}
			Ordering::Equal => {
				dest.extend(compose_items(a, b));
				delta += a.op.len_delta();
				i += 1;
				j += 1;
			}
		}
	}

	dest.extend_from_slice(&first[i..]);
	dest.extend(second[j..].iter().map(|item| item.shifted(-delta)));
}

/// Appends the union of two sequences over the same base to `dest`.
///
/// Items at different positions are interleaved; items sharing a position
/// must be identical and are emitted once.
///
/// # Errors
/// [`EditError::Conflict`] at the first position where the sequences
/// disagree. Whatever was appended to `dest` by then is unspecified and
/// should be discarded.
pub fn merge_sequence(
	edits1: &[EditItem],
	edits2: &[EditItem],
	dest: &mut Vec<EditItem>,
) -> Result<(), EditError> {
	debug_assert!(is_valid(edits1) && is_valid(edits2));
	let (mut i, mut j) = (0, 0);

	while i < edits1.len() && j < edits2.len() {
		let (a, b) = (&edits1[i], &edits2[j]);
		match a.pos.cmp(&b.pos) {
			Ordering::Less => {
				dest.push(*a);
				i += 1;
			}
			Ordering::Greater => {
				dest.push(*b);
				j += 1;
			}
			Ordering::Equal if a == b => {
				dest.push(*a);
				i += 1;
				j += 1;
			}
			Ordering::Equal => {
				debug!(pos = a.pos, left = ?a, right = ?b, "merge conflict");
				return Err(EditError::Conflict {
					pos: a.pos,
					left: *a,
					right: *b,
				});
			}
		}
	}

	dest.extend_from_slice(&edits1[i..]);
	dest.extend_from_slice(&edits2[j..]);
	Ok(())
}

/// Appends the items present, identically and at the same position, in
/// both sequences to `dest`.
pub fn intersect_sequence(edits1: &[EditItem], edits2: &[EditItem], dest: &mut Vec<EditItem>) {
	debug_assert!(is_valid(edits1) && is_valid(edits2));
	let (mut i, mut j) = (0, 0);

	while i < edits1.len() && j < edits2.len() {
		let (a, b) = (&edits1[i], &edits2[j]);
		match a.pos.cmp(&b.pos) {
			Ordering::Less => i += 1,
			Ordering::Greater => j += 1,
			Ordering::Equal => {
				if a == b {
					dest.push(*a);
				}
				i += 1;
				j += 1;
			}
		}
	}
}

/// Appends the items of `edits1` that `edits2` does not contain identically
/// at the same position to `dest`.
pub fn except_sequence(edits1: &[EditItem], edits2: &[EditItem], dest: &mut Vec<EditItem>) {
	debug_assert!(is_valid(edits1) && is_valid(edits2));
	let (mut i, mut j) = (0, 0);

	while i < edits1.len() && j < edits2.len() {
		let (a, b) = (&edits1[i], &edits2[j]);
		match a.pos.cmp(&b.pos) {
			Ordering::Less => {
				dest.push(*a);
				i += 1;
			}
			Ordering::Greater => j += 1,
			Ordering::Equal => {
				if a != b {
					dest.push(*a);
				}
				i += 1;
				j += 1;
			}
		}
	}

	dest.extend_from_slice(&edits1[i..]);
}

/// Appends `edits` to `dest` without the substitutions that would leave
/// `base` unchanged.
///
/// Stops at the first item positioned past the end of `base`, or at a
/// non-insertion positioned exactly at the end.
pub fn squeeze_sequence(edits: &[EditItem], base: &[char], dest: &mut Vec<EditItem>) {
	debug_assert!(is_valid(edits));
	let len = base.len();

	for (index, item) in edits.iter().enumerate() {
		if item.pos > len || (!item.is_insert() && item.pos == len) {
			trace!(index, pos = item.pos, len, "edit past end of base, truncating");
			return;
		}
		match item.op {
			EditOp::Substitute(ch) if base[item.pos] == ch => {}
			_ => dest.push(*item),
		}
	}
}

//! Edit sequences over rope-backed text.
//!
//! Positions are char indices, so every function here agrees with its
//! slice counterpart on the same text.

use ropey::{Rope, RopeSlice};
use tracing::trace;

use crate::distance::distance;
use crate::item::{EditItem, EditOp};
use crate::seq::{EditSeq, is_valid};

fn to_chars(text: RopeSlice) -> Vec<char> {
	text.chars().collect()
}

/// Edit distance between two texts, in chars.
pub fn distance_ropes(a: RopeSlice, b: RopeSlice) -> usize {
	distance(&to_chars(a), &to_chars(b))
}

/// The minimal edit sequence turning `source` into `target`.
pub fn diff_ropes(source: RopeSlice, target: RopeSlice) -> EditSeq {
	EditSeq::diff(&to_chars(source), &to_chars(target))
}

/// Replays `edits` over a copy of `base`.
pub fn apply_to_rope(edits: &[EditItem], base: RopeSlice) -> Rope {
	let mut doc = Rope::from(base);
	apply_in_place(edits, &mut doc);
	doc
}

/// Replays `edits` directly on `doc`.
///
/// Items are applied back to front so the positions of the ones still
/// pending stay valid. Truncation follows
/// [`apply_sequence`](crate::algebra::apply_sequence): the first item past
/// the end of `doc` and everything after it are ignored.
pub fn apply_in_place(edits: &[EditItem], doc: &mut Rope) {
	debug_assert!(is_valid(edits));
	let len = doc.len_chars();
	let cut = edits.iter().position(|item| item.pos > len).unwrap_or(edits.len());
	if cut < edits.len() {
		trace!(index = cut, pos = edits[cut].pos, len, "edit past end of rope, truncating");
	}

	for item in edits[..cut].iter().rev() {
		let pos = item.pos;
		match item.op {
			EditOp::Insert(ch) => doc.insert_char(pos, ch),
			EditOp::Delete | EditOp::Substitute(_) if pos == len => {}
			EditOp::Delete => doc.remove(pos..pos + 1),
			EditOp::Substitute(ch) => {
				doc.remove(pos..pos + 1);
				doc.insert_char(pos, ch);
			}
		}
	}
}

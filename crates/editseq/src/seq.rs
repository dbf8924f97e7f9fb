//! Validated edit sequences and the ordering invariant they satisfy.

use crate::algebra::{
	apply_sequence, compose_sequence, except_sequence, intersect_sequence, merge_sequence,
	squeeze_sequence,
};
use crate::error::EditError;
use crate::generate::Generator;
use crate::item::{EditItem, RawEditItem};

/// Checks the ordering invariant and reports the first index that breaks it.
///
/// Positions must be non-decreasing, and two items may only share a
/// position when the earlier one is an insertion.
pub fn validate(seq: &[EditItem]) -> Result<(), EditError> {
	for index in 1..seq.len() {
		let (prev, this) = (&seq[index - 1], &seq[index]);
		if this.pos < prev.pos || (this.same_position(prev) && !prev.is_insert()) {
			return Err(EditError::OutOfOrder { index });
		}
	}
	Ok(())
}

/// Returns true if `seq` may be passed to the sequence algebra.
#[inline]
pub fn is_valid(seq: &[EditItem]) -> bool {
	validate(seq).is_ok()
}

/// Item-wise identity of two edit sequences.
#[inline]
pub fn sequences_equal(seq1: &[EditItem], seq2: &[EditItem]) -> bool {
	seq1 == seq2
}

/// An owned edit sequence known to satisfy the ordering invariant.
///
/// Every operator of the sequence algebra is available as a method returning
/// a fresh sequence; the slice-based functions in [`crate::algebra`] append
/// into caller buffers instead.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<EditItem>", into = "Vec<EditItem>"))]
pub struct EditSeq {
	items: Vec<EditItem>,
}

impl EditSeq {
	/// Validates `items` and wraps them.
	pub fn new(items: Vec<EditItem>) -> Result<Self, EditError> {
		validate(&items)?;
		Ok(Self { items })
	}

	/// Wraps items produced by an operator whose output is valid by construction.
	pub(crate) fn from_valid(items: Vec<EditItem>) -> Self {
		debug_assert!(is_valid(&items));
		Self { items }
	}

	/// Decodes and validates a sequence in packed storage form.
	pub fn from_raw(raw: &[RawEditItem]) -> Result<Self, EditError> {
		let items = raw
			.iter()
			.map(|&item| EditItem::try_from(item))
			.collect::<Result<Vec<_>, _>>()?;
		Self::new(items)
	}

	/// Encodes this sequence in packed storage form.
	pub fn to_raw(&self) -> Vec<RawEditItem> {
		self.items.iter().map(EditItem::pack).collect()
	}

	/// The minimal edit sequence turning `source` into `target`.
	pub fn diff(source: &[char], target: &[char]) -> Self {
		Generator::new().diff(source, target)
	}

	/// Number of items.
	#[inline]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if there are no items.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// The items as a slice, for the slice-based operators.
	#[inline]
	pub fn items(&self) -> &[EditItem] {
		&self.items
	}

	/// Iterates the items in order.
	pub fn iter(&self) -> std::slice::Iter<'_, EditItem> {
		self.items.iter()
	}

	/// Unwraps the items.
	pub fn into_vec(self) -> Vec<EditItem> {
		self.items
	}

	/// Replays this sequence over `base`.
	///
	/// Items positioned past the end of `base` are dropped along with
	/// everything after them, so a sequence may be applied to a prefix of
	/// the string it was computed against.
	pub fn apply(&self, base: &[char]) -> Vec<char> {
		let mut out = Vec::with_capacity(base.len() + self.len());
		apply_sequence(base, &self.items, &mut out);
		out
	}

	/// The sequence equivalent to applying `self`, then `next`.
	pub fn compose(&self, next: &EditSeq) -> EditSeq {
		let mut out = Vec::with_capacity(self.len() + next.len());
		compose_sequence(&self.items, &next.items, &mut out);
		Self::from_valid(out)
	}

	/// Union of two sequences over the same base.
	///
	/// # Errors
	/// [`EditError::Conflict`] if the sequences disagree at some position.
	pub fn merge(&self, other: &EditSeq) -> Result<EditSeq, EditError> {
		let mut out = Vec::with_capacity(self.len() + other.len());
		merge_sequence(&self.items, &other.items, &mut out)?;
		Ok(Self::from_valid(out))
	}

	/// Items present, identically, in both sequences.
	pub fn intersect(&self, other: &EditSeq) -> EditSeq {
		let mut out = Vec::new();
		intersect_sequence(&self.items, &other.items, &mut out);
		Self::from_valid(out)
	}

	/// Items of `self` that `other` does not contain identically.
	pub fn except(&self, other: &EditSeq) -> EditSeq {
		let mut out = Vec::with_capacity(self.len());
		except_sequence(&self.items, &other.items, &mut out);
		Self::from_valid(out)
	}

	/// Drops substitutions that leave `base` unchanged.
	pub fn squeeze(&self, base: &[char]) -> EditSeq {
		let mut out = Vec::with_capacity(self.len());
		squeeze_sequence(&self.items, base, &mut out);
		Self::from_valid(out)
	}
}

impl TryFrom<Vec<EditItem>> for EditSeq {
	type Error = EditError;

	fn try_from(items: Vec<EditItem>) -> Result<Self, Self::Error> {
		Self::new(items)
	}
}

impl From<EditSeq> for Vec<EditItem> {
	fn from(seq: EditSeq) -> Self {
		seq.items
	}
}

impl AsRef<[EditItem]> for EditSeq {
	fn as_ref(&self) -> &[EditItem] {
		&self.items
	}
}

impl<'a> IntoIterator for &'a EditSeq {
	type Item = &'a EditItem;
	type IntoIter = std::slice::Iter<'a, EditItem>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.iter()
	}
}

impl IntoIterator for EditSeq {
	type Item = EditItem;
	type IntoIter = std::vec::IntoIter<EditItem>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::item::{INSERT_FLAG, INVALID_CHAR};

	#[test]
	fn test_empty_is_valid() {
		assert!(is_valid(&[]));
		assert!(EditSeq::new(Vec::new()).is_ok());
	}

	#[test]
	fn test_out_of_order_positions() {
		let seq = [EditItem::substitute(1, 'a'), EditItem::substitute(0, 'a')];
		assert_eq!(validate(&seq), Err(EditError::OutOfOrder { index: 1 }));
	}

	#[test]
	fn test_shared_position_needs_leading_insert() {
		let seq = [EditItem::substitute(1, 'a'), EditItem::substitute(1, 'a')];
		assert!(!is_valid(&seq));

		let seq = [EditItem::delete(1), EditItem::insert(1, 'a')];
		assert!(!is_valid(&seq));

		let seq = [
			EditItem::insert(1, 'a'),
			EditItem::insert(1, 'b'),
			EditItem::delete(1),
			EditItem::substitute(2, 'c'),
		];
		assert!(is_valid(&seq));
	}

	#[test]
	fn test_from_raw_validates() {
		let raw = [
			RawEditItem {
				pos: INSERT_FLAG,
				ch: 'x' as u32,
			},
			RawEditItem { pos: 3, ch: INVALID_CHAR },
		];
		let seq = EditSeq::from_raw(&raw).expect("valid raw sequence");
		assert_eq!(seq.items(), &[EditItem::insert(0, 'x'), EditItem::delete(3)]);
		assert_eq!(seq.to_raw(), raw);

		let reversed = [raw[1], raw[0]];
		assert_eq!(EditSeq::from_raw(&reversed), Err(EditError::OutOfOrder { index: 1 }));
	}

	#[test]
	fn test_sequences_equal() {
		let a = [EditItem::insert(2, 'a'), EditItem::delete(2)];
		let b = [EditItem::insert(2, 'a'), EditItem::delete(2)];
		let c = [EditItem::substitute(2, 'a'), EditItem::delete(3)];
		assert!(sequences_equal(&a, &b));
		assert!(!sequences_equal(&a, &c));
		assert!(!sequences_equal(&a, &a[..1]));
	}
}

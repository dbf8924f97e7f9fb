//! Edit items: single positional operations and their packed storage form.

use crate::error::EditError;

/// The reserved character value that marks a deletion in the packed form.
///
/// One past the largest valid code point, so it can never collide with text.
pub const INVALID_CHAR: u32 = 0x11_0000;

/// Bit of [`RawEditItem::pos`] that marks an insertion.
pub const INSERT_FLAG: usize = 1 << (usize::BITS - 1);

/// What an edit item does at its position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditOp {
	/// Emit a character without consuming an original element.
	Insert(char),
	/// Consume and drop one original element.
	Delete,
	/// Consume one original element and emit a character in its place.
	Substitute(char),
}

impl EditOp {
	/// Change in sequence length caused by this operation.
	#[inline]
	pub fn len_delta(self) -> isize {
		match self {
			EditOp::Insert(_) => 1,
			EditOp::Delete => -1,
			EditOp::Substitute(_) => 0,
		}
	}
}

/// A single positional edit.
///
/// `pos` is an index into the sequence the edit applies to. Insertions at
/// `pos` go before the element currently at `pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditItem {
	/// Position in the original sequence.
	pub pos: usize,
	/// The operation performed there.
	pub op: EditOp,
}

impl EditItem {
	/// Builds an item from its flag-and-character description.
	///
	/// `None` for `ch` means deletion, unless `insert` is set, in which case
	/// the combination is malformed.
	pub fn new(pos: usize, insert: bool, ch: Option<char>) -> Result<Self, EditError> {
		let op = match (insert, ch) {
			(true, Some(ch)) => EditOp::Insert(ch),
			(true, None) => return Err(EditError::MalformedItem { pos }),
			(false, Some(ch)) => EditOp::Substitute(ch),
			(false, None) => EditOp::Delete,
		};
		Ok(Self { pos, op })
	}

	/// Insertion of `ch` before position `pos`.
	#[inline]
	pub const fn insert(pos: usize, ch: char) -> Self {
		Self {
			pos,
			op: EditOp::Insert(ch),
		}
	}

	/// Deletion of the element at `pos`.
	#[inline]
	pub const fn delete(pos: usize) -> Self {
		Self { pos, op: EditOp::Delete }
	}

	/// Substitution of the element at `pos` with `ch`.
	#[inline]
	pub const fn substitute(pos: usize, ch: char) -> Self {
		Self {
			pos,
			op: EditOp::Substitute(ch),
		}
	}

	/// Returns true for insertions, the only items that consume no element.
	#[inline]
	pub fn is_insert(&self) -> bool {
		matches!(self.op, EditOp::Insert(_))
	}

	/// Returns true for deletions.
	#[inline]
	pub fn is_delete(&self) -> bool {
		matches!(self.op, EditOp::Delete)
	}

	/// The emitted character, or `None` for a deletion.
	#[inline]
	pub fn ch(&self) -> Option<char> {
		match self.op {
			EditOp::Insert(ch) | EditOp::Substitute(ch) => Some(ch),
			EditOp::Delete => None,
		}
	}

	/// Returns true if both items act at the same position, whatever they do there.
	#[inline]
	pub fn same_position(&self, other: &EditItem) -> bool {
		self.pos == other.pos
	}

	/// Returns the same operation moved by `delta` positions.
	///
	/// Saturates at zero; valid sequences never shift below it.
	#[inline]
	pub fn shifted(&self, delta: isize) -> Self {
		debug_assert!(self.pos.checked_add_signed(delta).is_some());
		Self {
			pos: self.pos.saturating_add_signed(delta),
			op: self.op,
		}
	}

	/// Encodes this item in the packed storage form.
	pub fn pack(&self) -> RawEditItem {
		debug_assert!(self.pos & INSERT_FLAG == 0, "position {} overlaps the insert flag", self.pos);
		let (flag, ch) = match self.op {
			EditOp::Insert(ch) => (INSERT_FLAG, ch as u32),
			EditOp::Delete => (0, INVALID_CHAR),
			EditOp::Substitute(ch) => (0, ch as u32),
		};
		RawEditItem { pos: self.pos | flag, ch }
	}
}

/// Packed storage form of an edit item.
///
/// The top bit of `pos` is the insertion flag and `ch == INVALID_CHAR`
/// marks a deletion. Decoding through [`EditItem::try_from`] rejects the
/// malformed combination of both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawEditItem {
	/// Position, with [`INSERT_FLAG`] set for insertions.
	pub pos: usize,
	/// Code point, or [`INVALID_CHAR`] for deletions.
	pub ch: u32,
}

impl RawEditItem {
	/// Position without the insertion flag.
	#[inline]
	pub fn position(&self) -> usize {
		self.pos & !INSERT_FLAG
	}

	/// Returns true if the insertion flag is set.
	#[inline]
	pub fn is_insert(&self) -> bool {
		self.pos & INSERT_FLAG != 0
	}

	/// Returns true if the character slot holds [`INVALID_CHAR`].
	#[inline]
	pub fn is_delete(&self) -> bool {
		self.ch == INVALID_CHAR
	}
}

impl From<EditItem> for RawEditItem {
	fn from(item: EditItem) -> Self {
		item.pack()
	}
}

impl TryFrom<RawEditItem> for EditItem {
	type Error = EditError;

	fn try_from(raw: RawEditItem) -> Result<Self, Self::Error> {
		let pos = raw.position();
		let ch = if raw.is_delete() {
			None
		} else {
			Some(char::from_u32(raw.ch).ok_or(EditError::InvalidCodePoint { pos, value: raw.ch })?)
		};
		EditItem::new(pos, raw.is_insert(), ch)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_new_rejects_inserting_nothing() {
		assert_eq!(EditItem::new(3, true, None), Err(EditError::MalformedItem { pos: 3 }));
		assert_eq!(EditItem::new(3, false, None), Ok(EditItem::delete(3)));
		assert_eq!(EditItem::new(3, true, Some('x')), Ok(EditItem::insert(3, 'x')));
		assert_eq!(EditItem::new(3, false, Some('x')), Ok(EditItem::substitute(3, 'x')));
	}

	#[test]
	fn test_shift_keeps_operation() {
		let item = EditItem::insert(10, 'q');
		assert_eq!(item.shifted(0), item);
		let moved = item.shifted(-4);
		assert_eq!(moved.pos, 6);
		assert_eq!(moved.op, item.op);
		assert_eq!(item.shifted(5).pos, 15);
	}

	#[test]
	fn test_packed_form() {
		let raw = EditItem::insert(7, 'a').pack();
		assert!(raw.is_insert());
		assert!(!raw.is_delete());
		assert_eq!(raw.position(), 7);
		assert_eq!(raw.ch, 'a' as u32);

		let raw = EditItem::delete(2).pack();
		assert!(!raw.is_insert());
		assert!(raw.is_delete());
		assert_eq!(raw.pos, 2);
	}

	#[test]
	fn test_unpack_checks_raw_items() {
		let malformed = RawEditItem {
			pos: 4 | INSERT_FLAG,
			ch: INVALID_CHAR,
		};
		assert_eq!(EditItem::try_from(malformed), Err(EditError::MalformedItem { pos: 4 }));

		let surrogate = RawEditItem { pos: 1, ch: 0xD800 };
		assert_eq!(
			EditItem::try_from(surrogate),
			Err(EditError::InvalidCodePoint { pos: 1, value: 0xD800 })
		);

		for item in [EditItem::insert(0, 'z'), EditItem::delete(9), EditItem::substitute(5, 'é')] {
			assert_eq!(EditItem::try_from(RawEditItem::from(item)), Ok(item));
		}
	}

	#[test]
	fn test_same_position_ignores_operation() {
		assert!(EditItem::insert(4, 'a').same_position(&EditItem::delete(4)));
		assert!(EditItem::substitute(4, 'a').same_position(&EditItem::substitute(4, 'b')));
		assert!(!EditItem::delete(4).same_position(&EditItem::delete(5)));
	}

	#[test]
	fn test_len_delta() {
		assert_eq!(EditOp::Insert('a').len_delta(), 1);
		assert_eq!(EditOp::Delete.len_delta(), -1);
		assert_eq!(EditOp::Substitute('a').len_delta(), 0);
	}
}

//! Minimal edit script and longest common subsequence generation.
//!
//! Both generators run the row-major DP of [`distance`](crate::distance) with
//! two live rows. Every slot additionally carries the head of a backtrace
//! chain in a [`BacktracePool`], so the final script can be read back
//! without keeping the whole table.

use tracing::{debug, trace};

use crate::backtrace::{BacktracePool, CellId};
use crate::error::EditError;
use crate::item::EditItem;
use crate::limits::Limits;
use crate::seq::EditSeq;

/// One DP slot: edit cost for diffs, match count for LCS, plus the chain
/// describing how it was reached.
#[derive(Debug, Clone, Copy, Default)]
struct Slot {
	score: usize,
	head: Option<CellId>,
}

/// Reusable diff and LCS generator.
///
/// Owns the backtrace pools used during generation. Pools are emptied after
/// every call but keep their capacity, so reusing one generator for many
/// calls avoids repeated arena growth. Generators share nothing with each
/// other and can run on separate threads.
#[derive(Debug, Default)]
pub struct Generator {
	edits: BacktracePool<EditItem>,
	matches: BacktracePool<char>,
	limits: Limits,
	last_peak: usize,
}

impl Generator {
	/// Creates a generator with unbounded [`Limits`].
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a generator whose checked entry points enforce `limits`.
	pub fn with_limits(limits: Limits) -> Self {
		Self {
			limits,
			..Self::default()
		}
	}

	/// Limits enforced by [`try_diff`](Self::try_diff) and [`try_lcs`](Self::try_lcs).
	pub fn limits(&self) -> &Limits {
		&self.limits
	}

	/// Peak number of live backtrace cells during the most recent call.
	pub fn last_peak_cells(&self) -> usize {
		self.last_peak
	}

	/// The minimal edit sequence turning `source` into `target`.
	pub fn diff(&mut self, source: &[char], target: &[char]) -> EditSeq {
		let mut out = Vec::new();
		self.diff_into(source, target, &mut out);
		EditSeq::from_valid(out)
	}

	/// Like [`diff`](Self::diff), refusing inputs beyond the configured limits.
	///
	/// # Errors
	/// [`EditError::InputTooLarge`] before any work is done.
	pub fn try_diff(&mut self, source: &[char], target: &[char]) -> Result<EditSeq, EditError> {
		self.check(source.len(), target.len())?;
		Ok(self.diff(source, target))
	}

	/// Appends the minimal edit sequence turning `source` into `target` to `dest`.
	///
	/// Ties between equally cheap transitions go to substitution (or a plain
	/// match). A tie between insertion and deletion goes to insertion when
	/// the source character orders before the target one, so swapping the
	/// inputs mirrors the choice. Identical inputs append nothing.
	pub fn diff_into(&mut self, source: &[char], target: &[char], dest: &mut Vec<EditItem>) {
		let pool = &mut self.edits;
		let width = target.len() + 1;
		let mut prev: Vec<Slot> = Vec::with_capacity(width);
		let mut this: Vec<Slot> = Vec::with_capacity(width);

		// Row zero: everything in `target` inserted in front of `source`.
		prev.push(Slot::default());
		for (j, &ch) in target.iter().enumerate() {
			let head = pool.push(EditItem::insert(0, ch), prev[j].head);
			prev.push(Slot {
				score: j + 1,
				head: Some(head),
			});
		}

		for (i, &src) in source.iter().enumerate() {
			let head = pool.push(EditItem::delete(i), prev[0].head);
			this.push(Slot {
				score: i + 1,
				head: Some(head),
			});

			for (j, &dst) in target.iter().enumerate() {
				let ins = this[j].score + 1;
				let del = prev[j + 1].score + 1;
				let subst = prev[j].score + usize::from(src != dst);

				let slot = if subst <= ins && subst <= del {
					let head = if src == dst {
						pool.retain(prev[j].head)
					} else {
						Some(pool.push(EditItem::substitute(i, dst), prev[j].head))
					};
					Slot { score: subst, head }
				} else if ins < del || (ins == del && src < dst) {
					Slot {
						score: ins,
						head: Some(pool.push(EditItem::insert(i + 1, dst), this[j].head)),
					}
				} else {
					Slot {
						score: del,
						head: Some(pool.push(EditItem::delete(i), prev[j + 1].head)),
					}
				};
				this.push(slot);
			}

			for slot in prev.drain(..) {
				pool.release(slot.head);
			}
			std::mem::swap(&mut prev, &mut this);
		}

		let last = prev[target.len()];
		let start = dest.len();
		dest.reserve(last.score);
		dest.extend(pool.chain(last.head).copied());
		// Chains run from the last edit back to the first.
		dest[start..].reverse();
		debug_assert_eq!(dest.len() - start, last.score);

		self.last_peak = pool.peak();
		pool.clear();
		trace!(
			source_len = source.len(),
			target_len = target.len(),
			edits = last.score,
			peak_cells = self.last_peak,
			"generated edit sequence"
		);
	}

	/// A longest common subsequence of `a` and `b`.
	pub fn lcs(&mut self, a: &[char], b: &[char]) -> Vec<char> {
		let mut out = Vec::new();
		self.lcs_into(a, b, &mut out);
		out
	}

	/// Like [`lcs`](Self::lcs), refusing inputs beyond the configured limits.
	///
	/// # Errors
	/// [`EditError::InputTooLarge`] before any work is done.
	pub fn try_lcs(&mut self, a: &[char], b: &[char]) -> Result<Vec<char>, EditError> {
		self.check(a.len(), b.len())?;
		Ok(self.lcs(a, b))
	}

	/// Appends a longest common subsequence of `a` and `b` to `dest`.
	///
	/// When skipping an element of either input leads to equally long
	/// results, the element of `a` is skipped.
	pub fn lcs_into(&mut self, a: &[char], b: &[char], dest: &mut Vec<char>) {
		let pool = &mut self.matches;
		let mut prev = vec![Slot::default(); b.len() + 1];
		let mut this: Vec<Slot> = Vec::with_capacity(b.len() + 1);

		for &x in a {
			this.push(Slot::default());
			for (j, &y) in b.iter().enumerate() {
				let slot = if x == y {
					Slot {
						score: prev[j].score + 1,
						head: Some(pool.push(x, prev[j].head)),
					}
				} else if this[j].score > prev[j + 1].score {
					Slot {
						score: this[j].score,
						head: pool.retain(this[j].head),
					}
				} else {
					Slot {
						score: prev[j + 1].score,
						head: pool.retain(prev[j + 1].head),
					}
				};
				this.push(slot);
			}

			for slot in prev.drain(..) {
				pool.release(slot.head);
			}
			std::mem::swap(&mut prev, &mut this);
		}

		let last = prev[b.len()];
		let start = dest.len();
		dest.reserve(last.score);
		dest.extend(pool.chain(last.head).copied());
		dest[start..].reverse();
		debug_assert_eq!(dest.len() - start, last.score);

		self.last_peak = pool.peak();
		pool.clear();
		trace!(
			a_len = a.len(),
			b_len = b.len(),
			lcs_len = last.score,
			peak_cells = self.last_peak,
			"generated longest common subsequence"
		);
	}

	fn check(&self, len1: usize, len2: usize) -> Result<(), EditError> {
		self.limits
			.check(len1, len2)
			.inspect_err(|err| debug!(%err, "refusing generation"))
	}
}

/// Appends the minimal edit sequence turning `source` into `target` to `dest`.
pub fn generate_sequence(source: &[char], target: &[char], dest: &mut Vec<EditItem>) {
	Generator::new().diff_into(source, target, dest);
}

/// Appends a longest common subsequence of `a` and `b` to `dest`.
pub fn generate_lcs(a: &[char], b: &[char], dest: &mut Vec<char>) {
	Generator::new().lcs_into(a, b, dest);
}

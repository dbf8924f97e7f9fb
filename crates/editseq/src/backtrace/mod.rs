//! Reference-counted backtrace chains for script reconstruction.
//!
//! Each DP cell of the generator holds the head of a chain describing the
//! best script found so far for its prefix pair. Neighbouring cells very
//! often extend the same predecessor, so chains share suffixes: a cell is
//! counted once for every row slot holding it and once for every cell
//! linked onto it. When the count drops to zero the cell goes back to the
//! arena and its parent loses an owner in turn.
//!
//! Cells live in a [`Slab`]; a freed slot is handed out again by the next
//! [`BacktracePool::acquire`], so the arena never grows beyond the peak
//! number of simultaneously live cells.

use slab::Slab;

/// Handle to a cell in a [`BacktracePool`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellId(usize);

#[derive(Debug)]
struct Cell<T> {
	refs: usize,
	value: T,
	chain: Option<CellId>,
}

/// Arena of shared, singly-linked backtrace cells.
#[derive(Debug)]
pub struct BacktracePool<T> {
	cells: Slab<Cell<T>>,
	peak: usize,
}

impl<T> Default for BacktracePool<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> BacktracePool<T> {
	/// Creates an empty pool.
	pub fn new() -> Self {
		Self {
			cells: Slab::new(),
			peak: 0,
		}
	}

	/// Creates a pool that can hold `capacity` live cells before reallocating.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			cells: Slab::with_capacity(capacity),
			peak: 0,
		}
	}

	/// Allocates an unlinked cell holding `value`, owned once by the caller.
	///
	/// Reuses a released slot when one is available.
	pub fn acquire(&mut self, value: T) -> CellId {
		let id = CellId(self.cells.insert(Cell {
			refs: 1,
			value,
			chain: None,
		}));
		self.peak = self.peak.max(self.cells.len());
		id
	}

	/// Adds an owner to `cell`, returning it for convenience.
	pub fn retain(&mut self, cell: Option<CellId>) -> Option<CellId> {
		if let Some(id) = cell {
			self.cells[id.0].refs += 1;
		}
		cell
	}

	/// Attaches `child` as the chain of `parent`, adding an owner to `child`.
	///
	/// # Panics
	/// If `parent` is already linked.
	pub fn link(&mut self, parent: CellId, child: Option<CellId>) {
		assert!(
			self.cells[parent.0].chain.is_none(),
			"backtrace cell {parent:?} is already linked"
		);
		self.retain(child);
		self.cells[parent.0].chain = child;
	}

	/// Allocates a cell holding `value` and links it onto `chain`.
	pub fn push(&mut self, value: T, chain: Option<CellId>) -> CellId {
		let id = self.acquire(value);
		self.link(id, chain);
		id
	}

	/// Drops one owner of `cell`.
	///
	/// A cell whose last owner goes away is freed, and the release moves on
	/// to its parent.
	pub fn release(&mut self, mut cell: Option<CellId>) {
		while let Some(id) = cell {
			let entry = &mut self.cells[id.0];
			assert!(entry.refs > 0, "backtrace cell {id:?} released without an owner");
			entry.refs -= 1;
			if entry.refs > 0 {
				return;
			}
			cell = self.cells.remove(id.0).chain;
		}
	}

	/// Iterates the values of the chain starting at `head`, newest first.
	pub fn chain(&self, head: Option<CellId>) -> Chain<'_, T> {
		Chain { pool: self, next: head }
	}

	/// Number of cells currently live.
	#[inline]
	pub fn live(&self) -> usize {
		self.cells.len()
	}

	/// Largest number of simultaneously live cells since the last [`clear`](Self::clear).
	#[inline]
	pub fn peak(&self) -> usize {
		self.peak
	}

	/// Frees every cell at once, keeping the arena's capacity.
	pub fn clear(&mut self) {
		self.cells.clear();
		self.peak = 0;
	}
}

/// Iterator over a backtrace chain, from its head towards the root.
pub struct Chain<'a, T> {
	pool: &'a BacktracePool<T>,
	next: Option<CellId>,
}

impl<'a, T> Iterator for Chain<'a, T> {
	type Item = &'a T;

	fn next(&mut self) -> Option<Self::Item> {
		let pool = self.pool;
		let cell = &pool.cells[self.next?.0];
		self.next = cell.chain;
		Some(&cell.value)
	}
}

#[cfg(test)]
mod tests;

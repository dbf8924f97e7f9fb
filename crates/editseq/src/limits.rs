//! Input bounds for checked generation.

use crate::error::EditError;

/// Bounds applied by [`Generator::try_diff`](crate::Generator::try_diff) and
/// [`Generator::try_lcs`](crate::Generator::try_lcs).
///
/// Generation cannot be interrupted once started, so callers that need to
/// bound its cost do so up front by capping the DP table size.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Limits {
	/// Largest accepted `(len1 + 1) * (len2 + 1)`; `None` accepts anything.
	pub max_cells: Option<usize>,
}

impl Limits {
	/// Accepts inputs of any size.
	pub const fn unbounded() -> Self {
		Self { max_cells: None }
	}

	/// Refuses inputs whose DP table exceeds `max_cells` cells.
	pub const fn with_max_cells(max_cells: usize) -> Self {
		Self {
			max_cells: Some(max_cells),
		}
	}

	/// Number of DP cells needed to relate inputs of the given lengths.
	///
	/// Saturates instead of overflowing.
	pub fn cells_for(len1: usize, len2: usize) -> usize {
		len1.saturating_add(1).saturating_mul(len2.saturating_add(1))
	}

	/// Checks whether inputs of the given lengths fit.
	///
	/// # Errors
	/// [`EditError::InputTooLarge`] if the table would exceed `max_cells`.
	pub fn check(&self, len1: usize, len2: usize) -> Result<(), EditError> {
		let Some(limit) = self.max_cells else {
			return Ok(());
		};
		let cells = Self::cells_for(len1, len2);
		if cells > limit {
			return Err(EditError::InputTooLarge { cells, limit });
		}
		Ok(())
	}
}

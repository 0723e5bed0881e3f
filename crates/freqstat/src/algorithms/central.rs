//! Central tendency for discrete and grouped data.
//!
//! ## Purpose
//!
//! This module locates the median and modal rows of a frequency table and
//! evaluates the grouped-data interpolation formulas:
//!
//! * median `= L + ((N/2 − cf_before) / f) · h`
//! * mode `= L + ((f_m − f_prev) / (2f_m − f_prev − f_next)) · h`
//!
//! ## Design notes
//!
//! * **First match**: The median class is the first row whose cumulative
//!   frequency reaches `N/2`; the modal class is the first row of maximal
//!   frequency. Later ties are never selected.
//! * **Missing neighbours**: A modal class at either end of the table uses a
//!   neighbour frequency of zero.
//!
//! ## Invariants
//!
//! * Selection works on input order; the table is assumed sorted by class.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DomainError;
use crate::primitives::interval::ClassInterval;

// ============================================================================
// Class Selection
// ============================================================================

/// Index of the first row whose cumulative frequency reaches `total / 2`.
///
/// Falls back to the last row, which always satisfies the rule when `total > 0`.
pub fn median_index<T: Float>(cf: &[T], total: T) -> usize {
    let half = total / (T::one() + T::one());
    cf.iter()
        .position(|&c| c >= half)
        .unwrap_or_else(|| cf.len().saturating_sub(1))
}

/// Index of the first row with the maximal frequency.
pub fn modal_index<T: Float>(f: &[T]) -> usize {
    let mut best = 0;
    for (i, &fi) in f.iter().enumerate() {
        if fi > f[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Grouped Estimates
// ============================================================================

/// An interpolated grouped-data statistic and the class it was read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupedEstimate<T> {
    /// Row index of the selected class.
    pub class_index: usize,

    /// Lower bound `L` of the selected class.
    pub lower: T,

    /// Interpolated value.
    pub value: T,
}

/// Grouped median by linear interpolation inside the median class.
pub fn grouped_median<T: Float>(
    intervals: &[ClassInterval<T>],
    f: &[T],
    cf: &[T],
    total: T,
) -> GroupedEstimate<T> {
    let idx = median_index(cf, total);
    let class = intervals[idx];
    let cf_before = if idx == 0 { T::zero() } else { cf[idx - 1] };
    let half = total / (T::one() + T::one());

    GroupedEstimate {
        class_index: idx,
        lower: class.low,
        value: class.low + ((half - cf_before) / f[idx]) * class.width(),
    }
}

/// Grouped mode from the modal class and its immediate neighbours.
pub fn grouped_mode<T: Float>(
    intervals: &[ClassInterval<T>],
    f: &[T],
) -> Result<GroupedEstimate<T>, DomainError> {
    let idx = modal_index(f);
    let class = intervals[idx];
    let f_m = f[idx];
    let f_prev = if idx == 0 { T::zero() } else { f[idx - 1] };
    let f_next = f.get(idx + 1).copied().unwrap_or_else(T::zero);

    let denominator = f_m + f_m - f_prev - f_next;
    if denominator == T::zero() {
        return Err(DomainError::UndefinedStatistic("mode"));
    }

    Ok(GroupedEstimate {
        class_index: idx,
        lower: class.low,
        value: class.low + ((f_m - f_prev) / denominator) * class.width(),
    })
}

//! Applicability checks run before any procedure.
//!
//! ## Purpose
//!
//! The entry form already guarantees well-formed rows; the engine still
//! re-checks the preconditions it depends on so that a bad table yields a
//! [`DomainError`] instead of NaN-filled output.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Ordering**: Checks run from cheap (row count) to per-row.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, merge, or repair rows.
//! * Zero-frequency rows are allowed; only an all-zero table is rejected.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::problem::ProblemKind;
use crate::math::numeric::to_f64;
use crate::primitives::errors::DomainError;
use crate::primitives::interval::Row;

/// Validation utility for engine input.
pub struct Validator;

impl Validator {
    /// Validate rows against the preconditions of `kind`.
    pub fn validate_rows<T: Float>(kind: ProblemKind, rows: &[Row<T>]) -> Result<(), DomainError> {
        // Check 1: Non-empty table
        if rows.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        // Check 2: Enough rows for the procedure
        Self::validate_row_count(rows.len(), kind.min_rows())?;

        // Check 3: Well-formed intervals
        for (i, row) in rows.iter().enumerate() {
            Self::validate_interval(i, row, kind.requires_ranges())?;
        }

        // Check 4: Positive total frequency
        if rows.iter().all(|row| row.frequency == 0) {
            return Err(DomainError::ZeroTotalFrequency);
        }

        Ok(())
    }

    /// Validate the number of rows against a minimum.
    pub fn validate_row_count(got: usize, min: usize) -> Result<(), DomainError> {
        if got < min {
            return Err(DomainError::TooFewRows { got, min });
        }
        Ok(())
    }

    /// Validate one row's interval bounds.
    pub fn validate_interval<T: Float>(
        index: usize,
        row: &Row<T>,
        require_range: bool,
    ) -> Result<(), DomainError> {
        let (low, high) = (row.interval.low, row.interval.high);

        if !low.is_finite() || !high.is_finite() {
            return Err(DomainError::InvalidNumericValue(format!(
                "row[{}]={}-{}",
                index,
                to_f64(low),
                to_f64(high)
            )));
        }

        if low > high || (require_range && low == high) {
            return Err(DomainError::InvalidInterval {
                row: index,
                low: to_f64(low),
                high: to_f64(high),
            });
        }

        Ok(())
    }
}

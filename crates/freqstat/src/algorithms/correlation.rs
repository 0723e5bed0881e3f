//! Pearson correlation and least-squares regression lines.
//!
//! ## Purpose
//!
//! This module computes, from the paired sums of `(x, y)`:
//!
//! * `r = (nΣxy − ΣxΣy) / sqrt((nΣx² − (Σx)²)(nΣy² − (Σy)²))`
//! * Y on X: `y = a + b·x`, `b = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)`, `a = ȳ − b·x̄`
//! * X on Y: `x = a' + b'·y`, `b' = (nΣxy − ΣxΣy) / (nΣy² − (Σy)²)`, `a' = x̄ − b'·ȳ`
//!
//! ## Design notes
//!
//! * **Unweighted pairs**: `n` is the number of rows; the frequency column is
//!   the `y` series itself, not a weight.
//! * **Degenerate spread**: A zero `nΣx² − (Σx)²` or `nΣy² − (Σy)²` is
//!   reported as [`DomainError::ZeroVariance`]. The spreads come from centred
//!   co-moments, so identical values give an exact zero and no scale-relative
//!   tolerance is needed.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::sums::PairedSums;
use crate::primitives::errors::DomainError;

// ============================================================================
// Linear Model
// ============================================================================

/// A straight line `response = intercept + slope · predictor`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T> {
    /// Intercept `a`.
    pub intercept: T,

    /// Slope `b`.
    pub slope: T,
}

impl<T: Float> LinearFit<T> {
    /// Evaluate the line at `v`.
    #[inline]
    pub fn predict(&self, v: T) -> T {
        self.intercept + self.slope * v
    }
}

// ============================================================================
// Spread Checks
// ============================================================================

fn checked_sxx<T: Float>(sums: &PairedSums<T>) -> Result<T, DomainError> {
    let sxx = sums.sxx();
    if sxx.is_nan() || sxx <= T::zero() {
        return Err(DomainError::ZeroVariance { variable: "x" });
    }
    Ok(sxx)
}

fn checked_syy<T: Float>(sums: &PairedSums<T>) -> Result<T, DomainError> {
    let syy = sums.syy();
    if syy.is_nan() || syy <= T::zero() {
        return Err(DomainError::ZeroVariance { variable: "y" });
    }
    Ok(syy)
}

// ============================================================================
// Correlation and Regression
// ============================================================================

/// Pearson product-moment correlation coefficient.
pub fn pearson<T: Float>(sums: &PairedSums<T>) -> Result<T, DomainError> {
    let sxx = checked_sxx(sums)?;
    let syy = checked_syy(sums)?;
    let r = sums.sxy() / (sxx * syy).sqrt();

    // Rounding can push a perfect fit marginally outside [-1, 1]
    Ok(r.max(-T::one()).min(T::one()))
}

/// Least-squares regression of `y` on `x`.
pub fn regress_y_on_x<T: Float>(sums: &PairedSums<T>) -> Result<LinearFit<T>, DomainError> {
    let slope = sums.sxy() / checked_sxx(sums)?;
    Ok(LinearFit {
        intercept: sums.mean_y() - slope * sums.mean_x(),
        slope,
    })
}

/// Least-squares regression of `x` on `y`.
pub fn regress_x_on_y<T: Float>(sums: &PairedSums<T>) -> Result<LinearFit<T>, DomainError> {
    let slope = sums.sxy() / checked_syy(sums)?;
    Ok(LinearFit {
        intercept: sums.mean_x() - slope * sums.mean_y(),
        slope,
    })
}

//! Running sums for frequency-weighted and paired statistics.
//!
//! ## Purpose
//!
//! This module provides the accumulators every procedure reduces its
//! calculation table with: frequency-weighted sums over `(x, f)` and
//! unweighted paired sums over `(x, y)` for least squares.
//!
//! ## Design notes
//!
//! * **Single pass**: Each accumulator is filled by one loop over the rows.
//! * **Normal-equation form**: Paired sums expose `nΣx² − (Σx)²` and friends
//!   directly, the quantities the textbook formulas are written in. They are
//!   evaluated from centred co-moments, never by subtracting the raw sums.
//!
//! ## Invariants
//!
//! * Accumulators start at zero and only grow by `push`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::numeric::to_float;

// ============================================================================
// Frequency-Weighted Moments
// ============================================================================

/// Frequency-weighted mean `Σ f·x / Σ f`.
///
/// Returns NaN when the total frequency is zero.
pub fn weighted_mean<T: Float>(x: &[T], f: &[T]) -> T {
    let mut sum_f = T::zero();
    let mut sum_fx = T::zero();
    for (&xi, &fi) in x.iter().zip(f) {
        sum_f = sum_f + fi;
        sum_fx = sum_fx + fi * xi;
    }
    if sum_f > T::zero() {
        sum_fx / sum_f
    } else {
        T::nan()
    }
}

/// Frequency-weighted central moment `Σ f·(x − center)^k / Σ f`.
pub fn central_moment<T: Float>(x: &[T], f: &[T], center: T, k: i32) -> T {
    let mut sum_f = T::zero();
    let mut sum = T::zero();
    for (&xi, &fi) in x.iter().zip(f) {
        sum_f = sum_f + fi;
        sum = sum + fi * (xi - center).powi(k);
    }
    if sum_f > T::zero() {
        sum / sum_f
    } else {
        T::nan()
    }
}

/// Frequency-weighted mean absolute deviation `Σ f·|x − center| / Σ f`.
pub fn mean_absolute_deviation<T: Float>(x: &[T], f: &[T], center: T) -> T {
    let mut sum_f = T::zero();
    let mut sum = T::zero();
    for (&xi, &fi) in x.iter().zip(f) {
        sum_f = sum_f + fi;
        sum = sum + fi * (xi - center).abs();
    }
    if sum_f > T::zero() {
        sum / sum_f
    } else {
        T::nan()
    }
}

// ============================================================================
// Paired Sums
// ============================================================================

/// Unweighted sums over `(x, y)` pairs for correlation and least squares.
///
/// Alongside the raw sums it keeps running means and centred co-moments
/// (`Σ(x − x̄)²`, `Σ(y − ȳ)²`, `Σ(x − x̄)(y − ȳ)`), updated one pair at a
/// time. Identical values therefore give an exactly zero spread, and large
/// offsets such as year classes do not cancel catastrophically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedSums<T> {
    /// Number of pairs.
    pub n: usize,
    /// Σx
    pub sum_x: T,
    /// Σy
    pub sum_y: T,
    /// Σxy
    pub sum_xy: T,
    /// Σx²
    pub sum_xx: T,
    /// Σy²
    pub sum_yy: T,
    mean_x: T,
    mean_y: T,
    centred_xx: T,
    centred_yy: T,
    centred_xy: T,
}

impl<T: Float> Default for PairedSums<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> PairedSums<T> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self {
            n: 0,
            sum_x: T::zero(),
            sum_y: T::zero(),
            sum_xy: T::zero(),
            sum_xx: T::zero(),
            sum_yy: T::zero(),
            mean_x: T::zero(),
            mean_y: T::zero(),
            centred_xx: T::zero(),
            centred_yy: T::zero(),
            centred_xy: T::zero(),
        }
    }

    /// Accumulate all pairs of two equally long slices.
    pub fn from_slices(x: &[T], y: &[T]) -> Self {
        let mut sums = Self::new();
        for (&xi, &yi) in x.iter().zip(y) {
            sums.push(xi, yi);
        }
        sums
    }

    /// Add one pair.
    #[inline]
    pub fn push(&mut self, x: T, y: T) {
        self.n += 1;
        self.sum_x = self.sum_x + x;
        self.sum_y = self.sum_y + y;
        self.sum_xy = self.sum_xy + x * y;
        self.sum_xx = self.sum_xx + x * x;
        self.sum_yy = self.sum_yy + y * y;

        // Welford update of the means and co-moments
        let n = self.count();
        let dx = x - self.mean_x;
        let dy = y - self.mean_y;
        self.mean_x = self.mean_x + dx / n;
        self.mean_y = self.mean_y + dy / n;
        self.centred_xx = self.centred_xx + dx * (x - self.mean_x);
        self.centred_yy = self.centred_yy + dy * (y - self.mean_y);
        self.centred_xy = self.centred_xy + dx * (y - self.mean_y);
    }

    /// `n` as a float.
    #[inline]
    pub fn count(&self) -> T {
        to_float(self.n)
    }

    /// x̄
    pub fn mean_x(&self) -> T {
        self.mean_x
    }

    /// ȳ
    pub fn mean_y(&self) -> T {
        self.mean_y
    }

    /// `nΣx² − (Σx)²`, evaluated as `n·Σ(x − x̄)²`.
    pub fn sxx(&self) -> T {
        self.count() * self.centred_xx
    }

    /// `nΣy² − (Σy)²`, evaluated as `n·Σ(y − ȳ)²`.
    pub fn syy(&self) -> T {
        self.count() * self.centred_yy
    }

    /// `nΣxy − ΣxΣy`, evaluated as `n·Σ(x − x̄)(y − ȳ)`.
    pub fn sxy(&self) -> T {
        self.count() * self.centred_xy
    }
}

//! Mean deviation and standard deviation.
//!
//! Both are population statistics over the frequency table: every
//! denominator is `N = Σf`, never `N − 1`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::sums::{central_moment, mean_absolute_deviation, weighted_mean};

/// Location and spread of a frequency table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispersion<T> {
    /// `Σ f·x / N`
    pub mean: T,

    /// `Σ f·|x − mean| / N`
    pub mean_deviation: T,

    /// `Σ f·(x − mean)² / N`
    pub variance: T,

    /// `sqrt(variance)`
    pub standard_deviation: T,
}

impl<T: Float> Dispersion<T> {
    /// Compute mean, mean deviation, and population variance from points and frequencies.
    pub fn compute(x: &[T], f: &[T]) -> Self {
        let mean = weighted_mean(x, f);
        let variance = central_moment(x, f, mean, 2);

        Self {
            mean,
            mean_deviation: mean_absolute_deviation(x, f, mean),
            variance,
            standard_deviation: variance.sqrt(),
        }
    }
}

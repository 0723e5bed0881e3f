//! Skewness and kurtosis from standardized central moments.
//!
//! ## Purpose
//!
//! Computes `skewness = m₃ / σ³` and `kurtosis = m₄ / σ⁴`, where
//! `m_k = Σ f·(x − mean)^k / N` and `σ = sqrt(m₂)`.
//!
//! ## Invariants
//!
//! * Kurtosis is raw (a normal distribution gives 3), not excess.
//! * A standard deviation that vanishes relative to the data scale is an
//!   error, never a division by (near) zero.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::numeric::is_negligible;
use crate::math::sums::{central_moment, weighted_mean};
use crate::primitives::errors::DomainError;

/// Shape statistics of a frequency table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape<T> {
    /// Weighted mean.
    pub mean: T,
    /// Second central moment (population variance).
    pub variance: T,
    /// Population standard deviation.
    pub standard_deviation: T,
    /// Third central moment.
    pub third_moment: T,
    /// Fourth central moment.
    pub fourth_moment: T,
    /// `m₃ / σ³`
    pub skewness: T,
    /// `m₄ / σ⁴`
    pub kurtosis: T,
}

impl<T: Float> Shape<T> {
    /// Compute moments up to the fourth, failing when all mass sits on one point.
    pub fn compute(x: &[T], f: &[T]) -> Result<Self, DomainError> {
        let mean = weighted_mean(x, f);
        let variance = central_moment(x, f, mean, 2);
        let sd = variance.sqrt();

        let spread = x.iter().fold(T::zero(), |acc, &xi| acc.max(xi.abs()));
        if sd.is_nan() || sd <= T::zero() || is_negligible(sd, spread) {
            return Err(DomainError::ZeroStandardDeviation);
        }

        let third_moment = central_moment(x, f, mean, 3);
        let fourth_moment = central_moment(x, f, mean, 4);

        Ok(Self {
            mean,
            variance,
            standard_deviation: sd,
            third_moment,
            fourth_moment,
            skewness: third_moment / sd.powi(3),
            kurtosis: fourth_moment / (variance * variance),
        })
    }
}

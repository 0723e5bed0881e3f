//! Least-squares curve fitting.
//!
//! ## Purpose
//!
//! This module fits four models to `(x, y)` pairs by least squares:
//!
//! * straight line `y = a + b·x`
//! * parabola `y = a + b·x + c·x²` (3×3 normal equations)
//! * exponential `y = a·e^(b·x)`, linearized as `ln y = ln a + b·x`
//! * power `y = a·x^b`, linearized as `ln y = ln a + b·ln x`
//!
//! ## Design notes
//!
//! * **Shared solver**: The log-linearized fits reuse the straight-line
//!   normal equations on transformed data.
//! * **Standardized parabola**: The quadratic normal equations are built on
//!   `(x − x̄) / s` so that classes far from zero (years, large codes) stay
//!   well-conditioned; coefficients are mapped back to `x` afterwards.
//! * **Evaluation**: Every model implements [`CurveModel`] so the engine can
//!   evaluate it at the input points without knowing its form.
//!
//! ## Invariants
//!
//! * Logarithms are only taken of strictly positive values; anything else is
//!   reported with its row index.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::correlation::{regress_y_on_x, LinearFit};
use crate::math::linear::solve;
use crate::math::numeric::{is_negligible, to_f64, to_float};
use crate::math::sums::PairedSums;
use crate::primitives::errors::DomainError;
use crate::primitives::table::Point;

// ============================================================================
// Model Trait
// ============================================================================

/// A fitted model that can be evaluated at arbitrary `x`.
pub trait CurveModel<T: Float> {
    /// Model value at `x`.
    fn predict(&self, x: T) -> T;

    /// Evaluate the model at each `x`, in order.
    fn evaluate(&self, x: &[T]) -> Vec<Point<T>> {
        x.iter()
            .map(|&xi| Point {
                x: xi,
                y: self.predict(xi),
            })
            .collect()
    }
}

impl<T: Float> CurveModel<T> for LinearFit<T> {
    #[inline]
    fn predict(&self, x: T) -> T {
        LinearFit::predict(self, x)
    }
}

// ============================================================================
// Models
// ============================================================================

/// Parabola `y = a + b·x + c·x²`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParabolaFit<T> {
    /// Constant term.
    pub a: T,
    /// Linear coefficient.
    pub b: T,
    /// Quadratic coefficient.
    pub c: T,
}

impl<T: Float> CurveModel<T> for ParabolaFit<T> {
    #[inline]
    fn predict(&self, x: T) -> T {
        self.a + self.b * x + self.c * x * x
    }
}

/// Exponential curve `y = a·e^(b·x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialFit<T> {
    /// Intercept of the linearized fit, `A = ln a`.
    pub log_a: T,
    /// Scale `a = e^A`.
    pub a: T,
    /// Growth rate.
    pub b: T,
}

impl<T: Float> CurveModel<T> for ExponentialFit<T> {
    #[inline]
    fn predict(&self, x: T) -> T {
        self.a * (self.b * x).exp()
    }
}

/// Power curve `y = a·x^b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerFit<T> {
    /// Intercept of the linearized fit, `A = ln a`.
    pub log_a: T,
    /// Scale `a = e^A`.
    pub a: T,
    /// Exponent.
    pub b: T,
}

impl<T: Float> CurveModel<T> for PowerFit<T> {
    #[inline]
    fn predict(&self, x: T) -> T {
        self.a * x.powf(self.b)
    }
}

// ============================================================================
// Fitting
// ============================================================================

/// Fit `y = a + b·x`.
pub fn fit_line<T: Float>(x: &[T], y: &[T]) -> Result<LinearFit<T>, DomainError> {
    regress_y_on_x(&PairedSums::from_slices(x, y))
}

/// Fit `y = a + b·x + c·x²` through the normal equations
///
/// ```text
/// Σy    = p·n   + q·Σu  + r·Σu²
/// Σuy   = p·Σu  + q·Σu² + r·Σu³
/// Σu²y  = p·Σu² + q·Σu³ + r·Σu⁴
/// ```
///
/// written in the standardized variable `u = (x − x̄) / s`, where `s` is the
/// population standard deviation of `x`. The coefficients are then mapped
/// back to `x`: `c = r / s²`, `b = q / s − 2c·x̄`, `a = p − (q / s)·x̄ + c·x̄²`.
pub fn fit_parabola<T: Float>(x: &[T], y: &[T]) -> Result<ParabolaFit<T>, DomainError> {
    let n: T = to_float(x.len());
    let mean = x.iter().fold(T::zero(), |acc, &xi| acc + xi) / n;
    let spread = (x
        .iter()
        .fold(T::zero(), |acc, &xi| acc + (xi - mean) * (xi - mean))
        / n)
        .sqrt();
    let extent = x.iter().fold(T::zero(), |acc, &xi| acc.max(xi.abs()));
    if spread.is_nan() || spread <= T::zero() || is_negligible(spread, extent) {
        return Err(DomainError::SingularSystem);
    }

    let mut s = [T::zero(); 5];
    let mut rhs = [T::zero(); 3];
    for (&xi, &yi) in x.iter().zip(y) {
        let u = (xi - mean) / spread;
        let u2 = u * u;
        s[1] = s[1] + u;
        s[2] = s[2] + u2;
        s[3] = s[3] + u2 * u;
        s[4] = s[4] + u2 * u2;
        rhs[0] = rhs[0] + yi;
        rhs[1] = rhs[1] + u * yi;
        rhs[2] = rhs[2] + u2 * yi;
    }
    s[0] = n;

    let matrix = [[s[0], s[1], s[2]], [s[1], s[2], s[3]], [s[2], s[3], s[4]]];
    let [p, q, r] = solve(matrix, rhs).ok_or(DomainError::SingularSystem)?;

    let slope = q / spread;
    let c = r / (spread * spread);
    Ok(ParabolaFit {
        a: p - slope * mean + c * mean * mean,
        b: slope - (c + c) * mean,
        c,
    })
}

/// Fit `y = a·e^(b·x)` by regressing `ln y` on `x`.
pub fn fit_exponential<T: Float>(x: &[T], y: &[T]) -> Result<ExponentialFit<T>, DomainError> {
    let ln_y = positive_logs(y, "y")?;
    let line = fit_line(x, &ln_y)?;

    Ok(ExponentialFit {
        log_a: line.intercept,
        a: line.intercept.exp(),
        b: line.slope,
    })
}

/// Fit `y = a·x^b` by regressing `ln y` on `ln x`.
pub fn fit_power<T: Float>(x: &[T], y: &[T]) -> Result<PowerFit<T>, DomainError> {
    let ln_x = positive_logs(x, "x")?;
    let ln_y = positive_logs(y, "y")?;
    let line = fit_line(&ln_x, &ln_y)?;

    Ok(PowerFit {
        log_a: line.intercept,
        a: line.intercept.exp(),
        b: line.slope,
    })
}

/// Natural logarithms of a series that must be strictly positive.
pub fn positive_logs<T: Float>(values: &[T], variable: &'static str) -> Result<Vec<T>, DomainError> {
    values
        .iter()
        .enumerate()
        .map(|(row, &v)| {
            if v > T::zero() {
                Ok(v.ln())
            } else {
                Err(DomainError::NonPositiveValue {
                    variable,
                    row,
                    value: to_f64(v),
                })
            }
        })
        .collect()
}

//! Numeric conversion and tolerance helpers.
//!
//! Conversions into `T` never panic: a value that cannot be represented
//! becomes NaN and is caught by the finiteness checks downstream.

// External dependencies
use num_traits::{Float, ToPrimitive};

// Relative tolerance multiplier applied to machine epsilon.
const TOLERANCE_ULPS: f64 = 64.0;

/// Convert a primitive number into `T`, yielding NaN when it is not representable.
#[inline]
pub fn to_float<T: Float, N: ToPrimitive>(n: N) -> T {
    T::from(n).unwrap_or_else(T::nan)
}

/// Convert `T` into `f64` for error reporting.
#[inline]
pub fn to_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

/// True when `value` is zero up to rounding error relative to `scale`.
///
/// Sums such as `nΣx² − (Σx)²` cancel catastrophically when every `x` is
/// equal, leaving residue of order `ε · nΣx²` instead of an exact zero.
#[inline]
pub fn is_negligible<T: Float>(value: T, scale: T) -> bool {
    let tol = T::epsilon() * to_float::<T, _>(TOLERANCE_ULPS) * scale.abs().max(T::one());
    value.abs() <= tol
}

//! Class intervals and frequency-table rows.
//!
//! ## Purpose
//!
//! This module defines the input records of the engine: a [`ClassInterval`]
//! (either a continuous class `[low, high)` or a bare discrete value) and a
//! [`Row`] pairing an interval with its frequency.
//!
//! ## Design notes
//!
//! * **One shape for both data kinds**: a bare value is stored as an interval
//!   with `low == high`, so its midpoint is the value itself.
//! * **Parsing**: `FromStr` accepts `low-high` and bare values made of digits
//!   and an optional decimal point, mirroring the entry form's pattern.
//! * **Generics**: Bounds are generic over `Float` types.
//!
//! ## Invariants
//!
//! * Parsed intervals satisfy `low < high` (ranges) or `low == high` (values).
//! * Parsed bounds are finite and non-negative.
//!
//! ## Non-goals
//!
//! * This module does not sort rows or merge overlapping classes.

// External dependencies
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
use num_traits::Float;
use serde::{Serialize, Serializer};

// Internal dependencies
use crate::primitives::errors::InputError;

// ============================================================================
// Class Interval
// ============================================================================

/// A frequency bucket: the class `[low, high)`, or a single value when `low == high`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassInterval<T> {
    /// Lower class bound (the value itself for discrete data).
    pub low: T,

    /// Upper class bound (equal to `low` for discrete data).
    pub high: T,
}

impl<T: Float> ClassInterval<T> {
    /// Create a continuous class `[low, high)`.
    pub fn range(low: T, high: T) -> Self {
        Self { low, high }
    }

    /// Create a discrete value, used as both bounds.
    pub fn point(value: T) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Representative value of the class: `(low + high) / 2`.
    #[inline]
    pub fn midpoint(&self) -> T {
        (self.low + self.high) / (T::one() + T::one())
    }

    /// Class width `h = high - low` (zero for a bare value).
    #[inline]
    pub fn width(&self) -> T {
        self.high - self.low
    }

    /// True when the interval is a bare discrete value.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.low == self.high
    }
}

impl<T: Float + Display> Display for ClassInterval<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

impl<T: Float + Display> Serialize for ClassInterval<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<T: Float + FromStr> FromStr for ClassInterval<T> {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let invalid = || InputError::InvalidInterval(s.to_string());

        match text.split_once('-') {
            Some((low, high)) => {
                let low: T = parse_bound(low).ok_or_else(invalid)?;
                let high: T = parse_bound(high).ok_or_else(invalid)?;
                if low >= high {
                    return Err(invalid());
                }
                Ok(Self::range(low, high))
            }
            None => parse_bound(text).map(Self::point).ok_or_else(invalid),
        }
    }
}

// Digits with at most one decimal point; rejects signs, exponents, and `inf`/`NaN`.
fn parse_bound<T: Float + FromStr>(text: &str) -> Option<T> {
    let text = text.trim();
    let digits = text.chars().filter(|c| c.is_ascii_digit()).count();
    let dots = text.chars().filter(|&c| c == '.').count();
    if digits == 0 || dots > 1 || digits + dots != text.chars().count() {
        return None;
    }
    text.parse::<T>().ok().filter(|v| v.is_finite())
}

// ============================================================================
// Row
// ============================================================================

/// One observation bucket of the frequency table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<T> {
    /// Class interval (or discrete value).
    pub interval: ClassInterval<T>,

    /// Number of observations in the bucket.
    pub frequency: u32,
}

impl<T: Float> Row<T> {
    /// Create a row from an interval and a frequency.
    pub fn new(interval: ClassInterval<T>, frequency: u32) -> Self {
        Self {
            interval,
            frequency,
        }
    }

    /// Create a continuous row `[low, high)` with the given frequency.
    pub fn range(low: T, high: T, frequency: u32) -> Self {
        Self::new(ClassInterval::range(low, high), frequency)
    }

    /// Create a discrete row with the given frequency.
    pub fn point(value: T, frequency: u32) -> Self {
        Self::new(ClassInterval::point(value), frequency)
    }

    /// Parse an interval and frequency as typed into the entry form.
    pub fn parse(interval: &str, frequency: &str) -> Result<Self, InputError>
    where
        T: FromStr,
    {
        let interval = interval.parse::<ClassInterval<T>>()?;
        let frequency = frequency
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&f| f > 0)
            .ok_or_else(|| InputError::InvalidFrequency(frequency.to_string()))?;
        Ok(Self::new(interval, frequency))
    }
}

//! Row preparation shared by every procedure.
//!
//! ## Purpose
//!
//! Converts validated input rows into the column vectors the reducers work
//! on: representative points `x`, frequencies `f`, cumulative frequencies
//! `cf`, and the total frequency `N`.
//!
//! ## Invariants
//!
//! * Row order is preserved; rows are never re-sorted.
//! * `cf[i] = f[0] + ... + f[i]` and `cf[last] = N`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::numeric::to_float;
use crate::primitives::interval::{ClassInterval, Row};

/// Column vectors derived from the input rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Prepared<T> {
    /// Class intervals in input order.
    pub intervals: Vec<ClassInterval<T>>,

    /// Representative points (interval midpoints).
    pub x: Vec<T>,

    /// Frequencies as floats.
    pub f: Vec<T>,

    /// Cumulative frequencies in input order.
    pub cf: Vec<T>,

    /// Total frequency `N`.
    pub total: T,
}

impl<T: Float> Prepared<T> {
    /// Derive midpoints, frequencies, and cumulative frequencies from rows.
    pub fn from_rows(rows: &[Row<T>]) -> Self {
        let n = rows.len();
        let mut intervals = Vec::with_capacity(n);
        let mut x = Vec::with_capacity(n);
        let mut f = Vec::with_capacity(n);
        let mut cf = Vec::with_capacity(n);

        let mut running = 0u64;
        for row in rows {
            running += u64::from(row.frequency);
            intervals.push(row.interval);
            x.push(row.interval.midpoint());
            f.push(to_float(row.frequency));
            cf.push(to_float(running));
        }

        Self {
            intervals,
            x,
            f,
            cf,
            total: to_float(running),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True when there are no rows.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

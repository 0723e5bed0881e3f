//! High-level API for frequency-table statistics.
//!
//! ## Purpose
//!
//! This module is the user-facing surface of the crate: the [`compute`]
//! entry point, the [`ProblemKind`] selector, the input and output types, and
//! the [`DataEntry`] adapter for row-by-row input.
//!
//! ## Key concepts
//!
//! * **One call per selection**: `compute(kind, &rows)` is pure; calling it
//!   again with another kind produces an unrelated, complete result.
//! * **Two error tiers**: [`InputError`] for malformed entry, [`DomainError`]
//!   for statistics that are undefined on the data.
//! * **Frequency as y**: Correlation, regression, and fitting pair each
//!   interval midpoint `x` with its frequency `y`.

// External dependencies
use core::str::FromStr;
use num_traits::Float;

// Publicly re-exported types
pub use crate::adapters::entry::{DataEntry, EntryState};
pub use crate::engine::executor::compute;
pub use crate::engine::formulas::Formula;
pub use crate::engine::output::{CalculationResult, FittedCurve, Measure, Results, Steps};
pub use crate::engine::problem::ProblemKind;
pub use crate::primitives::errors::{DomainError, InputError, StatsError};
pub use crate::primitives::interval::{ClassInterval, Row};
pub use crate::primitives::table::{Cell, Point, TableRow};

/// Parse `(interval, frequency)` text pairs into rows, stopping at the first invalid pair.
pub fn parse_rows<T, I, A, B>(pairs: I) -> Result<Vec<Row<T>>, InputError>
where
    T: Float + FromStr,
    I: IntoIterator<Item = (A, B)>,
    A: AsRef<str>,
    B: AsRef<str>,
{
    pairs
        .into_iter()
        .map(|(interval, frequency)| Row::parse(interval.as_ref(), frequency.as_ref()))
        .collect()
}

/// Parse a problem label or slug and compute it over `rows`.
pub fn compute_named<T: Float>(
    problem: &str,
    rows: &[Row<T>],
) -> Result<CalculationResult<T>, StatsError> {
    let kind = problem.parse::<ProblemKind>()?;
    Ok(compute(kind, rows)?)
}

//! Error types for frequency-table statistics.
//!
//! ## Purpose
//!
//! This module defines the two error tiers of the crate: input errors raised
//! while a table is being entered, and domain errors raised by the engine when
//! a procedure's mathematical precondition does not hold.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (row index, offending value,
//!   required minimum).
//! * **Tiered**: [`InputError`] never reaches the engine; [`DomainError`] is the
//!   only failure the engine produces. [`StatsError`] unifies both for callers
//!   that drive the whole flow.
//!
//! ## Invariants
//!
//! * Every engine failure is a [`DomainError`]; no partial results accompany it.
//! * Row indices in errors are zero-based positions in input order.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use thiserror::Error;

// ============================================================================
// Input Errors (tier 1)
// ============================================================================

/// Errors raised while collecting rows, before the engine runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Rows were added before a row limit was chosen.
    #[error("Please set a rows limit first")]
    MissingRowsLimit,

    /// Row limit must be a positive integer.
    #[error("Invalid rows limit: {0} (must be a positive integer)")]
    InvalidRowsLimit(String),

    /// Class interval text does not match `low-high` (with `low < high`) or a bare value.
    #[error("Class interval must be in format 'x-x' (e.g., 10-20) or a single value, got '{0}'")]
    InvalidInterval(String),

    /// Frequency text is not a positive integer.
    #[error("Frequency must be a positive number, got '{0}'")]
    InvalidFrequency(String),

    /// The table already holds `limit` rows.
    #[error("Row limit reached ({limit} rows)")]
    RowLimitReached {
        /// Configured row limit.
        limit: usize,
    },

    /// A problem was selected before the table was complete.
    #[error("Row limit not reached: {got} of {limit} rows entered")]
    RowLimitNotReached {
        /// Rows entered so far.
        got: usize,
        /// Configured row limit.
        limit: usize,
    },

    /// Row index does not exist.
    #[error("Row {0} does not exist")]
    RowNotFound(usize),

    /// Problem identifier does not name one of the twelve procedures.
    #[error("Unknown problem: '{0}'")]
    UnknownProblem(String),
}

// ============================================================================
// Domain Errors (tier 2)
// ============================================================================

/// Errors raised by the engine when a statistic is undefined for the data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// The table has no rows.
    #[error("Input table is empty")]
    EmptyInput,

    /// All frequencies are zero, so N = 0.
    #[error("Total frequency is zero")]
    ZeroTotalFrequency,

    /// Number of rows is below the minimum required by the procedure.
    #[error("Too few rows: got {got}, need at least {min}")]
    TooFewRows {
        /// Number of rows provided.
        got: usize,
        /// Minimum required rows.
        min: usize,
    },

    /// An interval bound is NaN or infinite.
    #[error("Invalid numeric value: {0}")]
    InvalidNumericValue(String),

    /// Interval bounds are reversed, or a continuous class has zero width.
    #[error("Invalid class interval in row {row}: {low}-{high}")]
    InvalidInterval {
        /// Row index.
        row: usize,
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },

    /// A variable has no spread, so correlation/regression is undefined.
    #[error("Variable '{variable}' has zero variance")]
    ZeroVariance {
        /// Name of the degenerate variable (`x` or `y`).
        variable: &'static str,
    },

    /// Standard deviation is zero, so standardized moments are undefined.
    #[error("Standard deviation is zero; skewness and kurtosis are undefined")]
    ZeroStandardDeviation,

    /// A log-linearized fit met a value that is not strictly positive.
    #[error("Value {value} of '{variable}' in row {row} must be positive for a logarithmic fit")]
    NonPositiveValue {
        /// Name of the variable (`x` or `y`).
        variable: &'static str,
        /// Row index.
        row: usize,
        /// Offending value.
        value: f64,
    },

    /// Normal equations have no unique solution.
    #[error("Normal equations are singular; the curve cannot be fitted")]
    SingularSystem,

    /// A statistic's formula divides by zero for this data.
    #[error("Statistic '{0}' is undefined for this data")]
    UndefinedStatistic(&'static str),
}

// ============================================================================
// Unified Error
// ============================================================================

/// Either tier of error, for callers driving entry and computation together.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Input was rejected before computation.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The engine could not compute the requested statistic.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

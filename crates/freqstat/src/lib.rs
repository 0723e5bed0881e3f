//! # freqstat — Statistics for Grouped Frequency Tables
//!
//! Classical descriptive and inferential statistics over a frequency table of
//! class intervals and their frequencies: central tendency, dispersion,
//! shape, correlation, regression, and least-squares curve fitting.
//!
//! ## What does it compute?
//!
//! Twelve procedures, selected with [`ProblemKind`](prelude::ProblemKind):
//!
//! | Procedure | Results |
//! |---|---|
//! | Mean, Median & Mode (Discrete Data) | mean, median, mode |
//! | Median & Mode (Continuous Data) | grouped median and mode |
//! | Mean Deviation & Std Dev (Discrete / Continuous Data) | mean deviation, variance, standard deviation |
//! | Skewness & Kurtosis | moment coefficients |
//! | Correlation Coefficient | Pearson's r |
//! | Regression (Y on X / X on Y) | slope and intercept |
//! | Straight Line / Parabola / Exponential / Power Fit | coefficients and fitted points |
//!
//! Every computation returns the formulas used, a per-row calculation table,
//! and the final results.
//!
//! ## Quick Start
//!
//! ```rust
//! use freqstat::prelude::*;
//!
//! let rows = vec![
//!     Row::range(10.0, 20.0, 5),
//!     Row::range(20.0, 30.0, 8),
//!     Row::range(30.0, 40.0, 3),
//! ];
//!
//! let result = compute(ProblemKind::MedianModeContinuous, &rows)?;
//!
//! assert_eq!(result.results.get("median"), Some(23.75));
//! assert_eq!(result.results.get("mode"), Some(23.75));
//! println!("{:.2}", result);
//! # Result::<(), DomainError>::Ok(())
//! ```
//!
//! ### Row-by-row entry
//!
//! ```rust
//! use freqstat::prelude::*;
//!
//! fn main() -> Result<(), StatsError> {
//!     let mut entry = DataEntry::<f64>::with_rows_limit(3)?;
//!     entry.add_row("1", "2")?;
//!     entry.add_row("2", "4")?;
//!     entry.add_row("3", "6")?;
//!
//!     let result = entry.select_problem(ProblemKind::CorrelationCoefficient)?;
//!     let r = result.results.get("correlationCoefficient");
//!     assert!(r.is_some_and(|r| (r - 1.0).abs() < 1e-12));
//!     Ok(())
//! }
//! ```
//!
//! ## Result and Error Handling
//!
//! [`compute`](prelude::compute) returns `Result<CalculationResult<T>, DomainError>`.
//! A `DomainError` means the statistic is undefined for the data (zero
//! variance, non-positive values in a logarithmic fit, too few rows); it is
//! never accompanied by partial output. Text entry through
//! [`DataEntry`](prelude::DataEntry) additionally reports `InputError`s.
//!
//! ## Conventions
//!
//! * `x` is the interval midpoint `(low + high) / 2`; a bare value is its own midpoint.
//! * Dispersion and moments use the population denominator `N = Σf`.
//! * Correlation, regression, and fitting use the frequency as `y`.
//! * Median and modal classes are the first qualifying rows in input order.

// Layer 1: Primitives - data structures and error types.
mod primitives;

// Layer 2: Math - pure numeric building blocks.
mod math;

// Layer 3: Algorithms - statistical reducers.
mod algorithms;

// Layer 4: Engine - validation, dispatch, and output assembly.
mod engine;

// Layer 5: Adapters - input flows in front of the engine.
mod adapters;

// High-level API.
mod api;

pub use api::{compute, compute_named, parse_rows};

// Standard freqstat prelude.
pub mod prelude {
    pub use crate::api::{
        compute, compute_named, parse_rows, CalculationResult, Cell, ClassInterval, DataEntry,
        DomainError, EntryState, FittedCurve, Formula, InputError, Measure, Point, ProblemKind,
        Results, Row, StatsError, Steps, TableRow,
    };
}

// Internal modules for development and testing.
//
// Re-exports every layer so integration tests can reach below the public API.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer implements the statistical reducers: row preparation,
//! central tendency, dispersion, moments, correlation/regression, and
//! curve fitting. Each reducer works on plain column slices and reports
//! undefined statistics as domain errors.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Midpoints, frequencies, and cumulative frequencies.
pub mod prepare;

/// Mean, median, and mode.
pub mod central;

/// Mean deviation and standard deviation.
pub mod dispersion;

/// Skewness and kurtosis.
pub mod moments;

/// Correlation coefficient and regression lines.
pub mod correlation;

/// Straight line, parabola, exponential, and power fits.
pub mod fitting;

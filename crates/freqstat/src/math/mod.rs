//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks: weighted and
//! paired sums, a small dense linear solver, and numeric helpers. Nothing
//! here knows about rows, problems, or errors.
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
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Conversion and tolerance helpers.
pub mod numeric;

/// Weighted and paired accumulators.
pub mod sums;

/// Dense linear solver.
pub mod linear;

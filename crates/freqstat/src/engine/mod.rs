//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a computation: it validates the rows for the
//! selected procedure, dispatches to the algorithms, and assembles the
//! formulas, calculation table, and results into one output value.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The closed set of procedures.
pub mod problem;

/// Validation utilities.
pub mod validator;

/// Formula text per procedure.
pub mod formulas;

/// Output types.
pub mod output;

/// Dispatch and table construction.
pub mod executor;

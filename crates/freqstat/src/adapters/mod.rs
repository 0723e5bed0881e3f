//! Layer 5: Adapters
//!
//! # Purpose
//!
//! This layer adapts user-facing input flows to the engine. The entry
//! adapter enforces the input-tier rules (row limit, interval syntax,
//! positive frequencies) and keeps the latest result.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Row-by-row table entry.
pub mod entry;

//! Calculation-table cells and rows.
//!
//! ## Purpose
//!
//! Each procedure augments the input rows with derived columns (midpoints,
//! cumulative frequencies, deviations, products). This module defines the
//! flat, ordered row representation those columns are written into.
//!
//! ## Design notes
//!
//! * **Ordered**: Columns keep insertion order so renderers can show them as-is.
//! * **Flat**: A row serializes as a single map `column -> value`.
//!
//! ## Invariants
//!
//! * Column names within a row are unique.
//! * Every row produced for one computation has the same column set.

// External dependencies
use core::fmt::Display;
use num_traits::Float;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// Internal dependencies
use crate::primitives::interval::ClassInterval;

// ============================================================================
// Cell
// ============================================================================

/// A single value in the calculation table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<T> {
    /// The row's class interval, kept for display.
    Interval(ClassInterval<T>),

    /// A numeric value.
    Value(T),
}

impl<T: Float + Display + Serialize> Serialize for Cell<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Interval(interval) => interval.serialize(serializer),
            Self::Value(v) => v.serialize(serializer),
        }
    }
}

// ============================================================================
// Table Row
// ============================================================================

/// One derived row: the input row augmented with procedure-specific columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableRow<T> {
    cells: Vec<(&'static str, Cell<T>)>,
}

impl<T: Float> TableRow<T> {
    /// Create an empty row.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Append the class interval column.
    pub fn with_interval(mut self, interval: ClassInterval<T>) -> Self {
        self.cells.push(("classInterval", Cell::Interval(interval)));
        self
    }

    /// Append a numeric column.
    pub fn with(mut self, column: &'static str, value: T) -> Self {
        self.cells.push((column, Cell::Value(value)));
        self
    }

    /// Look up a cell by column name.
    pub fn get(&self, column: &str) -> Option<&Cell<T>> {
        self.cells
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, cell)| cell)
    }

    /// Look up a numeric cell by column name.
    pub fn value(&self, column: &str) -> Option<T> {
        match self.get(column) {
            Some(Cell::Value(v)) => Some(*v),
            _ => None,
        }
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(name, _)| *name)
    }

    /// Cells in column order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell<T>> + '_ {
        self.cells.iter().map(|(_, cell)| cell)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<T: Float + Display + Serialize> Serialize for TableRow<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (name, cell) in &self.cells {
            map.serialize_entry(name, cell)?;
        }
        map.end()
    }
}

// ============================================================================
// Point
// ============================================================================

/// An `(x, y)` pair of a fitted line or curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point<T> {
    /// Input x-value.
    pub x: T,

    /// Model value at `x`.
    pub y: T,
}

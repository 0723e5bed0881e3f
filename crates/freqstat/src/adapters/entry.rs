//! Data-entry adapter for building a frequency table row by row.
//!
//! ## Purpose
//!
//! This module models the entry form in front of the engine: a row limit is
//! chosen first, rows are typed in as `interval` / `frequency` text, and once
//! the table is full a procedure can be selected. Each selection recomputes
//! from scratch and replaces the previous result.
//!
//! ## Design notes
//!
//! * **State machine**: `NoData → CollectingRows → Ready → ResultsShown`.
//!   Selecting another procedure stays in `ResultsShown`; deleting a row goes
//!   back to `CollectingRows` (or `NoData` when the table empties).
//! * **Input tier**: Malformed text is rejected here with an [`InputError`]
//!   and never reaches the engine.
//! * **Last call wins**: A failed computation discards the previous result.
//!
//! ## Invariants
//!
//! * The number of rows never exceeds the row limit.
//! * Every stored row has a positive frequency.
//! * A stored result always corresponds to the current rows.

// External dependencies
use core::str::FromStr;
use num_traits::Float;
use tracing::debug;

// Internal dependencies
use crate::engine::executor::compute;
use crate::engine::output::CalculationResult;
use crate::engine::problem::ProblemKind;
use crate::primitives::errors::{InputError, StatsError};
use crate::primitives::interval::Row;

// ============================================================================
// Entry State
// ============================================================================

/// Where the entry flow currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// No rows entered.
    NoData,

    /// Some rows entered, fewer than the limit.
    CollectingRows,

    /// The table holds exactly `rows_limit` rows.
    Ready,

    /// A procedure has been computed for the current table.
    ResultsShown(ProblemKind),
}

// ============================================================================
// Data Entry
// ============================================================================

/// Row collector that feeds the engine once the table is complete.
#[derive(Debug, Clone, PartialEq)]
pub struct DataEntry<T> {
    rows_limit: Option<usize>,
    rows: Vec<Row<T>>,
    result: Option<CalculationResult<T>>,
}

impl<T: Float> Default for DataEntry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DataEntry<T> {
    /// Create an empty entry with no row limit.
    pub fn new() -> Self {
        Self {
            rows_limit: None,
            rows: Vec::new(),
            result: None,
        }
    }

    /// Create an empty entry with the given row limit.
    pub fn with_rows_limit(limit: usize) -> Result<Self, InputError> {
        let mut entry = Self::new();
        entry.set_rows_limit(limit)?;
        Ok(entry)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current state of the flow.
    pub fn state(&self) -> EntryState {
        if let Some(result) = &self.result {
            return EntryState::ResultsShown(result.problem);
        }
        match (self.rows.len(), self.rows_limit) {
            (0, _) => EntryState::NoData,
            (n, Some(limit)) if n == limit => EntryState::Ready,
            _ => EntryState::CollectingRows,
        }
    }

    /// Rows entered so far, in entry order.
    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    /// The configured row limit.
    pub fn rows_limit(&self) -> Option<usize> {
        self.rows_limit
    }

    /// The most recent result, if any.
    pub fn result(&self) -> Option<&CalculationResult<T>> {
        self.result.as_ref()
    }

    /// True when a procedure can be selected.
    pub fn is_ready(&self) -> bool {
        matches!(self.state(), EntryState::Ready | EntryState::ResultsShown(_))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Set the number of rows the table will hold.
    ///
    /// A limit below the current row count discards all rows.
    pub fn set_rows_limit(&mut self, limit: usize) -> Result<(), InputError> {
        if limit == 0 {
            return Err(InputError::InvalidRowsLimit(limit.to_string()));
        }
        if limit < self.rows.len() {
            debug!(limit, discarded = self.rows.len(), "row limit lowered; clearing rows");
            self.rows.clear();
        }
        if self.rows_limit != Some(limit) {
            self.result = None;
        }
        self.rows_limit = Some(limit);
        Ok(())
    }

    /// Parse and append a row typed as text.
    pub fn add_row(&mut self, interval: &str, frequency: &str) -> Result<(), InputError>
    where
        T: FromStr,
    {
        let limit = self.rows_limit.ok_or(InputError::MissingRowsLimit)?;
        let row = Row::parse(interval, frequency)?;
        if self.rows.len() >= limit {
            return Err(InputError::RowLimitReached { limit });
        }
        self.append(row);
        Ok(())
    }

    /// Append an already-typed row.
    pub fn push_row(&mut self, row: Row<T>) -> Result<(), InputError> {
        let limit = self.rows_limit.ok_or(InputError::MissingRowsLimit)?;
        if row.frequency == 0 {
            return Err(InputError::InvalidFrequency(row.frequency.to_string()));
        }
        if self.rows.len() >= limit {
            return Err(InputError::RowLimitReached { limit });
        }
        self.append(row);
        Ok(())
    }

    /// Remove the row at `index` and discard any result.
    pub fn delete_row(&mut self, index: usize) -> Result<Row<T>, InputError> {
        if index >= self.rows.len() {
            return Err(InputError::RowNotFound(index));
        }
        self.result = None;
        Ok(self.rows.remove(index))
    }

    /// Run `kind` on the complete table, replacing any previous result.
    pub fn select_problem(
        &mut self,
        kind: ProblemKind,
    ) -> Result<&CalculationResult<T>, StatsError> {
        let limit = self.rows_limit.ok_or(InputError::MissingRowsLimit)?;
        if self.rows.len() != limit {
            return Err(InputError::RowLimitNotReached {
                got: self.rows.len(),
                limit,
            }
            .into());
        }

        self.result = None;
        let result = compute(kind, &self.rows)?;
        Ok(&*self.result.insert(result))
    }

    fn append(&mut self, row: Row<T>) {
        self.rows.push(row);
        self.result = None;
        debug!(rows = self.rows.len(), limit = ?self.rows_limit, "row added");
    }
}

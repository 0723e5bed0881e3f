//! Output types for frequency-table computations.
//!
//! ## Purpose
//!
//! This module defines [`CalculationResult`], which encapsulates everything a
//! computation returns: the formulas used, the per-row calculation table,
//! and the final results.
//!
//! ## Design notes
//!
//! * **Tagged results**: [`Results`] distinguishes plain measures from fitted
//!   models, so consumers match on the variant instead of probing for keys.
//! * **Serialization**: The serde shape is `{ problem, formulas,
//!   steps: { calculationTable }, results }`, with fitted points under
//!   `fittedLine` or `fittedCurve`.
//! * **Ergonomics**: Implements `Display` as a text report. The formatter
//!   precision (`{:.2}`) controls decimals; the default is 4.
//!
//! ## Invariants
//!
//! * The calculation table has one row per input row, in input order.
//! * Fitted points have one entry per input row, evaluated at that row's `x`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not localize or unit-format numbers.

// External dependencies
use core::fmt::{self, Display, Formatter};
use num_traits::Float;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

// Internal dependencies
use crate::engine::formulas::{serialize_formulas, Formula};
use crate::engine::problem::ProblemKind;
use crate::primitives::table::{Cell, Point, TableRow};

const DEFAULT_PRECISION: usize = 4;

// ============================================================================
// Measures and Fitted Curves
// ============================================================================

/// A named scalar result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure<T> {
    /// Statistic name, e.g. `mean`.
    pub name: &'static str,

    /// Statistic value.
    pub value: T,
}

impl<T> Measure<T> {
    /// Create a measure.
    pub fn new(name: &'static str, value: T) -> Self {
        Self { name, value }
    }
}

/// Points of a fitted model evaluated at each input `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum FittedCurve<T> {
    /// Straight-line fit.
    Line(Vec<Point<T>>),

    /// Parabola, exponential, or power fit.
    Curve(Vec<Point<T>>),
}

impl<T> FittedCurve<T> {
    /// The fitted points.
    pub fn points(&self) -> &[Point<T>] {
        match self {
            Self::Line(points) | Self::Curve(points) => points,
        }
    }

    /// Result key under which the points are published.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Line(_) => "fittedLine",
            Self::Curve(_) => "fittedCurve",
        }
    }
}

/// Final results of a computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Results<T> {
    /// Scalar statistics (central tendency, dispersion, shape, correlation, regression).
    Measures(Vec<Measure<T>>),

    /// A fitted model: its coefficients and its curve.
    Fitted {
        /// Model coefficients.
        coefficients: Vec<Measure<T>>,

        /// Model evaluated at each input `x`.
        curve: FittedCurve<T>,
    },
}

impl<T: Float> Results<T> {
    /// Scalar results (measures, or coefficients of a fit).
    pub fn measures(&self) -> &[Measure<T>] {
        match self {
            Self::Measures(measures) => measures,
            Self::Fitted { coefficients, .. } => coefficients,
        }
    }

    /// Look up a scalar result by name.
    pub fn get(&self, name: &str) -> Option<T> {
        self.measures()
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }

    /// The fitted curve, if the procedure produced one.
    pub fn fitted(&self) -> Option<&FittedCurve<T>> {
        match self {
            Self::Measures(_) => None,
            Self::Fitted { curve, .. } => Some(curve),
        }
    }
}

impl<T: Float + Serialize> Serialize for Results<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fitted = self.fitted();
        let len = self.measures().len() + usize::from(fitted.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        for m in self.measures() {
            map.serialize_entry(m.name, &m.value)?;
        }
        if let Some(curve) = fitted {
            map.serialize_entry(curve.key(), curve.points())?;
        }
        map.end()
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Intermediate per-row computations.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(serialize = "T: Float + Display + Serialize"))]
pub struct Steps<T> {
    /// One derived row per input row.
    pub calculation_table: Vec<TableRow<T>>,
}

/// Complete output of one computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(bound(serialize = "T: Float + Display + Serialize"))]
pub struct CalculationResult<T> {
    /// Procedure that produced the result.
    pub problem: ProblemKind,

    /// Formulas describing the method.
    #[serde(serialize_with = "serialize_formulas")]
    pub formulas: Vec<Formula>,

    /// Per-row calculation table.
    pub steps: Steps<T>,

    /// Final statistics.
    pub results: Results<T>,
}

impl<T: Float> CalculationResult<T> {
    /// The calculation table.
    pub fn table(&self) -> &[TableRow<T>] {
        &self.steps.calculation_table
    }

    /// Fitted points to overlay on a chart, honouring the procedure's overlay policy.
    pub fn overlay(&self) -> Option<&[Point<T>]> {
        if !self.problem.shows_overlay() {
            return None;
        }
        self.results.fitted().map(FittedCurve::points)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for CalculationResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);

        writeln!(f, "Problem: {}", self.problem)?;
        writeln!(f)?;

        writeln!(f, "Formulas:")?;
        for formula in &self.formulas {
            writeln!(f, "  {:<18} {}", formula.key, formula.text)?;
        }
        writeln!(f)?;

        writeln!(f, "Calculation Table:")?;
        if let Some(first) = self.table().first() {
            let widths: Vec<usize> = first.columns().map(|c| c.len().max(12)).collect();

            for (name, width) in first.columns().zip(&widths) {
                write!(f, " {:>width$}", name, width = width)?;
            }
            writeln!(f)?;
            let line_width = widths.iter().map(|w| w + 1).sum::<usize>();
            writeln!(f, "{:-<width$}", "", width = line_width)?;

            for row in self.table() {
                for (cell, width) in row.cells().zip(&widths) {
                    match cell {
                        Cell::Interval(interval) => {
                            write!(f, " {:>width$}", interval.to_string(), width = width)?
                        }
                        Cell::Value(v) => write!(
                            f,
                            " {:>width$.prec$}",
                            v,
                            width = width,
                            prec = precision
                        )?,
                    }
                }
                writeln!(f)?;
            }
        }
        writeln!(f)?;

        writeln!(f, "Results:")?;
        for m in self.results.measures() {
            writeln!(f, "  {:<24} {:.prec$}", m.name, m.value, prec = precision)?;
        }

        if let Some(curve) = self.results.fitted() {
            writeln!(f)?;
            writeln!(f, "{}:", curve.key())?;
            writeln!(f, "{:>12} {:>12}", "x", "y")?;
            for p in curve.points() {
                writeln!(f, "{:>12.prec$} {:>12.prec$}", p.x, p.y, prec = precision)?;
            }
        }

        Ok(())
    }
}

//! Execution engine for frequency-table procedures.
//!
//! ## Purpose
//!
//! This module is the single entry point of the engine. Given a
//! [`ProblemKind`] and the input rows it validates applicability, builds the
//! per-row calculation table, reduces it to final statistics, and attaches
//! the formulas of the procedure.
//!
//! ## Design notes
//!
//! * **Dispatch**: One exhaustive `match` over the closed problem set; each arm
//!   delegates to a family runner that shares row preparation.
//! * **Stateless**: Every call is independent and deterministic.
//! * **All-or-nothing**: Preconditions are checked before the table is built,
//!   so a failure never carries partial output.
//! * **Paired data**: Correlation, regression, and fitting use the midpoint as
//!   `x` and the frequency itself as `y`.
//!
//! ## Invariants
//!
//! * Calculation-table rows follow input order.
//! * Row order is never changed, even when unsorted classes make the median
//!   or modal class selection unusual.

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::algorithms::central::{grouped_median, grouped_mode, median_index, modal_index};
use crate::algorithms::correlation::{pearson, regress_x_on_y, regress_y_on_x};
use crate::algorithms::dispersion::Dispersion;
use crate::algorithms::fitting::{
    fit_exponential, fit_line, fit_parabola, fit_power, CurveModel,
};
use crate::algorithms::moments::Shape;
use crate::algorithms::prepare::Prepared;
use crate::engine::formulas::formulas_for;
use crate::engine::output::{CalculationResult, FittedCurve, Measure, Results, Steps};
use crate::engine::problem::ProblemKind;
use crate::engine::validator::Validator;
use crate::math::sums::{weighted_mean, PairedSums};
use crate::primitives::errors::DomainError;
use crate::primitives::interval::Row;
use crate::primitives::table::TableRow;

/// Intermediate output of a family runner.
type Outcome<T> = (Vec<TableRow<T>>, Results<T>);

/// Compute `kind` over `rows`.
///
/// This is the engine's only entry point; it never panics on bad data and
/// reports undefined statistics as [`DomainError`].
pub fn compute<T: Float>(
    kind: ProblemKind,
    rows: &[Row<T>],
) -> Result<CalculationResult<T>, DomainError> {
    debug!(problem = kind.slug(), rows = rows.len(), "computing");

    match Executor::run(kind, rows) {
        Ok(result) => {
            debug!(
                problem = kind.slug(),
                measures = result.results.measures().len(),
                "computation finished"
            );
            Ok(result)
        }
        Err(err) => {
            warn!(problem = kind.slug(), error = %err, "computation failed");
            Err(err)
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Family runners behind [`compute`].
pub struct Executor;

impl Executor {
    /// Validate, dispatch, and assemble the result.
    pub fn run<T: Float>(
        kind: ProblemKind,
        rows: &[Row<T>],
    ) -> Result<CalculationResult<T>, DomainError> {
        Validator::validate_rows(kind, rows)?;
        let data = Prepared::from_rows(rows);

        let (table, results) = match kind {
            ProblemKind::MeanMedianModeDiscrete => Self::discrete_central(&data),
            ProblemKind::MedianModeContinuous => Self::grouped_central(&data)?,
            ProblemKind::DispersionDiscrete | ProblemKind::DispersionContinuous => {
                Self::dispersion(&data)
            }
            ProblemKind::SkewnessKurtosis => Self::shape(&data)?,
            ProblemKind::CorrelationCoefficient
            | ProblemKind::RegressionYOnX
            | ProblemKind::RegressionXOnY => Self::bivariate(kind, &data)?,
            ProblemKind::StraightLineFit => Self::straight_line(&data)?,
            ProblemKind::ParabolaFit => Self::parabola(&data)?,
            ProblemKind::ExponentialFit => Self::exponential(&data)?,
            ProblemKind::PowerFit => Self::power(&data)?,
        };

        Ok(CalculationResult {
            problem: kind,
            formulas: formulas_for(kind),
            steps: Steps {
                calculation_table: table,
            },
            results,
        })
    }

    // ========================================================================
    // Central Tendency
    // ========================================================================

    fn discrete_central<T: Float>(data: &Prepared<T>) -> Outcome<T> {
        let table = (0..data.len())
            .map(|i| {
                TableRow::new()
                    .with_interval(data.intervals[i])
                    .with("x", data.x[i])
                    .with("frequency", data.f[i])
                    .with("fx", data.f[i] * data.x[i])
                    .with("cumulativeFrequency", data.cf[i])
            })
            .collect();

        let median = data.x[median_index(&data.cf, data.total)];
        let mode = data.x[modal_index(&data.f)];

        let results = Results::Measures(vec![
            Measure::new("totalFrequency", data.total),
            Measure::new("mean", weighted_mean(&data.x, &data.f)),
            Measure::new("median", median),
            Measure::new("mode", mode),
        ]);
        (table, results)
    }

    fn grouped_central<T: Float>(data: &Prepared<T>) -> Result<Outcome<T>, DomainError> {
        let median = grouped_median(&data.intervals, &data.f, &data.cf, data.total);
        let mode = grouped_mode(&data.intervals, &data.f)?;

        let table = (0..data.len())
            .map(|i| {
                TableRow::new()
                    .with_interval(data.intervals[i])
                    .with("frequency", data.f[i])
                    .with("cumulativeFrequency", data.cf[i])
                    .with("midpoint", data.x[i])
            })
            .collect();

        let results = Results::Measures(vec![
            Measure::new("totalFrequency", data.total),
            Measure::new("medianClassLower", median.lower),
            Measure::new("median", median.value),
            Measure::new("modalClassLower", mode.lower),
            Measure::new("mode", mode.value),
        ]);
        Ok((table, results))
    }

    // ========================================================================
    // Dispersion and Shape
    // ========================================================================

    fn dispersion<T: Float>(data: &Prepared<T>) -> Outcome<T> {
        let stats = Dispersion::compute(&data.x, &data.f);

        let table = (0..data.len())
            .map(|i| {
                let (x, f) = (data.x[i], data.f[i]);
                let d = x - stats.mean;
                TableRow::new()
                    .with_interval(data.intervals[i])
                    .with("x", x)
                    .with("frequency", f)
                    .with("fx", f * x)
                    .with("deviation", d)
                    .with("absDeviation", d.abs())
                    .with("fAbsDeviation", f * d.abs())
                    .with("deviationSquared", d * d)
                    .with("fDeviationSquared", f * d * d)
            })
            .collect();

        let results = Results::Measures(vec![
            Measure::new("totalFrequency", data.total),
            Measure::new("mean", stats.mean),
            Measure::new("meanDeviation", stats.mean_deviation),
            Measure::new("variance", stats.variance),
            Measure::new("standardDeviation", stats.standard_deviation),
        ]);
        (table, results)
    }

    fn shape<T: Float>(data: &Prepared<T>) -> Result<Outcome<T>, DomainError> {
        let shape = Shape::compute(&data.x, &data.f)?;

        let table = (0..data.len())
            .map(|i| {
                let (x, f) = (data.x[i], data.f[i]);
                let d = x - shape.mean;
                TableRow::new()
                    .with_interval(data.intervals[i])
                    .with("x", x)
                    .with("frequency", f)
                    .with("fx", f * x)
                    .with("deviation", d)
                    .with("fDeviationSquared", f * d.powi(2))
                    .with("fDeviationCubed", f * d.powi(3))
                    .with("fDeviationFourth", f * d.powi(4))
            })
            .collect();

        let results = Results::Measures(vec![
            Measure::new("totalFrequency", data.total),
            Measure::new("mean", shape.mean),
            Measure::new("variance", shape.variance),
            Measure::new("standardDeviation", shape.standard_deviation),
            Measure::new("thirdMoment", shape.third_moment),
            Measure::new("fourthMoment", shape.fourth_moment),
            Measure::new("skewness", shape.skewness),
            Measure::new("kurtosis", shape.kurtosis),
        ]);
        Ok((table, results))
    }

    // ========================================================================
    // Correlation and Regression
    // ========================================================================

    fn bivariate<T: Float>(
        kind: ProblemKind,
        data: &Prepared<T>,
    ) -> Result<Outcome<T>, DomainError> {
        let (x, y) = (&data.x, &data.f);
        let sums = PairedSums::from_slices(x, y);

        let measures = match kind {
            ProblemKind::RegressionYOnX | ProblemKind::RegressionXOnY => {
                let line = if kind == ProblemKind::RegressionYOnX {
                    regress_y_on_x(&sums)?
                } else {
                    regress_x_on_y(&sums)?
                };
                vec![
                    Measure::new("meanX", sums.mean_x()),
                    Measure::new("meanY", sums.mean_y()),
                    Measure::new("slope", line.slope),
                    Measure::new("intercept", line.intercept),
                ]
            }
            _ => {
                let r = pearson(&sums)?;
                vec![
                    Measure::new("n", sums.count()),
                    Measure::new("sumX", sums.sum_x),
                    Measure::new("sumY", sums.sum_y),
                    Measure::new("sumXY", sums.sum_xy),
                    Measure::new("sumXSquared", sums.sum_xx),
                    Measure::new("sumYSquared", sums.sum_yy),
                    Measure::new("correlationCoefficient", r),
                ]
            }
        };

        let table = (0..data.len())
            .map(|i| {
                TableRow::new()
                    .with_interval(data.intervals[i])
                    .with("x", x[i])
                    .with("y", y[i])
                    .with("xy", x[i] * y[i])
                    .with("xSquared", x[i] * x[i])
                    .with("ySquared", y[i] * y[i])
            })
            .collect();

        Ok((table, Results::Measures(measures)))
    }

    // ========================================================================
    // Curve Fitting
    // ========================================================================

    fn straight_line<T: Float>(data: &Prepared<T>) -> Result<Outcome<T>, DomainError> {
        let (x, y) = (&data.x, &data.f);
        let line = fit_line(x, y)?;

        let table = (0..data.len())
            .map(|i| {
                TableRow::new()
                    .with_interval(data.intervals[i])
                    .with("x", x[i])
                    .with("y", y[i])
                    .with("xy", x[i] * y[i])
                    .with("xSquared", x[i] * x[i])
            })
            .collect();

        let results = Results::Fitted {
            coefficients: vec![
                Measure::new("a", line.intercept),
                Measure::new("b", line.slope),
            ],
            curve: FittedCurve::Line(line.evaluate(x)),
        };
        Ok((table, results))
    }

    fn parabola<T: Float>(data: &Prepared<T>) -> Result<Outcome<T>, DomainError> {
        let (x, y) = (&data.x, &data.f);
        let fit = fit_parabola(x, y)?;

        let table = (0..data.len())
            .map(|i| {
                let x2 = x[i] * x[i];
                TableRow::new()
                    .with_interval(data.intervals[i])
                    .with("x", x[i])
                    .with("y", y[i])
                    .with("xSquared", x2)
                    .with("xCubed", x2 * x[i])
                    .with("xFourth", x2 * x2)
                    .with("xy", x[i] * y[i])
                    .with("xSquaredY", x2 * y[i])
            })
            .collect();

        let results = Results::Fitted {
            coefficients: vec![
                Measure::new("a", fit.a),
                Measure::new("b", fit.b),
                Measure::new("c", fit.c),
            ],
            curve: FittedCurve::Curve(fit.evaluate(x)),
        };
        Ok((table, results))
    }

    fn exponential<T: Float>(data: &Prepared<T>) -> Result<Outcome<T>, DomainError> {
        let (x, y) = (&data.x, &data.f);
        let fit = fit_exponential(x, y)?;

        let table = (0..data.len())
            .map(|i| {
                let ln_y = y[i].ln();
                TableRow::new()
                    .with_interval(data.intervals[i])
                    .with("x", x[i])
                    .with("y", y[i])
                    .with("lnY", ln_y)
                    .with("xLnY", x[i] * ln_y)
                    .with("xSquared", x[i] * x[i])
            })
            .collect();

        let results = Results::Fitted {
            coefficients: vec![
                Measure::new("A", fit.log_a),
                Measure::new("a", fit.a),
                Measure::new("b", fit.b),
            ],
            curve: FittedCurve::Curve(fit.evaluate(x)),
        };
        Ok((table, results))
    }

    fn power<T: Float>(data: &Prepared<T>) -> Result<Outcome<T>, DomainError> {
        let (x, y) = (&data.x, &data.f);
        let fit = fit_power(x, y)?;

        let table = (0..data.len())
            .map(|i| {
                let (ln_x, ln_y) = (x[i].ln(), y[i].ln());
                TableRow::new()
                    .with_interval(data.intervals[i])
                    .with("x", x[i])
                    .with("y", y[i])
                    .with("lnX", ln_x)
                    .with("lnY", ln_y)
                    .with("lnXLnY", ln_x * ln_y)
                    .with("lnXSquared", ln_x * ln_x)
            })
            .collect();

        let results = Results::Fitted {
            coefficients: vec![
                Measure::new("A", fit.log_a),
                Measure::new("a", fit.a),
                Measure::new("b", fit.b),
            ],
            curve: FittedCurve::Curve(fit.evaluate(x)),
        };
        Ok((table, results))
    }
}

//! Tests for the computation engine.
//!
//! These tests run every procedure end to end through `compute` and verify:
//! - Final statistics on worked examples
//! - Calculation-table columns and row order
//! - Fitted points and overlay policy
//! - Domain errors without partial output
//!
//! ## Test Organization
//!
//! 1. **Central Tendency** - Discrete and grouped
//! 2. **Dispersion and Shape**
//! 3. **Correlation and Regression**
//! 4. **Curve Fitting**
//! 5. **Table Layout** - Columns and row order
//! 6. **Domain Errors**

use approx::{assert_abs_diff_eq, assert_relative_eq};

use freqstat::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn discrete_table() -> Vec<Row<f64>> {
    vec![
        Row::point(1.0, 2),
        Row::point(2.0, 4),
        Row::point(3.0, 5),
        Row::point(4.0, 3),
    ]
}

fn grouped_table() -> Vec<Row<f64>> {
    vec![
        Row::range(10.0, 20.0, 5),
        Row::range(20.0, 30.0, 8),
        Row::range(30.0, 40.0, 3),
    ]
}

fn paired_table() -> Vec<Row<f64>> {
    vec![
        Row::range(0.0, 10.0, 2),
        Row::range(10.0, 20.0, 3),
        Row::range(20.0, 30.0, 5),
        Row::range(30.0, 40.0, 4),
        Row::range(40.0, 50.0, 6),
    ]
}

fn points(pairs: &[(f64, u32)]) -> Vec<Row<f64>> {
    pairs.iter().map(|&(x, f)| Row::point(x, f)).collect()
}

fn measure(result: &CalculationResult<f64>, name: &str) -> f64 {
    result
        .results
        .get(name)
        .unwrap_or_else(|| panic!("missing result '{name}'"))
}

fn column_names(result: &CalculationResult<f64>) -> Vec<&'static str> {
    result.table()[0].columns().collect()
}

// ============================================================================
// Central Tendency Tests
// ============================================================================

/// Test mean, median, and mode of discrete data.
#[test]
fn test_mean_median_mode_discrete() {
    let result = compute(ProblemKind::MeanMedianModeDiscrete, &discrete_table()).unwrap();

    assert_relative_eq!(measure(&result, "totalFrequency"), 14.0);
    assert_relative_eq!(measure(&result, "mean"), 37.0 / 14.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "median"), 3.0);
    assert_relative_eq!(measure(&result, "mode"), 3.0);

    let cf: Vec<f64> = result
        .table()
        .iter()
        .map(|row| row.value("cumulativeFrequency").unwrap())
        .collect();
    assert_eq!(cf, vec![2.0, 6.0, 11.0, 14.0]);
}

/// Test discrete data entered as classes uses the midpoints.
#[test]
fn test_mean_median_mode_discrete_midpoints() {
    let rows = vec![Row::range(0.0, 10.0, 1), Row::range(10.0, 20.0, 3)];
    let result = compute(ProblemKind::MeanMedianModeDiscrete, &rows).unwrap();

    assert_relative_eq!(measure(&result, "mean"), 12.5, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "median"), 15.0);
    assert_relative_eq!(measure(&result, "mode"), 15.0);
}

/// Test grouped median and mode.
#[test]
fn test_median_mode_continuous() {
    let result = compute(ProblemKind::MedianModeContinuous, &grouped_table()).unwrap();

    assert_relative_eq!(measure(&result, "totalFrequency"), 16.0);
    assert_relative_eq!(measure(&result, "medianClassLower"), 20.0);
    assert_relative_eq!(measure(&result, "median"), 23.75, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "modalClassLower"), 20.0);
    assert_relative_eq!(measure(&result, "mode"), 23.75, epsilon = 1e-12);
}

/// Test grouped median and mode are invariant under scaling all frequencies.
#[test]
fn test_median_mode_continuous_scaled() {
    let scaled: Vec<Row<f64>> = grouped_table()
        .into_iter()
        .map(|row| Row::new(row.interval, row.frequency * 3))
        .collect();
    let result = compute(ProblemKind::MedianModeContinuous, &scaled).unwrap();

    assert_relative_eq!(measure(&result, "median"), 23.75, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "mode"), 23.75, epsilon = 1e-12);
}

// ============================================================================
// Dispersion and Shape Tests
// ============================================================================

/// Test dispersion of discrete data.
#[test]
fn test_dispersion_discrete() {
    let result = compute(ProblemKind::DispersionDiscrete, &discrete_table()).unwrap();

    assert_relative_eq!(measure(&result, "mean"), 37.0 / 14.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "meanDeviation"), 0.836734693877551, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "variance"), 0.9438775510204083, epsilon = 1e-12);
    assert_relative_eq!(
        measure(&result, "standardDeviation"),
        0.9438775510204083f64.sqrt(),
        epsilon = 1e-12
    );
}

/// Test dispersion of continuous data.
#[test]
fn test_dispersion_continuous() {
    let rows = vec![
        Row::range(0.0, 10.0, 1),
        Row::range(10.0, 20.0, 2),
        Row::range(20.0, 30.0, 1),
    ];
    let result = compute(ProblemKind::DispersionContinuous, &rows).unwrap();

    assert_relative_eq!(measure(&result, "mean"), 15.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "meanDeviation"), 5.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "variance"), 50.0, epsilon = 1e-12);

    let table = result.table();
    assert_relative_eq!(table[0].value("deviation").unwrap(), -10.0, epsilon = 1e-12);
    assert_relative_eq!(table[0].value("fDeviationSquared").unwrap(), 100.0, epsilon = 1e-12);
    assert_relative_eq!(table[1].value("fAbsDeviation").unwrap(), 0.0, epsilon = 1e-12);
}

/// Test skewness and kurtosis.
#[test]
fn test_skewness_kurtosis() {
    let rows = points(&[(1.0, 1), (2.0, 1), (3.0, 2)]);
    let result = compute(ProblemKind::SkewnessKurtosis, &rows).unwrap();

    assert_relative_eq!(measure(&result, "mean"), 2.25, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "skewness"), -0.49338220021815865, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "kurtosis"), 1.628099173553719, epsilon = 1e-12);
}

/// Test symmetric uniform data has zero skewness.
#[test]
fn test_skewness_kurtosis_symmetric() {
    let rows = vec![
        Row::range(0.0, 10.0, 1),
        Row::range(10.0, 20.0, 1),
        Row::range(20.0, 30.0, 1),
    ];
    let result = compute(ProblemKind::SkewnessKurtosis, &rows).unwrap();

    assert_abs_diff_eq!(measure(&result, "skewness"), 0.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "kurtosis"), 1.5, epsilon = 1e-12);
}

// ============================================================================
// Correlation and Regression Tests
// ============================================================================

/// Test correlation and its intermediate sums.
#[test]
fn test_correlation_coefficient() {
    let result = compute(ProblemKind::CorrelationCoefficient, &paired_table()).unwrap();

    assert_relative_eq!(measure(&result, "n"), 5.0);
    assert_relative_eq!(measure(&result, "sumX"), 125.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "sumY"), 20.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "sumXY"), 590.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "sumXSquared"), 4125.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "sumYSquared"), 90.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "correlationCoefficient"), 0.9, epsilon = 1e-12);
    assert!(result.results.fitted().is_none());
}

/// Test single-precision correlation over classes far from zero.
#[test]
fn test_correlation_f32_large_offset() {
    let rows = vec![
        Row::<f32>::range(1000.0, 1002.0, 2),
        Row::range(1002.0, 1004.0, 4),
        Row::range(1004.0, 1006.0, 6),
    ];
    let result = compute(ProblemKind::CorrelationCoefficient, &rows).unwrap();

    let r = result.results.get("correlationCoefficient").unwrap();
    assert_relative_eq!(r, 1.0f32, epsilon = 1e-6);
}

/// Test both regression lines and the r² identity.
#[test]
fn test_regressions() {
    let rows = paired_table();
    let r = measure(
        &compute(ProblemKind::CorrelationCoefficient, &rows).unwrap(),
        "correlationCoefficient",
    );
    let yx = compute(ProblemKind::RegressionYOnX, &rows).unwrap();
    let xy = compute(ProblemKind::RegressionXOnY, &rows).unwrap();

    assert_relative_eq!(measure(&yx, "meanX"), 25.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&yx, "meanY"), 4.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&yx, "slope"), 0.09, epsilon = 1e-12);
    assert_relative_eq!(measure(&yx, "intercept"), 1.75, epsilon = 1e-12);
    assert_relative_eq!(measure(&xy, "slope"), 9.0, epsilon = 1e-12);
    assert_relative_eq!(measure(&xy, "intercept"), -11.0, epsilon = 1e-12);

    let product = measure(&yx, "slope") * measure(&xy, "slope");
    assert_relative_eq!(product, r * r, epsilon = 1e-12);
}

/// Test correlation and regression never offer an overlay.
#[test]
fn test_bivariate_has_no_overlay() {
    for kind in [
        ProblemKind::CorrelationCoefficient,
        ProblemKind::RegressionYOnX,
        ProblemKind::RegressionXOnY,
    ] {
        let result = compute(kind, &paired_table()).unwrap();
        assert!(result.overlay().is_none(), "{kind}");
    }
}

// ============================================================================
// Curve Fitting Tests
// ============================================================================

/// Test a straight-line fit and its fitted points.
#[test]
fn test_straight_line_fit() {
    let result = compute(ProblemKind::StraightLineFit, &paired_table()).unwrap();

    assert_relative_eq!(measure(&result, "a"), 1.75, epsilon = 1e-12);
    assert_relative_eq!(measure(&result, "b"), 0.09, epsilon = 1e-12);

    let curve = result.results.fitted().unwrap();
    assert!(matches!(curve, FittedCurve::Line(_)));
    assert_eq!(curve.points().len(), 5);
    assert_relative_eq!(curve.points()[2].x, 25.0);
    assert_relative_eq!(curve.points()[2].y, 4.0, epsilon = 1e-12);
    assert_eq!(result.overlay().map(<[Point<f64>]>::len), Some(5));
}

/// Test a parabola through exact quadratic data.
#[test]
fn test_parabola_fit() {
    let rows = points(&[(0.0, 1), (1.0, 4), (2.0, 9), (3.0, 16)]);
    let result = compute(ProblemKind::ParabolaFit, &rows).unwrap();

    assert_relative_eq!(measure(&result, "a"), 1.0, epsilon = 1e-9);
    assert_relative_eq!(measure(&result, "b"), 2.0, epsilon = 1e-9);
    assert_relative_eq!(measure(&result, "c"), 1.0, epsilon = 1e-9);

    let curve = result.results.fitted().unwrap();
    assert!(matches!(curve, FittedCurve::Curve(_)));
    assert_relative_eq!(curve.points()[3].y, 16.0, epsilon = 1e-8);
}

/// Test a parabola over year classes far from zero.
#[test]
fn test_parabola_fit_year_classes() {
    let rows = vec![
        Row::range(1990.0, 2000.0, 1),
        Row::range(2000.0, 2010.0, 1),
        Row::range(2010.0, 2020.0, 3),
        Row::range(2020.0, 2030.0, 7),
        Row::range(2030.0, 2040.0, 13),
    ];
    let result = compute(ProblemKind::ParabolaFit, &rows).unwrap();

    assert_relative_eq!(measure(&result, "a"), 40000.75, epsilon = 1e-6);
    assert_relative_eq!(measure(&result, "b"), -40.0, epsilon = 1e-9);
    assert_relative_eq!(measure(&result, "c"), 0.01, epsilon = 1e-12);

    let curve = result.results.fitted().unwrap();
    assert_relative_eq!(curve.points()[4].y, 13.0, epsilon = 1e-6);
}

/// Test a single-precision parabola through three points.
#[test]
fn test_parabola_fit_f32() {
    let rows = vec![
        Row::<f32>::point(10.0, 1),
        Row::point(20.0, 4),
        Row::point(30.0, 9),
    ];
    let result = compute(ProblemKind::ParabolaFit, &rows).unwrap();
    assert_relative_eq!(result.results.get("c").unwrap(), 0.01f32, epsilon = 1e-6);
}

/// Test an exponential fit.
#[test]
fn test_exponential_fit() {
    let rows = points(&[(4.0, 15), (6.0, 40), (8.0, 109), (10.0, 297)]);
    let result = compute(ProblemKind::ExponentialFit, &rows).unwrap();

    let a = measure(&result, "a");
    assert_abs_diff_eq!(a, 2.0333, epsilon = 0.05);
    assert_abs_diff_eq!(measure(&result, "b"), 0.4980, epsilon = 0.01);
    assert_relative_eq!(measure(&result, "A"), a.ln(), epsilon = 1e-12);
    assert_eq!(result.results.fitted().unwrap().points().len(), 4);
}

/// Test a power fit.
#[test]
fn test_power_fit() {
    let rows = points(&[(1.0, 2), (2.0, 8), (3.0, 18), (4.0, 32)]);
    let result = compute(ProblemKind::PowerFit, &rows).unwrap();

    assert_relative_eq!(measure(&result, "a"), 2.0, epsilon = 1e-9);
    assert_relative_eq!(measure(&result, "b"), 2.0, epsilon = 1e-9);

    let table = result.table();
    assert_relative_eq!(table[1].value("lnX").unwrap(), 2.0f64.ln(), epsilon = 1e-12);
    assert_relative_eq!(table[1].value("lnY").unwrap(), 8.0f64.ln(), epsilon = 1e-12);
}

// ============================================================================
// Table Layout Tests
// ============================================================================

/// Test each procedure's calculation-table columns.
#[test]
fn test_table_columns() {
    let cases: [(ProblemKind, &[&str]); 6] = [
        (
            ProblemKind::MeanMedianModeDiscrete,
            &["classInterval", "x", "frequency", "fx", "cumulativeFrequency"],
        ),
        (
            ProblemKind::MedianModeContinuous,
            &["classInterval", "frequency", "cumulativeFrequency", "midpoint"],
        ),
        (
            ProblemKind::DispersionContinuous,
            &[
                "classInterval",
                "x",
                "frequency",
                "fx",
                "deviation",
                "absDeviation",
                "fAbsDeviation",
                "deviationSquared",
                "fDeviationSquared",
            ],
        ),
        (
            ProblemKind::CorrelationCoefficient,
            &["classInterval", "x", "y", "xy", "xSquared", "ySquared"],
        ),
        (
            ProblemKind::StraightLineFit,
            &["classInterval", "x", "y", "xy", "xSquared"],
        ),
        (
            ProblemKind::ParabolaFit,
            &[
                "classInterval",
                "x",
                "y",
                "xSquared",
                "xCubed",
                "xFourth",
                "xy",
                "xSquaredY",
            ],
        ),
    ];

    for (kind, expected) in cases {
        let result = compute(kind, &paired_table()).unwrap();
        assert_eq!(column_names(&result), expected, "{kind}");
    }
}

/// Test the calculation table has one row per input row, in input order.
#[test]
fn test_table_preserves_row_order() {
    let rows = vec![
        Row::range(20.0, 30.0, 5),
        Row::range(0.0, 10.0, 2),
        Row::range(10.0, 20.0, 3),
    ];

    for kind in ProblemKind::ALL {
        let Ok(result) = compute(kind, &rows) else {
            continue;
        };
        let x: Vec<ClassInterval<f64>> = result
            .table()
            .iter()
            .map(|row| match row.get("classInterval") {
                Some(Cell::Interval(interval)) => *interval,
                other => panic!("unexpected cell {other:?}"),
            })
            .collect();
        assert_eq!(x, rows.iter().map(|r| r.interval).collect::<Vec<_>>(), "{kind}");
    }
}

/// Test repeated computations are identical.
#[test]
fn test_compute_is_deterministic() {
    for kind in ProblemKind::ALL {
        let first = compute(kind, &paired_table());
        let second = compute(kind, &paired_table());
        assert_eq!(first, second, "{kind}");
    }
}

/// Test every procedure carries formulas and only fits carry curves.
#[test]
fn test_formulas_and_curves_per_kind() {
    for kind in ProblemKind::ALL {
        let result = compute(kind, &paired_table()).unwrap();
        assert!(!result.formulas.is_empty(), "{kind}");
        assert_eq!(result.problem, kind);
        assert_eq!(result.results.fitted().is_some(), kind.is_fit(), "{kind}");
    }
}

/// Test results work in single precision.
#[test]
fn test_compute_f32() {
    let rows = vec![
        Row::<f32>::range(10.0, 20.0, 5),
        Row::range(20.0, 30.0, 8),
        Row::range(30.0, 40.0, 3),
    ];
    let result = compute(ProblemKind::MedianModeContinuous, &rows).unwrap();
    assert_relative_eq!(result.results.get("median").unwrap(), 23.75f32, epsilon = 1e-5);
}

// ============================================================================
// Domain Error Tests
// ============================================================================

/// Test correlation with constant frequencies fails on zero variance in y.
#[test]
fn test_correlation_zero_variance() {
    let rows = points(&[(1.0, 4), (2.0, 4), (3.0, 4)]);
    assert_eq!(
        compute(ProblemKind::CorrelationCoefficient, &rows),
        Err(DomainError::ZeroVariance { variable: "y" })
    );
}

/// Test a single distinct x fails regression of y on x.
#[test]
fn test_regression_zero_variance_x() {
    let rows = points(&[(5.0, 1), (5.0, 2)]);
    assert_eq!(
        compute(ProblemKind::RegressionYOnX, &rows),
        Err(DomainError::ZeroVariance { variable: "x" })
    );
}

/// Test a zero-frequency row makes an exponential fit undefined.
#[test]
fn test_exponential_zero_frequency() {
    let rows = points(&[(1.0, 3), (2.0, 0), (3.0, 7)]);
    assert_eq!(
        compute(ProblemKind::ExponentialFit, &rows),
        Err(DomainError::NonPositiveValue {
            variable: "y",
            row: 1,
            value: 0.0
        })
    );
}

/// Test a zero midpoint makes a power fit undefined.
#[test]
fn test_power_zero_midpoint() {
    let rows = points(&[(0.0, 3), (2.0, 5)]);
    assert_eq!(
        compute(ProblemKind::PowerFit, &rows),
        Err(DomainError::NonPositiveValue {
            variable: "x",
            row: 0,
            value: 0.0
        })
    );
}

/// Test a parabola through too few distinct points is singular.
#[test]
fn test_parabola_singular() {
    let rows = points(&[(1.0, 3), (1.0, 4), (2.0, 5)]);
    assert_eq!(
        compute(ProblemKind::ParabolaFit, &rows),
        Err(DomainError::SingularSystem)
    );
}

/// Test skewness on a single point fails on zero standard deviation.
#[test]
fn test_skewness_single_value() {
    let rows = points(&[(7.0, 10)]);
    assert_eq!(
        compute(ProblemKind::SkewnessKurtosis, &rows),
        Err(DomainError::ZeroStandardDeviation)
    );
}

/// Test tied modal classes interpolate from the first one.
#[test]
fn test_grouped_mode_tied_classes() {
    let rows = vec![
        Row::range(0.0, 10.0, 4),
        Row::range(10.0, 20.0, 4),
        Row::range(20.0, 30.0, 4),
    ];
    let result = compute(ProblemKind::MedianModeContinuous, &rows).unwrap();

    // 0 + ((4 − 0) / (8 − 0 − 4)) · 10
    assert_relative_eq!(measure(&result, "modalClassLower"), 0.0);
    assert_relative_eq!(measure(&result, "mode"), 10.0, epsilon = 1e-12);
}

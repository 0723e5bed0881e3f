//! The twelve supported procedures.
//!
//! ## Purpose
//!
//! [`ProblemKind`] is the closed set of procedures the engine can run. Each
//! variant carries its display label (the wording shown to users), a
//! kebab-case slug for command lines, and the preconditions the validator
//! enforces before any arithmetic happens.
//!
//! ## Invariants
//!
//! * Labels and slugs are unique and round-trip through `FromStr`.
//! * Fitting procedures are exactly the ones that produce fitted points.

// External dependencies
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
use serde::{Serialize, Serializer};

// Internal dependencies
use crate::primitives::errors::InputError;

/// A statistics procedure over a frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemKind {
    /// Mean, median, and mode of discrete data.
    MeanMedianModeDiscrete,

    /// Grouped median and mode of continuous data.
    MedianModeContinuous,

    /// Mean deviation and standard deviation of discrete data.
    DispersionDiscrete,

    /// Mean deviation and standard deviation of continuous data.
    DispersionContinuous,

    /// Moment coefficients of skewness and kurtosis.
    SkewnessKurtosis,

    /// Pearson correlation between midpoint and frequency.
    CorrelationCoefficient,

    /// Regression line of frequency on midpoint.
    RegressionYOnX,

    /// Regression line of midpoint on frequency.
    RegressionXOnY,

    /// Least-squares straight line.
    StraightLineFit,

    /// Least-squares parabola.
    ParabolaFit,

    /// Log-linearized exponential curve.
    ExponentialFit,

    /// Log-linearized power curve.
    PowerFit,
}

impl ProblemKind {
    /// All procedures, in menu order.
    pub const ALL: [ProblemKind; 12] = [
        Self::MeanMedianModeDiscrete,
        Self::MedianModeContinuous,
        Self::DispersionDiscrete,
        Self::DispersionContinuous,
        Self::SkewnessKurtosis,
        Self::CorrelationCoefficient,
        Self::RegressionYOnX,
        Self::RegressionXOnY,
        Self::StraightLineFit,
        Self::ParabolaFit,
        Self::ExponentialFit,
        Self::PowerFit,
    ];

    /// Human-readable name of the procedure.
    pub fn label(self) -> &'static str {
        match self {
            Self::MeanMedianModeDiscrete => "Mean, Median & Mode (Discrete Data)",
            Self::MedianModeContinuous => "Median & Mode (Continuous Data)",
            Self::DispersionDiscrete => "Mean Deviation & Std Dev (Discrete Data)",
            Self::DispersionContinuous => "Mean Deviation & Std Dev (Continuous Data)",
            Self::SkewnessKurtosis => "Skewness & Kurtosis",
            Self::CorrelationCoefficient => "Correlation Coefficient",
            Self::RegressionYOnX => "Regression (Y on X)",
            Self::RegressionXOnY => "Regression (X on Y)",
            Self::StraightLineFit => "Straight Line Fit",
            Self::ParabolaFit => "Parabola Fit",
            Self::ExponentialFit => "Exponential Curve Fit",
            Self::PowerFit => "Power Curve Fit",
        }
    }

    /// Short identifier for command lines and config files.
    pub fn slug(self) -> &'static str {
        match self {
            Self::MeanMedianModeDiscrete => "mean-median-mode",
            Self::MedianModeContinuous => "median-mode-continuous",
            Self::DispersionDiscrete => "dispersion-discrete",
            Self::DispersionContinuous => "dispersion-continuous",
            Self::SkewnessKurtosis => "skewness-kurtosis",
            Self::CorrelationCoefficient => "correlation",
            Self::RegressionYOnX => "regression-y-on-x",
            Self::RegressionXOnY => "regression-x-on-y",
            Self::StraightLineFit => "straight-line",
            Self::ParabolaFit => "parabola",
            Self::ExponentialFit => "exponential",
            Self::PowerFit => "power",
        }
    }

    /// Minimum number of rows the procedure needs.
    pub fn min_rows(self) -> usize {
        match self {
            Self::CorrelationCoefficient
            | Self::RegressionYOnX
            | Self::RegressionXOnY
            | Self::StraightLineFit
            | Self::ExponentialFit
            | Self::PowerFit => 2,
            Self::ParabolaFit => 3,
            _ => 1,
        }
    }

    /// True when every row must be a proper class `low < high`.
    pub fn requires_ranges(self) -> bool {
        matches!(
            self,
            Self::MedianModeContinuous | Self::DispersionContinuous
        )
    }

    /// True when the result carries a fitted line or curve.
    pub fn is_fit(self) -> bool {
        matches!(
            self,
            Self::StraightLineFit | Self::ParabolaFit | Self::ExponentialFit | Self::PowerFit
        )
    }

    /// Whether a renderer should draw chart overlays for this procedure.
    ///
    /// Correlation and both regressions are presented as numbers only.
    pub fn shows_overlay(self) -> bool {
        !matches!(
            self,
            Self::CorrelationCoefficient | Self::RegressionYOnX | Self::RegressionXOnY
        )
    }
}

impl Display for ProblemKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProblemKind {
    type Err = InputError;

    /// Accepts either the label or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.label() == text || kind.slug().eq_ignore_ascii_case(text))
            .ok_or_else(|| InputError::UnknownProblem(s.to_string()))
    }
}

impl Serialize for ProblemKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

//! Formula text attached to each result.
//!
//! Formulas describe the method, not the data: the same procedure always
//! returns the same list, in the order a reader would apply them.

// External dependencies
use serde::ser::SerializeMap;
use serde::Serializer;

// Internal dependencies
use crate::engine::problem::ProblemKind;

/// A named formula, e.g. `mean → x̄ = Σfx / N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formula {
    /// Short key.
    pub key: &'static str,

    /// Human-readable formula.
    pub text: &'static str,
}

const fn formula(key: &'static str, text: &'static str) -> Formula {
    Formula { key, text }
}

const MEAN: Formula = formula("mean", "x̄ = Σfx / N");
const MEAN_DEVIATION: Formula = formula("meanDeviation", "M.D. = Σf|x − x̄| / N");
const STANDARD_DEVIATION: Formula = formula("standardDeviation", "σ = √(Σf(x − x̄)² / N)");
const PEARSON: Formula = formula(
    "correlation",
    "r = (nΣxy − ΣxΣy) / √((nΣx² − (Σx)²)(nΣy² − (Σy)²))",
);
const LINE_NORMAL: Formula = formula("normalEquations", "Σy = na + bΣx;  Σxy = aΣx + bΣx²");

/// Formulas used by `kind`, in presentation order.
pub fn formulas_for(kind: ProblemKind) -> Vec<Formula> {
    match kind {
        ProblemKind::MeanMedianModeDiscrete => vec![
            MEAN,
            formula("median", "Median = x of the first row with cf ≥ N/2"),
            formula("mode", "Mode = x of the row with the highest frequency"),
        ],
        ProblemKind::MedianModeContinuous => vec![
            formula("median", "Median = L + ((N/2 − cf) / f) × h"),
            formula(
                "mode",
                "Mode = L + ((f₁ − f₀) / (2f₁ − f₀ − f₂)) × h",
            ),
        ],
        ProblemKind::DispersionDiscrete | ProblemKind::DispersionContinuous => {
            vec![MEAN, MEAN_DEVIATION, STANDARD_DEVIATION]
        }
        ProblemKind::SkewnessKurtosis => vec![
            MEAN,
            formula("moment", "μₖ = Σf(x − x̄)ᵏ / N"),
            formula("skewness", "β₁ = μ₃ / σ³"),
            formula("kurtosis", "β₂ = μ₄ / σ⁴"),
        ],
        ProblemKind::CorrelationCoefficient => vec![PEARSON],
        ProblemKind::RegressionYOnX => vec![
            formula("regression", "y = a + bx"),
            formula("slope", "b = (nΣxy − ΣxΣy) / (nΣx² − (Σx)²)"),
            formula("intercept", "a = ȳ − b·x̄"),
        ],
        ProblemKind::RegressionXOnY => vec![
            formula("regression", "x = a + by"),
            formula("slope", "b = (nΣxy − ΣxΣy) / (nΣy² − (Σy)²)"),
            formula("intercept", "a = x̄ − b·ȳ"),
        ],
        ProblemKind::StraightLineFit => vec![formula("line", "y = a + bx"), LINE_NORMAL],
        ProblemKind::ParabolaFit => vec![
            formula("parabola", "y = a + bx + cx²"),
            formula(
                "normalEquations",
                "Σy = na + bΣx + cΣx²;  Σxy = aΣx + bΣx² + cΣx³;  Σx²y = aΣx² + bΣx³ + cΣx⁴",
            ),
        ],
        ProblemKind::ExponentialFit => vec![
            formula("curve", "y = a·e^(bx)"),
            formula("linearized", "ln y = A + bx,  A = ln a"),
            formula(
                "normalEquations",
                "Σln y = nA + bΣx;  Σx·ln y = AΣx + bΣx²",
            ),
        ],
        ProblemKind::PowerFit => vec![
            formula("curve", "y = a·x^b"),
            formula("linearized", "ln y = A + b·ln x,  A = ln a"),
            formula(
                "normalEquations",
                "Σln y = nA + bΣln x;  Σln x·ln y = AΣln x + bΣ(ln x)²",
            ),
        ],
    }
}

/// Serialize formulas as a `key → text` map.
pub fn serialize_formulas<S: Serializer>(
    formulas: &[Formula],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(formulas.len()))?;
    for f in formulas {
        map.serialize_entry(f.key, f.text)?;
    }
    map.end()
}

pub mod units;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct NumericTolerance {
    #[serde(rename = "absTol")]
    pub abs_tol: f64,
    #[serde(rename = "relTol")]
    pub rel_tol: f64,
    #[serde(rename = "relativeFloor", default)]
    pub relative_floor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToleranceComparison {
    pub abs_diff: f64,
    pub rel_diff: f64,
    pub passes: bool,
}

/// Passes when either the absolute or the relative difference is within
/// tolerance. Two `NaN` values compare as equal, since both mean "no data".
pub fn compare_with_tolerance(
    expected: f64,
    actual: f64,
    tolerance: NumericTolerance,
) -> ToleranceComparison {
    if expected.is_nan() || actual.is_nan() {
        let passes = expected.is_nan() && actual.is_nan();
        return ToleranceComparison {
            abs_diff: if passes { 0.0 } else { f64::NAN },
            rel_diff: if passes { 0.0 } else { f64::NAN },
            passes,
        };
    }

    let abs_diff = (actual - expected).abs();
    let rel_denominator = expected.abs().max(tolerance.relative_floor);
    let rel_diff = abs_diff / rel_denominator;
    let passes = abs_diff <= tolerance.abs_tol || abs_diff <= tolerance.rel_tol * rel_denominator;

    ToleranceComparison {
        abs_diff,
        rel_diff,
        passes,
    }
}

pub fn format_numeric(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    if value == f64::INFINITY {
        return "inf".to_string();
    }

    if value == f64::NEG_INFINITY {
        return "-inf".to_string();
    }

    format!("{value:.6E}")
}

fn kahan_add(sum: &mut f64, correction: &mut f64, value: f64) {
    let corrected = value - *correction;
    let next = *sum + corrected;
    *correction = (next - *sum) - corrected;
    *sum = next;
}

pub fn stable_sum(values: impl IntoIterator<Item = f64>) -> f64 {
    let mut sum = 0.0;
    let mut correction = 0.0;

    for value in values {
        kahan_add(&mut sum, &mut correction, value);
    }

    sum
}

pub fn stable_weighted_sum(values: &[f64], weights: &[f64]) -> Option<f64> {
    if values.len() != weights.len() {
        return None;
    }

    Some(stable_sum(
        values.iter().zip(weights).map(|(&value, &weight)| value * weight),
    ))
}

//! δ-values and bracket notation of measured ratios against solar ratios.

use super::resolver::Granularity;
use crate::domain::{AbundanceError, AbundanceResult, OneOrMany};

/// (measured / solar - 1) * factor.
pub fn delta(measured: f64, solar: f64, factor: f64) -> f64 {
    (measured / solar - 1.0) * factor
}

/// log10(measured) - log10(solar), `NaN` unless both ratios are positive.
pub fn bracket(measured: f64, solar: f64) -> f64 {
    if measured > 0.0 && solar > 0.0 {
        measured.log10() - solar.log10()
    } else {
        f64::NAN
    }
}

pub fn validate_delta_factor(factor: f64) -> AbundanceResult<()> {
    if factor.is_finite() && factor > 0.0 {
        Ok(())
    } else {
        Err(AbundanceError::invalid_option(
            "INPUT.INVALID_DELTA_FACTOR",
            format!("delta factor must be a positive finite number, got {factor}"),
        ))
    }
}

/// Pairs measured values with solar ratios.
///
/// A single solar ratio is compared with every measured value and the
/// result keeps the shape of the measured values. Several solar ratios need
/// a sequence of measured values of the same length.
pub fn align_measurements(
    solar: &[f64],
    measured: &OneOrMany<f64>,
    granularity: Granularity,
) -> AbundanceResult<Vec<(f64, f64)>> {
    if solar.len() == 1 {
        return Ok(measured.iter().map(|&value| (value, solar[0])).collect());
    }
    match measured {
        OneOrMany::Many(values) if values.len() == solar.len() => {
            Ok(values.iter().copied().zip(solar.iter().copied()).collect())
        }
        _ => Err(AbundanceError::shape_mismatch(
            "INPUT.SHAPE_MISMATCH",
            format!(
                "length of requested {} ratios ({}) does not match length of provided values ({})",
                granularity.noun(),
                solar.len(),
                measured.len()
            ),
        )),
    }
}

/// Shape of the aligned result: the measured shape for a single solar ratio,
/// a sequence otherwise.
pub fn result_is_scalar(solar: &[f64], measured: &OneOrMany<f64>) -> bool {
    solar.len() == 1 && measured.is_one()
}

#[cfg(test)]
mod tests {
    use super::{align_measurements, bracket, delta, result_is_scalar, validate_delta_factor};
    use crate::domain::{AbundanceErrorKind, OneOrMany};
    use crate::modules::resolver::Granularity;

    #[test]
    fn delta_scales_the_relative_deviation() {
        assert_eq!(delta(2.0, 1.0, 1000.0), 1000.0);
        assert_eq!(delta(1.0, 1.0, 10_000.0), 0.0);
        assert!(delta(1.0, f64::NAN, 1000.0).is_nan());
    }

    #[test]
    fn bracket_is_undefined_for_non_positive_ratios() {
        assert!((bracket(100.0, 10.0) - 1.0).abs() < 1.0e-15);
        assert!(bracket(0.0, 1.0).is_nan());
        assert!(bracket(1.0, -1.0).is_nan());
        assert!(bracket(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn single_solar_ratio_broadcasts_over_measurements() {
        let measured = OneOrMany::Many(vec![0.1, 0.2, 0.3]);
        let aligned = align_measurements(&[0.5], &measured, Granularity::Isotope)
            .expect("single ratio broadcasts");
        assert_eq!(aligned, vec![(0.1, 0.5), (0.2, 0.5), (0.3, 0.5)]);
        assert!(!result_is_scalar(&[0.5], &measured));
        assert!(result_is_scalar(&[0.5], &OneOrMany::One(0.1)));
    }

    #[test]
    fn several_solar_ratios_need_matching_measurements() {
        let solar = [0.5, 0.25];
        let scalar = align_measurements(&solar, &OneOrMany::One(0.1), Granularity::Element)
            .expect_err("scalar against two ratios");
        assert_eq!(scalar.kind(), AbundanceErrorKind::ShapeMismatch);
        assert!(scalar.message().starts_with("length of requested element ratios"));

        let short = align_measurements(&solar, &OneOrMany::Many(vec![0.1]), Granularity::Isotope)
            .expect_err("one value against two ratios");
        assert_eq!(short.placeholder(), "INPUT.SHAPE_MISMATCH");

        let aligned = align_measurements(&solar, &OneOrMany::Many(vec![1.0, 2.0]), Granularity::Isotope)
            .expect("matching lengths");
        assert_eq!(aligned, vec![(1.0, 0.5), (2.0, 0.25)]);
    }

    #[test]
    fn delta_factor_must_be_positive() {
        assert!(validate_delta_factor(1.0).is_ok());
        assert!(validate_delta_factor(100_000.0).is_ok());
        for factor in [0.0, -1000.0, f64::NAN, f64::INFINITY] {
            let error = validate_delta_factor(factor).expect_err("factor should be rejected");
            assert_eq!(error.placeholder(), "INPUT.INVALID_DELTA_FACTOR");
        }
    }
}

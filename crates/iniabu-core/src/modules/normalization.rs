//! Internal normalization: removes mass-dependent fractionation from a
//! measured isotope pattern using two normalization isotopes, then reports
//! the residual deviation from solar.

use super::notation::delta;
use crate::domain::FractionationLaw;

/// Solar and mass data of the two normalization isotopes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationPair {
    pub major_mass: f64,
    pub minor_mass: f64,
    /// Solar minor/major ratio.
    pub solar_minor_ratio: f64,
}

/// One target isotope: its mass, solar target/major ratio and measured value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizationTarget {
    pub mass: f64,
    pub solar_ratio: f64,
    pub measured: f64,
}

/// Applies `law` to every target.
///
/// Measured values of targets and of the normalization isotopes are raw
/// values; they are divided by `measured_major` before comparison with solar.
pub fn normalize(
    pair: NormalizationPair,
    measured_major: f64,
    measured_minor: f64,
    targets: &[NormalizationTarget],
    factor: f64,
    law: FractionationLaw,
) -> Vec<f64> {
    let measured_minor_ratio = measured_minor / measured_major;
    match law {
        FractionationLaw::Exponential => {
            let beta = exponential_beta(pair, measured_minor_ratio);
            targets
                .iter()
                .map(|target| {
                    let measured_ratio = target.measured / measured_major;
                    let corrected = measured_ratio / (target.mass / pair.major_mass).powf(beta);
                    delta(corrected, target.solar_ratio, factor)
                })
                .collect()
        }
        FractionationLaw::Linear => {
            let minor_delta = delta(measured_minor_ratio, pair.solar_minor_ratio, factor);
            targets
                .iter()
                .map(|target| {
                    let target_delta = delta(target.measured / measured_major, target.solar_ratio, factor);
                    let mass_term =
                        (pair.major_mass - target.mass) / (pair.major_mass - pair.minor_mass);
                    clamp_linear(target_delta - mass_term * minor_delta, factor)
                })
                .collect()
        }
    }
}

/// Fractionation exponent β from the measured and solar minor/major ratios.
pub fn exponential_beta(pair: NormalizationPair, measured_minor_ratio: f64) -> f64 {
    (measured_minor_ratio / pair.solar_minor_ratio).log10()
        / (pair.minor_mass / pair.major_mass).log10()
}

// A ratio cannot be negative, so nothing lies below -factor.
fn clamp_linear(value: f64, factor: f64) -> f64 {
    if value < -factor { -factor } else { value }
}

//! Conversions between linear number abundances, the astronomical log scale
//! and mass fractions.
//!
//! Missing data is `NaN` and propagates: every conversion of a `NaN` input
//! yields `NaN`, and so does the log of a non-positive abundance.

use super::stable_sum;
use crate::common::constants::{AVOGADRO_CONSTANT, LOG_ABUNDANCE_OFFSET};
use crate::domain::AbundanceUnit;

/// log10(N_X / N_H) + 12.
pub fn linear_to_log(abundance: f64, hydrogen: f64) -> f64 {
    if !is_positive(abundance) || !is_positive(hydrogen) {
        return f64::NAN;
    }
    (abundance / hydrogen).log10() + LOG_ABUNDANCE_OFFSET
}

pub fn log_to_linear(value: f64, hydrogen: f64) -> f64 {
    10f64.powf(value - LOG_ABUNDANCE_OFFSET) * hydrogen
}

/// ρ = Σ N_k m_k / N_A over every species with data.
pub fn mass_density(abundances: &[f64], masses: &[f64]) -> f64 {
    stable_sum(
        abundances
            .iter()
            .zip(masses)
            .map(|(abundance, mass)| abundance * mass)
            .filter(|weighted| !weighted.is_nan()),
    ) / AVOGADRO_CONSTANT
}

pub fn linear_to_mass_fraction(abundance: f64, mass: f64, density: f64) -> f64 {
    if !is_positive(density) {
        return f64::NAN;
    }
    abundance * mass / (density * AVOGADRO_CONSTANT)
}

pub fn mass_fraction_to_linear(fraction: f64, mass: f64, density: f64) -> f64 {
    if !is_positive(density) {
        return f64::NAN;
    }
    fraction * density * AVOGADRO_CONSTANT / mass
}

// False for NaN as well as for zero and negative values.
fn is_positive(value: f64) -> bool {
    value > 0.0
}

/// Reference quantities a set of abundances is converted against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitBasis {
    hydrogen_abundance: f64,
    mass_density: f64,
}

impl UnitBasis {
    pub const fn new(hydrogen_abundance: f64, mass_density: f64) -> Self {
        Self {
            hydrogen_abundance,
            mass_density,
        }
    }

    pub fn from_linear(abundances: &[f64], masses: &[f64], hydrogen_abundance: f64) -> Self {
        Self::new(hydrogen_abundance, mass_density(abundances, masses))
    }

    pub const fn hydrogen_abundance(&self) -> f64 {
        self.hydrogen_abundance
    }

    pub const fn mass_density(&self) -> f64 {
        self.mass_density
    }

    pub fn linear_from(&self, value: f64, mass: f64, unit: AbundanceUnit) -> f64 {
        match unit {
            AbundanceUnit::NumLin => value,
            AbundanceUnit::NumLog => log_to_linear(value, self.hydrogen_abundance),
            AbundanceUnit::MassFraction => mass_fraction_to_linear(value, mass, self.mass_density),
        }
    }

    pub fn linear_to(&self, value: f64, mass: f64, unit: AbundanceUnit) -> f64 {
        match unit {
            AbundanceUnit::NumLin => value,
            AbundanceUnit::NumLog => linear_to_log(value, self.hydrogen_abundance),
            AbundanceUnit::MassFraction => linear_to_mass_fraction(value, mass, self.mass_density),
        }
    }

    /// Converting into the unit a value is already in returns it untouched.
    pub fn convert(&self, value: f64, mass: f64, from: AbundanceUnit, to: AbundanceUnit) -> f64 {
        if from == to {
            return value;
        }
        self.linear_to(self.linear_from(value, mass, from), mass, to)
    }

    pub fn convert_all(
        &self,
        values: &[f64],
        masses: &[f64],
        from: AbundanceUnit,
        to: AbundanceUnit,
    ) -> Vec<f64> {
        values
            .iter()
            .zip(masses)
            .map(|(&value, &mass)| self.convert(value, mass, from, to))
            .collect()
    }
}

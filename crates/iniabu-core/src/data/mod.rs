//! Bundled reference datasets as static tables.

mod asplund09;
mod lodders09;
mod nist15;

use crate::common::constants::{NORMALIZATION_ANCHOR, NORMALIZATION_ANCHOR_ABUNDANCE};
use crate::domain::Database;
use std::collections::HashMap;

/// One isotope row of a dataset, before the table attaches masses and indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SourceIsotope {
    pub symbol: &'static str,
    pub mass_number: u16,
    pub relative_abundance: f64,
    pub solar_abundance: f64,
}

pub(crate) fn source_isotopes(database: Database) -> Vec<SourceIsotope> {
    match database {
        Database::Lodders09 => lodders09_isotopes(),
        Database::Asplund09 => asplund09_isotopes(),
        Database::Nist => nist15_isotopes(),
    }
}

/// Isotope masses in u, keyed by (symbol, mass number).
pub(crate) fn isotope_masses() -> HashMap<(&'static str, u16), f64> {
    nist15::NIST15_ISOTOPES
        .iter()
        .map(|&(symbol, mass_number, mass, _)| ((symbol, mass_number), mass))
        .collect()
}

fn lodders09_isotopes() -> Vec<SourceIsotope> {
    lodders09::LODDERS09_ISOTOPES
        .iter()
        .map(
            |&(symbol, mass_number, relative_abundance, solar_abundance)| SourceIsotope {
                symbol,
                mass_number,
                relative_abundance,
                solar_abundance,
            },
        )
        .collect()
}

fn nist15_isotopes() -> Vec<SourceIsotope> {
    nist15::NIST15_ISOTOPES
        .iter()
        .map(|&(symbol, mass_number, _, relative_abundance)| SourceIsotope {
            symbol,
            mass_number,
            relative_abundance,
            solar_abundance: f64::NAN,
        })
        .collect()
}

fn asplund09_isotopes() -> Vec<SourceIsotope> {
    let log_epsilon: HashMap<&str, Option<f64>> =
        asplund09::ASPLUND09_ELEMENTS.iter().copied().collect();
    let anchor = log_epsilon
        .get(NORMALIZATION_ANCHOR)
        .copied()
        .flatten()
        .unwrap_or(f64::NAN);

    asplund09::ASPLUND09_ISOTOPES
        .iter()
        .map(|&(symbol, mass_number, relative_abundance)| {
            let element_abundance = match log_epsilon.get(symbol).copied().flatten() {
                Some(value) => 10f64.powf(value - anchor) * NORMALIZATION_ANCHOR_ABUNDANCE,
                None => f64::NAN,
            };
            SourceIsotope {
                symbol,
                mass_number,
                relative_abundance,
                solar_abundance: relative_abundance * element_abundance,
            }
        })
        .collect()
}

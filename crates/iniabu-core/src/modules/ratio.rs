//! Solar abundance ratios over resolved requests.

use super::resolver::{Granularity, RatioRequest};
use crate::domain::AbundanceUnit;
use crate::table::AbundanceTable;

/// Ratios are number ratios unless mass fractions are requested, either
/// explicitly or by the session unit when no override is given. The log
/// unit still yields linear ratios.
pub fn uses_mass_fraction(session_unit: AbundanceUnit, mass_fraction: Option<bool>) -> bool {
    mass_fraction.unwrap_or(session_unit == AbundanceUnit::MassFraction)
}

/// Computes one solar ratio per pair of `request`.
///
/// Missing abundances give `NaN` for that position. Two isotopes of the same
/// element without solar data fall back to their relative abundances, so
/// isotope ratios stay defined for terrestrial-only datasets.
pub fn solar_ratios(table: &AbundanceTable, request: &RatioRequest, mass_fraction: bool) -> Vec<f64> {
    let unit = if mass_fraction {
        AbundanceUnit::MassFraction
    } else {
        AbundanceUnit::NumLin
    };

    match request.granularity() {
        Granularity::Element => {
            let solar = table.element_solar_abundances(unit);
            request
                .pairs()
                .iter()
                .map(|&(nominator, denominator)| solar[nominator] / solar[denominator])
                .collect()
        }
        Granularity::Isotope => request
            .pairs()
            .iter()
            .map(|&(nominator, denominator)| isotope_ratio(table, unit, nominator, denominator))
            .collect(),
    }
}

pub(crate) fn isotope_ratio(
    table: &AbundanceTable,
    unit: AbundanceUnit,
    nominator: usize,
    denominator: usize,
) -> f64 {
    let solar = table.isotope_solar_abundances(unit);
    let (top, bottom) = (solar[nominator], solar[denominator]);
    if top.is_nan()
        && bottom.is_nan()
        && table.isotope(nominator).element() == table.isotope(denominator).element()
    {
        let relative = table.isotope_relative_abundances(unit);
        return relative[nominator] / relative[denominator];
    }
    top / bottom
}

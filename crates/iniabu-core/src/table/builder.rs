use super::{AbundanceTable, ElementRecord, IsotopeRecord, Representation};
use crate::common::constants::{LOG_REFERENCE_ELEMENT, RELATIVE_ABUNDANCE_SUM_TOLERANCE};
use crate::common::elements::atomic_number_for_symbol;
use crate::data::{SourceIsotope, isotope_masses, source_isotopes};
use crate::domain::{AbundanceUnit, Database, IsotopeKey};
use crate::numerics::units::UnitBasis;
use crate::numerics::{stable_sum, stable_weighted_sum};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("dataset '{database}' lists unknown element symbol '{symbol}'")]
    UnknownElement { database: Database, symbol: String },
    #[error("dataset '{database}' lists isotope '{isotope}' without a known isotope mass")]
    MissingMass {
        database: Database,
        isotope: IsotopeKey,
    },
    #[error("dataset '{database}' lists isotope '{isotope}' more than once")]
    DuplicateIsotope {
        database: Database,
        isotope: IsotopeKey,
    },
    #[error("relative abundances of '{symbol}' in dataset '{database}' sum to {sum}")]
    RelativeAbundanceSum {
        database: Database,
        symbol: String,
        sum: f64,
    },
}

pub(super) fn build_table(database: Database) -> Result<AbundanceTable, TableError> {
    let masses = isotope_masses();
    let mut grouped: BTreeMap<u8, Vec<SourceIsotope>> = BTreeMap::new();
    for row in source_isotopes(database) {
        let atomic_number =
            atomic_number_for_symbol(row.symbol).ok_or_else(|| TableError::UnknownElement {
                database,
                symbol: row.symbol.to_string(),
            })?;
        grouped.entry(atomic_number).or_default().push(row);
    }

    let mut elements = Vec::with_capacity(grouped.len());
    let mut isotopes = Vec::new();
    let mut element_index = HashMap::with_capacity(grouped.len());
    let mut isotope_index = HashMap::new();

    for (atomic_number, mut rows) in grouped {
        rows.sort_by_key(|row| row.mass_number);
        let element = elements.len();
        let start = isotopes.len();
        let symbol = rows[0].symbol;

        for row in &rows {
            let key = IsotopeKey::new(row.symbol, row.mass_number);
            let mass = masses
                .get(&(row.symbol, row.mass_number))
                .copied()
                .ok_or_else(|| TableError::MissingMass {
                    database,
                    isotope: key.clone(),
                })?;
            if isotope_index.insert(key.clone(), isotopes.len()).is_some() {
                return Err(TableError::DuplicateIsotope {
                    database,
                    isotope: key,
                });
            }
            isotopes.push(IsotopeRecord {
                key,
                element,
                mass,
                relative_abundance: row.relative_abundance,
                solar_abundance: row.solar_abundance,
            });
        }

        let members = &isotopes[start..];
        let relative: Vec<f64> = members.iter().map(|isotope| isotope.relative_abundance).collect();
        let member_masses: Vec<f64> = members.iter().map(|isotope| isotope.mass).collect();
        let relative_sum = stable_sum(relative.iter().copied());
        if relative_sum != 0.0 && (relative_sum - 1.0).abs() > RELATIVE_ABUNDANCE_SUM_TOLERANCE {
            return Err(TableError::RelativeAbundanceSum {
                database,
                symbol: symbol.to_string(),
                sum: relative_sum,
            });
        }
        let mass = match stable_weighted_sum(&relative, &member_masses) {
            Some(weighted) if relative_sum > 0.0 => weighted / relative_sum,
            _ => f64::NAN,
        };
        let solar_abundance = stable_sum(members.iter().map(|isotope| isotope.solar_abundance));

        element_index.insert(symbol.to_string(), element);
        elements.push(ElementRecord {
            symbol: symbol.to_string(),
            atomic_number,
            mass,
            solar_abundance,
            isotopes: start..isotopes.len(),
        });
    }

    let linear = Representation {
        element_solar: elements.iter().map(|element| element.solar_abundance).collect(),
        isotope_solar: isotopes.iter().map(|isotope| isotope.solar_abundance).collect(),
        isotope_relative: isotopes
            .iter()
            .map(|isotope| isotope.relative_abundance)
            .collect(),
    };
    let hydrogen = element_index
        .get(LOG_REFERENCE_ELEMENT)
        .map_or(f64::NAN, |&index| linear.element_solar[index]);
    let log = log_representation(&linear, hydrogen);
    let mass_fraction = mass_fraction_representation(&linear, &elements, &isotopes);

    tracing::trace!(
        database = %database,
        elements = elements.len(),
        isotopes = isotopes.len(),
        "built abundance table"
    );

    Ok(AbundanceTable {
        database,
        elements,
        isotopes,
        element_index,
        isotope_index,
        linear,
        log,
        mass_fraction,
    })
}

fn log_representation(linear: &Representation, hydrogen: f64) -> Representation {
    let basis = UnitBasis::new(hydrogen, f64::NAN);
    let to_log = |values: &[f64]| -> Vec<f64> {
        values
            .iter()
            .map(|&value| basis.linear_to(value, f64::NAN, AbundanceUnit::NumLog))
            .collect()
    };
    Representation {
        element_solar: to_log(&linear.element_solar),
        isotope_solar: to_log(&linear.isotope_solar),
        isotope_relative: linear.isotope_relative.clone(),
    }
}

fn mass_fraction_representation(
    linear: &Representation,
    elements: &[ElementRecord],
    isotopes: &[IsotopeRecord],
) -> Representation {
    let element_masses: Vec<f64> = elements.iter().map(|element| element.mass).collect();
    let isotope_masses: Vec<f64> = isotopes.iter().map(|isotope| isotope.mass).collect();

    let element_basis = UnitBasis::from_linear(&linear.element_solar, &element_masses, f64::NAN);
    let isotope_basis = UnitBasis::from_linear(&linear.isotope_solar, &isotope_masses, f64::NAN);

    let mut isotope_relative = Vec::with_capacity(isotopes.len());
    for element in elements {
        let range = element.isotopes.clone();
        let within = UnitBasis::from_linear(
            &linear.isotope_relative[range.clone()],
            &isotope_masses[range.clone()],
            f64::NAN,
        );
        isotope_relative.extend(within.convert_all(
            &linear.isotope_relative[range.clone()],
            &isotope_masses[range],
            AbundanceUnit::NumLin,
            AbundanceUnit::MassFraction,
        ));
    }

    Representation {
        element_solar: element_basis.convert_all(
            &linear.element_solar,
            &element_masses,
            AbundanceUnit::NumLin,
            AbundanceUnit::MassFraction,
        ),
        isotope_solar: isotope_basis.convert_all(
            &linear.isotope_solar,
            &isotope_masses,
            AbundanceUnit::NumLin,
            AbundanceUnit::MassFraction,
        ),
        isotope_relative,
    }
}

#[cfg(test)]
mod tests {
    use super::build_table;
    use crate::domain::{AbundanceUnit, Database, IsotopeKey};

    #[test]
    fn elements_follow_atomic_number_order() {
        let table = build_table(Database::Asplund09).expect("asplund09 should build");
        let atomic_numbers: Vec<u8> = table
            .elements()
            .iter()
            .map(|element| element.atomic_number())
            .collect();
        assert!(atomic_numbers.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(table.elements()[0].symbol(), "H");
    }

    #[test]
    fn mass_weighted_relative_abundances_sum_to_one_within_an_element() {
        let table = build_table(Database::Lodders09).expect("lodders09 should build");
        let nickel = table.element_index("Ni").expect("nickel should exist");
        let range = table.element(nickel).isotope_range();
        let fractions = &table.isotope_relative_abundances(AbundanceUnit::MassFraction)[range];
        let total: f64 = fractions.iter().sum();
        assert!((total - 1.0).abs() < 1.0e-12, "nickel mass fractions sum to {total}");
    }

    #[test]
    fn nist_keeps_radioactive_isotopes_addressable() {
        let table = build_table(Database::Nist).expect("nist should build");
        let technetium = table
            .isotope_index(&IsotopeKey::new("Tc", 98))
            .expect("Tc-98 should exist");
        assert_eq!(table.isotope(technetium).relative_abundance(), 0.0);
        let element = table.isotope(technetium).element();
        assert!(table.element(element).mass().is_nan());
    }
}

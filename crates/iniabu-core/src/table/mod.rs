//! The immutable reference table of one dataset.

mod builder;

pub use builder::TableError;

use crate::common::constants::{NORMALIZATION_ANCHOR, NORMALIZATION_ANCHOR_ABUNDANCE};
use crate::domain::{AbundanceError, AbundanceUnit, Database, IsotopeKey};
use std::collections::HashMap;
use std::ops::Range;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, PartialEq)]
pub struct IsotopeRecord {
    key: IsotopeKey,
    element: usize,
    mass: f64,
    relative_abundance: f64,
    solar_abundance: f64,
}

impl IsotopeRecord {
    pub fn key(&self) -> &IsotopeKey {
        &self.key
    }

    pub fn symbol(&self) -> &str {
        self.key.symbol()
    }

    pub const fn mass_number(&self) -> u16 {
        self.key.mass_number()
    }

    /// Index of the parent element in [`AbundanceTable::elements`].
    pub const fn element(&self) -> usize {
        self.element
    }

    pub const fn mass(&self) -> f64 {
        self.mass
    }

    pub const fn relative_abundance(&self) -> f64 {
        self.relative_abundance
    }

    pub const fn solar_abundance(&self) -> f64 {
        self.solar_abundance
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    symbol: String,
    atomic_number: u8,
    mass: f64,
    solar_abundance: f64,
    isotopes: Range<usize>,
}

impl ElementRecord {
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn atomic_number(&self) -> u8 {
        self.atomic_number
    }

    /// Relative-abundance weighted mean of the isotope masses.
    pub const fn mass(&self) -> f64 {
        self.mass
    }

    pub const fn solar_abundance(&self) -> f64 {
        self.solar_abundance
    }

    /// Indices of this element's isotopes, ascending by mass number.
    pub fn isotope_range(&self) -> Range<usize> {
        self.isotopes.clone()
    }
}

/// Abundances of every element and isotope in one unit.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Representation {
    pub element_solar: Vec<f64>,
    pub isotope_solar: Vec<f64>,
    pub isotope_relative: Vec<f64>,
}

/// Elements and isotopes of one dataset with lookup indices and all three
/// unit representations computed once at load.
#[derive(Debug, Clone, PartialEq)]
pub struct AbundanceTable {
    database: Database,
    elements: Vec<ElementRecord>,
    isotopes: Vec<IsotopeRecord>,
    element_index: HashMap<String, usize>,
    isotope_index: HashMap<IsotopeKey, usize>,
    linear: Representation,
    log: Representation,
    mass_fraction: Representation,
}

static SHARED_TABLES: [OnceLock<Result<Arc<AbundanceTable>, TableError>>; 3] =
    [const { OnceLock::new() }; 3];

impl AbundanceTable {
    /// Builds a fresh table for `database`.
    pub fn build(database: Database) -> Result<Self, TableError> {
        builder::build_table(database)
    }

    /// Returns the process-wide table for `database`, building it on first use.
    pub fn shared(database: Database) -> Result<Arc<Self>, TableError> {
        let slot = match database {
            Database::Lodders09 => &SHARED_TABLES[0],
            Database::Asplund09 => &SHARED_TABLES[1],
            Database::Nist => &SHARED_TABLES[2],
        };
        slot.get_or_init(|| Self::build(database).map(Arc::new))
            .clone()
    }

    pub const fn database(&self) -> Database {
        self.database
    }

    pub fn elements(&self) -> &[ElementRecord] {
        &self.elements
    }

    pub fn isotopes(&self) -> &[IsotopeRecord] {
        &self.isotopes
    }

    pub fn element(&self, index: usize) -> &ElementRecord {
        &self.elements[index]
    }

    pub fn isotope(&self, index: usize) -> &IsotopeRecord {
        &self.isotopes[index]
    }

    pub fn element_index(&self, symbol: &str) -> Option<usize> {
        self.element_index.get(symbol).copied()
    }

    pub fn isotope_index(&self, key: &IsotopeKey) -> Option<usize> {
        self.isotope_index.get(key).copied()
    }

    pub fn isotopes_of(&self, element: usize) -> &[IsotopeRecord] {
        &self.isotopes[self.elements[element].isotope_range()]
    }

    /// Anchor element and its abundance on the linear scale.
    pub const fn normalization(&self) -> (&'static str, f64) {
        (NORMALIZATION_ANCHOR, NORMALIZATION_ANCHOR_ABUNDANCE)
    }

    pub fn element_solar_abundances(&self, unit: AbundanceUnit) -> &[f64] {
        &self.representation(unit).element_solar
    }

    pub fn isotope_solar_abundances(&self, unit: AbundanceUnit) -> &[f64] {
        &self.representation(unit).isotope_solar
    }

    /// Relative abundances stay linear fractions in the log unit and become
    /// mass-weighted fractions in the mass-fraction unit.
    pub fn isotope_relative_abundances(&self, unit: AbundanceUnit) -> &[f64] {
        &self.representation(unit).isotope_relative
    }

    pub(crate) fn representation(&self, unit: AbundanceUnit) -> &Representation {
        match unit {
            AbundanceUnit::NumLin => &self.linear,
            AbundanceUnit::NumLog => &self.log,
            AbundanceUnit::MassFraction => &self.mass_fraction,
        }
    }
}

impl From<TableError> for AbundanceError {
    fn from(error: TableError) -> Self {
        AbundanceError::io("IO.DATASET", error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::AbundanceTable;
    use crate::common::constants::RELATIVE_ABUNDANCE_SUM_TOLERANCE;
    use crate::domain::{AbundanceUnit, Database, IsotopeKey};
    use std::sync::Arc;

    fn lodders() -> Arc<AbundanceTable> {
        AbundanceTable::shared(Database::Lodders09).expect("lodders09 should load")
    }

    #[test]
    fn relative_abundances_sum_to_one_per_element() {
        for database in Database::ALL {
            let table = AbundanceTable::shared(database).expect("dataset should load");
            for (index, element) in table.elements().iter().enumerate() {
                let sum: f64 = table
                    .isotopes_of(index)
                    .iter()
                    .map(|isotope| isotope.relative_abundance())
                    .sum();
                // Elements without any natural composition (Tc, Pm in nist) are exempt.
                if sum != 0.0 {
                    assert!(
                        (sum - 1.0).abs() <= RELATIVE_ABUNDANCE_SUM_TOLERANCE,
                        "{} in {database} sums to {sum}",
                        element.symbol()
                    );
                }
            }
        }
    }

    #[test]
    fn isotopes_are_ordered_by_mass_number_within_elements() {
        let table = lodders();
        for index in 0..table.elements().len() {
            let mass_numbers: Vec<u16> = table
                .isotopes_of(index)
                .iter()
                .map(|isotope| isotope.mass_number())
                .collect();
            assert!(mass_numbers.windows(2).all(|pair| pair[0] < pair[1]));
        }
    }

    #[test]
    fn element_totals_are_isotope_sums() {
        let table = lodders();
        let iron = table.element_index("Fe").expect("iron should exist");
        assert!((table.element(iron).solar_abundance() - 847_990.0).abs() < 1.0e-6);
        assert_eq!(table.element(iron).atomic_number(), 26);
        assert!((table.element(iron).mass() - 55.845).abs() < 1.0e-2);
    }

    #[test]
    fn whole_table_mass_fractions_sum_to_one() {
        let table = lodders();
        let elements: f64 = table
            .element_solar_abundances(AbundanceUnit::MassFraction)
            .iter()
            .sum();
        let isotopes: f64 = table
            .isotope_solar_abundances(AbundanceUnit::MassFraction)
            .iter()
            .sum();
        assert!((elements - 1.0).abs() < 1.0e-9, "elements sum to {elements}");
        assert!((isotopes - 1.0).abs() < 1.0e-9, "isotopes sum to {isotopes}");
    }

    #[test]
    fn log_unit_places_hydrogen_at_twelve() {
        let table = lodders();
        let hydrogen = table.element_index("H").expect("hydrogen should exist");
        let log = table.element_solar_abundances(AbundanceUnit::NumLog);
        assert!((log[hydrogen] - 12.0).abs() < 1.0e-12);
        assert_eq!(
            table.isotope_relative_abundances(AbundanceUnit::NumLog),
            table.isotope_relative_abundances(AbundanceUnit::NumLin)
        );
    }

    #[test]
    fn missing_data_is_nan_not_absent() {
        let nist = AbundanceTable::shared(Database::Nist).expect("nist should load");
        let key = IsotopeKey::new("Si", 28);
        let index = nist.isotope_index(&key).expect("Si-28 should exist");
        assert!(nist.isotope(index).solar_abundance().is_nan());
        assert!(
            nist.isotope_solar_abundances(AbundanceUnit::MassFraction)[index].is_nan()
        );
    }

    #[test]
    fn shared_tables_are_reused() {
        let first = lodders();
        let second = lodders();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.normalization(), ("Si", 1.0e6));
    }
}

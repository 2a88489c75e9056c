use crate::domain::{AbundanceUnit, OneOrMany};
use crate::table::AbundanceTable;

/// Read-only view of one or more elements.
///
/// Abundance-valued properties follow the session unit unless changed with
/// [`ElementQuery::in_unit`]. Outputs mirror the shape of the request.
#[derive(Debug, Clone)]
pub struct ElementQuery<'a> {
    table: &'a AbundanceTable,
    unit: AbundanceUnit,
    indices: Vec<usize>,
    scalar: bool,
}

impl<'a> ElementQuery<'a> {
    pub(super) fn new(
        table: &'a AbundanceTable,
        unit: AbundanceUnit,
        indices: Vec<usize>,
        scalar: bool,
    ) -> Self {
        Self {
            table,
            unit,
            indices,
            scalar,
        }
    }

    /// Overrides the unit for this query only.
    pub fn in_unit(mut self, unit: AbundanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn unit(&self) -> AbundanceUnit {
        self.unit
    }

    pub fn symbols(&self) -> OneOrMany<String> {
        self.gather(|index| self.table.element(index).symbol().to_string())
    }

    pub fn atomic_number(&self) -> OneOrMany<u8> {
        self.gather(|index| self.table.element(index).atomic_number())
    }

    pub fn mass(&self) -> OneOrMany<f64> {
        self.gather(|index| self.table.element(index).mass())
    }

    pub fn solar_abundance(&self) -> OneOrMany<f64> {
        let solar = self.table.element_solar_abundances(self.unit);
        self.gather(|index| solar[index])
    }

    pub fn isotope_mass_numbers(&self) -> OneOrMany<Vec<u16>> {
        self.gather(|index| {
            self.table
                .isotopes_of(index)
                .iter()
                .map(|isotope| isotope.mass_number())
                .collect()
        })
    }

    pub fn isotope_names(&self) -> OneOrMany<Vec<String>> {
        self.gather(|index| {
            self.table
                .isotopes_of(index)
                .iter()
                .map(|isotope| isotope.key().to_string())
                .collect()
        })
    }

    pub fn isotope_relative_abundances(&self) -> OneOrMany<Vec<f64>> {
        let relative = self.table.isotope_relative_abundances(self.unit);
        self.gather(|index| relative[self.table.element(index).isotope_range()].to_vec())
    }

    pub fn isotope_solar_abundances(&self) -> OneOrMany<Vec<f64>> {
        let solar = self.table.isotope_solar_abundances(self.unit);
        self.gather(|index| solar[self.table.element(index).isotope_range()].to_vec())
    }

    fn gather<T>(&self, value: impl Fn(usize) -> T) -> OneOrMany<T> {
        OneOrMany::shaped(
            self.indices.iter().map(|&index| value(index)).collect(),
            self.scalar,
        )
    }
}

/// Read-only view of one or more isotopes.
#[derive(Debug, Clone)]
pub struct IsotopeQuery<'a> {
    table: &'a AbundanceTable,
    unit: AbundanceUnit,
    indices: Vec<usize>,
    scalar: bool,
}

impl<'a> IsotopeQuery<'a> {
    pub(super) fn new(
        table: &'a AbundanceTable,
        unit: AbundanceUnit,
        indices: Vec<usize>,
        scalar: bool,
    ) -> Self {
        Self {
            table,
            unit,
            indices,
            scalar,
        }
    }

    pub fn in_unit(mut self, unit: AbundanceUnit) -> Self {
        self.unit = unit;
        self
    }

    pub fn unit(&self) -> AbundanceUnit {
        self.unit
    }

    pub fn names(&self) -> OneOrMany<String> {
        self.gather(|index| self.table.isotope(index).key().to_string())
    }

    pub fn mass_number(&self) -> OneOrMany<u16> {
        self.gather(|index| self.table.isotope(index).mass_number())
    }

    pub fn mass(&self) -> OneOrMany<f64> {
        self.gather(|index| self.table.isotope(index).mass())
    }

    pub fn relative_abundance(&self) -> OneOrMany<f64> {
        let relative = self.table.isotope_relative_abundances(self.unit);
        self.gather(|index| relative[index])
    }

    pub fn solar_abundance(&self) -> OneOrMany<f64> {
        let solar = self.table.isotope_solar_abundances(self.unit);
        self.gather(|index| solar[index])
    }

    /// Symbol of the parent element.
    pub fn element(&self) -> OneOrMany<String> {
        self.gather(|index| self.table.isotope(index).symbol().to_string())
    }

    fn gather<T>(&self, value: impl Fn(usize) -> T) -> OneOrMany<T> {
        OneOrMany::shaped(
            self.indices.iter().map(|&index| value(index)).collect(),
            self.scalar,
        )
    }
}

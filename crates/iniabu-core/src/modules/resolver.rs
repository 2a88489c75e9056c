//! Turns caller identifiers into table indices.
//!
//! An element in a position that takes several isotopes expands to all of
//! its isotopes by ascending mass number. An element in a position that
//! takes exactly one isotope resolves to its normalization isotope: the
//! session override if there is one, otherwise the most abundant isotope
//! with ties going to the lowest mass number.

use crate::domain::{AbundanceError, AbundanceResult, Identifier, IsotopeKey};
use crate::table::AbundanceTable;
use std::collections::BTreeMap;
use std::ops::Range;

/// Element symbol to preferred normalization isotope.
pub type NormalizationOverrides = BTreeMap<String, IsotopeKey>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Element,
    Isotope,
}

impl Granularity {
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Isotope => "isotope",
        }
    }
}

/// A ratio request after resolution and broadcasting: always a sequence of
/// (nominator, denominator) index pairs, one per output value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatioRequest {
    granularity: Granularity,
    pairs: Vec<(usize, usize)>,
    groups: Vec<Range<usize>>,
}

impl RatioRequest {
    pub const fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// For each caller nominator, the range of pairs it produced.
    pub fn groups(&self) -> &[Range<usize>] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn is_scalar(&self) -> bool {
        self.pairs.len() == 1
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    table: &'a AbundanceTable,
    overrides: &'a NormalizationOverrides,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a AbundanceTable, overrides: &'a NormalizationOverrides) -> Self {
        Self { table, overrides }
    }

    pub fn element(&self, id: &str) -> AbundanceResult<usize> {
        match Identifier::parse(id)? {
            Identifier::Element(symbol) => self
                .table
                .element_index(&symbol)
                .ok_or_else(|| self.unknown_element(&symbol)),
            Identifier::Isotope(key) => Err(AbundanceError::unknown_identifier(
                "INPUT.UNKNOWN_ELEMENT",
                format!("'{key}' is an isotope, an element symbol is required here"),
            )),
        }
    }

    pub fn isotope(&self, id: &str) -> AbundanceResult<usize> {
        match Identifier::parse(id)? {
            Identifier::Isotope(key) => self.isotope_by_key(&key),
            Identifier::Element(symbol) => Err(AbundanceError::unknown_identifier(
                "INPUT.UNKNOWN_ISOTOPE",
                format!("'{symbol}' is an element, an isotope designator is required here"),
            )),
        }
    }

    pub fn isotope_by_key(&self, key: &IsotopeKey) -> AbundanceResult<usize> {
        self.table.isotope_index(key).ok_or_else(|| {
            AbundanceError::unknown_identifier(
                "INPUT.UNKNOWN_ISOTOPE",
                format!(
                    "isotope '{key}' is not in database '{}'",
                    self.table.database()
                ),
            )
        })
    }

    pub fn elements(&self, ids: &[String]) -> AbundanceResult<Vec<usize>> {
        ids.iter().map(|id| self.element(id)).collect()
    }

    pub fn isotopes(&self, ids: &[String]) -> AbundanceResult<Vec<usize>> {
        ids.iter().map(|id| self.isotope(id)).collect()
    }

    /// Expands elements into all their isotopes. Returns the flat isotope
    /// list and, per input identifier, its range within that list.
    pub fn expand_isotopes(
        &self,
        ids: &[String],
    ) -> AbundanceResult<(Vec<usize>, Vec<Range<usize>>)> {
        let mut expanded = Vec::new();
        let mut groups = Vec::with_capacity(ids.len());
        for id in ids {
            let start = expanded.len();
            match Identifier::parse(id)? {
                Identifier::Isotope(key) => expanded.push(self.isotope_by_key(&key)?),
                Identifier::Element(symbol) => {
                    let element = self
                        .table
                        .element_index(&symbol)
                        .ok_or_else(|| self.unknown_element(&symbol))?;
                    let range = self.table.element(element).isotope_range();
                    tracing::trace!(element = %symbol, isotopes = range.len(), "expanded element");
                    expanded.extend(range);
                }
            }
            groups.push(start..expanded.len());
        }
        Ok((expanded, groups))
    }

    /// Resolves to exactly one isotope; elements go to their normalization isotope.
    pub fn single_isotope(&self, id: &str) -> AbundanceResult<usize> {
        match Identifier::parse(id)? {
            Identifier::Isotope(key) => self.isotope_by_key(&key),
            Identifier::Element(symbol) => {
                let element = self
                    .table
                    .element_index(&symbol)
                    .ok_or_else(|| self.unknown_element(&symbol))?;
                Ok(self.normalization_isotope(element))
            }
        }
    }

    /// Most abundant isotope of `element`, lowest mass number on ties.
    pub fn major_isotope(&self, element: usize) -> usize {
        let range = self.table.element(element).isotope_range();
        let mut best = range.start;
        for index in range {
            let candidate = self.table.isotope(index).relative_abundance();
            if candidate > self.table.isotope(best).relative_abundance() {
                best = index;
            }
        }
        best
    }

    pub fn normalization_isotope(&self, element: usize) -> usize {
        let symbol = self.table.element(element).symbol();
        self.overrides
            .get(symbol)
            .and_then(|key| self.table.isotope_index(key))
            .unwrap_or_else(|| self.major_isotope(element))
    }

    /// Resolves and pairs both sides of a ratio.
    ///
    /// Isotope nominators expand elements to all isotopes while isotope
    /// denominators resolve elements to one isotope each. A single entry on
    /// either side is paired with every entry of the other side; otherwise
    /// both sides must have the same length.
    pub fn ratio_request(
        &self,
        granularity: Granularity,
        nominators: &[String],
        denominators: &[String],
    ) -> AbundanceResult<RatioRequest> {
        let (nominators, groups, denominators) = match granularity {
            Granularity::Element => {
                let resolved = self.elements(nominators)?;
                let groups = (0..resolved.len()).map(|index| index..index + 1).collect();
                (resolved, groups, self.elements(denominators)?)
            }
            Granularity::Isotope => {
                let (resolved, groups) = self.expand_isotopes(nominators)?;
                let denominators = denominators
                    .iter()
                    .map(|id| self.single_isotope(id))
                    .collect::<AbundanceResult<Vec<_>>>()?;
                (resolved, groups, denominators)
            }
        };

        let (pairs, groups) = pair_up(nominators, groups, denominators, granularity)?;
        Ok(RatioRequest {
            granularity,
            pairs,
            groups,
        })
    }

    fn unknown_element(&self, symbol: &str) -> AbundanceError {
        AbundanceError::unknown_identifier(
            "INPUT.UNKNOWN_ELEMENT",
            format!(
                "element '{symbol}' is not in database '{}'",
                self.table.database()
            ),
        )
    }
}

type Pairing = (Vec<(usize, usize)>, Vec<Range<usize>>);

fn pair_up(
    nominators: Vec<usize>,
    groups: Vec<Range<usize>>,
    denominators: Vec<usize>,
    granularity: Granularity,
) -> AbundanceResult<Pairing> {
    match (nominators.len(), denominators.len()) {
        (n, d) if n == d => Ok((nominators.into_iter().zip(denominators).collect(), groups)),
        (_, 1) => {
            let denominator = denominators[0];
            let pairs = nominators
                .into_iter()
                .map(|nominator| (nominator, denominator))
                .collect();
            Ok((pairs, groups))
        }
        (1, d) => {
            let nominator = nominators[0];
            let pairs = denominators
                .into_iter()
                .map(|denominator| (nominator, denominator))
                .collect();
            Ok((pairs, vec![0..d]))
        }
        (n, d) => Err(AbundanceError::shape_mismatch(
            "INPUT.SHAPE_MISMATCH",
            format!(
                "{n} {noun} nominators cannot be paired with {d} denominators, \
                 use a single denominator or one per nominator",
                noun = granularity.noun()
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{Granularity, NormalizationOverrides, Resolver};
    use crate::domain::{AbundanceErrorKind, Database, IsotopeKey};
    use crate::table::AbundanceTable;
    use std::sync::Arc;

    fn table(database: Database) -> Arc<AbundanceTable> {
        AbundanceTable::shared(database).expect("dataset should load")
    }

    fn names(table: &AbundanceTable, indices: &[usize]) -> Vec<String> {
        indices
            .iter()
            .map(|&index| table.isotope(index).key().to_string())
            .collect()
    }

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn elements_expand_to_isotopes_by_ascending_mass_number() {
        let table = table(Database::Lodders09);
        let overrides = NormalizationOverrides::new();
        let resolver = Resolver::new(&table, &overrides);

        let (expanded, groups) = resolver
            .expand_isotopes(&ids(&["Ne", "Si-29"]))
            .expect("expansion should succeed");
        assert_eq!(names(&table, &expanded), ["Ne-20", "Ne-21", "Ne-22", "Si-29"]);
        assert_eq!(groups, vec![0..3, 3..4]);
    }

    #[test]
    fn denominators_pick_the_most_abundant_isotope_unless_overridden() {
        let table = table(Database::Lodders09);
        let mut overrides = NormalizationOverrides::new();
        {
            let resolver = Resolver::new(&table, &overrides);
            let nickel = resolver.single_isotope("Ni").expect("nickel should resolve");
            assert_eq!(table.isotope(nickel).key().to_string(), "Ni-58");
        }

        overrides.insert("Ni".to_string(), IsotopeKey::new("Ni", 60));
        let resolver = Resolver::new(&table, &overrides);
        let nickel = resolver.single_isotope("Ni").expect("nickel should resolve");
        assert_eq!(table.isotope(nickel).key().to_string(), "Ni-60");
    }

    #[test]
    fn ties_resolve_to_the_lowest_mass_number() {
        let table = table(Database::Nist);
        let overrides = NormalizationOverrides::new();
        let resolver = Resolver::new(&table, &overrides);
        let technetium = table.element_index("Tc").expect("Tc should exist");
        let major = resolver.major_isotope(technetium);
        assert_eq!(table.isotope(major).key().to_string(), "Tc-97");
    }

    #[test]
    fn scalar_sides_broadcast_against_lists() {
        let table = table(Database::Lodders09);
        let overrides = NormalizationOverrides::new();
        let resolver = Resolver::new(&table, &overrides);

        let request = resolver
            .ratio_request(Granularity::Isotope, &ids(&["Ne"]), &ids(&["Ne-20"]))
            .expect("broadcast denominator");
        assert_eq!(request.len(), 3);
        assert!(request.pairs().iter().all(|pair| pair.1 == request.pairs()[0].1));

        let request = resolver
            .ratio_request(
                Granularity::Element,
                &ids(&["Si"]),
                &ids(&["Fe", "Ni", "Mg"]),
            )
            .expect("broadcast nominator");
        assert_eq!(request.len(), 3);
        assert_eq!(request.groups(), &[0..3]);
    }

    #[test]
    fn mismatched_lists_are_rejected() {
        let table = table(Database::Lodders09);
        let overrides = NormalizationOverrides::new();
        let resolver = Resolver::new(&table, &overrides);
        let error = resolver
            .ratio_request(
                Granularity::Isotope,
                &ids(&["Ne"]),
                &ids(&["Si-28", "Si-29"]),
            )
            .expect_err("three isotopes against two denominators");
        assert_eq!(error.kind(), AbundanceErrorKind::ShapeMismatch);
        assert_eq!(error.placeholder(), "INPUT.SHAPE_MISMATCH");
    }

    #[test]
    fn unknown_and_misplaced_identifiers_are_rejected() {
        let table = table(Database::Lodders09);
        let overrides = NormalizationOverrides::new();
        let resolver = Resolver::new(&table, &overrides);

        let unknown = resolver.isotope("Xx-999").expect_err("unknown isotope");
        assert_eq!(unknown.kind(), AbundanceErrorKind::UnknownIdentifier);
        assert_eq!(unknown.placeholder(), "INPUT.UNKNOWN_ISOTOPE");

        let missing_mass_number = resolver.isotope("Si-31").expect_err("unstable isotope");
        assert_eq!(missing_mass_number.kind(), AbundanceErrorKind::UnknownIdentifier);

        let isotope_as_element = resolver.element("Si-28").expect_err("isotope given");
        assert_eq!(isotope_as_element.placeholder(), "INPUT.UNKNOWN_ELEMENT");

        let lower_case = resolver.element("si").expect_err("case-sensitive");
        assert_eq!(lower_case.kind(), AbundanceErrorKind::UnknownIdentifier);
    }
}

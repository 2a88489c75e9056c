//! The session: active table, unit mode and normalization overrides, plus
//! the query and computation surface over them.

mod config;
mod query;

pub use config::{SessionConfig, SessionConfigError, load_session_config};
pub use query::{ElementQuery, IsotopeQuery};

use crate::common::constants::DEFAULT_INTERNAL_NORMALIZATION_FACTOR;
use crate::domain::{
    AbundanceError, AbundanceResult, AbundanceUnit, Database, FractionationLaw, Identifier,
    IsotopeKey, OneOrMany,
};
use crate::modules::normalization::{NormalizationPair, NormalizationTarget, normalize};
use crate::modules::notation::{
    align_measurements, bracket, delta, result_is_scalar, validate_delta_factor,
};
use crate::modules::ratio::{isotope_ratio, solar_ratios, uses_mass_fraction};
use crate::modules::resolver::{Granularity, NormalizationOverrides, RatioRequest, Resolver};
use crate::numerics::{NumericTolerance, compare_with_tolerance};
use crate::table::AbundanceTable;
use std::sync::Arc;

// Relative to the delta factor.
const SELF_CHECK_TOLERANCE: f64 = 1.0e-9;

/// Inputs of an internal normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalNormalization {
    pub targets: OneOrMany<String>,
    /// Major and minor normalization isotope.
    pub normalization_isotopes: (String, String),
    pub measured: OneOrMany<f64>,
    /// Measured values of the major and minor normalization isotope.
    pub normalization_measured: (f64, f64),
    pub delta_factor: f64,
    pub law: FractionationLaw,
}

impl InternalNormalization {
    /// Uses epsilon units (10^4) and the exponential law.
    pub fn new(
        targets: impl Into<OneOrMany<String>>,
        normalization_isotopes: (&str, &str),
        measured: impl Into<OneOrMany<f64>>,
        normalization_measured: (f64, f64),
    ) -> Self {
        Self {
            targets: targets.into(),
            normalization_isotopes: (
                normalization_isotopes.0.to_string(),
                normalization_isotopes.1.to_string(),
            ),
            measured: measured.into(),
            normalization_measured,
            delta_factor: DEFAULT_INTERNAL_NORMALIZATION_FACTOR,
            law: FractionationLaw::default(),
        }
    }

    pub fn with_delta_factor(mut self, delta_factor: f64) -> Self {
        self.delta_factor = delta_factor;
        self
    }

    pub fn with_law(mut self, law: FractionationLaw) -> Self {
        self.law = law;
        self
    }
}

/// Independent sessions may be used side by side; they share the immutable
/// tables but nothing else.
#[derive(Debug, Clone)]
pub struct AbundanceSession {
    table: Arc<AbundanceTable>,
    unit: AbundanceUnit,
    normalization_isotopes: NormalizationOverrides,
}

impl AbundanceSession {
    /// Opens the default dataset in linear number units.
    pub fn new() -> AbundanceResult<Self> {
        Self::with_options(Database::default(), AbundanceUnit::default())
    }

    pub fn with_database(database: Database) -> AbundanceResult<Self> {
        Self::with_options(database, AbundanceUnit::default())
    }

    pub fn with_options(database: Database, unit: AbundanceUnit) -> AbundanceResult<Self> {
        let table = AbundanceTable::shared(database)?;
        tracing::info!(database = %database, unit = %unit, "loaded database");
        Ok(Self {
            table,
            unit,
            normalization_isotopes: NormalizationOverrides::new(),
        })
    }

    pub fn from_config(config: &SessionConfig) -> AbundanceResult<Self> {
        let mut session = Self::with_options(config.database, config.unit)?;
        session.set_normalization_isotopes(&config.normalization_isotopes)?;
        Ok(session)
    }

    pub fn database(&self) -> Database {
        self.table.database()
    }

    /// Replaces the active table. The unit mode is kept, and so are the
    /// normalization overrides that still resolve in the new table.
    pub fn set_database(&mut self, database: Database) -> AbundanceResult<()> {
        let table = AbundanceTable::shared(database)?;
        self.normalization_isotopes.retain(|element, isotope| {
            let keep = table.element_index(element).is_some() && table.isotope_index(isotope).is_some();
            if !keep {
                tracing::warn!(
                    element = %element,
                    isotope = %isotope,
                    database = %database,
                    "dropped normalization isotope missing from new database"
                );
            }
            keep
        });
        self.table = table;
        tracing::info!(database = %database, unit = %self.unit, "loaded database");
        Ok(())
    }

    pub fn unit(&self) -> AbundanceUnit {
        self.unit
    }

    pub fn set_unit(&mut self, unit: AbundanceUnit) {
        if unit == self.unit {
            return;
        }
        tracing::debug!(from = %self.unit, to = %unit, "changed abundance unit");
        self.unit = unit;
    }

    pub fn table(&self) -> &AbundanceTable {
        &self.table
    }

    pub fn normalization_isotopes(&self) -> &NormalizationOverrides {
        &self.normalization_isotopes
    }

    /// Makes `isotope` the isotope `element` resolves to in denominators.
    pub fn set_normalization_isotope(&mut self, element: &str, isotope: &str) -> AbundanceResult<()> {
        let (symbol, key) = self.validate_normalization_isotope(element, isotope)?;
        tracing::debug!(element = %symbol, isotope = %key, "set normalization isotope");
        self.normalization_isotopes.insert(symbol, key);
        Ok(())
    }

    /// Replaces all overrides at once; nothing changes if any entry is invalid.
    pub fn set_normalization_isotopes<I, E, S>(&mut self, entries: I) -> AbundanceResult<()>
    where
        I: IntoIterator<Item = (E, S)>,
        E: AsRef<str>,
        S: AsRef<str>,
    {
        let overrides = entries
            .into_iter()
            .map(|(element, isotope)| {
                self.validate_normalization_isotope(element.as_ref(), isotope.as_ref())
            })
            .collect::<AbundanceResult<NormalizationOverrides>>()?;
        tracing::debug!(count = overrides.len(), "replaced normalization isotopes");
        self.normalization_isotopes = overrides;
        Ok(())
    }

    pub fn reset_normalization_isotopes(&mut self) {
        tracing::debug!("reset normalization isotopes");
        self.normalization_isotopes.clear();
    }

    pub fn element_symbols(&self) -> Vec<&str> {
        self.table
            .elements()
            .iter()
            .map(|element| element.symbol())
            .collect()
    }

    pub fn isotope_names(&self) -> Vec<String> {
        self.table
            .isotopes()
            .iter()
            .map(|isotope| isotope.key().to_string())
            .collect()
    }

    pub fn all_isotopes(&self, element: &str) -> AbundanceResult<Vec<IsotopeKey>> {
        let element = self.resolver().element(element)?;
        Ok(self
            .table
            .isotopes_of(element)
            .iter()
            .map(|isotope| isotope.key().clone())
            .collect())
    }

    pub fn major_isotope(&self, element: &str) -> AbundanceResult<IsotopeKey> {
        let resolver = self.resolver();
        let element = resolver.element(element)?;
        Ok(self.isotope_key(resolver.major_isotope(element)))
    }

    pub fn normalization_isotope(&self, element: &str) -> AbundanceResult<IsotopeKey> {
        let resolver = self.resolver();
        let element = resolver.element(element)?;
        Ok(self.isotope_key(resolver.normalization_isotope(element)))
    }

    pub fn element(&self, ids: impl Into<OneOrMany<String>>) -> AbundanceResult<ElementQuery<'_>> {
        let ids = ids.into();
        let indices = self.resolver().elements(ids.as_slice())?;
        Ok(ElementQuery::new(&self.table, self.unit, indices, ids.is_one()))
    }

    pub fn isotope(&self, ids: impl Into<OneOrMany<String>>) -> AbundanceResult<IsotopeQuery<'_>> {
        let ids = ids.into();
        let indices = self.resolver().isotopes(ids.as_slice())?;
        Ok(IsotopeQuery::new(&self.table, self.unit, indices, ids.is_one()))
    }

    pub fn element_ratio(
        &self,
        nominators: impl Into<OneOrMany<String>>,
        denominators: impl Into<OneOrMany<String>>,
        mass_fraction: Option<bool>,
    ) -> AbundanceResult<OneOrMany<f64>> {
        self.ratio(Granularity::Element, nominators.into(), denominators.into(), mass_fraction)
    }

    pub fn isotope_ratio(
        &self,
        nominators: impl Into<OneOrMany<String>>,
        denominators: impl Into<OneOrMany<String>>,
        mass_fraction: Option<bool>,
    ) -> AbundanceResult<OneOrMany<f64>> {
        self.ratio(Granularity::Isotope, nominators.into(), denominators.into(), mass_fraction)
    }

    pub fn element_delta(
        &self,
        nominators: impl Into<OneOrMany<String>>,
        denominators: impl Into<OneOrMany<String>>,
        measured: impl Into<OneOrMany<f64>>,
        delta_factor: f64,
        mass_fraction: Option<bool>,
    ) -> AbundanceResult<OneOrMany<f64>> {
        validate_delta_factor(delta_factor)?;
        self.notation(
            Granularity::Element,
            nominators.into(),
            denominators.into(),
            measured.into(),
            mass_fraction,
            |value, solar| delta(value, solar, delta_factor),
        )
    }

    pub fn isotope_delta(
        &self,
        nominators: impl Into<OneOrMany<String>>,
        denominators: impl Into<OneOrMany<String>>,
        measured: impl Into<OneOrMany<f64>>,
        delta_factor: f64,
        mass_fraction: Option<bool>,
    ) -> AbundanceResult<OneOrMany<f64>> {
        validate_delta_factor(delta_factor)?;
        self.notation(
            Granularity::Isotope,
            nominators.into(),
            denominators.into(),
            measured.into(),
            mass_fraction,
            |value, solar| delta(value, solar, delta_factor),
        )
    }

    pub fn element_bracket(
        &self,
        nominators: impl Into<OneOrMany<String>>,
        denominators: impl Into<OneOrMany<String>>,
        measured: impl Into<OneOrMany<f64>>,
        mass_fraction: Option<bool>,
    ) -> AbundanceResult<OneOrMany<f64>> {
        self.notation(
            Granularity::Element,
            nominators.into(),
            denominators.into(),
            measured.into(),
            mass_fraction,
            bracket,
        )
    }

    pub fn isotope_bracket(
        &self,
        nominators: impl Into<OneOrMany<String>>,
        denominators: impl Into<OneOrMany<String>>,
        measured: impl Into<OneOrMany<f64>>,
        mass_fraction: Option<bool>,
    ) -> AbundanceResult<OneOrMany<f64>> {
        self.notation(
            Granularity::Isotope,
            nominators.into(),
            denominators.into(),
            measured.into(),
            mass_fraction,
            bracket,
        )
    }

    /// Elemental measurements are dominated by effects other than
    /// mass-dependent fractionation, so only isotopes can be normalized.
    pub fn element_internal_normalization(
        &self,
        _request: &InternalNormalization,
    ) -> AbundanceResult<OneOrMany<f64>> {
        Err(AbundanceError::unsupported_operation(
            "INPUT.INT_NORM_ELEMENT",
            "internal normalization is only defined for isotopes",
        ))
    }

    /// Fractionation-corrected deviations of the targets from solar, in
    /// units of `delta_factor`. Always uses number ratios.
    pub fn isotope_internal_normalization(
        &self,
        request: &InternalNormalization,
    ) -> AbundanceResult<OneOrMany<f64>> {
        let resolver = self.resolver();
        let major = self.normalization_isotope_index(&request.normalization_isotopes.0)?;
        let minor = self.normalization_isotope_index(&request.normalization_isotopes.1)?;
        if major == minor || self.table.isotope(major).element() != self.table.isotope(minor).element() {
            return Err(AbundanceError::invalid_option(
                "INPUT.INT_NORM_ISOTOPES",
                format!(
                    "normalization isotopes '{}' and '{}' must be two different isotopes of one element",
                    request.normalization_isotopes.0, request.normalization_isotopes.1
                ),
            ));
        }
        validate_delta_factor(request.delta_factor)?;

        let (targets, _) = resolver.expand_isotopes(request.targets.as_slice())?;
        let solar: Vec<f64> = targets
            .iter()
            .map(|&target| isotope_ratio(&self.table, AbundanceUnit::NumLin, target, major))
            .collect();
        let aligned = align_measurements(&solar, &request.measured, Granularity::Isotope)?;

        let pair = NormalizationPair {
            major_mass: self.table.isotope(major).mass(),
            minor_mass: self.table.isotope(minor).mass(),
            solar_minor_ratio: isotope_ratio(&self.table, AbundanceUnit::NumLin, minor, major),
        };
        let inputs: Vec<(usize, NormalizationTarget)> = aligned
            .iter()
            .enumerate()
            .map(|(position, &(measured, solar_ratio))| {
                let target = if targets.len() == 1 {
                    targets[0]
                } else {
                    targets[position]
                };
                let normalization_target = NormalizationTarget {
                    mass: self.table.isotope(target).mass(),
                    solar_ratio,
                    measured,
                };
                (target, normalization_target)
            })
            .collect();
        let normalization_targets: Vec<NormalizationTarget> =
            inputs.iter().map(|(_, target)| *target).collect();

        let (major_measured, minor_measured) = request.normalization_measured;
        let values = normalize(
            pair,
            major_measured,
            minor_measured,
            &normalization_targets,
            request.delta_factor,
            request.law,
        );

        if targets.len() > 1 {
            let self_check = NumericTolerance {
                abs_tol: SELF_CHECK_TOLERANCE * request.delta_factor,
                rel_tol: 0.0,
                relative_floor: 1.0,
            };
            for ((target, _), value) in inputs.iter().zip(&values) {
                let is_normalizing = *target == major || *target == minor;
                if is_normalizing && !compare_with_tolerance(0.0, *value, self_check).passes {
                    tracing::warn!(
                        isotope = %self.table.isotope(*target).key(),
                        value,
                        "normalization isotope does not normalize to zero, check the measured values"
                    );
                }
            }
        }

        Ok(OneOrMany::shaped(
            values,
            result_is_scalar(&solar, &request.measured),
        ))
    }

    fn ratio(
        &self,
        granularity: Granularity,
        nominators: OneOrMany<String>,
        denominators: OneOrMany<String>,
        mass_fraction: Option<bool>,
    ) -> AbundanceResult<OneOrMany<f64>> {
        let (request, values) = self.solar_ratios(granularity, &nominators, &denominators, mass_fraction)?;
        Ok(OneOrMany::shaped(values, request.is_scalar()))
    }

    fn notation(
        &self,
        granularity: Granularity,
        nominators: OneOrMany<String>,
        denominators: OneOrMany<String>,
        measured: OneOrMany<f64>,
        mass_fraction: Option<bool>,
        apply: impl Fn(f64, f64) -> f64,
    ) -> AbundanceResult<OneOrMany<f64>> {
        let (_, solar) = self.solar_ratios(granularity, &nominators, &denominators, mass_fraction)?;
        let values = align_measurements(&solar, &measured, granularity)?
            .into_iter()
            .map(|(value, solar)| apply(value, solar))
            .collect();
        Ok(OneOrMany::shaped(values, result_is_scalar(&solar, &measured)))
    }

    fn solar_ratios(
        &self,
        granularity: Granularity,
        nominators: &OneOrMany<String>,
        denominators: &OneOrMany<String>,
        mass_fraction: Option<bool>,
    ) -> AbundanceResult<(RatioRequest, Vec<f64>)> {
        let request = self.resolver().ratio_request(
            granularity,
            nominators.as_slice(),
            denominators.as_slice(),
        )?;
        let values = solar_ratios(
            &self.table,
            &request,
            uses_mass_fraction(self.unit, mass_fraction),
        );
        Ok((request, values))
    }

    fn normalization_isotope_index(&self, id: &str) -> AbundanceResult<usize> {
        match Identifier::parse(id)? {
            Identifier::Isotope(key) => self.resolver().isotope_by_key(&key),
            Identifier::Element(symbol) => Err(AbundanceError::unsupported_operation(
                "INPUT.INT_NORM_ELEMENT",
                format!(
                    "normalization isotope '{symbol}' is an element, internal normalization needs isotopes"
                ),
            )),
        }
    }

    fn validate_normalization_isotope(
        &self,
        element: &str,
        isotope: &str,
    ) -> AbundanceResult<(String, IsotopeKey)> {
        let resolver = self.resolver();
        let element_index = resolver.element(element)?;
        let isotope_index = resolver.isotope(isotope)?;
        let record = self.table.isotope(isotope_index);
        if record.element() != element_index {
            return Err(AbundanceError::invalid_option(
                "INPUT.NORM_ISOTOPE_ELEMENT",
                format!("isotope '{isotope}' is not an isotope of '{element}'"),
            ));
        }
        Ok((element.to_string(), record.key().clone()))
    }

    fn isotope_key(&self, index: usize) -> IsotopeKey {
        self.table.isotope(index).key().clone()
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.table, &self.normalization_isotopes)
    }
}

#[cfg(test)]
mod tests {
    use super::{AbundanceSession, InternalNormalization, SessionConfig};
    use crate::domain::{AbundanceErrorKind, AbundanceUnit, Database, FractionationLaw, OneOrMany};

    fn session() -> AbundanceSession {
        AbundanceSession::new().expect("default session should open")
    }

    #[test]
    fn overrides_change_only_denominator_resolution() {
        let mut session = session();
        let before = session
            .isotope_ratio("Ni-60", "Ni", None)
            .expect("ratio should resolve");
        session
            .set_normalization_isotope("Ni", "Ni-62")
            .expect("override should be accepted");
        let after = session
            .isotope_ratio("Ni-60", "Ni", None)
            .expect("ratio should resolve");
        assert_ne!(before, after);
        assert_eq!(
            session.normalization_isotope("Ni").expect("nickel").to_string(),
            "Ni-62"
        );
        assert_eq!(session.major_isotope("Ni").expect("nickel").to_string(), "Ni-58");

        session.reset_normalization_isotopes();
        assert!(session.normalization_isotopes().is_empty());
        assert_eq!(
            session.isotope_ratio("Ni-60", "Ni", None).expect("ratio"),
            before
        );
    }

    #[test]
    fn invalid_overrides_are_rejected_without_partial_updates() {
        let mut session = session();
        let foreign = session
            .set_normalization_isotope("Ni", "Fe-56")
            .expect_err("foreign isotope");
        assert_eq!(foreign.kind(), AbundanceErrorKind::InvalidOption);
        assert_eq!(foreign.placeholder(), "INPUT.NORM_ISOTOPE_ELEMENT");

        let error = session
            .set_normalization_isotopes([("Ni", "Ni-60"), ("Fe", "Fe-99")])
            .expect_err("unknown isotope");
        assert_eq!(error.kind(), AbundanceErrorKind::UnknownIdentifier);
        assert!(session.normalization_isotopes().is_empty());
    }

    #[test]
    fn switching_databases_keeps_unit_and_overrides() {
        let mut session = session();
        session.set_unit(AbundanceUnit::NumLog);
        session
            .set_normalization_isotope("Ni", "Ni-60")
            .expect("override should be accepted");
        session
            .set_database(Database::Nist)
            .expect("nist should load");
        assert_eq!(session.database(), Database::Nist);
        assert_eq!(session.unit(), AbundanceUnit::NumLog);
        assert_eq!(session.normalization_isotopes().len(), 1);
    }

    #[test]
    fn queries_mirror_the_request_shape() {
        let session = session();
        let single = session.element("Si").expect("silicon");
        assert_eq!(single.atomic_number(), OneOrMany::One(14));
        assert_eq!(
            single.isotope_names(),
            OneOrMany::One(vec![
                "Si-28".to_string(),
                "Si-29".to_string(),
                "Si-30".to_string()
            ])
        );

        let listed = session.element(["Si"]).expect("silicon list");
        assert_eq!(listed.atomic_number(), OneOrMany::Many(vec![14]));

        let isotopes = session.isotope(["Fe-56", "Ni-60"]).expect("isotopes");
        assert_eq!(
            isotopes.element(),
            OneOrMany::Many(vec!["Fe".to_string(), "Ni".to_string()])
        );
        assert_eq!(isotopes.mass_number(), OneOrMany::Many(vec![56, 60]));

        let element_as_isotope = session.isotope("Fe").expect_err("element given");
        assert_eq!(element_as_isotope.kind(), AbundanceErrorKind::UnknownIdentifier);
    }

    #[test]
    fn query_units_follow_the_session_and_per_call_overrides() {
        let mut session = session();
        let linear = session
            .element("Si")
            .expect("silicon")
            .solar_abundance()
            .into_one()
            .expect("scalar");
        assert!((linear - 999_660.0).abs() < 1.0e-6);

        session.set_unit(AbundanceUnit::NumLog);
        let log = session
            .element("H")
            .expect("hydrogen")
            .solar_abundance()
            .into_one()
            .expect("scalar");
        assert!((log - 12.0).abs() < 1.0e-12);

        let relative = session
            .isotope("Si-28")
            .expect("Si-28")
            .relative_abundance()
            .into_one()
            .expect("scalar");
        assert_eq!(relative, 0.9223);

        let fraction = session
            .element("Si")
            .expect("silicon")
            .in_unit(AbundanceUnit::MassFraction)
            .solar_abundance()
            .into_one()
            .expect("scalar");
        assert!(fraction > 0.0 && fraction < 1.0);
    }

    #[test]
    fn element_internal_normalization_is_unsupported() {
        let session = session();
        let request = InternalNormalization::new("Ni", ("Ni-58", "Ni-62"), vec![1.0; 5], (1.0, 1.0));
        let error = session
            .element_internal_normalization(&request)
            .expect_err("elements cannot be normalized");
        assert_eq!(error.kind(), AbundanceErrorKind::UnsupportedOperation);
    }

    #[test]
    fn normalization_isotopes_must_be_isotopes_of_one_element() {
        let session = session();
        let element = InternalNormalization::new("Ni-60", ("Ni", "Ni-62"), 1.0, (1.0, 1.0));
        let error = session
            .isotope_internal_normalization(&element)
            .expect_err("element as normalization isotope");
        assert_eq!(error.kind(), AbundanceErrorKind::UnsupportedOperation);
        assert_eq!(error.placeholder(), "INPUT.INT_NORM_ELEMENT");

        let mixed = InternalNormalization::new("Ni-60", ("Ni-58", "Fe-56"), 1.0, (1.0, 1.0));
        let error = session
            .isotope_internal_normalization(&mixed)
            .expect_err("isotopes of two elements");
        assert_eq!(error.placeholder(), "INPUT.INT_NORM_ISOTOPES");
    }

    #[test]
    fn internal_normalization_checks_shape_before_applying_the_law() {
        let session = session();
        let request = InternalNormalization::new("Ni", ("Ni-58", "Ni-62"), 1.0, (1.0, 1.0))
            .with_law(FractionationLaw::Linear);
        let error = session
            .isotope_internal_normalization(&request)
            .expect_err("scalar against five isotopes");
        assert_eq!(error.kind(), AbundanceErrorKind::ShapeMismatch);
        assert_eq!(
            error.message(),
            "length of requested isotope ratios (5) does not match length of provided values (1)"
        );
    }

    #[test]
    fn config_overrides_are_validated_on_open() {
        let mut config = SessionConfig {
            database: Database::Asplund09,
            unit: AbundanceUnit::MassFraction,
            ..SessionConfig::default()
        };
        config
            .normalization_isotopes
            .insert("Ni".to_string(), "Ni-60".to_string());
        let session = AbundanceSession::from_config(&config).expect("config should apply");
        assert_eq!(session.database(), Database::Asplund09);
        assert_eq!(session.unit(), AbundanceUnit::MassFraction);
        assert_eq!(
            session.normalization_isotope("Ni").expect("nickel").to_string(),
            "Ni-60"
        );

        config
            .normalization_isotopes
            .insert("Fe".to_string(), "Ni-58".to_string());
        assert!(AbundanceSession::from_config(&config).is_err());
    }
}

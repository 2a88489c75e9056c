use iniabu_core::{
    AbundanceResult, AbundanceSession, Database, FractionationLaw, InternalNormalization,
    OneOrMany,
};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

fn workspace_root() -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AbundanceScenarioFixtures {
    ratio_cases: Vec<RatioCaseFixture>,
    delta_cases: Vec<NotationCaseFixture>,
    bracket_cases: Vec<NotationCaseFixture>,
    internal_normalization_cases: Vec<InternalNormalizationCaseFixture>,
    error_cases: Vec<ErrorCaseFixture>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum GranularityFixture {
    Element,
    Isotope,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RatioCaseFixture {
    id: String,
    database: Database,
    granularity: GranularityFixture,
    nominators: OneOrMany<String>,
    denominators: OneOrMany<String>,
    mass_fraction: Option<bool>,
    scalar: bool,
    expected: Vec<Option<f64>>,
    abs_tol: f64,
    rel_tol: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NotationCaseFixture {
    id: String,
    granularity: GranularityFixture,
    nominators: OneOrMany<String>,
    denominators: OneOrMany<String>,
    measured: OneOrMany<f64>,
    #[serde(default)]
    delta_factor: Option<f64>,
    scalar: bool,
    expected: Vec<Option<f64>>,
    abs_tol: f64,
    rel_tol: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InternalNormalizationCaseFixture {
    id: String,
    targets: OneOrMany<String>,
    normalization_isotopes: [String; 2],
    measured: OneOrMany<f64>,
    normalization_measured: [f64; 2],
    delta_factor: f64,
    law: FractionationLaw,
    scalar: bool,
    expected: Vec<Option<f64>>,
    abs_tol: f64,
    rel_tol: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorCaseFixture {
    id: String,
    operation: String,
    nominators: OneOrMany<String>,
    denominators: OneOrMany<String>,
    #[serde(default)]
    measured: Option<OneOrMany<f64>>,
    expected_kind: String,
    expected_placeholder: String,
}

#[test]
fn solar_ratios_match_reference_values() {
    let fixtures = load_fixtures();
    for case in &fixtures.ratio_cases {
        let session = AbundanceSession::with_database(case.database)
            .unwrap_or_else(|error| panic!("{} session should open: {}", case.id, error));
        let nominators = case.nominators.clone();
        let denominators = case.denominators.clone();
        let result = match case.granularity {
            GranularityFixture::Element => {
                session.element_ratio(nominators, denominators, case.mass_fraction)
            }
            GranularityFixture::Isotope => {
                session.isotope_ratio(nominators, denominators, case.mass_fraction)
            }
        };

        assert_result(&case.id, result, case.scalar, &case.expected, case.abs_tol, case.rel_tol);
    }
}

#[test]
fn delta_values_match_reference_values() {
    let fixtures = load_fixtures();
    let session = AbundanceSession::new().expect("default session should open");
    for case in &fixtures.delta_cases {
        let delta_factor = case.delta_factor.unwrap_or(iniabu_core::DEFAULT_DELTA_FACTOR);
        let result = match case.granularity {
            GranularityFixture::Element => session.element_delta(
                case.nominators.clone(),
                case.denominators.clone(),
                case.measured.clone(),
                delta_factor,
                None,
            ),
            GranularityFixture::Isotope => session.isotope_delta(
                case.nominators.clone(),
                case.denominators.clone(),
                case.measured.clone(),
                delta_factor,
                None,
            ),
        };

        assert_result(&case.id, result, case.scalar, &case.expected, case.abs_tol, case.rel_tol);
    }
}

#[test]
fn bracket_values_match_reference_values() {
    let fixtures = load_fixtures();
    let session = AbundanceSession::new().expect("default session should open");
    for case in &fixtures.bracket_cases {
        let result = match case.granularity {
            GranularityFixture::Element => session.element_bracket(
                case.nominators.clone(),
                case.denominators.clone(),
                case.measured.clone(),
                None,
            ),
            GranularityFixture::Isotope => session.isotope_bracket(
                case.nominators.clone(),
                case.denominators.clone(),
                case.measured.clone(),
                None,
            ),
        };

        assert_result(&case.id, result, case.scalar, &case.expected, case.abs_tol, case.rel_tol);
    }
}

#[test]
fn internal_normalization_matches_reference_values() {
    let fixtures = load_fixtures();
    let session = AbundanceSession::new().expect("default session should open");
    for case in &fixtures.internal_normalization_cases {
        let [major, minor] = &case.normalization_isotopes;
        let [major_measured, minor_measured] = case.normalization_measured;
        let request = InternalNormalization::new(
            case.targets.clone(),
            (major.as_str(), minor.as_str()),
            case.measured.clone(),
            (major_measured, minor_measured),
        )
        .with_delta_factor(case.delta_factor)
        .with_law(case.law);

        let result = session.isotope_internal_normalization(&request);
        assert_result(&case.id, result, case.scalar, &case.expected, case.abs_tol, case.rel_tol);
    }
}

#[test]
fn invalid_requests_report_kind_and_placeholder() {
    let fixtures = load_fixtures();
    let session = AbundanceSession::new().expect("default session should open");
    for case in &fixtures.error_cases {
        let nominators = case.nominators.clone();
        let denominators = case.denominators.clone();
        let measured = || {
            case.measured
                .clone()
                .unwrap_or_else(|| panic!("{} needs measured values", case.id))
        };
        let result = match case.operation.as_str() {
            "elementRatio" => session.element_ratio(nominators, denominators, None),
            "isotopeRatio" => session.isotope_ratio(nominators, denominators, None),
            "elementDelta" => {
                session.element_delta(nominators, denominators, measured(), 1000.0, None)
            }
            "isotopeDelta" => {
                session.isotope_delta(nominators, denominators, measured(), 1000.0, None)
            }
            other => panic!("{} uses unknown operation '{}'", case.id, other),
        };

        let error = match result {
            Ok(values) => panic!("{} should fail, got {:?}", case.id, values),
            Err(error) => error,
        };
        assert_eq!(error.kind().name(), case.expected_kind, "{}", case.id);
        assert_eq!(error.placeholder(), case.expected_placeholder, "{}", case.id);
        assert!(
            error.diagnostic_line().starts_with("ERROR: ["),
            "{} diagnostic line: {}",
            case.id,
            error.diagnostic_line()
        );
    }
}

fn assert_result(
    label: &str,
    result: AbundanceResult<OneOrMany<f64>>,
    scalar: bool,
    expected: &[Option<f64>],
    abs_tol: f64,
    rel_tol: f64,
) {
    let values = result.unwrap_or_else(|error| panic!("{} should compute: {}", label, error));
    assert_eq!(values.is_one(), scalar, "{} result shape: {:?}", label, values);
    assert_eq!(
        values.len(),
        expected.len(),
        "{} result length: {:?}",
        label,
        values
    );

    for (index, (actual, expected)) in values.iter().zip(expected).enumerate() {
        let label = format!("{}[{}]", label, index);
        match expected {
            Some(expected) => assert_scalar_close(&label, *expected, *actual, abs_tol, rel_tol),
            None => assert!(actual.is_nan(), "{} expected NaN, got {}", label, actual),
        }
    }
}

fn load_fixtures() -> AbundanceScenarioFixtures {
    let fixture_path = workspace_root().join("tasks/abundance-scenario-fixtures.json");
    let source = fs::read_to_string(&fixture_path).unwrap_or_else(|error| {
        panic!(
            "fixture file {} should be readable: {}",
            fixture_path.display(),
            error
        )
    });

    serde_json::from_str(&source).unwrap_or_else(|error| {
        panic!(
            "fixture file {} should parse as JSON: {}",
            fixture_path.display(),
            error
        )
    })
}

fn assert_scalar_close(label: &str, expected: f64, actual: f64, abs_tol: f64, rel_tol: f64) {
    let abs_diff = (actual - expected).abs();
    let rel_diff = abs_diff / expected.abs().max(1.0);
    assert!(
        abs_diff <= abs_tol || rel_diff <= rel_tol,
        "{} expected={:.15e} actual={:.15e} abs_diff={:.15e} rel_diff={:.15e} abs_tol={:.15e} rel_tol={:.15e}",
        label,
        expected,
        actual,
        abs_diff,
        rel_diff,
        abs_tol,
        rel_tol,
    );
}

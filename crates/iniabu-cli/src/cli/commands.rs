use super::output::{Report, emit, one_or_many, pair_labels, render_values};
use super::{CliError, GlobalArgs};
use iniabu_core::numerics::format_numeric;
use iniabu_core::{
    AbundanceSession, DEFAULT_DELTA_FACTOR, DEFAULT_INTERNAL_NORMALIZATION_FACTOR,
    FractionationLaw, InternalNormalization, OneOrMany, SessionConfig, load_session_config,
};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(clap::Args)]
pub(super) struct ElementArgs {
    /// Element symbols, e.g. Fe Ni
    #[arg(required = true)]
    symbols: Vec<String>,
}

#[derive(clap::Args)]
pub(super) struct IsotopeArgs {
    /// Isotope designators, e.g. Fe-56 Ni-60
    #[arg(required = true)]
    isotopes: Vec<String>,
}

#[derive(clap::Args)]
pub(super) struct RatioModeArgs {
    /// Treat identifiers as isotopes; element symbols expand to all isotopes
    #[arg(long)]
    isotope: bool,

    /// Use mass fractions regardless of the session unit
    #[arg(long, conflicts_with = "number")]
    mass_fraction: bool,

    /// Use number abundances regardless of the session unit
    #[arg(long)]
    number: bool,
}

impl RatioModeArgs {
    fn mass_fraction(&self) -> Option<bool> {
        if self.mass_fraction {
            Some(true)
        } else if self.number {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(clap::Args)]
pub(super) struct RatioArgs {
    /// Nominator identifiers
    #[arg(required = true)]
    nominators: Vec<String>,

    /// Denominator identifiers
    #[arg(long, required = true, num_args = 1..)]
    over: Vec<String>,

    #[command(flatten)]
    mode: RatioModeArgs,
}

#[derive(clap::Args)]
pub(super) struct DeltaArgs {
    #[command(flatten)]
    ratio: RatioArgs,

    /// Measured ratios
    #[arg(long = "value", required = true, num_args = 1.., allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Multiplier of the relative deviation (1000 for permil, 10000 for epsilon)
    #[arg(long, default_value_t = DEFAULT_DELTA_FACTOR)]
    factor: f64,
}

#[derive(clap::Args)]
pub(super) struct BracketArgs {
    #[command(flatten)]
    ratio: RatioArgs,

    /// Measured ratios
    #[arg(long = "value", required = true, num_args = 1.., allow_negative_numbers = true)]
    values: Vec<f64>,
}

#[derive(clap::Args)]
pub(super) struct IntNormArgs {
    /// Target isotopes; element symbols expand to all isotopes
    #[arg(required = true)]
    targets: Vec<String>,

    /// Major and minor normalization isotope
    #[arg(long, required = true, num_args = 2, value_names = ["MAJOR", "MINOR"])]
    norm: Vec<String>,

    /// Measured target values
    #[arg(long = "value", required = true, num_args = 1.., allow_negative_numbers = true)]
    values: Vec<f64>,

    /// Measured values of the major and minor normalization isotope
    #[arg(long = "norm-value", required = true, num_args = 2, value_names = ["MAJOR", "MINOR"])]
    norm_values: Vec<f64>,

    #[arg(long, default_value_t = DEFAULT_INTERNAL_NORMALIZATION_FACTOR)]
    factor: f64,

    /// Mass fractionation law: exp or lin
    #[arg(long, default_value = "exp")]
    law: FractionationLaw,
}

pub(super) fn open_session(global: &GlobalArgs) -> Result<AbundanceSession, CliError> {
    let mut config = match &global.config {
        Some(path) => load_session_config(path).map_err(|error| CliError::Compute(error.into()))?,
        None => SessionConfig::default(),
    };
    if let Some(database) = global.database {
        config.database = database;
    }
    if let Some(unit) = global.unit {
        config.unit = unit;
    }
    tracing::debug!(database = %config.database, unit = ?config.unit, "opening session");
    Ok(AbundanceSession::from_config(&config)?)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ElementRow {
    symbol: String,
    atomic_number: u8,
    mass: f64,
    solar_abundance: f64,
    isotopes: Vec<String>,
    isotope_relative_abundances: Vec<f64>,
    isotope_solar_abundances: Vec<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IsotopeRow {
    isotope: String,
    element: String,
    mass_number: u16,
    mass: f64,
    relative_abundance: f64,
    solar_abundance: f64,
}

pub(super) fn run_element_command(
    session: &AbundanceSession,
    global: &GlobalArgs,
    args: ElementArgs,
) -> Result<i32, CliError> {
    let query = session.element(args.symbols)?;
    let rows: Vec<ElementRow> = query
        .symbols()
        .into_vec()
        .into_iter()
        .zip(query.atomic_number().into_vec())
        .zip(query.mass().into_vec())
        .zip(query.solar_abundance().into_vec())
        .zip(query.isotope_names().into_vec())
        .zip(query.isotope_relative_abundances().into_vec())
        .zip(query.isotope_solar_abundances().into_vec())
        .map(
            |((((((symbol, atomic_number), mass), solar), isotopes), relative), isotope_solar)| {
                ElementRow {
                    symbol,
                    atomic_number,
                    mass,
                    solar_abundance: solar,
                    isotopes,
                    isotope_relative_abundances: relative,
                    isotope_solar_abundances: isotope_solar,
                }
            },
        )
        .collect();

    let mut text = String::new();
    for row in &rows {
        let _ = writeln!(
            text,
            "{} Z={} mass={} solar={}",
            row.symbol,
            row.atomic_number,
            format_numeric(row.mass),
            format_numeric(row.solar_abundance)
        );
        for ((name, relative), solar) in row
            .isotopes
            .iter()
            .zip(&row.isotope_relative_abundances)
            .zip(&row.isotope_solar_abundances)
        {
            let _ = writeln!(
                text,
                "  {} relative={} solar={}",
                name,
                format_numeric(*relative),
                format_numeric(*solar)
            );
        }
    }

    emit(global, &Report::new("element", session, one_or_many(rows)), text)?;
    Ok(0)
}

pub(super) fn run_isotope_command(
    session: &AbundanceSession,
    global: &GlobalArgs,
    args: IsotopeArgs,
) -> Result<i32, CliError> {
    let query = session.isotope(args.isotopes)?;
    let rows: Vec<IsotopeRow> = query
        .names()
        .into_vec()
        .into_iter()
        .zip(query.element().into_vec())
        .zip(query.mass_number().into_vec())
        .zip(query.mass().into_vec())
        .zip(query.relative_abundance().into_vec())
        .zip(query.solar_abundance().into_vec())
        .map(
            |(((((isotope, element), mass_number), mass), relative), solar)| IsotopeRow {
                isotope,
                element,
                mass_number,
                mass,
                relative_abundance: relative,
                solar_abundance: solar,
            },
        )
        .collect();

    let mut text = String::new();
    for row in &rows {
        let _ = writeln!(
            text,
            "{} A={} mass={} relative={} solar={}",
            row.isotope,
            row.mass_number,
            format_numeric(row.mass),
            format_numeric(row.relative_abundance),
            format_numeric(row.solar_abundance)
        );
    }

    emit(global, &Report::new("isotope", session, one_or_many(rows)), text)?;
    Ok(0)
}

pub(super) fn run_ratio_command(
    session: &AbundanceSession,
    global: &GlobalArgs,
    args: RatioArgs,
) -> Result<i32, CliError> {
    let labels = pair_labels(&args.nominators, &args.over);
    let (nominators, denominators) = (one_or_many(args.nominators), one_or_many(args.over));
    let values = if args.mode.isotope {
        session.isotope_ratio(nominators, denominators, args.mode.mass_fraction())?
    } else {
        session.element_ratio(nominators, denominators, args.mode.mass_fraction())?
    };

    let text = render_values(labels.as_deref(), &values);
    emit(global, &Report::new("ratio", session, values), text)?;
    Ok(0)
}

pub(super) fn run_delta_command(
    session: &AbundanceSession,
    global: &GlobalArgs,
    args: DeltaArgs,
) -> Result<i32, CliError> {
    let RatioArgs {
        nominators,
        over,
        mode,
    } = args.ratio;
    let labels = pair_labels(&nominators, &over);
    let measured = one_or_many(args.values);
    let (nominators, denominators) = (one_or_many(nominators), one_or_many(over));
    let values = if mode.isotope {
        session.isotope_delta(nominators, denominators, measured, args.factor, mode.mass_fraction())?
    } else {
        session.element_delta(nominators, denominators, measured, args.factor, mode.mass_fraction())?
    };

    let text = render_values(labels.as_deref(), &values);
    emit(global, &Report::new("delta", session, values), text)?;
    Ok(0)
}

pub(super) fn run_bracket_command(
    session: &AbundanceSession,
    global: &GlobalArgs,
    args: BracketArgs,
) -> Result<i32, CliError> {
    let RatioArgs {
        nominators,
        over,
        mode,
    } = args.ratio;
    let labels = pair_labels(&nominators, &over);
    let measured = one_or_many(args.values);
    let (nominators, denominators) = (one_or_many(nominators), one_or_many(over));
    let values = if mode.isotope {
        session.isotope_bracket(nominators, denominators, measured, mode.mass_fraction())?
    } else {
        session.element_bracket(nominators, denominators, measured, mode.mass_fraction())?
    };

    let text = render_values(labels.as_deref(), &values);
    emit(global, &Report::new("bracket", session, values), text)?;
    Ok(0)
}

pub(super) fn run_int_norm_command(
    session: &AbundanceSession,
    global: &GlobalArgs,
    args: IntNormArgs,
) -> Result<i32, CliError> {
    let [major, minor] = args.norm.as_slice() else {
        return Err(CliError::Usage(
            "--norm expects exactly two isotopes".to_string(),
        ));
    };
    let &[major_value, minor_value] = args.norm_values.as_slice() else {
        return Err(CliError::Usage(
            "--norm-value expects exactly two values".to_string(),
        ));
    };

    let labels = (args.targets.len() == args.values.len()).then(|| args.targets.clone());
    let request = InternalNormalization::new(
        one_or_many(args.targets),
        (major.as_str(), minor.as_str()),
        one_or_many(args.values),
        (major_value, minor_value),
    )
    .with_delta_factor(args.factor)
    .with_law(args.law);
    let values: OneOrMany<f64> = session.isotope_internal_normalization(&request)?;

    let text = render_values(labels.as_deref(), &values);
    emit(global, &Report::new("int-norm", session, values), text)?;
    Ok(0)
}

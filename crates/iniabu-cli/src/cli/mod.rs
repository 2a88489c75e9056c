mod commands;
mod logging;
mod output;

use clap::{ArgAction, Parser};
use iniabu_core::{AbundanceError, AbundanceUnit, Database};
use std::path::PathBuf;

pub fn run_from_env() -> i32 {
    match run(std::env::args().skip(1)) {
        Ok(code) => code,
        Err(error) => {
            let diagnostic = error.as_abundance_error();
            eprintln!("{}", diagnostic.diagnostic_line());
            diagnostic.kind().exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("iniabu".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            logging::init_logging(cli.global.verbose);
            dispatch_parsed(&cli.global, cli.command)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "iniabu",
    version,
    about = "Solar-system abundances, isotope ratios, δ-values and internal normalization"
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Args)]
pub(super) struct GlobalArgs {
    /// Reference dataset: lodders09, asplund09 or nist
    #[arg(long, global = true)]
    database: Option<Database>,

    /// Abundance unit: num_lin, num_log or mass_fraction
    #[arg(long, global = true)]
    unit: Option<AbundanceUnit>,

    /// JSON session config; --database and --unit override it
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = output::OutputFormat::Text)]
    format: output::OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Show element properties
    Element(commands::ElementArgs),
    /// Show isotope properties
    Isotope(commands::IsotopeArgs),
    /// Solar abundance ratios
    Ratio(commands::RatioArgs),
    /// δ-values of measured ratios against solar
    Delta(commands::DeltaArgs),
    /// Bracket notation of measured ratios against solar
    Bracket(commands::BracketArgs),
    /// Internally normalized isotope ratios
    #[command(name = "int-norm")]
    IntNorm(commands::IntNormArgs),
}

fn dispatch_parsed(global: &GlobalArgs, command: CliCommand) -> Result<i32, CliError> {
    let session = commands::open_session(global)?;
    match command {
        CliCommand::Element(args) => commands::run_element_command(&session, global, args),
        CliCommand::Isotope(args) => commands::run_isotope_command(&session, global, args),
        CliCommand::Ratio(args) => commands::run_ratio_command(&session, global, args),
        CliCommand::Delta(args) => commands::run_delta_command(&session, global, args),
        CliCommand::Bracket(args) => commands::run_bracket_command(&session, global, args),
        CliCommand::IntNorm(args) => commands::run_int_norm_command(&session, global, args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(AbundanceError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<AbundanceError> for CliError {
    fn from(error: AbundanceError) -> Self {
        Self::Compute(error)
    }
}

impl CliError {
    fn as_abundance_error(&self) -> AbundanceError {
        match self {
            Self::Usage(message) => {
                AbundanceError::invalid_option("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => AbundanceError::io("IO.CLI", format!("{error:#}")),
        }
    }
}

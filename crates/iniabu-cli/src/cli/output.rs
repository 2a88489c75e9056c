use super::GlobalArgs;
use anyhow::Context;
use iniabu_core::numerics::format_numeric;
use iniabu_core::{AbundanceSession, AbundanceUnit, Database, OneOrMany};
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum OutputFormat {
    Text,
    Json,
}

/// JSON envelope of every command result.
#[derive(Debug, Serialize)]
pub(super) struct Report<T> {
    command: &'static str,
    database: Database,
    unit: AbundanceUnit,
    result: T,
}

impl<T: Serialize> Report<T> {
    pub(super) fn new(command: &'static str, session: &AbundanceSession, result: T) -> Self {
        Self {
            command,
            database: session.database(),
            unit: session.unit(),
            result,
        }
    }
}

pub(super) fn emit<T: Serialize>(
    global: &GlobalArgs,
    report: &Report<T>,
    text: String,
) -> anyhow::Result<()> {
    match global.format {
        OutputFormat::Text => print!("{text}"),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(report)
                .with_context(|| format!("failed to serialize {} report", report.command))?;
            println!("{rendered}");
        }
    }
    Ok(())
}

/// A single command-line value is a scalar request.
pub(super) fn one_or_many<T>(mut values: Vec<T>) -> OneOrMany<T> {
    match values.len() {
        1 => OneOrMany::One(values.remove(0)),
        _ => OneOrMany::Many(values),
    }
}

/// `nom/den` labels when neither side is broadcast beyond the other.
pub(super) fn pair_labels(nominators: &[String], denominators: &[String]) -> Option<Vec<String>> {
    let pairs = nominators.len().max(denominators.len());
    let pick = |values: &[String], index: usize| -> Option<String> {
        match values.len() {
            1 => Some(values[0].clone()),
            len if len == pairs => Some(values[index].clone()),
            _ => None,
        }
    };
    (0..pairs)
        .map(|index| {
            Some(format!(
                "{}/{}",
                pick(nominators, index)?,
                pick(denominators, index)?
            ))
        })
        .collect()
}

/// One value per line, labelled when the labels line up with the values.
pub(super) fn render_values(labels: Option<&[String]>, values: &OneOrMany<f64>) -> String {
    let mut text = String::new();
    match labels.filter(|labels| labels.len() == values.len()) {
        Some(labels) => {
            for (label, value) in labels.iter().zip(values) {
                let _ = writeln!(text, "{label}\t{}", format_numeric(*value));
            }
        }
        None => {
            for value in values {
                let _ = writeln!(text, "{}", format_numeric(*value));
            }
        }
    }
    text
}

use crate::domain::{AbundanceError, AbundanceUnit, Database};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Startup selection of dataset, unit and normalization overrides.
///
/// ```json
/// { "database": "asplund09", "unit": "num_log", "normalizationIsotopes": { "Ni": "Ni-60" } }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionConfig {
    pub database: Database,
    pub unit: AbundanceUnit,
    /// Element symbol to isotope designator.
    pub normalization_isotopes: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionConfigError {
    #[error("failed to read session config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse session config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<SessionConfigError> for AbundanceError {
    fn from(error: SessionConfigError) -> Self {
        match &error {
            SessionConfigError::Read { .. } => AbundanceError::io("IO.CONFIG_READ", error.to_string()),
            SessionConfigError::Parse { .. } => {
                AbundanceError::invalid_option("INPUT.CONFIG_PARSE", error.to_string())
            }
        }
    }
}

pub fn load_session_config(
    config_path: impl AsRef<Path>,
) -> Result<SessionConfig, SessionConfigError> {
    let config_path = config_path.as_ref();
    let source = fs::read_to_string(config_path).map_err(|source| SessionConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| SessionConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}

mod errors;
mod identifiers;
mod shape;

pub use errors::{AbundanceError, AbundanceErrorKind, AbundanceResult};
pub use identifiers::{Identifier, IsotopeKey};
pub use shape::OneOrMany;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Bundled reference datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    /// Lodders, Palme & Gail (2009) solar-system abundances.
    #[default]
    Lodders09,
    /// Asplund et al. (2009) photospheric abundances.
    Asplund09,
    /// NIST (2015) terrestrial isotopic compositions, no solar abundances.
    Nist,
}

impl Database {
    pub const ALL: [Self; 3] = [Self::Lodders09, Self::Asplund09, Self::Nist];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lodders09 => "lodders09",
            Self::Asplund09 => "asplund09",
            Self::Nist => "nist",
        }
    }
}

impl Display for Database {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for Database {
    type Err = AbundanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|database| database.as_str() == value)
            .ok_or_else(|| {
                let available = Self::ALL.map(Self::as_str).join(", ");
                AbundanceError::invalid_option(
                    "INPUT.INVALID_DATABASE",
                    format!(
                        "the database '{value}' could not be found, available databases: {available}"
                    ),
                )
            })
    }
}

/// Representation used for abundance values returned by queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AbundanceUnit {
    /// Linear number abundance (N_Si = 10^6 for solar datasets).
    #[default]
    #[serde(rename = "num_lin")]
    NumLin,
    /// log10(N / N_H) + 12.
    #[serde(rename = "num_log")]
    NumLog,
    #[serde(rename = "mass_fraction")]
    MassFraction,
}

impl AbundanceUnit {
    pub const ALL: [Self; 3] = [Self::NumLin, Self::NumLog, Self::MassFraction];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NumLin => "num_lin",
            Self::NumLog => "num_log",
            Self::MassFraction => "mass_fraction",
        }
    }
}

impl Display for AbundanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for AbundanceUnit {
    type Err = AbundanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == value)
            .ok_or_else(|| {
                let available = Self::ALL.map(Self::as_str).join(", ");
                AbundanceError::invalid_option(
                    "INPUT.INVALID_UNIT",
                    format!("'{value}' is not a valid unit, select one of: {available}"),
                )
            })
    }
}

/// Mass-dependent fractionation law used by internal normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FractionationLaw {
    #[default]
    #[serde(rename = "exp", alias = "exponential")]
    Exponential,
    #[serde(rename = "lin", alias = "linear")]
    Linear,
}

impl FractionationLaw {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exponential => "exp",
            Self::Linear => "lin",
        }
    }
}

impl Display for FractionationLaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for FractionationLaw {
    type Err = AbundanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "exp" | "exponential" => Ok(Self::Exponential),
            "lin" | "linear" => Ok(Self::Linear),
            other => Err(AbundanceError::invalid_option(
                "INPUT.INVALID_LAW",
                format!(
                    "the selected law '{other}' is invalid, select either 'exp' for the \
                     exponential law or 'lin' for the linear law"
                ),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AbundanceErrorKind, AbundanceUnit, Database, FractionationLaw};

    #[test]
    fn option_enums_round_trip_through_their_names() {
        for database in Database::ALL {
            assert_eq!(database.to_string().parse::<Database>(), Ok(database));
        }
        for unit in AbundanceUnit::ALL {
            assert_eq!(unit.to_string().parse::<AbundanceUnit>(), Ok(unit));
        }
        assert_eq!("exponential".parse::<FractionationLaw>(), Ok(FractionationLaw::Exponential));
        assert_eq!("lin".parse::<FractionationLaw>(), Ok(FractionationLaw::Linear));
    }

    #[test]
    fn invalid_options_carry_their_own_placeholder() {
        let database = "lodders03".parse::<Database>().expect_err("unknown database");
        assert_eq!(database.kind(), AbundanceErrorKind::InvalidOption);
        assert_eq!(database.placeholder(), "INPUT.INVALID_DATABASE");

        let unit = "NumLin".parse::<AbundanceUnit>().expect_err("names are lowercase");
        assert_eq!(unit.placeholder(), "INPUT.INVALID_UNIT");

        let law = "quadratic"
            .parse::<FractionationLaw>()
            .expect_err("unknown law");
        assert_eq!(law.placeholder(), "INPUT.INVALID_LAW");
        assert!(law.message().contains("'quadratic'"));
    }

    #[test]
    fn option_enums_serialize_as_lowercase_names() {
        let encoded = serde_json::to_string(&(
            Database::Asplund09,
            AbundanceUnit::MassFraction,
            FractionationLaw::Linear,
        ))
        .expect("options should serialize");
        assert_eq!(encoded, r#"["asplund09","mass_fraction","lin"]"#);

        let law: FractionationLaw =
            serde_json::from_str(r#""exponential""#).expect("alias should deserialize");
        assert_eq!(law, FractionationLaw::Exponential);
    }
}

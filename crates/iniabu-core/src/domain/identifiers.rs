use super::{AbundanceError, AbundanceResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Canonical isotope key, rendered as `Symbol-MassNumber` (e.g. `Si-28`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsotopeKey {
    symbol: String,
    mass_number: u16,
}

impl IsotopeKey {
    pub fn new(symbol: impl Into<String>, mass_number: u16) -> Self {
        Self {
            symbol: symbol.into(),
            mass_number,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn mass_number(&self) -> u16 {
        self.mass_number
    }
}

impl Display for IsotopeKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.symbol, self.mass_number)
    }
}

impl FromStr for IsotopeKey {
    type Err = AbundanceError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            AbundanceError::unknown_identifier(
                "INPUT.UNKNOWN_ISOTOPE",
                format!("'{value}' is not an isotope designator of the form 'Symbol-MassNumber'"),
            )
        };

        let (symbol, mass_number) = value.split_once('-').ok_or_else(malformed)?;
        if !is_symbol_shaped(symbol) {
            return Err(malformed());
        }
        let mass_number = mass_number.parse::<u16>().map_err(|_| malformed())?;
        Ok(Self::new(symbol, mass_number))
    }
}

impl Serialize for IsotopeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsotopeKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A caller-supplied identifier: an element symbol or an isotope designator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    Element(String),
    Isotope(IsotopeKey),
}

impl Identifier {
    pub fn parse(value: &str) -> AbundanceResult<Self> {
        if value.contains('-') {
            return value.parse().map(Self::Isotope);
        }
        if is_symbol_shaped(value) {
            Ok(Self::Element(value.to_string()))
        } else {
            Err(AbundanceError::unknown_identifier(
                "INPUT.UNKNOWN_ELEMENT",
                format!("'{value}' is not an element symbol"),
            ))
        }
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Element(symbol) => f.write_str(symbol),
            Self::Isotope(key) => key.fmt(f),
        }
    }
}

// Case is significant: "Co" and "CO" are different inputs, only the first resolves.
fn is_symbol_shaped(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {}
        _ => return false,
    }
    let rest = chars.as_str();
    rest.len() <= 1 && rest.chars().all(|c| c.is_ascii_lowercase())
}

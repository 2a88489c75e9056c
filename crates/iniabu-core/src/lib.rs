//! Solar-system elemental and isotopic abundances with ratio, δ, bracket
//! and internal-normalization computations.
//!
//! ```no_run
//! use iniabu_core::AbundanceSession;
//!
//! let session = AbundanceSession::new()?;
//! let ratio = session.isotope_ratio("Li-6", "Li-7", None)?;
//! let delta = session.isotope_delta("Si-30", "Si-28", 0.04, 1000.0, None)?;
//! # Ok::<(), iniabu_core::AbundanceError>(())
//! ```

pub mod common;
mod data;
pub mod domain;
pub mod modules;
pub mod numerics;
pub mod session;
pub mod table;

pub use common::constants::{DEFAULT_DELTA_FACTOR, DEFAULT_INTERNAL_NORMALIZATION_FACTOR};
pub use domain::{
    AbundanceError, AbundanceErrorKind, AbundanceResult, AbundanceUnit, Database,
    FractionationLaw, Identifier, IsotopeKey, OneOrMany,
};
pub use session::{
    AbundanceSession, ElementQuery, InternalNormalization, IsotopeQuery, SessionConfig,
    SessionConfigError, load_session_config,
};
pub use table::{AbundanceTable, ElementRecord, IsotopeRecord, TableError};

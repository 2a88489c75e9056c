//! Physical and notation constants shared by the unit converter and the engines.

/// Avogadro constant in mol^-1 (SI 2019 exact value).
pub const AVOGADRO_CONSTANT: f64 = 6.022_140_76e23;

/// Offset of the astronomical log scale: log10(N_X / N_H) + 12.
pub const LOG_ABUNDANCE_OFFSET: f64 = 12.0;

/// Anchor element of the linear number scale.
pub const NORMALIZATION_ANCHOR: &str = "Si";

/// Linear abundance assigned to the anchor element.
pub const NORMALIZATION_ANCHOR_ABUNDANCE: f64 = 1.0e6;

/// Element whose linear abundance is the reference of the log scale.
pub const LOG_REFERENCE_ELEMENT: &str = "H";

/// Parts per thousand.
pub const DEFAULT_DELTA_FACTOR: f64 = 1_000.0;

/// Epsilon units (parts per ten thousand), the usual scale for internal normalization.
pub const DEFAULT_INTERNAL_NORMALIZATION_FACTOR: f64 = 10_000.0;

/// Tolerance for the sum of an element's relative isotope abundances.
pub const RELATIVE_ABUNDANCE_SUM_TOLERANCE: f64 = 1.0e-9;

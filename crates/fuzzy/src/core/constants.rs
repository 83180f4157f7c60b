//! Numeric constants shared by the operators and the law checker.

/// Absolute tolerance used when comparing computed truth degrees.
///
/// Applies to law checks and to the weight-sum validation of
/// [`Owa`](crate::Owa) weight vectors.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Number of evenly spaced sample points on `[0, 1]` used by the law checker.
///
/// 11 points gives the grid `0.0, 0.1, ..., 1.0`, which contains both
/// boundary elements.
pub const DEFAULT_GRID: usize = 11;

/// Andness of the plain importance weighted arithmetic mean.
///
/// At this andness the AIWA exponent is 1 and no positional bias remains.
pub const NEUTRAL_ANDNESS: f64 = 0.5;

/// Lower end of the truth-degree domain.
pub const FALSE: f64 = 0.0;

/// Upper end of the truth-degree domain.
pub const TRUE: f64 = 1.0;

//! T-norm and t-conorm law checking.
//!
//! [`check_laws`] samples a grid over `[0, 1]` and evaluates the axioms a
//! triangular norm or conorm must satisfy, together with the De Morgan
//! relation to its dual. Every failed check is recorded as a
//! [`LawViolation`] in the returned [`LawReport`].
//!
//! # Laws
//!
//! | Law | Checked as |
//! |-----|------------|
//! | Commutativity | `T(x, y) = T(y, x)` |
//! | Associativity | `T(T(x, y), z) = T(x, T(y, z)) = T(x, y, z)` |
//! | Monotonicity | `y ≤ y' ⇒ T(x, y) ≤ T(x, y')` on neighbouring grid points |
//! | Identity | `T(x, e) = x` and `T(x) = x` |
//! | Absorption | `T(x, a) = a` |
//! | Range | `T(x, y) ∈ [0, 1]` |
//! | DeMorgan | `T(x, y) = 1 - T*(1 - x, 1 - y)` |
//! | DualInvolution | `T**(x, y) = T(x, y)` |
//!
//! `e` and `a` are the identity and absorbing elements of the operator's
//! [`NormKind`]; `T*` is its dual.
//!
//! # Example
//!
//! ```
//! use fuzzy_agg::{check_laws, DombiUnion, LawConfig};
//!
//! let report = check_laws(&DombiUnion::with_exponent(2.0).unwrap(), &LawConfig::default());
//! assert!(report.is_lawful(), "{report}");
//! ```

use crate::constants::{DEFAULT_GRID, DEFAULT_TOLERANCE};
use crate::core::kind::NormKind;
use crate::core::traits::DualNorm;
use alloc::vec::Vec;
use core::fmt;

// =============================================================================
// LAWS
// =============================================================================

/// An axiom checked by [`check_laws`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Law {
    /// Arguments may be swapped.
    Commutativity,
    /// Grouping does not matter, and the n-ary form agrees with the fold.
    Associativity,
    /// Non-decreasing in each argument.
    Monotonicity,
    /// The identity element leaves the other argument unchanged.
    Identity,
    /// The absorbing element decides the result.
    Absorption,
    /// Results stay in `[0, 1]`.
    Range,
    /// The operator and its dual are related by the standard negation.
    DeMorgan,
    /// The dual of the dual behaves like the operator.
    DualInvolution,
}

impl Law {
    /// Every law, in checking order.
    pub const ALL: [Self; 8] = [
        Self::Commutativity,
        Self::Associativity,
        Self::Monotonicity,
        Self::Identity,
        Self::Absorption,
        Self::Range,
        Self::DeMorgan,
        Self::DualInvolution,
    ];

    /// Returns the law's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Commutativity => "commutativity",
            Self::Associativity => "associativity",
            Self::Monotonicity => "monotonicity",
            Self::Identity => "identity",
            Self::Absorption => "absorption",
            Self::Range => "range",
            Self::DeMorgan => "de_morgan",
            Self::DualInvolution => "dual_involution",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Sampling configuration for [`check_laws`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LawConfig {
    /// Number of evenly spaced points on `[0, 1]`, at least 2.
    pub grid: usize,
    /// Absolute tolerance for equalities and inequalities.
    pub tolerance: f64,
}

impl LawConfig {
    /// Sets the number of grid points. Values below 2 are raised to 2 so
    /// both boundary elements are always sampled.
    #[must_use]
    pub fn with_grid(mut self, grid: usize) -> Self {
        self.grid = grid.max(2);
        self
    }

    /// Sets the comparison tolerance. Negative or NaN tolerances become `0`.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    /// Returns the sample points, `0.0` and `1.0` included.
    #[must_use]
    pub fn points(&self) -> Vec<f64> {
        let grid = self.grid.max(2);
        let last = (grid - 1) as f64;
        (0..grid).map(|i| i as f64 / last).collect()
    }
}

impl Default for LawConfig {
    fn default() -> Self {
        Self {
            grid: DEFAULT_GRID,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// A single failed check.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LawViolation {
    /// The law that failed.
    pub law: Law,
    /// The sampled arguments.
    pub inputs: Vec<f64>,
    /// The value the law requires (the bound, for inequalities).
    pub expected: f64,
    /// The value the operator produced.
    pub actual: f64,
}

impl fmt::Display for LawViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} violated at {:?}: expected {}, got {}",
            self.law, self.inputs, self.expected, self.actual
        )
    }
}

/// The outcome of [`check_laws`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LawReport {
    /// Kind of the checked operator.
    pub kind: NormKind,
    /// Number of individual checks evaluated.
    pub checks: usize,
    /// Every failed check.
    pub violations: Vec<LawViolation>,
}

impl LawReport {
    /// Returns `true` if no check failed.
    #[must_use]
    pub fn is_lawful(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the number of failed checks.
    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Returns `true` if no check of `law` failed.
    #[must_use]
    pub fn holds(&self, law: Law) -> bool {
        self.violations.iter().all(|v| v.law != law)
    }

    /// Iterates over the failures of one law.
    pub fn violations_of(&self, law: Law) -> impl Iterator<Item = &LawViolation> + '_ {
        self.violations.iter().filter(move |v| v.law == law)
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} checks, {} violations",
            self.kind,
            self.checks,
            self.violations.len()
        )?;
        for law in Law::ALL {
            let failed = self.violations_of(law).count();
            let status = if failed == 0 { "ok" } else { "FAILED" };
            writeln!(f, "  {law:<16} {status} ({failed})")?;
        }
        Ok(())
    }
}

// =============================================================================
// CHECKER
// =============================================================================

struct Checker {
    tolerance: f64,
    checks: usize,
    violations: Vec<LawViolation>,
}

impl Checker {
    fn equal(&mut self, law: Law, inputs: &[f64], expected: f64, actual: f64) {
        self.checks += 1;
        if !(libm::fabs(expected - actual) <= self.tolerance) {
            self.record(law, inputs, expected, actual);
        }
    }

    fn at_most(&mut self, law: Law, inputs: &[f64], bound: f64, actual: f64) {
        self.checks += 1;
        if !(actual <= bound + self.tolerance) {
            self.record(law, inputs, bound, actual);
        }
    }

    fn at_least(&mut self, law: Law, inputs: &[f64], bound: f64, actual: f64) {
        self.checks += 1;
        if !(actual >= bound - self.tolerance) {
            self.record(law, inputs, bound, actual);
        }
    }

    fn record(&mut self, law: Law, inputs: &[f64], expected: f64, actual: f64) {
        tracing::warn!(%law, ?inputs, expected, actual, "operator law violated");
        self.violations.push(LawViolation {
            law,
            inputs: inputs.to_vec(),
            expected,
            actual,
        });
    }
}

/// Checks the t-norm or t-conorm laws of `op` over a sampled grid.
///
/// The checker never fails: operators that break a law produce a report with
/// violations, which [`LawReport::is_lawful`] summarizes.
pub fn check_laws<N: DualNorm>(op: &N, config: &LawConfig) -> LawReport {
    let kind = op.kind();
    let identity = kind.identity();
    let absorbing = kind.absorbing();
    let dual = op.dual();
    let round_trip = dual.dual();
    let points = config.points();

    let mut checker = Checker {
        tolerance: config.tolerance,
        checks: 0,
        violations: Vec::new(),
    };

    for &x in &points {
        let single = op.apply(&[x]);
        checker.equal(Law::Identity, &[x], x, single);
        checker.equal(Law::Identity, &[x, identity], x, op.apply2(x, identity));
        checker.equal(Law::Absorption, &[x, absorbing], absorbing, op.apply2(x, absorbing));

        for (j, &y) in points.iter().enumerate() {
            let xy = op.apply2(x, y);
            let pair = [x, y];

            checker.at_least(Law::Range, &pair, 0.0, xy);
            checker.at_most(Law::Range, &pair, 1.0, xy);
            checker.equal(Law::Commutativity, &pair, xy, op.apply2(y, x));
            checker.equal(
                Law::DeMorgan,
                &pair,
                xy,
                1.0 - dual.apply2(1.0 - x, 1.0 - y),
            );
            checker.equal(Law::DualInvolution, &pair, xy, round_trip.apply2(x, y));

            if let Some(&next) = points.get(j + 1) {
                checker.at_least(Law::Monotonicity, &[x, y, next], xy, op.apply2(x, next));
            }

            for &z in &points {
                let triple = [x, y, z];
                let left = op.apply2(xy, z);
                checker.equal(Law::Associativity, &triple, left, op.apply2(x, op.apply2(y, z)));
                checker.equal(Law::Associativity, &triple, left, op.apply(&triple));
            }
        }
    }

    tracing::debug!(
        %kind,
        checks = checker.checks,
        violations = checker.violations.len(),
        "law check finished"
    );

    LawReport {
        kind,
        checks: checker.checks,
        violations: checker.violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::Aggregation;
    use crate::norm::{
        AlgebraicProduct, BoundedSum, DombiIntersection, DrasticSum, HamacherProduct, Maximum,
        Minimum, Norm, YagerUnion,
    };
    use alloc::vec;

    /// A "conorm" that is not associative.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Average;

    /// Its dual.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct AverageDual;

    impl Aggregation for Average {
        fn apply(&self, values: &[f64]) -> f64 {
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        }
    }

    impl Aggregation for AverageDual {
        fn apply(&self, values: &[f64]) -> f64 {
            if values.is_empty() {
                1.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        }
    }

    impl DualNorm for Average {
        type Dual = AverageDual;
        fn kind(&self) -> NormKind {
            NormKind::TConorm
        }
        fn dual(&self) -> AverageDual {
            AverageDual
        }
    }

    impl DualNorm for AverageDual {
        type Dual = Average;
        fn kind(&self) -> NormKind {
            NormKind::TNorm
        }
        fn dual(&self) -> Average {
            Average
        }
    }

    #[test]
    fn test_points_include_bounds() {
        let points = LawConfig::default().with_grid(5).points();
        assert_eq!(points, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(LawConfig::default().with_grid(0).points(), vec![0.0, 1.0]);
        assert_eq!(LawConfig::default().points().len(), DEFAULT_GRID);
    }

    #[test]
    fn test_fixed_norms_are_lawful() {
        let config = LawConfig::default();
        assert!(check_laws(&Minimum, &config).is_lawful());
        assert!(check_laws(&Maximum, &config).is_lawful());
        assert!(check_laws(&AlgebraicProduct, &config).is_lawful());
        assert!(check_laws(&BoundedSum, &config).is_lawful());
        assert!(check_laws(&DrasticSum, &config).is_lawful());
    }

    #[test]
    fn test_parametric_norms_are_lawful() {
        let config = LawConfig::default();
        let report = check_laws(&HamacherProduct::new(0.0).unwrap(), &config);
        assert!(report.is_lawful(), "{report}");
        let report = check_laws(&DombiIntersection::with_exponent(0.7).unwrap(), &config);
        assert!(report.is_lawful(), "{report}");
        let report = check_laws(&Norm::from(YagerUnion::with_exponent(3.0).unwrap()), &config);
        assert!(report.is_lawful(), "{report}");
    }

    #[test]
    fn test_average_is_not_a_conorm() {
        let report = check_laws(&Average, &LawConfig::default());
        assert!(!report.is_lawful());
        assert_eq!(report.kind, NormKind::TConorm);
        assert!(!report.holds(Law::Associativity));
        assert!(!report.holds(Law::Identity));
        assert!(!report.holds(Law::Absorption));
        assert!(report.holds(Law::Commutativity));
        assert!(report.holds(Law::Range));
        assert!(report.holds(Law::DeMorgan));
        assert!(report.holds(Law::DualInvolution));
        assert!(report.violations_of(Law::Identity).all(|v| v.law == Law::Identity));
    }

    #[test]
    fn test_report_counts_checks() {
        let config = LawConfig::default().with_grid(3);
        let report = check_laws(&Minimum, &config);
        // per x: 3; per (x, y): 5 plus monotonicity on 2 of 3 y; per (x, y, z): 2
        let n = 3;
        let expected = n * 3 + n * n * 5 + n * (n - 1) + n * n * n * 2;
        assert_eq!(report.checks, expected);
        assert_eq!(report.violation_count(), 0);
    }
}

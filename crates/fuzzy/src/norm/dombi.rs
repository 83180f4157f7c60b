//! The Dombi family.
//!
//! For an exponent `p` in `(0, ∞)`:
//!
//! ```text
//! S(x₁..xₙ) = 1 / (1 + (Σ (xᵢ / (1 - xᵢ))^p)^(-1/p))
//! T(x₁..xₙ) = 1 / (1 + (Σ ((1 - xᵢ) / xᵢ)^p)^(1/p))
//! ```
//!
//! `p = +∞` is the maximum and minimum; `p = 0` is the drastic sum and
//! product. The exponent may also be given as a drasticality coefficient
//! `d ∈ [0, 1]` with `p = (1 - d) / d`, so `d = 0` is the least and `d = 1`
//! the most drastic member.
//!
//! Inputs equal to the absorbing element are handled before the ratio is
//! formed, so a `1.0` in a union or a `0.0` in an intersection never reaches
//! a division.

use super::drastic::{DrasticProduct, DrasticSum};
use super::factory::{exponent, exponent_from_drasticality, Factory};
use super::standard::{Maximum, Minimum};
use crate::core::error::Result;
use crate::core::kind::NormKind;
use crate::core::traits::{Aggregation, DualNorm};

/// The Dombi t-conorm.
///
/// # Example
///
/// ```
/// use fuzzy_agg::{Aggregation, DombiUnion};
///
/// let union = DombiUnion::with_exponent(2.0).unwrap();
/// assert_eq!(union.apply(&[0.3, 1.0]), 1.0);
/// assert!(union.apply(&[0.3, 0.6]) > 0.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct DombiUnion {
    p: f64,
}

/// The Dombi t-norm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct DombiIntersection {
    p: f64,
}

impl DombiUnion {
    /// Factory reading `[p]`.
    pub const BY_EXPONENT: Factory<Self> =
        Factory::new("dombi_union_by_exponent", 1, |params| Self::with_exponent(params[0]));

    /// Factory reading `[d]`, the drasticality coefficient.
    pub const BY_DRASTICALITY: Factory<Self> = Factory::new(
        "dombi_union_by_drasticality",
        1,
        |params| Self::with_drasticality(params[0]),
    );

    /// Creates the union with exponent `p`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if `p` is negative or NaN.
    pub fn with_exponent(p: f64) -> Result<Self> {
        exponent("p", p).map(|p| Self { p })
    }

    /// Creates the union from a drasticality coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if `d` lies outside `[0, 1]`.
    pub fn with_drasticality(d: f64) -> Result<Self> {
        exponent_from_drasticality(d).map(|p| Self { p })
    }

    /// Returns the exponent `p`.
    #[inline]
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.p
    }
}

impl DombiIntersection {
    /// Factory reading `[p]`.
    pub const BY_EXPONENT: Factory<Self> = Factory::new(
        "dombi_intersection_by_exponent",
        1,
        |params| Self::with_exponent(params[0]),
    );

    /// Factory reading `[d]`, the drasticality coefficient.
    pub const BY_DRASTICALITY: Factory<Self> = Factory::new(
        "dombi_intersection_by_drasticality",
        1,
        |params| Self::with_drasticality(params[0]),
    );

    /// Creates the intersection with exponent `p`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if `p` is negative or NaN.
    pub fn with_exponent(p: f64) -> Result<Self> {
        exponent("p", p).map(|p| Self { p })
    }

    /// Creates the intersection from a drasticality coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if `d` lies outside `[0, 1]`.
    pub fn with_drasticality(d: f64) -> Result<Self> {
        exponent_from_drasticality(d).map(|p| Self { p })
    }

    /// Returns the exponent `p`.
    #[inline]
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.p
    }
}

impl Aggregation for DombiUnion {
    fn apply(&self, values: &[f64]) -> f64 {
        if self.p == f64::INFINITY {
            return Maximum.apply(values);
        }
        if self.p == 0.0 {
            return DrasticSum.apply(values);
        }
        let mut sum = 0.0;
        for &x in values {
            if x == 1.0 {
                return 1.0;
            }
            sum += libm::pow(x / (1.0 - x), self.p);
        }
        if sum == 0.0 {
            return 0.0;
        }
        1.0 / (1.0 + libm::pow(sum, -1.0 / self.p))
    }
}

impl Aggregation for DombiIntersection {
    fn apply(&self, values: &[f64]) -> f64 {
        if self.p == f64::INFINITY {
            return Minimum.apply(values);
        }
        if self.p == 0.0 {
            return DrasticProduct.apply(values);
        }
        let mut sum = 0.0;
        for &x in values {
            if x == 0.0 {
                return 0.0;
            }
            sum += libm::pow((1.0 - x) / x, self.p);
        }
        if sum == 0.0 {
            return 1.0;
        }
        1.0 / (1.0 + libm::pow(sum, 1.0 / self.p))
    }
}

impl DualNorm for DombiUnion {
    type Dual = DombiIntersection;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TConorm
    }

    #[inline]
    fn dual(&self) -> DombiIntersection {
        DombiIntersection { p: self.p }
    }
}

impl DualNorm for DombiIntersection {
    type Dual = DombiUnion;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TNorm
    }

    #[inline]
    fn dual(&self) -> DombiUnion {
        DombiUnion { p: self.p }
    }
}

impl TryFrom<f64> for DombiUnion {
    type Error = crate::FuzzyError;

    fn try_from(p: f64) -> Result<Self> {
        Self::with_exponent(p)
    }
}

impl From<DombiUnion> for f64 {
    fn from(op: DombiUnion) -> Self {
        op.p
    }
}

impl TryFrom<f64> for DombiIntersection {
    type Error = crate::FuzzyError;

    fn try_from(p: f64) -> Result<Self> {
        Self::with_exponent(p)
    }
}

impl From<DombiIntersection> for f64 {
    fn from(op: DombiIntersection) -> Self {
        op.p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::norm::ParametricFactory;
    use crate::FuzzyError;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_least_drastic_is_max() {
        let union = DombiUnion::BY_DRASTICALITY.create(&[0.0]).unwrap();
        assert_eq!(union.exponent(), f64::INFINITY);
        assert_eq!(union.apply(&[0.9, 0.2, 0.1]), 0.9);
        assert_eq!(union.apply(&[0.0, 0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_most_drastic_is_drastic_sum() {
        let union = DombiUnion::BY_DRASTICALITY.create(&[1.0]).unwrap();
        assert_eq!(union.exponent(), 0.0);
        assert_eq!(union.apply(&[0.9, 0.2, 0.1]), 1.0);
        assert_eq!(union.apply(&[0.0, 0.3, 0.0]), 0.3);
        assert_eq!(union.apply(&[0.3]), 0.3);
    }

    #[test]
    fn test_exponent_one_closed_form() {
        // p = 1: S(a, b) = (a + b - 2ab) / (1 - ab)
        let union = DombiUnion::with_exponent(1.0).unwrap();
        let (a, b) = (0.3, 0.6);
        let expected = (a + b - 2.0 * a * b) / (1.0 - a * b);
        assert!(close(union.apply(&[a, b]), expected));

        // p = 1: T(a, b) = ab / (a + b - ab)
        let intersection = union.dual();
        assert!(close(intersection.apply(&[a, b]), a * b / (a + b - a * b)));
    }

    #[test]
    fn test_boundaries_short_circuit() {
        for p in [0.0, 0.5, 1.0, 2.0, 7.5, f64::INFINITY] {
            let union = DombiUnion::with_exponent(p).unwrap();
            let intersection = DombiIntersection::with_exponent(p).unwrap();
            assert_eq!(union.apply(&[0.2, 1.0, 0.4]), 1.0, "p = {p}");
            assert_eq!(intersection.apply(&[0.2, 0.0, 0.4]), 0.0, "p = {p}");
            assert_eq!(union.apply(&[]), 0.0, "p = {p}");
            assert_eq!(intersection.apply(&[]), 1.0, "p = {p}");
            assert_eq!(union.apply(&[0.0, 0.0]), 0.0, "p = {p}");
            assert_eq!(intersection.apply(&[1.0, 1.0]), 1.0, "p = {p}");
        }
    }

    #[test]
    fn test_single_input_is_identity() {
        for p in [0.0, 0.5, 2.0, f64::INFINITY] {
            let union = DombiUnion::with_exponent(p).unwrap();
            let intersection = union.dual();
            assert!(close(union.apply(&[0.37]), 0.37), "p = {p}");
            assert!(close(intersection.apply(&[0.37]), 0.37), "p = {p}");
        }
    }

    #[test]
    fn test_duality_pointwise() {
        let union = DombiUnion::with_exponent(2.0).unwrap();
        let intersection = union.dual();
        let x = [0.15, 0.55, 0.8];
        let negated: [f64; 3] = [0.85, 0.45, 0.2];
        assert!(close(union.apply(&x), 1.0 - intersection.apply(&negated)));
    }

    #[test]
    fn test_dual_keeps_exponent() {
        let union = DombiUnion::BY_DRASTICALITY.create(&[0.2]).unwrap();
        assert_eq!(union.dual().exponent(), union.exponent());
        assert_eq!(union.dual().dual(), union);
    }

    #[test]
    fn test_factory_errors() {
        assert_eq!(
            DombiUnion::BY_EXPONENT.create(&[]),
            Err(FuzzyError::ParameterCount {
                expected: 1,
                actual: 0
            })
        );
        assert!(matches!(
            DombiIntersection::BY_DRASTICALITY.create(&[1.5]),
            Err(FuzzyError::InvalidParameter {
                name: "drasticality",
                ..
            })
        ));
        assert!(matches!(
            DombiIntersection::BY_EXPONENT.create(&[-2.0]),
            Err(FuzzyError::InvalidParameter { name: "p", .. })
        ));
    }
}

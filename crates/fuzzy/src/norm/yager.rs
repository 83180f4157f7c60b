//! The Yager family.
//!
//! ```text
//! S(x₁..xₙ) = min(1, (Σ xᵢ^p)^(1/p))
//! T(x₁..xₙ) = max(0, 1 - (Σ (1 - xᵢ)^p)^(1/p))
//! ```
//!
//! `p = 1` is the Łukasiewicz pair, `p = +∞` the maximum and minimum, and
//! `p = 0` the drastic pair.

use super::drastic::{DrasticProduct, DrasticSum};
use super::factory::{exponent, Factory};
use super::standard::{Maximum, Minimum};
use crate::core::error::Result;
use crate::core::kind::NormKind;
use crate::core::traits::{Aggregation, DualNorm};

/// The Yager t-conorm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct YagerUnion {
    p: f64,
}

/// The Yager t-norm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct YagerIntersection {
    p: f64,
}

impl YagerUnion {
    /// Factory reading `[p]`.
    pub const BY_EXPONENT: Factory<Self> =
        Factory::new("yager_union", 1, |params| Self::with_exponent(params[0]));

    /// Creates the union with exponent `p`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if `p` is negative or NaN.
    pub fn with_exponent(p: f64) -> Result<Self> {
        exponent("p", p).map(|p| Self { p })
    }

    /// Returns the exponent `p`.
    #[inline]
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.p
    }
}

impl YagerIntersection {
    /// Factory reading `[p]`.
    pub const BY_EXPONENT: Factory<Self> =
        Factory::new("yager_intersection", 1, |params| Self::with_exponent(params[0]));

    /// Creates the intersection with exponent `p`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if `p` is negative or NaN.
    pub fn with_exponent(p: f64) -> Result<Self> {
        exponent("p", p).map(|p| Self { p })
    }

    /// Returns the exponent `p`.
    #[inline]
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.p
    }
}

impl Aggregation for YagerUnion {
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
            sum += libm::pow(x, self.p);
        }
        libm::pow(sum, 1.0 / self.p).min(1.0)
    }
}

impl Aggregation for YagerIntersection {
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
            sum += libm::pow(1.0 - x, self.p);
        }
        (1.0 - libm::pow(sum, 1.0 / self.p)).max(0.0)
    }
}

impl DualNorm for YagerUnion {
    type Dual = YagerIntersection;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TConorm
    }

    #[inline]
    fn dual(&self) -> YagerIntersection {
        YagerIntersection { p: self.p }
    }
}

impl DualNorm for YagerIntersection {
    type Dual = YagerUnion;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TNorm
    }

    #[inline]
    fn dual(&self) -> YagerUnion {
        YagerUnion { p: self.p }
    }
}

impl TryFrom<f64> for YagerUnion {
    type Error = crate::FuzzyError;

    fn try_from(p: f64) -> Result<Self> {
        Self::with_exponent(p)
    }
}

impl From<YagerUnion> for f64 {
    fn from(op: YagerUnion) -> Self {
        op.p
    }
}

impl TryFrom<f64> for YagerIntersection {
    type Error = crate::FuzzyError;

    fn try_from(p: f64) -> Result<Self> {
        Self::with_exponent(p)
    }
}

impl From<YagerIntersection> for f64 {
    fn from(op: YagerIntersection) -> Self {
        op.p
    }
}

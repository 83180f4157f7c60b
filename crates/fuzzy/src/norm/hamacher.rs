//! The Hamacher family.
//!
//! For `γ >= 0`:
//!
//! ```text
//! T(a, b) = a·b / (γ + (1 - γ)(a + b - a·b))
//! S(a, b) = (a + b + (γ - 2)·a·b) / (1 + (γ - 1)·a·b)
//! ```
//!
//! `γ = 1` gives the algebraic product and sum; `γ = 0` gives the Hamacher
//! product proper. Both operators are associative, so the n-ary form folds
//! the binary one from the identity.

use super::factory::Factory;
use crate::core::error::{invalid_parameter, Result};
use crate::core::kind::NormKind;
use crate::core::traits::{Aggregation, DualNorm};

fn gamma(g: f64) -> Result<f64> {
    if !(g >= 0.0) || !g.is_finite() {
        return Err(invalid_parameter("gamma", g, "a finite gamma >= 0"));
    }
    Ok(g)
}

/// The Hamacher t-norm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct HamacherProduct {
    gamma: f64,
}

/// The Hamacher t-conorm.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct HamacherSum {
    gamma: f64,
}

impl HamacherProduct {
    /// Factory reading `[γ]`.
    pub const BY_GAMMA: Factory<Self> = Factory::new("hamacher_product", 1, |p| Self::new(p[0]));

    /// Creates the product with shape parameter `gamma`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// unless `gamma` is finite and non-negative.
    pub fn new(gamma_value: f64) -> Result<Self> {
        gamma(gamma_value).map(|gamma| Self { gamma })
    }

    /// Returns the shape parameter.
    #[inline]
    #[must_use]
    pub const fn gamma(&self) -> f64 {
        self.gamma
    }

    fn binary(&self, a: f64, b: f64) -> f64 {
        let denominator = self.gamma + (1.0 - self.gamma) * (a + b - a * b);
        if denominator == 0.0 {
            0.0
        } else {
            a * b / denominator
        }
    }
}

impl HamacherSum {
    /// Factory reading `[γ]`.
    pub const BY_GAMMA: Factory<Self> = Factory::new("hamacher_sum", 1, |p| Self::new(p[0]));

    /// Creates the sum with shape parameter `gamma`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// unless `gamma` is finite and non-negative.
    pub fn new(gamma_value: f64) -> Result<Self> {
        gamma(gamma_value).map(|gamma| Self { gamma })
    }

    /// Returns the shape parameter.
    #[inline]
    #[must_use]
    pub const fn gamma(&self) -> f64 {
        self.gamma
    }

    fn binary(&self, a: f64, b: f64) -> f64 {
        let ab = a * b;
        (a + b + (self.gamma - 2.0) * ab) / (1.0 + (self.gamma - 1.0) * ab)
    }
}

impl Aggregation for HamacherProduct {
    fn apply(&self, values: &[f64]) -> f64 {
        let mut acc = 1.0;
        for &x in values {
            if x == 0.0 {
                return 0.0;
            }
            acc = self.binary(acc, x);
        }
        acc
    }
}

impl Aggregation for HamacherSum {
    fn apply(&self, values: &[f64]) -> f64 {
        let mut acc = 0.0;
        for &x in values {
            if x == 1.0 {
                return 1.0;
            }
            acc = self.binary(acc, x);
        }
        acc
    }
}

impl DualNorm for HamacherProduct {
    type Dual = HamacherSum;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TNorm
    }

    #[inline]
    fn dual(&self) -> HamacherSum {
        HamacherSum { gamma: self.gamma }
    }
}

impl DualNorm for HamacherSum {
    type Dual = HamacherProduct;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TConorm
    }

    #[inline]
    fn dual(&self) -> HamacherProduct {
        HamacherProduct { gamma: self.gamma }
    }
}

impl TryFrom<f64> for HamacherProduct {
    type Error = crate::FuzzyError;

    fn try_from(gamma: f64) -> Result<Self> {
        Self::new(gamma)
    }
}

impl From<HamacherProduct> for f64 {
    fn from(op: HamacherProduct) -> Self {
        op.gamma
    }
}

impl TryFrom<f64> for HamacherSum {
    type Error = crate::FuzzyError;

    fn try_from(gamma: f64) -> Result<Self> {
        Self::new(gamma)
    }
}

impl From<HamacherSum> for f64 {
    fn from(op: HamacherSum) -> Self {
        op.gamma
    }
}

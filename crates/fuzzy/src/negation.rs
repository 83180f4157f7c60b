//! Fuzzy negations.
//!
//! A negation is a decreasing involution on `[0, 1]` with `n(0) = 1` and
//! `n(1) = 0`. [`Complement`] applies one to the output of a membership
//! function.
//!
//! # Example
//!
//! ```
//! use fuzzy_agg::{Complement, Membership, Negation, Triangular, Zadeh};
//!
//! assert_eq!(Zadeh.negate(0.0), 1.0);
//!
//! let not_near_one = Complement::new(Triangular::new(0.0, 1.0, 2.0).unwrap(), Zadeh);
//! assert_eq!(not_near_one.membership(1.0), 0.0);
//! assert_eq!(not_near_one.membership(2.0), 1.0);
//! ```

use crate::core::error::{invalid_parameter, FuzzyError, Result};
use crate::sets::Membership;

/// A strong fuzzy negation.
pub trait Negation {
    /// Returns the negation of the degree `y`.
    fn negate(&self, y: f64) -> f64;
}

/// The standard negation, `n(y) = 1 - y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Zadeh;

impl Negation for Zadeh {
    #[inline]
    fn negate(&self, y: f64) -> f64 {
        1.0 - y
    }
}

/// The Sugeno negation, `n(y) = (1 - y) / (1 + λy)` for `λ > -1`.
///
/// `λ = 0` is the standard negation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Sugeno {
    lambda: f64,
}

impl Sugeno {
    /// Creates the negation with parameter `lambda`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// unless `lambda` is finite and greater than `-1`.
    pub fn new(lambda: f64) -> Result<Self> {
        if !(lambda > -1.0 && lambda.is_finite()) {
            return Err(invalid_parameter("lambda", lambda, "a finite lambda > -1"));
        }
        Ok(Self { lambda })
    }

    /// Returns `λ`.
    #[must_use]
    pub const fn lambda(&self) -> f64 {
        self.lambda
    }
}

impl Negation for Sugeno {
    fn negate(&self, y: f64) -> f64 {
        (1.0 - y) / (1.0 + self.lambda * y)
    }
}

/// The Yager negation, `n(y) = (1 - y^w)^(1/w)` for `w > 0`.
///
/// `w = 1` is the standard negation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Yager {
    w: f64,
}

impl Yager {
    /// Creates the negation with exponent `w`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// unless `w` is finite and positive.
    pub fn new(w: f64) -> Result<Self> {
        if !(w > 0.0 && w.is_finite()) {
            return Err(invalid_parameter("w", w, "a finite w > 0"));
        }
        Ok(Self { w })
    }

    /// Returns `w`.
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.w
    }
}

impl Negation for Yager {
    fn negate(&self, y: f64) -> f64 {
        libm::pow(1.0 - libm::pow(y, self.w), 1.0 / self.w)
    }
}

impl TryFrom<f64> for Sugeno {
    type Error = FuzzyError;

    fn try_from(lambda: f64) -> Result<Self> {
        Self::new(lambda)
    }
}

impl From<Sugeno> for f64 {
    fn from(negation: Sugeno) -> Self {
        negation.lambda
    }
}

impl TryFrom<f64> for Yager {
    type Error = FuzzyError;

    fn try_from(w: f64) -> Result<Self> {
        Self::new(w)
    }
}

impl From<Yager> for f64 {
    fn from(negation: Yager) -> Self {
        negation.w
    }
}

/// The complement of a membership function under a negation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complement<M, N = Zadeh> {
    inner: M,
    negation: N,
}

impl<M: Membership, N: Negation> Complement<M, N> {
    /// Creates `x ↦ negation(inner(x))`.
    #[must_use]
    pub const fn new(inner: M, negation: N) -> Self {
        Self { inner, negation }
    }

    /// Returns the negated degree of a value already evaluated by the inner
    /// function.
    #[inline]
    #[must_use]
    pub fn negate(&self, y: f64) -> f64 {
        self.negation.negate(y)
    }
}

impl<M: Membership, N: Negation> Membership for Complement<M, N> {
    fn membership(&self, x: f64) -> f64 {
        self.negation.negate(self.inner.membership(x))
    }
}

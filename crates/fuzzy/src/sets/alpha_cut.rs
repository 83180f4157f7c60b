use super::Membership;
use crate::core::error::{invalid_parameter, Result};

/// The α-cut of another membership function.
///
/// Degrees at or above `α` pass through unchanged; degrees below it become
/// `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlphaCut<M> {
    inner: M,
    alpha: f64,
}

impl<M: Membership> AlphaCut<M> {
    /// Cuts `inner` at `alpha`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if `alpha` lies outside `[0, 1]`.
    pub fn new(inner: M, alpha: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(invalid_parameter("alpha", alpha, "a value in [0, 1]"));
        }
        Ok(Self { inner, alpha })
    }

    /// Returns the cut level.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns the wrapped function.
    #[must_use]
    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: Membership> Membership for AlphaCut<M> {
    fn membership(&self, x: f64) -> f64 {
        let y = self.inner.membership(x);
        if y >= self.alpha {
            y
        } else {
            0.0
        }
    }
}

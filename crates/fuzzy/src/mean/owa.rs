//! Ordered weighted averaging.

use crate::constants::DEFAULT_TOLERANCE;
use crate::core::error::{invalid_parameter, Result};
use crate::core::traits::Aggregation;
use alloc::vec::Vec;

/// Yager's ordered weighted averaging operator.
///
/// Weights attach to positions, not to arguments: inputs are sorted in
/// descending order and the `i`-th weight multiplies the `i`-th largest
/// input. Weights `[1, 0, .., 0]` give the maximum, `[0, .., 0, 1]` the
/// minimum and uniform weights the arithmetic mean.
///
/// When the number of inputs differs from the number of weights, the first
/// `min(n, weights)` positions are used and their weights renormalized.
///
/// # Example
///
/// ```
/// use fuzzy_agg::{Aggregation, Owa};
///
/// let owa = Owa::new(vec![0.5, 0.3, 0.2]).unwrap();
/// // sorted: 0.9, 0.6, 0.1
/// let y = owa.apply(&[0.1, 0.9, 0.6]);
/// assert!((y - 0.65).abs() < 1e-12);
/// assert!((owa.orness() - 0.65).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Owa {
    weights: Vec<f64>,
}

impl Owa {
    /// Creates an OWA operator from positional weights.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if the vector is empty, a weight is negative or non-finite, or the weights
    /// do not sum to `1` within [`DEFAULT_TOLERANCE`].
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        if weights.is_empty() {
            return Err(invalid_parameter("weights", 0.0, "at least one weight"));
        }
        let mut total = 0.0;
        for &w in &weights {
            if !w.is_finite() || w < 0.0 {
                return Err(invalid_parameter("weight", w, "a finite weight >= 0"));
            }
            total += w;
        }
        if libm::fabs(total - 1.0) > DEFAULT_TOLERANCE {
            return Err(invalid_parameter("weights", total, "weights summing to 1"));
        }
        Ok(Self { weights })
    }

    /// Creates the OWA operator with `n` equal weights, the arithmetic mean.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if `n` is zero.
    pub fn uniform(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(invalid_parameter("n", 0.0, "at least one weight"));
        }
        Self::new(alloc::vec![1.0 / n as f64; n])
    }

    /// Returns the positional weights.
    #[inline]
    #[must_use]
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Returns Yager's orness measure, `Σ wᵢ (n - i) / (n - 1)` for
    /// positions `i = 1..n`.
    ///
    /// `1` for the maximum, `0` for the minimum, `0.5` for the mean. A single
    /// weight is neither and/or-like, so its orness is `0.5`.
    #[must_use]
    pub fn orness(&self) -> f64 {
        let n = self.weights.len();
        if n < 2 {
            return 0.5;
        }
        let span = (n - 1) as f64;
        self.weights
            .iter()
            .enumerate()
            .map(|(i, w)| w * (n - 1 - i) as f64 / span)
            .sum()
    }

    /// Returns `1 - orness()`.
    #[inline]
    #[must_use]
    pub fn andness(&self) -> f64 {
        1.0 - self.orness()
    }
}

impl Aggregation for Owa {
    fn apply(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| b.total_cmp(a));

        let used = &self.weights[..sorted.len().min(self.weights.len())];
        let total: f64 = used.iter().sum();
        if total == 0.0 {
            return f64::NAN;
        }
        let weighted: f64 = used.iter().zip(&sorted).map(|(w, x)| w * x).sum();
        weighted / total
    }
}

impl TryFrom<Vec<f64>> for Owa {
    type Error = crate::FuzzyError;

    fn try_from(weights: Vec<f64>) -> Result<Self> {
        Self::new(weights)
    }
}

impl From<Owa> for Vec<f64> {
    fn from(owa: Owa) -> Self {
        owa.weights
    }
}

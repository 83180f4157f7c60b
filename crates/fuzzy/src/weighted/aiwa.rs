//! Andness-directed importance weighted averaging (AIWA).
//!
//! An andness `α ∈ (0, 1)` selects how conjunctive the average is. For
//! observations `(vᵢ, aᵢ)` (importance, value):
//!
//! ```text
//! α ≥ 0.5:  q = α / (1 - α)    F = 1 - (Σ (vᵢ(1 - aᵢ))^q / Σ vᵢ^q)^(1/q)
//! α < 0.5:  q = (1 - α) / α    F = (Σ (vᵢ aᵢ)^q / Σ vᵢ^q)^(1/q)
//! ```
//!
//! `α = 0.5` is the importance weighted arithmetic mean. As `α → 1` the
//! result approaches the minimum over observations with non-zero importance,
//! and as `α → 0` it approaches the maximum. Raising the importances to `q`
//! sharpens them together with the values, so a low-importance observation
//! loses influence as the operator moves away from the mean.
//!
//! Values are expected in `[0, 1]` but need not lie there. Away from
//! `α = 0.5` a degree outside the unit interval goes negative, and powers
//! keep its sign (`sign(x)·|x|^q`), so the aggregate stays finite and between
//! the smallest and largest value.

use crate::constants::NEUTRAL_ANDNESS;
use crate::core::error::{invalid_parameter, FuzzyError, Result};
use crate::core::traits::{Aggregation, WeightedAggregation};
use crate::core::weighted_value::WeightedValue;
use alloc::vec::Vec;

/// Batch AIWA operator.
///
/// # Example
///
/// ```
/// use fuzzy_agg::{Aiwa, WeightedAggregation, WeightedValue};
///
/// let aiwa = Aiwa::new(2.0 / 3.0).unwrap();
/// let y = aiwa
///     .apply_weighted(&[WeightedValue::new(0.4, 0.9), WeightedValue::new(1.0, 0.4)])
///     .unwrap();
/// assert!((y - 0.442).abs() < 0.001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Aiwa {
    andness: f64,
}

impl Aiwa {
    /// Creates the operator with andness `α`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`] unless `0 < α < 1`.
    pub fn new(andness: f64) -> Result<Self> {
        if !(andness > 0.0 && andness < 1.0) {
            return Err(invalid_parameter("andness", andness, "a value in (0, 1)"));
        }
        Ok(Self { andness })
    }

    /// Creates the operator with orness `ρ`, that is andness `1 - ρ`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`] unless `0 < ρ < 1`.
    pub fn from_orness(orness: f64) -> Result<Self> {
        if !(orness > 0.0 && orness < 1.0) {
            return Err(invalid_parameter("orness", orness, "a value in (0, 1)"));
        }
        Ok(Self {
            andness: 1.0 - orness,
        })
    }

    /// Returns the andness `α`.
    #[inline]
    #[must_use]
    pub const fn andness(&self) -> f64 {
        self.andness
    }

    /// Returns the orness `1 - α`.
    #[inline]
    #[must_use]
    pub fn orness(&self) -> f64 {
        1.0 - self.andness
    }

    /// Returns whether the operator leans toward the minimum, that is
    /// `α > 0.5`.
    #[inline]
    #[must_use]
    pub fn is_conjunctive(&self) -> bool {
        self.andness > NEUTRAL_ANDNESS
    }

    /// Returns whether the operator is the plain importance weighted mean,
    /// that is `α = 0.5`.
    #[inline]
    #[must_use]
    pub fn is_neutral(&self) -> bool {
        self.andness == NEUTRAL_ANDNESS
    }

    /// The exponent `q ≥ 1` for this andness.
    fn exponent(&self) -> f64 {
        if self.is_conjunctive() {
            self.andness / (1.0 - self.andness)
        } else {
            (1.0 - self.andness) / self.andness
        }
    }

    /// Aggregates observations already sorted by ascending value.
    ///
    /// Sums run in slice order, so two callers holding the same sorted slice
    /// get bit-identical results.
    pub(crate) fn aggregate_sorted(&self, sorted: &[WeightedValue]) -> Result<f64> {
        let max_weight = sorted.iter().fold(0.0_f64, |w, wv| w.max(wv.weight()));
        if max_weight == 0.0 {
            return Err(FuzzyError::UndefinedAggregate);
        }
        if self.is_neutral() {
            let (importance, mass) = sorted.iter().fold((0.0, 0.0), |(i, m), wv| {
                (i + wv.weight(), m + wv.weight() * wv.value())
            });
            return Ok(mass / importance);
        }

        let q = self.exponent();
        let conjunctive = self.is_conjunctive();
        let degree = |wv: &WeightedValue| {
            if conjunctive {
                1.0 - wv.value()
            } else {
                wv.value()
            }
        };

        // Weights and degrees are scaled by their maxima before raising to
        // `q`, which reaches ~100 near the extremes and would underflow.
        let max_degree = sorted
            .iter()
            .fold(0.0_f64, |d, wv| d.max(libm::fabs(degree(wv))));
        if max_degree == 0.0 {
            return Ok(if conjunctive { 1.0 } else { 0.0 });
        }

        let mut importance = 0.0;
        let mut mass = 0.0;
        for wv in sorted {
            let weight = wv.weight() / max_weight;
            importance += libm::pow(weight, q);
            mass += signed_pow(weight * degree(wv) / max_degree, q);
        }

        let mean = max_degree * signed_pow(mass / importance, 1.0 / q);
        Ok(if conjunctive { 1.0 - mean } else { mean })
    }
}

/// `sign(x)·|x|^q`, the odd extension of `x^q` to negative `x`.
fn signed_pow(x: f64, q: f64) -> f64 {
    libm::copysign(libm::pow(libm::fabs(x), q), x)
}

/// Sorts observations by ascending value, keeping equal values in input order.
fn sort_by_value(values: &mut [WeightedValue]) {
    values.sort_by(|a, b| a.value().total_cmp(&b.value()));
}

impl WeightedAggregation for Aiwa {
    fn apply_weighted(&self, values: &[WeightedValue]) -> Result<f64> {
        let mut sorted = values
            .iter()
            .map(|wv| wv.validate())
            .collect::<Result<Vec<_>>>()?;
        sort_by_value(&mut sorted);
        self.aggregate_sorted(&sorted)
    }
}

impl Aggregation for Aiwa {
    /// Aggregates with unit importance on every value; `NaN` on no input.
    fn apply(&self, values: &[f64]) -> f64 {
        let mut sorted: Vec<WeightedValue> =
            values.iter().map(|&x| WeightedValue::new(1.0, x)).collect();
        sort_by_value(&mut sorted);
        self.aggregate_sorted(&sorted).unwrap_or(f64::NAN)
    }
}

impl TryFrom<f64> for Aiwa {
    type Error = FuzzyError;

    fn try_from(andness: f64) -> Result<Self> {
        Self::new(andness)
    }
}

impl From<Aiwa> for f64 {
    fn from(aiwa: Aiwa) -> Self {
        aiwa.andness
    }
}

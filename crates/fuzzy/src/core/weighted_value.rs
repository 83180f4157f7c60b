//! Weighted observations consumed by importance weighted aggregators.

use super::error::{invalid_parameter, Result};
use core::fmt;

/// An immutable `(weight, value)` pair.
///
/// `weight` is the importance of the observation and is expected to be
/// non-negative; `value` is the observed truth degree, usually in `[0, 1]`.
/// The constructor takes the importance first.
///
/// # Example
///
/// ```
/// use fuzzy_agg::WeightedValue;
///
/// let wv = WeightedValue::new(0.4, 0.1);
/// assert_eq!(wv.weight(), 0.4);
/// assert_eq!(wv.value(), 0.1);
///
/// assert!(WeightedValue::checked(-0.1, 0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightedValue {
    weight: f64,
    value: f64,
}

impl WeightedValue {
    /// Creates a weighted value without validation.
    ///
    /// Weighted aggregators validate on ingestion, so an invalid pair built
    /// here is rejected when it is added.
    #[inline]
    #[must_use]
    pub const fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }

    /// Creates a weighted value, rejecting a negative or non-finite weight and
    /// a non-finite value.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// naming the offending field.
    pub fn checked(weight: f64, value: f64) -> Result<Self> {
        Self::new(weight, value).validate()
    }

    /// Returns this pair if it is a valid observation.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// for a negative or non-finite weight, or a non-finite value.
    pub fn validate(self) -> Result<Self> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(invalid_parameter(
                "weight",
                self.weight,
                "a finite weight >= 0",
            ));
        }
        if !self.value.is_finite() {
            return Err(invalid_parameter("value", self.value, "a finite value"));
        }
        Ok(self)
    }

    /// Returns the importance weight.
    #[inline]
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Returns the observed value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl From<(f64, f64)> for WeightedValue {
    /// Converts `(weight, value)`.
    fn from((weight, value): (f64, f64)) -> Self {
        Self::new(weight, value)
    }
}

impl fmt::Display for WeightedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.value, self.weight)
    }
}

//! Operator contracts.
//!
//! Operators depend on these traits, not on each other. A family only has to
//! say how it folds a slice of truth degrees; norms additionally say which
//! kind they are and which operator is their De Morgan dual.

use super::error::Result;
use super::kind::NormKind;
use super::weighted_value::WeightedValue;

/// An n-ary aggregation of truth degrees.
///
/// `apply` accepts any arity including zero. On no input it returns the
/// operator's identity (`1` for t-norms, `0` for t-conorms) or a documented
/// sentinel (`NaN` for the means).
///
/// # Example
///
/// ```
/// use fuzzy_agg::{Aggregation, ArithmeticMean, Maximum};
///
/// assert_eq!(Maximum.apply(&[0.2, 0.7, 0.4]), 0.7);
/// assert!(ArithmeticMean.apply(&[]).is_nan());
/// ```
pub trait Aggregation {
    /// Aggregates `values` into a single degree.
    fn apply(&self, values: &[f64]) -> f64;
}

/// An aggregation over weighted observations.
pub trait WeightedAggregation {
    /// Aggregates `values`, weighting each by its importance.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::UndefinedAggregate`](crate::FuzzyError::UndefinedAggregate)
    /// when no observation carries importance, and
    /// [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter) for an
    /// observation with a negative or non-finite weight.
    fn apply_weighted(&self, values: &[WeightedValue]) -> Result<f64>;
}

/// A triangular norm or conorm with its De Morgan dual.
///
/// The dual satisfies `dual(x₁..xₙ) = 1 - self(1-x₁..1-xₙ)`. The associated
/// type bound makes the dual of the dual the original type, and
/// implementations must make it the original value: `op.dual().dual() == op`.
///
/// # Example
///
/// ```
/// use fuzzy_agg::{AlgebraicProduct, AlgebraicSum, DualNorm, NormKind};
///
/// let product = AlgebraicProduct;
/// assert_eq!(product.kind(), NormKind::TNorm);
/// assert_eq!(product.dual(), AlgebraicSum);
/// assert_eq!(product.dual().dual(), product);
/// ```
pub trait DualNorm: Aggregation + Sized {
    /// The operator this one is dual to.
    type Dual: DualNorm<Dual = Self>;

    /// Returns whether this is a t-norm or a t-conorm.
    fn kind(&self) -> NormKind;

    /// Returns the dual operator, built from the same shape parameters.
    fn dual(&self) -> Self::Dual;

    /// Applies the operator to two arguments.
    #[inline]
    fn apply2(&self, x: f64, y: f64) -> f64 {
        self.apply(&[x, y])
    }
}

//! Łukasiewicz operators: bounded difference and bounded sum.

use crate::core::kind::NormKind;
use crate::core::traits::{Aggregation, DualNorm};

/// The Łukasiewicz t-norm, `T(x₁..xₙ) = max(0, Σxᵢ - (n - 1))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedDifference;

/// The Łukasiewicz t-conorm, `S(x₁..xₙ) = min(1, Σxᵢ)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundedSum;

impl Aggregation for BoundedDifference {
    fn apply(&self, values: &[f64]) -> f64 {
        // Σ(xᵢ - 1) + 1, which is exactly 1 on no input.
        let mut deficit = 0.0;
        for &x in values {
            if x == 0.0 {
                return 0.0;
            }
            deficit += 1.0 - x;
        }
        (1.0 - deficit).max(0.0)
    }
}

impl Aggregation for BoundedSum {
    fn apply(&self, values: &[f64]) -> f64 {
        let mut sum = 0.0;
        for &x in values {
            if x == 1.0 {
                return 1.0;
            }
            sum += x;
        }
        sum.min(1.0)
    }
}

impl DualNorm for BoundedDifference {
    type Dual = BoundedSum;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TNorm
    }

    #[inline]
    fn dual(&self) -> BoundedSum {
        BoundedSum
    }
}

impl DualNorm for BoundedSum {
    type Dual = BoundedDifference;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TConorm
    }

    #[inline]
    fn dual(&self) -> BoundedDifference {
        BoundedDifference
    }
}

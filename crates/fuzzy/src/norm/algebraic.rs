//! Algebraic (probabilistic) product and sum.

use crate::core::kind::NormKind;
use crate::core::traits::{Aggregation, DualNorm};

/// The product t-norm, `T(x, y) = x · y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgebraicProduct;

/// The probabilistic sum t-conorm, `S(x, y) = x + y - x · y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgebraicSum;

impl Aggregation for AlgebraicProduct {
    fn apply(&self, values: &[f64]) -> f64 {
        let mut acc = 1.0;
        for &x in values {
            if x == 0.0 {
                return 0.0;
            }
            acc *= x;
        }
        acc
    }
}

impl Aggregation for AlgebraicSum {
    fn apply(&self, values: &[f64]) -> f64 {
        // 1 - Π(1 - xᵢ)
        let mut complement = 1.0;
        for &x in values {
            if x == 1.0 {
                return 1.0;
            }
            complement *= 1.0 - x;
        }
        1.0 - complement
    }
}

impl DualNorm for AlgebraicProduct {
    type Dual = AlgebraicSum;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TNorm
    }

    #[inline]
    fn dual(&self) -> AlgebraicSum {
        AlgebraicSum
    }
}

impl DualNorm for AlgebraicSum {
    type Dual = AlgebraicProduct;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TConorm
    }

    #[inline]
    fn dual(&self) -> AlgebraicProduct {
        AlgebraicProduct
    }
}

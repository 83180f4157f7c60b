//! Drastic product and sum: the smallest t-norm and the largest t-conorm.
//!
//! They are also the `p = 0` limit of the Dombi and Yager families.

use crate::core::kind::NormKind;
use crate::core::traits::{Aggregation, DualNorm};

/// The drastic t-norm.
///
/// Returns the minimum when at most one argument is below `1`, otherwise `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrasticProduct;

/// The drastic t-conorm.
///
/// Returns the maximum when at most one argument is above `0`, otherwise `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrasticSum;

impl Aggregation for DrasticProduct {
    fn apply(&self, values: &[f64]) -> f64 {
        let mut below_one = 0_usize;
        let mut acc = 1.0_f64;
        for &x in values {
            if x == 0.0 {
                return 0.0;
            }
            if x < 1.0 {
                below_one += 1;
                if below_one > 1 {
                    return 0.0;
                }
                acc = acc.min(x);
            }
        }
        acc
    }
}

impl Aggregation for DrasticSum {
    fn apply(&self, values: &[f64]) -> f64 {
        let mut above_zero = 0_usize;
        let mut acc = 0.0_f64;
        for &x in values {
            if x == 1.0 {
                return 1.0;
            }
            if x > 0.0 {
                above_zero += 1;
                if above_zero > 1 {
                    return 1.0;
                }
                acc = acc.max(x);
            }
        }
        acc
    }
}

impl DualNorm for DrasticProduct {
    type Dual = DrasticSum;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TNorm
    }

    #[inline]
    fn dual(&self) -> DrasticSum {
        DrasticSum
    }
}

impl DualNorm for DrasticSum {
    type Dual = DrasticProduct;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TConorm
    }

    #[inline]
    fn dual(&self) -> DrasticProduct {
        DrasticProduct
    }
}

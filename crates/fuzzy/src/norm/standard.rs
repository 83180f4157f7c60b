//! Zadeh's standard operators: minimum and maximum.
//!
//! These are the largest t-norm and the smallest t-conorm, and the `p → ∞`
//! limit of the Dombi and Yager families.

use crate::core::kind::NormKind;
use crate::core::traits::{Aggregation, DualNorm};

/// The minimum t-norm, `T(x, y) = min(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minimum;

/// The maximum t-conorm, `S(x, y) = max(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maximum;

impl Aggregation for Minimum {
    fn apply(&self, values: &[f64]) -> f64 {
        let mut acc = 1.0_f64;
        for &x in values {
            if x == 0.0 {
                return 0.0;
            }
            acc = acc.min(x);
        }
        acc
    }
}

impl Aggregation for Maximum {
    fn apply(&self, values: &[f64]) -> f64 {
        let mut acc = 0.0_f64;
        for &x in values {
            if x == 1.0 {
                return 1.0;
            }
            acc = acc.max(x);
        }
        acc
    }
}

impl DualNorm for Minimum {
    type Dual = Maximum;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TNorm
    }

    #[inline]
    fn dual(&self) -> Maximum {
        Maximum
    }
}

impl DualNorm for Maximum {
    type Dual = Minimum;

    #[inline]
    fn kind(&self) -> NormKind {
        NormKind::TConorm
    }

    #[inline]
    fn dual(&self) -> Minimum {
        Minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum() {
        assert_eq!(Minimum.apply(&[0.3, 0.8, 0.5]), 0.3);
        assert_eq!(Minimum.apply(&[0.4]), 0.4);
        assert_eq!(Minimum.apply(&[]), 1.0);
        assert_eq!(Minimum.apply(&[0.7, 0.0, 0.9]), 0.0);
    }

    #[test]
    fn test_maximum() {
        assert_eq!(Maximum.apply(&[0.3, 0.8, 0.5]), 0.8);
        assert_eq!(Maximum.apply(&[0.4]), 0.4);
        assert_eq!(Maximum.apply(&[]), 0.0);
        assert_eq!(Maximum.apply(&[0.2, 1.0, 0.9]), 1.0);
    }

    #[test]
    fn test_duality() {
        assert_eq!(Minimum.dual(), Maximum);
        assert_eq!(Maximum.dual(), Minimum);
        let x = [0.1, 0.6, 0.35];
        let negated = [0.9, 0.4, 0.65];
        assert!((Maximum.apply(&x) - (1.0 - Minimum.apply(&negated))).abs() < 1e-12);
    }
}

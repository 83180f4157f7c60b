//! Triangular norms and conorms.
//!
//! Each family is a pair of types, one t-norm and one t-conorm, related by De
//! Morgan duality. Fixed operators are unit structs; parametric operators are
//! built through validating constructors or through the [`Factory`] constants
//! each family publishes.
//!
//! [`Norm`] closes the set: one variant per operator, each carrying its own
//! parameters, for code that picks an operator at runtime.
//!
//! # Example
//!
//! ```
//! use fuzzy_agg::{Aggregation, DualNorm, Norm, NormKind, YagerUnion};
//!
//! let ops = [
//!     Norm::Maximum,
//!     Norm::AlgebraicSum,
//!     Norm::from(YagerUnion::with_exponent(2.0).unwrap()),
//! ];
//! for op in ops {
//!     assert_eq!(op.kind(), NormKind::TConorm);
//!     assert_eq!(op.apply(&[]), 0.0);
//!     assert_eq!(op.dual().dual(), op);
//! }
//! ```

mod algebraic;
mod bounded;
mod dombi;
mod drastic;
mod factory;
mod hamacher;
mod standard;
mod yager;

pub use algebraic::{AlgebraicProduct, AlgebraicSum};
pub use bounded::{BoundedDifference, BoundedSum};
pub use dombi::{DombiIntersection, DombiUnion};
pub use drastic::{DrasticProduct, DrasticSum};
pub use factory::{Factory, ParametricFactory};
pub use hamacher::{HamacherProduct, HamacherSum};
pub use standard::{Maximum, Minimum};
pub use yager::{YagerIntersection, YagerUnion};

use crate::core::kind::NormKind;
use crate::core::traits::{Aggregation, DualNorm};
use core::fmt;

/// Any triangular norm or conorm provided by this crate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "family", content = "parameter", rename_all = "snake_case")
)]
pub enum Norm {
    /// [`Minimum`].
    Minimum,
    /// [`Maximum`].
    Maximum,
    /// [`AlgebraicProduct`].
    AlgebraicProduct,
    /// [`AlgebraicSum`].
    AlgebraicSum,
    /// [`BoundedDifference`].
    BoundedDifference,
    /// [`BoundedSum`].
    BoundedSum,
    /// [`DrasticProduct`].
    DrasticProduct,
    /// [`DrasticSum`].
    DrasticSum,
    /// A Hamacher t-norm.
    HamacherProduct(HamacherProduct),
    /// A Hamacher t-conorm.
    HamacherSum(HamacherSum),
    /// A Dombi t-norm.
    DombiIntersection(DombiIntersection),
    /// A Dombi t-conorm.
    DombiUnion(DombiUnion),
    /// A Yager t-norm.
    YagerIntersection(YagerIntersection),
    /// A Yager t-conorm.
    YagerUnion(YagerUnion),
}

impl Norm {
    /// The fixed (parameterless) operators.
    pub const FIXED: [Self; 8] = [
        Self::Minimum,
        Self::Maximum,
        Self::AlgebraicProduct,
        Self::AlgebraicSum,
        Self::BoundedDifference,
        Self::BoundedSum,
        Self::DrasticProduct,
        Self::DrasticSum,
    ];

    /// Returns the family name.
    #[must_use]
    pub const fn family(&self) -> &'static str {
        match self {
            Self::Minimum | Self::Maximum => "standard",
            Self::AlgebraicProduct | Self::AlgebraicSum => "algebraic",
            Self::BoundedDifference | Self::BoundedSum => "bounded",
            Self::DrasticProduct | Self::DrasticSum => "drastic",
            Self::HamacherProduct(_) | Self::HamacherSum(_) => "hamacher",
            Self::DombiIntersection(_) | Self::DombiUnion(_) => "dombi",
            Self::YagerIntersection(_) | Self::YagerUnion(_) => "yager",
        }
    }

    /// Returns the shape parameter of a parametric operator.
    #[must_use]
    pub const fn parameter(&self) -> Option<f64> {
        match self {
            Self::HamacherProduct(op) => Some(op.gamma()),
            Self::HamacherSum(op) => Some(op.gamma()),
            Self::DombiIntersection(op) => Some(op.exponent()),
            Self::DombiUnion(op) => Some(op.exponent()),
            Self::YagerIntersection(op) => Some(op.exponent()),
            Self::YagerUnion(op) => Some(op.exponent()),
            _ => None,
        }
    }
}

impl Aggregation for Norm {
    fn apply(&self, values: &[f64]) -> f64 {
        match self {
            Self::Minimum => Minimum.apply(values),
            Self::Maximum => Maximum.apply(values),
            Self::AlgebraicProduct => AlgebraicProduct.apply(values),
            Self::AlgebraicSum => AlgebraicSum.apply(values),
            Self::BoundedDifference => BoundedDifference.apply(values),
            Self::BoundedSum => BoundedSum.apply(values),
            Self::DrasticProduct => DrasticProduct.apply(values),
            Self::DrasticSum => DrasticSum.apply(values),
            Self::HamacherProduct(op) => op.apply(values),
            Self::HamacherSum(op) => op.apply(values),
            Self::DombiIntersection(op) => op.apply(values),
            Self::DombiUnion(op) => op.apply(values),
            Self::YagerIntersection(op) => op.apply(values),
            Self::YagerUnion(op) => op.apply(values),
        }
    }
}

impl DualNorm for Norm {
    type Dual = Self;

    fn kind(&self) -> NormKind {
        match self {
            Self::Minimum
            | Self::AlgebraicProduct
            | Self::BoundedDifference
            | Self::DrasticProduct
            | Self::HamacherProduct(_)
            | Self::DombiIntersection(_)
            | Self::YagerIntersection(_) => NormKind::TNorm,
            Self::Maximum
            | Self::AlgebraicSum
            | Self::BoundedSum
            | Self::DrasticSum
            | Self::HamacherSum(_)
            | Self::DombiUnion(_)
            | Self::YagerUnion(_) => NormKind::TConorm,
        }
    }

    fn dual(&self) -> Self {
        match self {
            Self::Minimum => Self::Maximum,
            Self::Maximum => Self::Minimum,
            Self::AlgebraicProduct => Self::AlgebraicSum,
            Self::AlgebraicSum => Self::AlgebraicProduct,
            Self::BoundedDifference => Self::BoundedSum,
            Self::BoundedSum => Self::BoundedDifference,
            Self::DrasticProduct => Self::DrasticSum,
            Self::DrasticSum => Self::DrasticProduct,
            Self::HamacherProduct(op) => Self::HamacherSum(op.dual()),
            Self::HamacherSum(op) => Self::HamacherProduct(op.dual()),
            Self::DombiIntersection(op) => Self::DombiUnion(op.dual()),
            Self::DombiUnion(op) => Self::DombiIntersection(op.dual()),
            Self::YagerIntersection(op) => Self::YagerUnion(op.dual()),
            Self::YagerUnion(op) => Self::YagerIntersection(op.dual()),
        }
    }
}

macro_rules! impl_from_operator {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Norm {
                fn from(op: $ty) -> Self {
                    Self::$ty(op)
                }
            }
        )+
    };
}

impl_from_operator!(
    HamacherProduct,
    HamacherSum,
    DombiIntersection,
    DombiUnion,
    YagerIntersection,
    YagerUnion,
);

macro_rules! impl_from_fixed {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Norm {
                fn from(_: $ty) -> Self {
                    Self::$ty
                }
            }
        )+
    };
}

impl_from_fixed!(
    Minimum,
    Maximum,
    AlgebraicProduct,
    AlgebraicSum,
    BoundedDifference,
    BoundedSum,
    DrasticProduct,
    DrasticSum,
);

impl fmt::Display for Norm {
    /// Formats as `<kind>_<family>`, followed by `_<parameter>` for
    /// parametric operators, e.g. `t_conorm_dombi_2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.kind(), self.family())?;
        if let Some(parameter) = self.parameter() {
            write!(f, "_{parameter}")?;
        }
        Ok(())
    }
}

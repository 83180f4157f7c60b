//! Norm kind: conjunctive t-norm or disjunctive t-conorm.

use core::fmt;

/// The kind of a triangular norm.
///
/// Every norm instance carries exactly one kind. A t-norm generalizes logical
/// AND (identity `1`, absorbing element `0`); a t-conorm generalizes logical
/// OR (identity `0`, absorbing element `1`). Duality swaps the two.
///
/// # Example
///
/// ```
/// use fuzzy_agg::NormKind;
///
/// assert_eq!(NormKind::TNorm.dual(), NormKind::TConorm);
/// assert_eq!(NormKind::TConorm.identity(), 0.0);
/// assert_eq!(NormKind::TNorm.absorbing(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NormKind {
    /// Triangular norm (fuzzy AND).
    TNorm,
    /// Triangular conorm (fuzzy OR).
    TConorm,
}

impl NormKind {
    /// Both kinds in canonical order.
    pub const ALL: [Self; 2] = [Self::TNorm, Self::TConorm];

    /// Returns the kind of the dual operator.
    #[inline]
    #[must_use]
    pub const fn dual(self) -> Self {
        match self {
            Self::TNorm => Self::TConorm,
            Self::TConorm => Self::TNorm,
        }
    }

    /// Returns the neutral element: `1` for t-norms, `0` for t-conorms.
    ///
    /// This is also the result of applying the operator to no values.
    #[inline]
    #[must_use]
    pub const fn identity(self) -> f64 {
        match self {
            Self::TNorm => 1.0,
            Self::TConorm => 0.0,
        }
    }

    /// Returns the absorbing element: `0` for t-norms, `1` for t-conorms.
    ///
    /// An input equal to this value decides the result on its own.
    #[inline]
    #[must_use]
    pub const fn absorbing(self) -> f64 {
        match self {
            Self::TNorm => 0.0,
            Self::TConorm => 1.0,
        }
    }

    /// Returns the short name used in operator labels.
    #[inline]
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::TNorm => "t_norm",
            Self::TConorm => "t_conorm",
        }
    }
}

impl fmt::Display for NormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

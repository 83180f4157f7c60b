use super::Membership;
use crate::core::error::{invalid_parameter, Result};
use core::f64::consts::PI;

/// A raised-cosine bump of half-width `width` centred on `center`.
///
/// `μ(x) = 0.5 (1 + cos(π (x - center) / width))` for
/// `|x - center| <= width`, and `0` elsewhere.
///
/// # Example
///
/// ```
/// use fuzzy_agg::{Cosine, Membership};
///
/// let bump = Cosine::new(1.0, 1.0).unwrap();
/// assert_eq!(bump.membership(1.0), 1.0);
/// assert_eq!(bump.membership(0.0), 0.0);
/// assert_eq!(bump.membership(10.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cosine {
    width: f64,
    center: f64,
}

impl Cosine {
    /// Creates the bump.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// unless `width` is finite and positive and `center` is finite.
    pub fn new(width: f64, center: f64) -> Result<Self> {
        if !(width > 0.0 && width.is_finite()) {
            return Err(invalid_parameter("width", width, "a finite width > 0"));
        }
        if !center.is_finite() {
            return Err(invalid_parameter("center", center, "a finite center"));
        }
        Ok(Self { width, center })
    }

    /// Returns the half-width.
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Returns the centre.
    #[must_use]
    pub const fn center(&self) -> f64 {
        self.center
    }
}

impl Membership for Cosine {
    fn membership(&self, x: f64) -> f64 {
        let offset = x - self.center;
        if libm::fabs(offset) > self.width {
            return 0.0;
        }
        0.5 * (1.0 + libm::cos(PI * offset / self.width))
    }
}

use super::Membership;
use crate::core::error::{invalid_parameter, Result};

/// A triangle rising from `a` to a peak at `b` and falling to `c`.
///
/// `a == b` or `b == c` give a shoulder: the peak itself still has degree
/// `1`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    /// Creates a triangle with corners `a <= b <= c`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter)
    /// if a corner is not finite or the corners are out of order.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        for (name, value) in [("a", a), ("b", b), ("c", c)] {
            if !value.is_finite() {
                return Err(invalid_parameter(name, value, "a finite corner"));
            }
        }
        if a > b {
            return Err(invalid_parameter("b", b, "a peak >= a"));
        }
        if b > c {
            return Err(invalid_parameter("c", c, "a right corner >= b"));
        }
        Ok(Self { a, b, c })
    }

    /// Returns the corners `(a, b, c)`.
    #[must_use]
    pub const fn corners(&self) -> (f64, f64, f64) {
        (self.a, self.b, self.c)
    }
}

impl Membership for Triangular {
    fn membership(&self, x: f64) -> f64 {
        let Self { a, b, c } = *self;
        if x == b {
            1.0
        } else if x <= a || x >= c {
            0.0
        } else if x < b {
            (x - a) / (b - a)
        } else {
            (c - x) / (c - b)
        }
    }
}

//! Membership functions.
//!
//! A membership function maps a crisp value to a truth degree in `[0, 1]`.
//! Operators consume them only through [`Membership::membership`], so any
//! `Fn(f64) -> f64` closure works wherever a shape does.
//!
//! # Example
//!
//! ```
//! use fuzzy_agg::{AlphaCut, Line, Linear, Membership, Point};
//!
//! let ramp = Linear::new(Line::from_points(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).unwrap());
//! let cut = AlphaCut::new(ramp, 0.6).unwrap();
//! assert_eq!(cut.membership(0.5), 0.0);
//! assert_eq!(cut.membership(1.0), 1.0);
//!
//! let custom = |x: f64| if x > 0.0 { 1.0 } else { 0.0 };
//! assert_eq!(custom.membership(2.0), 1.0);
//! ```

mod alpha_cut;
mod cosine;
mod linear;
mod triangular;

pub use alpha_cut::AlphaCut;
pub use cosine::Cosine;
pub use linear::{Line, Linear, Point};
pub use triangular::Triangular;

/// Evaluates the degree to which `x` belongs to a fuzzy set.
pub trait Membership {
    /// Returns the membership degree of `x`.
    fn membership(&self, x: f64) -> f64;
}

impl<F> Membership for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn membership(&self, x: f64) -> f64 {
        self(x)
    }
}

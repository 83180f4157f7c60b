//! Averaging operators.
//!
//! Means sit between the minimum and the maximum: they are idempotent and
//! monotone but have no absorbing element. None of them has a meaningful
//! value on no input, so `apply(&[])` returns `NaN`.

mod arithmetic;
mod geometric;
mod owa;

pub use arithmetic::ArithmeticMean;
pub use geometric::GeometricMean;
pub use owa::Owa;

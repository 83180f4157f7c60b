//! Parametric operator factories.
//!
//! A factory turns a slice of numeric parameters into an operator instance,
//! validating every parameter against its domain. Families expose their
//! factories as associated constants, so alternative parameterizations of the
//! same family (an exponent, or a drasticality coefficient) sit side by side:
//!
//! ```
//! use fuzzy_agg::{DombiUnion, ParametricFactory};
//!
//! let by_exponent = DombiUnion::BY_EXPONENT.create(&[1.0]).unwrap();
//! let by_drasticality = DombiUnion::BY_DRASTICALITY.create(&[0.5]).unwrap();
//! assert_eq!(by_exponent, by_drasticality);
//! ```

use crate::core::error::{invalid_parameter, require_params, Result};
use core::fmt;

/// Constructs an operator from numeric parameters.
pub trait ParametricFactory {
    /// The operator type produced.
    type Output;

    /// Builds an operator from `params`.
    ///
    /// Parameters beyond the ones the family reads are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::ParameterCount`](crate::FuzzyError::ParameterCount)
    /// when too few parameters are supplied, and
    /// [`FuzzyError::InvalidParameter`](crate::FuzzyError::InvalidParameter) when a
    /// parameter lies outside its domain.
    fn create(&self, params: &[f64]) -> Result<Self::Output>;
}

/// A named factory backed by a validating constructor.
///
/// `Factory` values are `const`, so every family can publish its
/// parameterizations as associated constants with no initialization order.
pub struct Factory<T> {
    name: &'static str,
    arity: usize,
    build: fn(&[f64]) -> Result<T>,
}

impl<T> Factory<T> {
    /// Creates a factory reading `arity` parameters and handing them to
    /// `build`.
    ///
    /// `build` may index `params[..arity]` freely: [`ParametricFactory::create`]
    /// checks the count before calling it.
    #[must_use]
    pub const fn new(name: &'static str, arity: usize, build: fn(&[f64]) -> Result<T>) -> Self {
        Self { name, arity, build }
    }

    /// Returns the factory name.
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of parameters the factory reads.
    #[inline]
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }
}

impl<T> ParametricFactory for Factory<T> {
    type Output = T;

    fn create(&self, params: &[f64]) -> Result<T> {
        require_params(params, self.arity)?;
        (self.build)(params)
    }
}

impl<T> Clone for Factory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Factory<T> {}

impl<T> fmt::Debug for Factory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Factory")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

/// Validates an exponent: `p >= 0`, with `+∞` allowed as the min/max limit.
pub(crate) fn exponent(name: &'static str, p: f64) -> Result<f64> {
    // `!(p >= 0.0)` also rejects NaN.
    if !(p >= 0.0) {
        return Err(invalid_parameter(name, p, "an exponent >= 0 or +inf"));
    }
    Ok(p)
}

/// Maps a drasticality coefficient `d ∈ [0, 1]` to an exponent.
///
/// `p = (1 - d) / d`, with `d = 0` mapped to `+∞` (the min/max limit) and
/// `d = 1` mapped to `0` (the drastic limit).
pub(crate) fn exponent_from_drasticality(d: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&d) {
        return Err(invalid_parameter("drasticality", d, "a value in [0, 1]"));
    }
    if d == 0.0 {
        Ok(f64::INFINITY)
    } else {
        Ok((1.0 - d) / d)
    }
}

//! Error type for operator construction and aggregation.
//!
//! Errors are raised synchronously by the call that triggers them. Factories
//! reject out-of-domain parameters at construction time; `apply` on a
//! constructed operator never fails. The only aggregate that can be undefined
//! is an importance weighted average with nothing (or no importance) to
//! average.

use thiserror::Error;

/// Errors raised by constructors, factories and weighted aggregators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    /// A parameter lies outside its algebraic domain.
    #[error("invalid parameter `{name}` = {value} (expected {expected})")]
    InvalidParameter {
        /// Parameter name as used in the operator's definition.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Human-readable description of the accepted domain.
        expected: &'static str,
    },

    /// A factory received fewer parameters than its family needs.
    #[error("expected {expected} parameter(s), got {actual}")]
    ParameterCount {
        /// Number of parameters the factory reads.
        expected: usize,
        /// Number of parameters supplied.
        actual: usize,
    },

    /// A weighted aggregate was requested with no observations or zero total
    /// importance.
    #[error("aggregate is undefined: no observation carries any importance")]
    UndefinedAggregate,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, FuzzyError>;

/// Builds an [`FuzzyError::InvalidParameter`] and records the rejection.
pub(crate) fn invalid_parameter(
    name: &'static str,
    value: f64,
    expected: &'static str,
) -> FuzzyError {
    tracing::debug!(parameter = name, value, expected, "rejected operator parameter");
    FuzzyError::InvalidParameter {
        name,
        value,
        expected,
    }
}

/// Checks that a factory received at least `expected` parameters.
pub(crate) fn require_params(params: &[f64], expected: usize) -> Result<()> {
    if params.len() < expected {
        tracing::debug!(expected, actual = params.len(), "too few factory parameters");
        return Err(FuzzyError::ParameterCount {
            expected,
            actual: params.len(),
        });
    }
    Ok(())
}

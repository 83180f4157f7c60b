//! Core data types and contracts.
//!
//! This module contains the types every operator is built from:
//!
//! - [`error::FuzzyError`]: Invalid parameters and undefined aggregates
//! - [`kind::NormKind`]: t-norm / t-conorm tag
//! - [`weighted_value::WeightedValue`]: `(weight, value)` observation
//! - [`traits`]: `Aggregation`, `WeightedAggregation`, `DualNorm`
//! - [`constants`]: Tolerances and law-check defaults

pub mod constants;
pub mod error;
pub mod kind;
pub mod traits;
pub mod weighted_value;

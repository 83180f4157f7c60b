//! Fuzzy aggregation operators.
//!
//! `fuzzy-agg` combines truth degrees (reals in `[0, 1]`) into a single degree.
//! It provides the algebra of triangular norms and conorms with their De Morgan
//! duality, parametric operator families built from validated numeric
//! parameters, fixed averaging operators, and a rolling importance weighted
//! aggregator that re-derives its aggregate after every observation.
//!
//! # Operator Families
//!
//! | Family | t-norm | t-conorm | Parameter |
//! |--------|--------|----------|-----------|
//! | Standard | `min` | `max` | none |
//! | Algebraic | `x·y` | `x + y - x·y` | none |
//! | Bounded (Łukasiewicz) | `max(0, x + y - 1)` | `min(1, x + y)` | none |
//! | Drastic | drastic product | drastic sum | none |
//! | Hamacher | Hamacher product | Hamacher sum | `γ ≥ 0` |
//! | Dombi | Dombi intersection | Dombi union | `p ≥ 0` or `+∞` |
//! | Yager | Yager intersection | Yager union | `p ≥ 0` or `+∞` |
//!
//! Every norm exposes its [`NormKind`] and its dual. Taking the dual twice
//! gives back the operator it started from, with the same parameters.
//!
//! # Example: Dombi Union
//!
//! ```
//! use fuzzy_agg::{Aggregation, DombiUnion, DualNorm, NormKind, ParametricFactory};
//!
//! let max_like = DombiUnion::BY_DRASTICALITY.create(&[0.0]).unwrap();
//! assert_eq!(max_like.apply(&[0.9, 0.2, 0.1]), 0.9);
//!
//! let drastic = DombiUnion::BY_DRASTICALITY.create(&[1.0]).unwrap();
//! assert_eq!(drastic.apply(&[0.9, 0.2, 0.1]), 1.0);
//!
//! assert_eq!(drastic.kind(), NormKind::TConorm);
//! assert_eq!(drastic.dual().dual(), drastic);
//! ```
//!
//! # Example: Rolling Aggregation
//!
//! ```
//! use fuzzy_agg::{RollingAiwa, WeightedValue};
//!
//! let mut rolling = RollingAiwa::new(2.0 / 3.0).unwrap();
//! let a = rolling
//!     .add(WeightedValue::new(0.4, 0.1))
//!     .unwrap()
//!     .add(WeightedValue::new(1.0, 0.7))
//!     .unwrap()
//!     .value()
//!     .unwrap();
//! assert!((a - 0.565).abs() < 0.001);
//!
//! rolling.clear();
//! assert!(rolling.value().is_err());
//! ```
//!
//! # Design Principles
//!
//! - **Closed operator set**: [`Norm`] is one tagged variant per family, each
//!   carrying its own parameters
//! - **Validated construction**: invalid parameters fail at construction, never
//!   at apply time
//! - **Boundary short-circuits**: conorms stop at the first `1.0`, norms at the
//!   first `0.0`, before any division is attempted
//! - **No hidden state**: everything except [`RollingAiwa`] is immutable and
//!   `Copy` where its parameters allow

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

// Error type, kinds, weighted values, operator traits, constants
mod core;

// Triangular norms and conorms with their factories
pub mod norm;

// Averaging operators (arithmetic, geometric, OWA)
pub mod mean;

// Importance weighted averaging (batch and rolling)
pub mod weighted;

// Membership functions consumed by the operators
pub mod sets;

// Negation operators and complements
pub mod negation;

// Axiom checker for norms and conorms
pub mod laws;

// Re-export submodules for external access
pub use core::constants;
pub use core::error;
pub use core::traits;

// Re-export core types at crate root
pub use core::error::{FuzzyError, Result};
pub use core::kind::NormKind;
pub use core::traits::{Aggregation, DualNorm, WeightedAggregation};
pub use core::weighted_value::WeightedValue;

// Re-export operator families
pub use norm::{
    AlgebraicProduct, AlgebraicSum, BoundedDifference, BoundedSum, DombiIntersection, DombiUnion,
    DrasticProduct, DrasticSum, Factory, HamacherProduct, HamacherSum, Maximum, Minimum, Norm,
    ParametricFactory, YagerIntersection, YagerUnion,
};

// Re-export averaging and weighted operators
pub use mean::{ArithmeticMean, GeometricMean, Owa};
pub use weighted::{Aiwa, RollingAiwa};

// Re-export membership and negation contracts
pub use negation::{Complement, Negation, Sugeno, Yager, Zadeh};
pub use sets::{AlphaCut, Cosine, Line, Linear, Membership, Point, Triangular};

// Re-export the law checker
pub use laws::{check_laws, Law, LawConfig, LawReport, LawViolation};

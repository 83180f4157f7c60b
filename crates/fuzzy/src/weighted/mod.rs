//! Importance weighted averaging.
//!
//! [`Aiwa`] aggregates a batch of [`WeightedValue`](crate::WeightedValue)s;
//! [`RollingAiwa`] accepts them one at a time and keeps the aggregate of
//! everything seen since the last [`clear`](RollingAiwa::clear). Both share
//! one kernel, so the rolling aggregate after `k` additions is exactly the
//! batch aggregate of those `k` observations.

mod aiwa;
mod rolling;

pub use aiwa::Aiwa;
pub use rolling::RollingAiwa;

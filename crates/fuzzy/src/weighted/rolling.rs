//! Rolling AIWA accumulator.

use super::aiwa::Aiwa;
use crate::core::error::{FuzzyError, Result};
use crate::core::weighted_value::WeightedValue;
use alloc::vec::Vec;

/// An AIWA aggregate maintained over a growing, clearable buffer.
///
/// Every [`add`](Self::add) inserts the observation at its position in value
/// order and recomputes the aggregate, so [`value`](Self::value) is always the
/// batch [`Aiwa`] result over everything added since the last
/// [`clear`](Self::clear).
///
/// The accumulator is single-writer. It is `Send` and `Sync`, but callers
/// sharing one instance across threads must serialize `add`, `clear` and
/// `value` themselves.
///
/// # Example
///
/// ```
/// use fuzzy_agg::{FuzzyError, RollingAiwa, WeightedValue};
///
/// let mut rolling = RollingAiwa::new(2.0 / 3.0).unwrap();
/// assert_eq!(rolling.value(), Err(FuzzyError::UndefinedAggregate));
///
/// rolling.add(WeightedValue::new(0.4, 0.9)).unwrap();
/// rolling.add(WeightedValue::new(1.0, 0.4)).unwrap();
/// assert!((rolling.value().unwrap() - 0.442).abs() < 0.001);
/// assert_eq!(rolling.min(), Some(0.4));
/// assert_eq!(rolling.max(), Some(0.9));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RollingAiwa {
    aiwa: Aiwa,
    buffer: Vec<WeightedValue>,
    aggregate: Option<f64>,
}

impl RollingAiwa {
    /// Creates an empty accumulator with andness `α`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`] unless `0 < α < 1`.
    pub fn new(andness: f64) -> Result<Self> {
        Aiwa::new(andness).map(Self::from)
    }

    /// Adds an observation and recomputes the aggregate.
    ///
    /// Returns `self` so additions can be chained with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::InvalidParameter`] for a negative or non-finite
    /// weight, or a non-finite value. The buffer is left unchanged.
    pub fn add(&mut self, observation: WeightedValue) -> Result<&mut Self> {
        let observation = observation.validate()?;
        // After any equal values, as a stable sort would place it.
        let at = self.buffer.partition_point(|buffered| {
            buffered.value().total_cmp(&observation.value()).is_le()
        });
        self.buffer.insert(at, observation);
        self.aggregate = self.aiwa.aggregate_sorted(&self.buffer).ok();
        tracing::trace!(
            len = self.buffer.len(),
            aggregate = ?self.aggregate,
            "rolling aggregate updated"
        );
        Ok(self)
    }

    /// Adds every observation in order.
    ///
    /// # Errors
    ///
    /// Stops at the first invalid observation and returns its error; the
    /// observations before it stay added.
    pub fn extend_from<I>(&mut self, observations: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = WeightedValue>,
    {
        for observation in observations {
            self.add(observation)?;
        }
        Ok(self)
    }

    /// Discards every buffered observation, keeping the andness.
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self.aggregate = None;
        tracing::trace!(len = 0_usize, "rolling aggregate cleared");
        self
    }

    /// Returns the current aggregate.
    ///
    /// # Errors
    ///
    /// Returns [`FuzzyError::UndefinedAggregate`] when the buffer is empty or
    /// no buffered observation carries importance.
    pub fn value(&self) -> Result<f64> {
        self.aggregate.ok_or(FuzzyError::UndefinedAggregate)
    }

    /// Returns the number of buffered observations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing has been added since creation or the last
    /// clear.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the buffered observations in ascending value order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[WeightedValue] {
        &self.buffer
    }

    /// Returns the configured andness.
    #[inline]
    #[must_use]
    pub const fn andness(&self) -> f64 {
        self.aiwa.andness()
    }

    /// Returns the batch operator this accumulator mirrors.
    #[inline]
    #[must_use]
    pub const fn operator(&self) -> Aiwa {
        self.aiwa
    }

    /// Returns the smallest buffered value.
    #[must_use]
    pub fn min(&self) -> Option<f64> {
        self.buffer.first().map(WeightedValue::value)
    }

    /// Returns the largest buffered value.
    #[must_use]
    pub fn max(&self) -> Option<f64> {
        self.buffer.last().map(WeightedValue::value)
    }
}

impl From<Aiwa> for RollingAiwa {
    fn from(aiwa: Aiwa) -> Self {
        Self {
            aiwa,
            buffer: Vec::new(),
            aggregate: None,
        }
    }
}

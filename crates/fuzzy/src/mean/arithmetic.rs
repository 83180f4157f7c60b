use crate::core::traits::Aggregation;

/// The arithmetic mean, `Σxᵢ / n`.
///
/// # Example
///
/// ```
/// use fuzzy_agg::{Aggregation, ArithmeticMean};
///
/// let mean = ArithmeticMean.apply(&[0.8, 0.2, 0.4, 0.6, 0.0]);
/// assert!((mean - 0.4).abs() < 1e-12);
/// assert!(ArithmeticMean.apply(&[]).is_nan());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArithmeticMean;

impl Aggregation for ArithmeticMean {
    fn apply(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }
}

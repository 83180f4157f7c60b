use crate::core::traits::Aggregation;

/// The geometric mean, `(Πxᵢ)^(1/n)`.
///
/// Computed in log space, with any `0.0` input short-circuiting to `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometricMean;

impl Aggregation for GeometricMean {
    fn apply(&self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        let mut log_sum = 0.0;
        for &x in values {
            if x == 0.0 {
                return 0.0;
            }
            log_sum += libm::log(x);
        }
        libm::exp(log_sum / values.len() as f64)
    }
}

//! Parametric (variance-covariance) VaR calculation.

use quantz_math::statistics::{mean, sample_std_dev};
use statrs::distribution::{ContinuousCDF, Normal};

use super::{VaRMethod, VaRResult};
use crate::error::{validate_confidence, AnalyticsError, AnalyticsResult};

/// Standard normal quantile `Φ⁻¹(p)`.
pub(crate) fn standard_normal_quantile(p: f64) -> AnalyticsResult<f64> {
    let normal =
        Normal::new(0.0, 1.0).map_err(|e| AnalyticsError::MathError(e.to_string()))?;
    Ok(normal.inverse_cdf(p))
}

/// Calculate parametric VaR assuming normally distributed returns.
///
/// VaR = μ + σ × Φ⁻¹(1 - c), with μ and σ the sample mean and standard
/// deviation of `returns`.
///
/// # Arguments
///
/// * `returns` - Historical returns, at least two observations
/// * `confidence_level` - Confidence level in (0, 1)
pub fn parametric_var(returns: &[f64], confidence_level: f64) -> AnalyticsResult<VaRResult> {
    validate_confidence(confidence_level)?;
    if returns.len() < 2 {
        return Err(AnalyticsError::InsufficientData {
            required: 2,
            actual: returns.len(),
        });
    }

    let mu = mean(returns)?;
    let sigma = sample_std_dev(returns)?;
    let z = standard_normal_quantile(1.0 - confidence_level)?;

    Ok(VaRResult {
        var: mu + sigma * z,
        confidence_level,
        observations: returns.len(),
        method: VaRMethod::Parametric,
    })
}

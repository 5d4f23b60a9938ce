//! Historical VaR calculation.

use quantz_math::statistics::quantile_sorted;

use super::{VaRMethod, VaRResult};
use crate::config::VaRConfig;
use crate::error::{validate_confidence, AnalyticsError, AnalyticsResult};

fn sorted_returns(returns: &[f64]) -> AnalyticsResult<Vec<f64>> {
    if returns.is_empty() {
        return Err(AnalyticsError::invalid_input("no returns provided"));
    }
    if returns.iter().any(|r| !r.is_finite()) {
        return Err(AnalyticsError::invalid_input("returns must be finite"));
    }

    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);
    Ok(sorted)
}

/// Calculate historical VaR from a series of returns.
///
/// # Arguments
///
/// * `returns` - Historical returns (as decimals, e.g., -0.01 for -1%)
/// * `confidence_level` - Confidence level in (0, 1), e.g., 0.95
/// * `config` - Quantile interpolation settings
///
/// # Returns
///
/// The `1 - confidence_level` quantile of `returns`, signed.
pub fn historical_var(
    returns: &[f64],
    confidence_level: f64,
    config: &VaRConfig,
) -> AnalyticsResult<VaRResult> {
    validate_confidence(confidence_level)?;
    let sorted = sorted_returns(returns)?;

    let var = quantile_sorted(&sorted, 1.0 - confidence_level, config.quantile_method)?;

    Ok(VaRResult {
        var,
        confidence_level,
        observations: returns.len(),
        method: VaRMethod::Historical,
    })
}

/// Historical expected shortfall (conditional VaR).
///
/// The mean of all returns at or below the historical VaR threshold. Always
/// `<=` the VaR it is conditioned on.
pub fn expected_shortfall(
    returns: &[f64],
    confidence_level: f64,
    config: &VaRConfig,
) -> AnalyticsResult<f64> {
    validate_confidence(confidence_level)?;
    let sorted = sorted_returns(returns)?;

    let threshold = quantile_sorted(&sorted, 1.0 - confidence_level, config.quantile_method)?;

    // The minimum is always at or below any quantile, so the tail is non-empty
    let tail: Vec<f64> = sorted.iter().copied().take_while(|&r| r <= threshold).collect();
    Ok(tail.iter().sum::<f64>() / tail.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use quantz_math::statistics::QuantileMethod;

    fn sample_returns() -> Vec<f64> {
        vec![
            -0.02, -0.015, -0.01, -0.005, 0.0, 0.005, 0.01, 0.015, 0.02, 0.025,
        ]
    }

    #[test]
    fn test_historical_var_linear() {
        let returns = sample_returns();

        let var = historical_var(&returns, 0.95, &VaRConfig::default()).unwrap();

        // h = 9 * 0.05 = 0.45 between -0.02 and -0.015
        assert_relative_eq!(var.var, -0.01775, epsilon = 1e-12);
        assert_relative_eq!(var.confidence_level, 0.95);
        assert_eq!(var.observations, 10);
        assert_eq!(var.method, VaRMethod::Historical);
    }

    #[test]
    fn test_historical_var_lower() {
        let returns = sample_returns();
        let config = VaRConfig::new().with_quantile_method(QuantileMethod::Lower);

        let var = historical_var(&returns, 0.95, &config).unwrap();

        assert_relative_eq!(var.var, -0.02);
    }

    #[test]
    fn test_deterministic() {
        let returns = sample_returns();
        let a = historical_var(&returns, 0.9, &VaRConfig::default()).unwrap();
        let b = historical_var(&returns, 0.9, &VaRConfig::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_historical_var_empty() {
        let result = historical_var(&[], 0.95, &VaRConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_confidence() {
        let returns = sample_returns();
        for c in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            assert!(historical_var(&returns, c, &VaRConfig::default()).is_err());
        }
    }

    #[test]
    fn test_expected_shortfall() {
        let returns = sample_returns();

        // Threshold at 80%: h = 9 * 0.2 = 1.8 -> -0.011; tail = {-0.02, -0.015}
        let es = expected_shortfall(&returns, 0.8, &VaRConfig::default()).unwrap();
        assert_relative_eq!(es, -0.0175, epsilon = 1e-12);

        let var = historical_var(&returns, 0.8, &VaRConfig::default()).unwrap();
        assert!(es <= var.var);
    }
}

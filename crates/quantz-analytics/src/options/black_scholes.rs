//! Closed-form Black-Scholes prices for European options.

use statrs::distribution::{ContinuousCDF, Normal};

use super::{OptionParams, OptionType};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Black-Scholes price of a European option.
///
/// ```text
/// d₁ = [ln(S/K) + (r + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// C  = S Φ(d₁) - K e^(-rT) Φ(d₂)
/// P  = K e^(-rT) Φ(-d₂) - S Φ(-d₁)
/// ```
///
/// # Example
///
/// ```rust
/// use quantz_analytics::options::{black_scholes_price, OptionParams, OptionType};
///
/// let params = OptionParams::new(100.0, 105.0, 1.0, 0.05, 0.2);
/// let call = black_scholes_price(OptionType::Call, &params).unwrap();
/// assert!((call - 8.0214).abs() < 1e-3);
/// ```
pub fn black_scholes_price(option_type: OptionType, params: &OptionParams) -> AnalyticsResult<f64> {
    params.validate()?;

    let OptionParams {
        spot,
        strike,
        expiry,
        rate,
        volatility,
    } = *params;

    let sqrt_t = expiry.sqrt();
    let d1 = ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * expiry)
        / (volatility * sqrt_t);
    let d2 = d1 - volatility * sqrt_t;

    let n = Normal::new(0.0, 1.0).map_err(|e| AnalyticsError::MathError(e.to_string()))?;
    let discounted_strike = strike * params.discount_factor();

    let price = match option_type {
        OptionType::Call => spot * n.cdf(d1) - discounted_strike * n.cdf(d2),
        OptionType::Put => discounted_strike * n.cdf(-d2) - spot * n.cdf(-d1),
    };

    Ok(price.max(0.0))
}

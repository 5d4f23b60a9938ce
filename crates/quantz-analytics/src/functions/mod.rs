//! Standalone analytics functions.
//!
//! The six entry points with default configuration. Each one delegates to
//! the configurable building blocks in [`crate::risk`], [`crate::portfolio`]
//! and [`crate::options`].
//!
//! | Function | Output |
//! |---|---|
//! | [`max_drawdown`] | `f64 <= 0` |
//! | [`eigenportfolio`] | long-only weights summing to one |
//! | [`top_principal_components`] | `n x N` matrix, one component per row |
//! | [`monte_carlo_option_pricing`] | discounted European call price `>= 0` |
//! | [`calculate_var`] | signed historical return quantile |
//! | [`optimize_var`] | long-only weights summing to one |

use nalgebra::DMatrix;
use rand::Rng;

use crate::config::{MonteCarloConfig, VaRConfig};
use crate::error::AnalyticsResult;
use crate::options::{MonteCarloPricer, OptionParams, OptionType};
use crate::risk::{historical_var, VaROptimizer};

pub use crate::portfolio::{eigenportfolio, top_principal_components};
pub use crate::risk::max_drawdown;

/// Prices a European call by Monte Carlo simulation of terminal prices.
///
/// # Arguments
///
/// * `s` - Spot price (> 0)
/// * `k` - Strike (> 0)
/// * `t` - Time to maturity in years (> 0)
/// * `r` - Risk-free rate
/// * `sigma` - Volatility (> 0)
/// * `num_simulations` - Number of paths (>= 1)
/// * `rng` - Random source for the normal draws
///
/// # Example
///
/// ```rust
/// use quantz_analytics::functions::monte_carlo_option_pricing;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let price = monte_carlo_option_pricing(100.0, 105.0, 1.0, 0.05, 0.2, 100_000, &mut rng).unwrap();
/// assert!((price - 8.0).abs() < 1.0);
/// ```
pub fn monte_carlo_option_pricing<R>(
    s: f64,
    k: f64,
    t: f64,
    r: f64,
    sigma: f64,
    num_simulations: usize,
    rng: &mut R,
) -> AnalyticsResult<f64>
where
    R: Rng + ?Sized,
{
    let pricer =
        MonteCarloPricer::new(MonteCarloConfig::new().with_num_simulations(num_simulations));
    let params = OptionParams::new(s, k, t, r, sigma);
    Ok(pricer.price(OptionType::Call, &params, rng)?.price)
}

/// Historical VaR: the `1 - confidence_level` quantile of `returns`.
///
/// Uses linear interpolation between order statistics. The result is signed
/// and typically negative.
pub fn calculate_var(returns: &[f64], confidence_level: f64) -> AnalyticsResult<f64> {
    Ok(historical_var(returns, confidence_level, &VaRConfig::default())?.var)
}

/// Long-only weights that minimise the portfolio's historical VaR loss.
///
/// Always returns non-negative weights summing to one; the search is local
/// and does not guarantee a global optimum.
pub fn optimize_var<R>(
    returns: &DMatrix<f64>,
    confidence_level: f64,
    rng: &mut R,
) -> AnalyticsResult<Vec<f64>>
where
    R: Rng + ?Sized,
{
    Ok(VaROptimizer::default()
        .optimize(returns, confidence_level, rng)?
        .weights)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_calculate_var_matches_historical() {
        let returns = [-0.05, -0.02, 0.0, 0.01, 0.03];
        // h = 4 * 0.1 = 0.4 -> -0.05 + 0.4 * 0.03
        assert_relative_eq!(calculate_var(&returns, 0.9).unwrap(), -0.038, epsilon = 1e-12);
    }

    #[test]
    fn test_option_pricing_rejects_bad_inputs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(monte_carlo_option_pricing(0.0, 105.0, 1.0, 0.05, 0.2, 10, &mut rng).is_err());
        assert!(monte_carlo_option_pricing(100.0, 105.0, 1.0, 0.05, 0.2, 0, &mut rng).is_err());
    }

    #[test]
    fn test_optimize_var_is_feasible() {
        let returns = DMatrix::from_row_slice(
            5,
            3,
            &[
                0.01, -0.02, 0.00, -0.03, 0.01, 0.01, 0.02, 0.00, -0.01, -0.01, 0.02, 0.00, 0.00,
                -0.01, 0.02,
            ],
        );
        let mut rng = StdRng::seed_from_u64(3);

        let weights = optimize_var(&returns, 0.95, &mut rng).unwrap();

        assert_eq!(weights.len(), 3);
        assert!(weights.iter().all(|w| *w >= 0.0));
        assert_relative_eq!(weights.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }
}

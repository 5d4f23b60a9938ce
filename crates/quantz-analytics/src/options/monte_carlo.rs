//! Monte Carlo pricing of European options.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

use super::{OptionParams, OptionType};
use crate::config::{AnalyticsConfig, MonteCarloConfig};
use crate::error::AnalyticsResult;

/// Result of a Monte Carlo pricing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of `price`; `None` with fewer than two independent samples.
    pub standard_error: Option<f64>,
    /// Number of simulated terminal prices.
    pub num_simulations: usize,
}

impl MonteCarloResult {
    /// Symmetric confidence interval `price ± z × standard_error`.
    pub fn confidence_interval(&self, z: f64) -> Option<(f64, f64)> {
        self.standard_error
            .map(|se| (self.price - z * se, self.price + z * se))
    }
}

/// Running sum and sum of squares of independent payoff samples.
#[derive(Debug, Default)]
struct PayoffAccumulator {
    count: usize,
    sum: f64,
    sum_sq: f64,
}

impl PayoffAccumulator {
    fn push(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_sq += value * value;
    }

    fn standard_error(&self) -> Option<f64> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = ((self.sum_sq - n * mean * mean) / (n - 1.0)).max(0.0);
        Some((variance / n).sqrt())
    }
}

/// Prices European options by simulating terminal prices under GBM.
///
/// Each path draws one `Z ~ N(0, 1)` from the caller's random source, so a
/// seeded generator reproduces the price exactly.
///
/// # Example
///
/// ```rust
/// use quantz_analytics::config::MonteCarloConfig;
/// use quantz_analytics::options::{MonteCarloPricer, OptionParams, OptionType};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let pricer = MonteCarloPricer::new(MonteCarloConfig::new().with_num_simulations(50_000));
/// let params = OptionParams::new(100.0, 105.0, 1.0, 0.05, 0.2);
/// let mut rng = StdRng::seed_from_u64(2024);
///
/// let result = pricer.price(OptionType::Call, &params, &mut rng).unwrap();
/// assert!((result.price - 8.02).abs() < 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer with the given settings.
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Creates a pricer from the `monte_carlo` section of `config`.
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self::new(config.monte_carlo)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Prices one option.
    pub fn price<R>(
        &self,
        option_type: OptionType,
        params: &OptionParams,
        rng: &mut R,
    ) -> AnalyticsResult<MonteCarloResult>
    where
        R: Rng + ?Sized,
    {
        params.validate()?;
        self.config.validate()?;

        let n = self.config.num_simulations;
        let payoff = |z: f64| option_type.payoff(params.terminal_price(z), params.strike);

        // Antithetic pairs are averaged into one independent sample
        let mut samples = PayoffAccumulator::default();
        let mut total = 0.0;

        if self.config.antithetic {
            for _ in 0..n / 2 {
                let z: f64 = StandardNormal.sample(&mut *rng);
                let pair = payoff(z) + payoff(-z);
                total += pair;
                samples.push(0.5 * pair);
            }
            if n % 2 == 1 {
                let z: f64 = StandardNormal.sample(&mut *rng);
                total += payoff(z);
            }
        } else {
            for _ in 0..n {
                let z: f64 = StandardNormal.sample(&mut *rng);
                let value = payoff(z);
                total += value;
                samples.push(value);
            }
        }

        let discount = params.discount_factor();
        let price = discount * total / n as f64;
        let standard_error = samples.standard_error().map(|se| discount * se);

        tracing::debug!(
            option_type = %option_type,
            num_simulations = n,
            antithetic = self.config.antithetic,
            price,
            ?standard_error,
            "Monte Carlo pricing finished"
        );

        Ok(MonteCarloResult {
            price,
            standard_error,
            num_simulations: n,
        })
    }
}

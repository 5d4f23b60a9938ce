//! Configuration for analytics computation.
//!
//! Every struct deserialises from a partial document: missing fields take
//! their defaults.

use quantz_math::optimization::OptimizerConfig;
use quantz_math::statistics::QuantileMethod;
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Default number of Monte Carlo paths.
pub const DEFAULT_NUM_SIMULATIONS: usize = 100_000;

/// Configuration for historical VaR estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VaRConfig {
    /// Interpolation between order statistics.
    pub quantile_method: QuantileMethod,
}

impl VaRConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantile interpolation method.
    #[must_use]
    pub fn with_quantile_method(mut self, method: QuantileMethod) -> Self {
        self.quantile_method = method;
        self
    }
}

/// Configuration for Monte Carlo option pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    /// Number of simulated terminal prices.
    pub num_simulations: usize,

    /// Pair every draw `Z` with `-Z` to reduce variance.
    /// With an odd path count the last draw is unpaired.
    pub antithetic: bool,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            antithetic: false,
        }
    }
}

impl MonteCarloConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of simulations.
    #[must_use]
    pub fn with_num_simulations(mut self, n: usize) -> Self {
        self.num_simulations = n;
        self
    }

    /// Enables or disables antithetic variates.
    #[must_use]
    pub fn with_antithetic(mut self, enabled: bool) -> Self {
        self.antithetic = enabled;
        self
    }

    /// Checks the simulation count.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.num_simulations == 0 {
            return Err(AnalyticsError::invalid_input(
                "num_simulations must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Top-level configuration bundling every analytics section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// VaR estimation settings.
    pub var: VaRConfig,
    /// Monte Carlo pricing settings.
    pub monte_carlo: MonteCarloConfig,
    /// Weight search settings used by the VaR optimizer.
    pub optimizer: OptimizerConfig,
}

impl AnalyticsConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the VaR section.
    #[must_use]
    pub fn with_var(mut self, var: VaRConfig) -> Self {
        self.var = var;
        self
    }

    /// Sets the Monte Carlo section.
    #[must_use]
    pub fn with_monte_carlo(mut self, monte_carlo: MonteCarloConfig) -> Self {
        self.monte_carlo = monte_carlo;
        self
    }

    /// Sets the optimizer section.
    #[must_use]
    pub fn with_optimizer(mut self, optimizer: OptimizerConfig) -> Self {
        self.optimizer = optimizer;
        self
    }

    /// Validates every section.
    pub fn validate(&self) -> AnalyticsResult<()> {
        self.monte_carlo.validate()?;
        self.optimizer.validate()?;
        Ok(())
    }
}

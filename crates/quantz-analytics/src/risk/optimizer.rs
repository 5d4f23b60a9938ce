//! Long-only portfolio weights minimising historical VaR.

use nalgebra::DMatrix;
use quantz_math::linear_algebra::validate_returns;
use quantz_math::optimization::{projected_random_search, uniform_weights, OptimizerConfig};
use quantz_math::{MathError, MathResult};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::var::historical_var;
use crate::config::{AnalyticsConfig, VaRConfig};
use crate::error::{validate_confidence, AnalyticsError, AnalyticsResult};
use crate::portfolio::portfolio_returns;

/// Outcome of a VaR minimisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaROptimization {
    /// Non-negative weights summing to one.
    pub weights: Vec<f64>,
    /// Signed portfolio VaR at `weights`.
    pub var: f64,
    /// Signed portfolio VaR of the uniform starting allocation.
    pub initial_var: f64,
    /// Candidates evaluated by the search.
    pub iterations: u32,
    /// Whether the search step collapsed before the iteration cap.
    pub converged: bool,
}

/// Searches the long-only simplex for the allocation with the smallest VaR loss.
///
/// The objective is the signed historical VaR of the portfolio return series,
/// maximised (equivalently, the loss `-VaR` is minimised). The search starts
/// from uniform weights and never returns an allocation worse than it.
#[derive(Debug, Clone, Copy, Default)]
pub struct VaROptimizer {
    var_config: VaRConfig,
    optimizer_config: OptimizerConfig,
}

impl VaROptimizer {
    /// Creates an optimizer with the given settings.
    pub fn new(var_config: VaRConfig, optimizer_config: OptimizerConfig) -> Self {
        Self {
            var_config,
            optimizer_config,
        }
    }

    /// Creates an optimizer from the `var` and `optimizer` sections of `config`.
    pub fn from_config(config: &AnalyticsConfig) -> Self {
        Self::new(config.var, config.optimizer)
    }

    /// Returns the VaR settings.
    pub fn var_config(&self) -> &VaRConfig {
        &self.var_config
    }

    /// Returns the search settings.
    pub fn optimizer_config(&self) -> &OptimizerConfig {
        &self.optimizer_config
    }

    /// Runs the search.
    ///
    /// # Arguments
    ///
    /// * `returns` - Periods x assets matrix of asset returns
    /// * `confidence_level` - Confidence level in (0, 1)
    /// * `rng` - Random source for the search perturbations
    pub fn optimize<R>(
        &self,
        returns: &DMatrix<f64>,
        confidence_level: f64,
        rng: &mut R,
    ) -> AnalyticsResult<VaROptimization>
    where
        R: Rng + ?Sized,
    {
        validate_confidence(confidence_level)?;
        validate_returns(returns)?;

        let var_config = self.var_config;
        let objective = |weights: &[f64]| -> MathResult<f64> {
            let series = portfolio_returns(returns, weights).map_err(to_math_error)?;
            let result =
                historical_var(&series, confidence_level, &var_config).map_err(to_math_error)?;
            Ok(-result.var)
        };

        let start = uniform_weights(returns.ncols());
        let initial_var = -objective(&start)?;
        let result = projected_random_search(objective, &start, &self.optimizer_config, rng)?;

        tracing::debug!(
            assets = returns.ncols(),
            periods = returns.nrows(),
            confidence_level,
            initial_var,
            var = -result.objective_value,
            iterations = result.iterations,
            converged = result.converged,
            "VaR optimisation finished"
        );

        Ok(VaROptimization {
            weights: result.parameters,
            var: -result.objective_value,
            initial_var,
            iterations: result.iterations,
            converged: result.converged,
        })
    }
}

fn to_math_error(err: AnalyticsError) -> MathError {
    MathError::invalid_input(err.to_string())
}

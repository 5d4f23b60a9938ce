//! Optimization algorithms.
//!
//! This module provides derivative-free minimisation over the probability
//! simplex, used for portfolio weight searches where the objective (an
//! empirical quantile) is piecewise and has no useful gradient.

mod simplex;

pub use simplex::{is_on_simplex, project_onto_simplex, uniform_weights};

use crate::error::{MathError, MathResult};
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use serde::{Deserialize, Serialize};

/// Starting points this close to the simplex are used unprojected.
const FEASIBILITY_TOLERANCE: f64 = 1e-12;

/// Configuration for the projected random search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Maximum number of candidate evaluations.
    pub max_iterations: u32,
    /// Initial perturbation scale.
    pub initial_step: f64,
    /// The search stops once the step shrinks below this value.
    pub min_step: f64,
    /// Factor applied to the step after `patience` consecutive rejections.
    pub shrink_factor: f64,
    /// Consecutive rejected candidates tolerated before shrinking the step.
    pub patience: u32,
    /// Minimum objective decrease for a candidate to be accepted.
    pub tolerance: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 2_000,
            initial_step: 0.1,
            min_step: 1e-4,
            shrink_factor: 0.5,
            patience: 25,
            tolerance: 1e-12,
        }
    }
}

impl OptimizerConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the initial step.
    #[must_use]
    pub fn with_initial_step(mut self, step: f64) -> Self {
        self.initial_step = step;
        self
    }

    /// Sets the minimum step.
    #[must_use]
    pub fn with_min_step(mut self, step: f64) -> Self {
        self.min_step = step;
        self
    }

    /// Sets the shrink factor.
    #[must_use]
    pub fn with_shrink_factor(mut self, factor: f64) -> Self {
        self.shrink_factor = factor;
        self
    }

    /// Sets the patience.
    #[must_use]
    pub fn with_patience(mut self, patience: u32) -> Self {
        self.patience = patience;
        self
    }

    /// Sets the minimum improvement for accepting a candidate.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks that the settings describe a terminating search.
    pub fn validate(&self) -> MathResult<()> {
        if !(self.initial_step > 0.0 && self.initial_step.is_finite()) {
            return Err(MathError::invalid_input("initial_step must be positive"));
        }
        if !(self.min_step > 0.0 && self.min_step <= self.initial_step) {
            return Err(MathError::invalid_input(
                "min_step must be positive and not exceed initial_step",
            ));
        }
        if !(self.shrink_factor > 0.0 && self.shrink_factor < 1.0) {
            return Err(MathError::invalid_input("shrink_factor must be in (0, 1)"));
        }
        if self.patience == 0 {
            return Err(MathError::invalid_input("patience must be at least 1"));
        }
        if !(self.tolerance >= 0.0) {
            return Err(MathError::invalid_input("tolerance must be non-negative"));
        }
        Ok(())
    }
}

/// Result of an optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// Best parameters found (a point on the simplex).
    pub parameters: Vec<f64>,
    /// Objective value at `parameters`.
    pub objective_value: f64,
    /// Number of candidates evaluated.
    pub iterations: u32,
    /// Whether the step shrank below `min_step` before the iteration cap.
    pub converged: bool,
}

/// Minimises `f` over the probability simplex by projected random search.
///
/// Starting from `initial` (projected if it is not already feasible), each
/// iteration perturbs the current point with Gaussian noise scaled by the
/// step, projects the candidate back onto the simplex and keeps it if the
/// objective improves. After `patience` consecutive rejections the step is
/// multiplied by `shrink_factor`. Every returned point is feasible regardless
/// of convergence, and its objective is never above the starting value.
///
/// # Arguments
///
/// * `f` - Objective to minimise; errors abort the search
/// * `initial` - Starting point
/// * `config` - Search configuration
/// * `rng` - Random source for perturbations
pub fn projected_random_search<F, R>(
    mut f: F,
    initial: &[f64],
    config: &OptimizerConfig,
    rng: &mut R,
) -> MathResult<OptimizationResult>
where
    F: FnMut(&[f64]) -> MathResult<f64>,
    R: Rng + ?Sized,
{
    config.validate()?;

    let mut params = if is_on_simplex(initial, FEASIBILITY_TOLERANCE) {
        initial.to_vec()
    } else {
        project_onto_simplex(initial)?
    };
    let mut best_value = f(&params)?;
    let mut step = config.initial_step;
    let mut rejections = 0;

    if params.len() == 1 {
        // The simplex is a single point
        return Ok(OptimizationResult {
            parameters: params,
            objective_value: best_value,
            iterations: 0,
            converged: true,
        });
    }

    for iteration in 0..config.max_iterations {
        if step < config.min_step {
            tracing::trace!(iteration, objective = best_value, "projected search converged");
            return Ok(OptimizationResult {
                parameters: params,
                objective_value: best_value,
                iterations: iteration,
                converged: true,
            });
        }

        let perturbed: Vec<f64> = params
            .iter()
            .map(|&w| {
                let z: f64 = StandardNormal.sample(&mut *rng);
                w + step * z
            })
            .collect();
        let candidate = project_onto_simplex(&perturbed)?;
        let value = f(&candidate)?;

        if value < best_value - config.tolerance {
            params = candidate;
            best_value = value;
            rejections = 0;
        } else {
            rejections += 1;
            if rejections >= config.patience {
                step *= config.shrink_factor;
                rejections = 0;
            }
        }
    }

    Ok(OptimizationResult {
        parameters: params,
        objective_value: best_value,
        iterations: config.max_iterations,
        converged: false,
    })
}

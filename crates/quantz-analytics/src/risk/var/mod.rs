//! Value at Risk (VaR) calculations.
//!
//! VaR here is the signed return quantile at `1 - confidence_level`: a
//! negative number such that returns below it occur with probability at
//! most `1 - confidence_level`. The loss magnitude is its negation.

mod historical;
mod parametric;

pub use historical::*;
pub use parametric::*;

use serde::{Deserialize, Serialize};

/// Value at Risk result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaRResult {
    /// Signed return quantile (typically negative).
    pub var: f64,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
    /// Number of returns the estimate is based on
    pub observations: usize,
    /// Method used for calculation
    pub method: VaRMethod,
}

impl VaRResult {
    /// Loss magnitude, `max(-var, 0)`.
    pub fn loss(&self) -> f64 {
        (-self.var).max(0.0)
    }
}

/// VaR calculation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaRMethod {
    /// Historical simulation
    Historical,
    /// Parametric (variance-covariance)
    Parametric,
}

impl std::fmt::Display for VaRResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VaR({:.0}%, {:?}, n={}): {:.4}%",
            self.confidence_level * 100.0,
            self.method,
            self.observations,
            self.var * 100.0
        )
    }
}

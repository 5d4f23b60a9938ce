//! European option pricing under geometric Brownian motion.
//!
//! - [`black_scholes_price`]: Closed-form Black-Scholes price
//! - [`MonteCarloPricer`]: Simulation of terminal prices with an explicit random source
//!
//! The closed form is the reference the simulation converges to; the
//! Monte Carlo standard error scales as `1 / sqrt(num_simulations)`.

mod black_scholes;
mod monte_carlo;

pub use black_scholes::black_scholes_price;
pub use monte_carlo::{MonteCarloPricer, MonteCarloResult};

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Option right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Payoff at expiry for terminal price `spot`.
    pub fn payoff(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Market and contract inputs for a European option.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionParams {
    /// Current underlying price `S`.
    pub spot: f64,
    /// Strike `K`.
    pub strike: f64,
    /// Time to expiry `T` in years.
    pub expiry: f64,
    /// Continuously compounded risk-free rate `r`.
    pub rate: f64,
    /// Annualised volatility `σ`.
    pub volatility: f64,
}

impl OptionParams {
    /// Creates option parameters.
    pub fn new(spot: f64, strike: f64, expiry: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        }
    }

    /// Checks that S, K, T and σ are positive and r is finite.
    pub fn validate(&self) -> AnalyticsResult<()> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("expiry", self.expiry),
            ("volatility", self.volatility),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(AnalyticsError::InvalidInput(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }
        if !self.rate.is_finite() {
            return Err(AnalyticsError::InvalidInput(format!(
                "rate must be finite, got {}",
                self.rate
            )));
        }
        Ok(())
    }

    /// Discount factor `exp(-rT)`.
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Terminal price for a standard normal draw `z`.
    ///
    /// `S_T = S exp((r - σ²/2) T + σ √T z)`
    pub fn terminal_price(&self, z: f64) -> f64 {
        let drift = (self.rate - 0.5 * self.volatility * self.volatility) * self.expiry;
        let diffusion = self.volatility * self.expiry.sqrt() * z;
        self.spot * (drift + diffusion).exp()
    }
}

//! Risk analytics for price and return series.
//!
//! This module provides:
//!
//! - **Drawdown**: Maximum drawdown with peak, trough and recovery
//! - **VaR**: Value at Risk (Historical and Parametric), expected shortfall
//! - **Optimization**: Long-only allocation minimising historical VaR
//!
//! # Example
//!
//! ```rust
//! use quantz_analytics::risk::{historical_var, max_drawdown};
//! use quantz_analytics::config::VaRConfig;
//!
//! let dd = max_drawdown(&[100.0, 90.0, 95.0, 80.0]).unwrap();
//! assert!((dd + 0.2).abs() < 1e-12);
//!
//! let returns = [-0.03, -0.01, 0.0, 0.01, 0.02];
//! let var = historical_var(&returns, 0.9, &VaRConfig::default()).unwrap();
//! assert!(var.var < 0.0);
//! ```

pub mod drawdown;
pub mod optimizer;
pub mod var;

pub use drawdown::{drawdown_analysis, drawdown_series, max_drawdown, DrawdownResult};
pub use optimizer::{VaROptimization, VaROptimizer};
pub use var::{expected_shortfall, historical_var, parametric_var, VaRMethod, VaRResult};

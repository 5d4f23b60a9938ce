//! # Quantz Analytics
//!
//! Risk and portfolio analytics on price and return series.
//!
//! This crate provides:
//! - **Risk**: Maximum drawdown, historical and parametric VaR, expected shortfall
//! - **Portfolio**: Principal components, eigenportfolios, VaR-minimising allocation
//! - **Options**: Black-Scholes and Monte Carlo pricing of European options
//! - **Functions**: Standalone entry points with default settings
//!
//! ## Conventions
//!
//! - Return matrices are `T x N`: one row per observation, one column per asset.
//! - VaR is reported as a signed return quantile, so losses are negative.
//! - Randomised routines take `&mut impl Rng`; seed it for reproducible output.
//!
//! ## Usage
//!
//! ```rust
//! use quantz_analytics::prelude::*;
//! use nalgebra::DMatrix;
//!
//! let dd = max_drawdown(&[100.0, 120.0, 90.0, 130.0]).unwrap();
//! assert!((dd + 0.25).abs() < 1e-12);
//!
//! let returns = DMatrix::from_row_slice(4, 2, &[
//!     0.01, 0.02,
//!     -0.02, -0.01,
//!     0.03, 0.01,
//!     0.00, -0.02,
//! ]);
//! let weights = eigenportfolio(&returns).unwrap();
//! assert!((weights.iter().sum::<f64>() - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::too_many_arguments)]

pub mod config;
pub mod error;
pub mod functions;
pub mod options;
pub mod portfolio;
pub mod risk;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
///
/// ```rust
/// use quantz_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Configuration
    pub use crate::config::{AnalyticsConfig, MonteCarloConfig, VaRConfig};

    // Standalone functions
    pub use crate::functions::{
        calculate_var, eigenportfolio, max_drawdown, monte_carlo_option_pricing, optimize_var,
        top_principal_components,
    };

    // Risk
    pub use crate::risk::{
        drawdown_analysis, drawdown_series, expected_shortfall, historical_var, parametric_var,
        DrawdownResult, VaRMethod, VaROptimization, VaROptimizer, VaRResult,
    };

    // Portfolio
    pub use crate::portfolio::{
        eigenportfolio_analysis, portfolio_returns, principal_components, EigenPortfolio,
        PrincipalComponents,
    };

    // Options
    pub use crate::options::{
        black_scholes_price, MonteCarloPricer, MonteCarloResult, OptionParams, OptionType,
    };

    pub use quantz_math::optimization::OptimizerConfig;
    pub use quantz_math::statistics::QuantileMethod;
}

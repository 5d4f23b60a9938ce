//! # Quantz
//!
//! Quantitative finance routines on in-memory price and return data.
//!
//! This crate re-exports the public API of:
//! - [`quantz_math`] as [`math`]: quantiles, covariance, sorted eigen-decomposition, simplex search
//! - [`quantz_analytics`] as [`analytics`]: drawdown, VaR, PCA portfolios, option pricing
//!
//! The six standalone functions are available at the crate root.
//!
//! ```rust
//! use quantz::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let dd = max_drawdown(&[100.0, 80.0, 120.0]).unwrap();
//! assert!((dd + 0.2).abs() < 1e-12);
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let call = monte_carlo_option_pricing(100.0, 100.0, 1.0, 0.05, 0.2, 20_000, &mut rng).unwrap();
//! assert!(call > 9.0 && call < 12.0);
//! ```

#![warn(missing_docs)]

pub use quantz_analytics as analytics;
pub use quantz_math as math;

pub use quantz_analytics::functions::{
    calculate_var, eigenportfolio, max_drawdown, monte_carlo_option_pricing, optimize_var,
    top_principal_components,
};
pub use quantz_analytics::{AnalyticsError, AnalyticsResult};
pub use quantz_math::{MathError, MathResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quantz_analytics::prelude::*;
    pub use quantz_math::prelude::{MathError, MathResult};
}

//! # Quantz Math
//!
//! Numerical primitives for the Quantz quantitative finance library.
//!
//! This crate provides:
//!
//! - **Statistics**: Empirical quantiles with selectable interpolation, moments
//! - **Linear Algebra**: Sample covariance and sorted symmetric eigen-decomposition
//! - **Optimization**: Simplex projection and derivative-free projected search
//!
//! ## Design Philosophy
//!
//! - **Numerical Stability**: Degenerate inputs are detected, never turned into NaN
//! - **Explicit Randomness**: Stochastic routines take the random source as an argument
//! - **Plain Data**: Inputs are slices and `nalgebra` matrices owned by the caller

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod linear_algebra;
pub mod optimization;
pub mod statistics;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::linear_algebra::{covariance_matrix, sorted_symmetric_eigen, SortedEigen};
    pub use crate::optimization::{
        is_on_simplex, project_onto_simplex, projected_random_search, uniform_weights,
        OptimizationResult, OptimizerConfig,
    };
    pub use crate::statistics::{mean, quantile, sample_std_dev, QuantileMethod};
}

pub use error::{MathError, MathResult};

//! Linear algebra utilities.
//!
//! This module provides the covariance estimation and symmetric
//! eigen-decomposition needed for principal component analysis.

mod eigen;

pub use eigen::{sorted_symmetric_eigen, SortedEigen};

use crate::error::{ensure_finite, MathError, MathResult};
use nalgebra::DMatrix;

/// Validates a returns matrix: at least one row and column, all entries finite.
pub fn validate_returns(returns: &DMatrix<f64>) -> MathResult<()> {
    if returns.nrows() == 0 || returns.ncols() == 0 {
        return Err(MathError::invalid_input(format!(
            "returns matrix must have at least one row and one column, got {}x{}",
            returns.nrows(),
            returns.ncols()
        )));
    }
    ensure_finite(returns.iter(), "returns matrix")
}

/// Computes the sample covariance matrix of the columns of `returns`.
///
/// Rows are observations (time periods), columns are variables (assets).
/// The estimator uses the unbiased divisor `T - 1`, so at least two rows
/// are required.
///
/// # Returns
///
/// A symmetric `N x N` matrix where `N = returns.ncols()`.
pub fn covariance_matrix(returns: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    validate_returns(returns)?;

    let (t, n) = returns.shape();
    if t < 2 {
        return Err(MathError::insufficient_data(2, t));
    }

    // Center each column on its mean
    let mut centered = returns.clone();
    for j in 0..n {
        let mu = returns.column(j).sum() / t as f64;
        for i in 0..t {
            centered[(i, j)] -= mu;
        }
    }

    let cov = centered.transpose() * &centered / (t - 1) as f64;

    // Remove floating-point asymmetry before the symmetric solver sees it
    Ok((&cov + cov.transpose()) * 0.5)
}

/// Returns the largest absolute entry of a matrix, or 0 for an empty one.
pub fn max_abs(matrix: &DMatrix<f64>) -> f64 {
    matrix.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()))
}

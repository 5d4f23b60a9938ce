//! Eigenportfolios: long-only weights from the dominant covariance eigenvector.

use nalgebra::DMatrix;
use quantz_math::linear_algebra::{covariance_matrix, max_abs, sorted_symmetric_eigen};
use quantz_math::optimization::uniform_weights;
use serde::{Deserialize, Serialize};

use crate::error::AnalyticsResult;

/// Covariance entries at or below this multiple of the squared largest
/// return are treated as zero variance.
pub const ZERO_VARIANCE_TOLERANCE: f64 = f64::EPSILON;

/// Long-only portfolio built from the dominant principal component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EigenPortfolio {
    /// Non-negative weights summing to one.
    pub weights: Vec<f64>,
    /// Largest covariance eigenvalue (variance along the dominant direction).
    pub eigenvalue: f64,
    /// True if the data had no variance and uniform weights were used.
    pub uniform_fallback: bool,
}

/// Builds the eigenportfolio of `returns` with its diagnostics.
///
/// The dominant eigenvector's sign is arbitrary, so components are taken in
/// absolute value and rescaled to sum to one. Data with no variance, where
/// every direction is equally dominant, yields uniform weights.
pub fn eigenportfolio_analysis(returns: &DMatrix<f64>) -> AnalyticsResult<EigenPortfolio> {
    let assets = returns.ncols();
    let cov = covariance_matrix(returns)?;

    let scale = max_abs(returns);
    if max_abs(&cov) <= ZERO_VARIANCE_TOLERANCE * scale * scale {
        tracing::warn!(assets, "zero-variance returns, using uniform eigenportfolio");
        return Ok(EigenPortfolio {
            weights: uniform_weights(assets),
            eigenvalue: 0.0,
            uniform_fallback: true,
        });
    }

    let eig = sorted_symmetric_eigen(&cov)?;
    let dominant = eig.eigenvector(0).abs();
    let total = dominant.sum();

    if !(total > f64::EPSILON && total.is_finite()) {
        tracing::warn!(assets, total, "degenerate dominant eigenvector, using uniform weights");
        return Ok(EigenPortfolio {
            weights: uniform_weights(assets),
            eigenvalue: eig.eigenvalues[0],
            uniform_fallback: true,
        });
    }

    let weights: Vec<f64> = dominant.iter().map(|w| w / total).collect();
    tracing::debug!(assets, eigenvalue = eig.eigenvalues[0], "built eigenportfolio");

    Ok(EigenPortfolio {
        weights,
        eigenvalue: eig.eigenvalues[0],
        uniform_fallback: false,
    })
}

/// Eigenportfolio weights: non-negative, summing to one.
pub fn eigenportfolio(returns: &DMatrix<f64>) -> AnalyticsResult<Vec<f64>> {
    Ok(eigenportfolio_analysis(returns)?.weights)
}

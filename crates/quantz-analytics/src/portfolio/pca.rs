//! Principal component analysis of asset returns.

use nalgebra::{DMatrix, DVector};
use quantz_math::linear_algebra::{covariance_matrix, sorted_symmetric_eigen};
use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Principal components of a returns matrix, ranked by explained variance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrincipalComponents {
    /// Covariance eigenvalues, largest first.
    pub eigenvalues: Vec<f64>,
    /// Unit eigenvectors as rows, aligned with `eigenvalues`.
    pub components: DMatrix<f64>,
}

impl PrincipalComponents {
    /// Number of components (equal to the number of assets).
    pub fn len(&self) -> usize {
        self.eigenvalues.len()
    }

    /// Returns true if there are no components.
    pub fn is_empty(&self) -> bool {
        self.eigenvalues.is_empty()
    }

    /// Loadings of the `k`-th component (0 = dominant).
    pub fn component(&self, k: usize) -> DVector<f64> {
        self.components.row(k).transpose()
    }

    /// Share of total variance explained by each component.
    ///
    /// Small negative eigenvalues from rounding are treated as zero. All
    /// zeros are returned when the data has no variance at all.
    pub fn explained_variance_ratio(&self) -> Vec<f64> {
        let clipped: Vec<f64> = self.eigenvalues.iter().map(|v| v.max(0.0)).collect();
        let total: f64 = clipped.iter().sum();
        if total <= f64::EPSILON {
            return vec![0.0; clipped.len()];
        }
        clipped.iter().map(|v| v / total).collect()
    }

    /// The first `n` components stacked as rows, shape `(n, assets)`.
    pub fn top(&self, n: usize) -> AnalyticsResult<DMatrix<f64>> {
        if n == 0 || n > self.len() {
            return Err(AnalyticsError::InvalidInput(format!(
                "n_components must be in [1, {}], got {n}",
                self.len()
            )));
        }
        Ok(self.components.rows(0, n).into_owned())
    }
}

/// Full principal component decomposition of the sample covariance of `returns`.
///
/// Rows of `returns` are periods, columns are assets.
pub fn principal_components(returns: &DMatrix<f64>) -> AnalyticsResult<PrincipalComponents> {
    let cov = covariance_matrix(returns)?;
    let eig = sorted_symmetric_eigen(&cov)?;

    Ok(PrincipalComponents {
        eigenvalues: eig.eigenvalues.iter().copied().collect(),
        components: eig.leading_rows(eig.len()),
    })
}

/// The `n_components` leading principal components as rows, shape `(n_components, N)`.
///
/// # Example
///
/// ```rust
/// use nalgebra::DMatrix;
/// use quantz_analytics::portfolio::top_principal_components;
///
/// let returns = DMatrix::from_row_slice(4, 3, &[
///     0.01, 0.02, -0.01,
///     -0.02, 0.01, 0.00,
///     0.03, -0.01, 0.02,
///     0.00, 0.00, 0.01,
/// ]);
/// let pcs = top_principal_components(&returns, 2).unwrap();
/// assert_eq!(pcs.shape(), (2, 3));
/// ```
pub fn top_principal_components(
    returns: &DMatrix<f64>,
    n_components: usize,
) -> AnalyticsResult<DMatrix<f64>> {
    let assets = returns.ncols();
    if n_components == 0 || n_components > assets {
        return Err(AnalyticsError::InvalidInput(format!(
            "n_components must be in [1, {assets}], got {n_components}"
        )));
    }

    principal_components(returns)?.top(n_components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn factor_returns() -> DMatrix<f64> {
        // Three assets; the first two move together with larger variance
        DMatrix::from_row_slice(
            6,
            3,
            &[
                0.02, 0.021, 0.001, -0.03, -0.029, -0.002, 0.01, 0.012, 0.000, -0.02, -0.018,
                0.001, 0.04, 0.039, -0.001, -0.01, -0.011, 0.002,
            ],
        )
    }

    #[test]
    fn test_dominant_component_loads_on_correlated_pair() {
        let pcs = principal_components(&factor_returns()).unwrap();

        let first = pcs.component(0);
        assert!(first[0] > 0.6 && first[1] > 0.6);
        assert!(first[2].abs() < 0.1);
        assert_relative_eq!(first.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_explained_variance_ratio() {
        let pcs = principal_components(&factor_returns()).unwrap();
        let ratio = pcs.explained_variance_ratio();

        assert_relative_eq!(ratio.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert!(ratio[0] > 0.95);
        assert!(ratio.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_top_shapes() {
        let returns = factor_returns();
        for n in 1..=3 {
            assert_eq!(top_principal_components(&returns, n).unwrap().shape(), (n, 3));
        }
    }

    #[test]
    fn test_constant_returns() {
        let returns = DMatrix::from_element(50, 5, 1.0);

        let pcs = principal_components(&returns).unwrap();

        assert_eq!(pcs.explained_variance_ratio(), vec![0.0; 5]);
        assert_eq!(top_principal_components(&returns, 3).unwrap().shape(), (3, 5));
    }

    #[test]
    fn test_invalid_component_count() {
        let returns = factor_returns();
        assert!(top_principal_components(&returns, 0).is_err());
        assert!(top_principal_components(&returns, 4).is_err());
        assert!(top_principal_components(&DMatrix::zeros(0, 0), 1).is_err());
    }
}

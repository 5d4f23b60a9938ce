//! Portfolio return series.

use nalgebra::{DMatrix, DVector};
use quantz_math::linear_algebra::validate_returns;
use quantz_math::MathError;

use crate::error::AnalyticsResult;

/// Period returns of a weighted portfolio: `r_t = Σ_j w_j R[t, j]`.
///
/// # Arguments
///
/// * `returns` - Periods x assets matrix of asset returns
/// * `weights` - One weight per asset (any sign; not required to sum to one)
pub fn portfolio_returns(returns: &DMatrix<f64>, weights: &[f64]) -> AnalyticsResult<Vec<f64>> {
    validate_returns(returns)?;
    if weights.len() != returns.ncols() {
        return Err(MathError::DimensionMismatch {
            rows1: returns.nrows(),
            cols1: returns.ncols(),
            rows2: weights.len(),
            cols2: 1,
        }
        .into());
    }

    let w = DVector::from_column_slice(weights);
    Ok((returns * w).iter().copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weighted_sum() {
        let returns = DMatrix::from_row_slice(2, 2, &[0.01, 0.03, -0.02, 0.04]);

        let r = portfolio_returns(&returns, &[0.25, 0.75]).unwrap();

        assert_relative_eq!(r[0], 0.0025 + 0.0225, epsilon = 1e-15);
        assert_relative_eq!(r[1], -0.005 + 0.03, epsilon = 1e-15);
    }

    #[test]
    fn test_weight_count_mismatch() {
        let returns = DMatrix::from_row_slice(2, 2, &[0.01, 0.03, -0.02, 0.04]);

        let err = portfolio_returns(&returns, &[1.0]).unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(
            err.to_string(),
            "invalid input: Incompatible dimensions: (2x2) and (1x1)"
        );
    }
}

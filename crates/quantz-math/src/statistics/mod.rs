//! Descriptive statistics.
//!
//! Moments and empirical quantiles over plain `f64` samples.

mod quantile;

pub use quantile::{quantile, quantile_sorted, QuantileMethod};

use crate::error::{ensure_finite, MathError, MathResult};

/// Arithmetic mean of a non-empty finite sample.
pub fn mean(values: &[f64]) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    ensure_finite(values, "mean sample")?;
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (divisor `n - 1`).
pub fn sample_std_dev(values: &[f64]) -> MathResult<f64> {
    if values.len() < 2 {
        return Err(MathError::insufficient_data(2, values.len()));
    }
    let mu = mean(values)?;
    let ss: f64 = values.iter().map(|v| (v - mu).powi(2)).sum();
    Ok((ss / (values.len() - 1) as f64).sqrt())
}

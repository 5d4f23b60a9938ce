//! Empirical quantiles.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, MathError, MathResult};

/// Interpolation rule used when a quantile falls between two order statistics.
///
/// All methods place the quantile at position `h = (n - 1) * p` in the sorted
/// sample, then resolve the fractional part of `h` as described per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantileMethod {
    /// `x[⌊h⌋] + (h - ⌊h⌋) * (x[⌈h⌉] - x[⌊h⌋])`.
    #[default]
    Linear,
    /// `x[⌊h⌋]`.
    Lower,
    /// `x[⌈h⌉]`.
    Higher,
    /// The order statistic nearest to `h`, ties resolved to the even index.
    Nearest,
    /// `(x[⌊h⌋] + x[⌈h⌉]) / 2`.
    Midpoint,
}

impl std::fmt::Display for QuantileMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Linear => "linear",
            Self::Lower => "lower",
            Self::Higher => "higher",
            Self::Nearest => "nearest",
            Self::Midpoint => "midpoint",
        };
        f.write_str(name)
    }
}

/// Computes the `p`-quantile of `values`.
///
/// # Arguments
///
/// * `values` - Sample, in any order; must be non-empty and finite
/// * `p` - Probability in `[0, 1]`
/// * `method` - Interpolation rule between order statistics
///
/// # Example
///
/// ```rust
/// use quantz_math::statistics::{quantile, QuantileMethod};
///
/// let sample = [4.0, 1.0, 3.0, 2.0, 5.0];
/// let median = quantile(&sample, 0.5, QuantileMethod::Linear).unwrap();
/// assert!((median - 3.0).abs() < 1e-12);
/// ```
pub fn quantile(values: &[f64], p: f64, method: QuantileMethod) -> MathResult<f64> {
    if values.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    ensure_finite(values, "quantile sample")?;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    quantile_sorted(&sorted, p, method)
}

/// Computes the `p`-quantile of an already ascending-sorted sample.
///
/// Skips the copy and sort done by [`quantile`]; the caller guarantees order.
pub fn quantile_sorted(sorted: &[f64], p: f64, method: QuantileMethod) -> MathResult<f64> {
    if sorted.is_empty() {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(MathError::invalid_input(format!(
            "quantile probability must be in [0, 1], got {p}"
        )));
    }

    let h = (sorted.len() - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    let frac = h - h.floor();

    let value = match method {
        QuantileMethod::Linear => sorted[lo] + frac * (sorted[hi] - sorted[lo]),
        QuantileMethod::Lower => sorted[lo],
        QuantileMethod::Higher => sorted[hi],
        QuantileMethod::Nearest => {
            let idx = if frac < 0.5 {
                lo
            } else if frac > 0.5 {
                hi
            } else if lo % 2 == 0 {
                lo
            } else {
                hi
            };
            sorted[idx]
        }
        QuantileMethod::Midpoint => 0.5 * (sorted[lo] + sorted[hi]),
    };

    Ok(value)
}

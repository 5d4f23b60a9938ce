//! Drawdown analytics for price series.

use serde::{Deserialize, Serialize};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Location and depth of the deepest decline from a running peak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawdownResult {
    /// Most negative relative drawdown, in `[-1, 0]`.
    pub max_drawdown: f64,
    /// Index of the peak the maximum drawdown is measured from.
    pub peak_index: usize,
    /// Index at which the maximum drawdown is reached.
    pub trough_index: usize,
    /// First index after the trough where the price regains the peak.
    pub recovery_index: Option<usize>,
}

impl DrawdownResult {
    /// Number of periods from peak to trough.
    pub fn decline_length(&self) -> usize {
        self.trough_index - self.peak_index
    }

    /// Returns true if the series never declined.
    pub fn is_flat(&self) -> bool {
        self.max_drawdown == 0.0
    }
}

fn validate_prices(prices: &[f64]) -> AnalyticsResult<()> {
    if prices.is_empty() {
        return Err(AnalyticsError::invalid_input("price series is empty"));
    }
    if let Some((i, p)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        return Err(AnalyticsError::InvalidInput(format!(
            "prices must be finite and positive, got {p} at index {i}"
        )));
    }
    Ok(())
}

/// Relative drawdown `(price - peak) / peak` at every index.
///
/// The peak is the running maximum up to and including the index, so every
/// value is `<= 0` and the first is always `0`.
pub fn drawdown_series(prices: &[f64]) -> AnalyticsResult<Vec<f64>> {
    validate_prices(prices)?;

    let mut peak = prices[0];
    Ok(prices
        .iter()
        .map(|&price| {
            peak = peak.max(price);
            (price - peak) / peak
        })
        .collect())
}

/// Finds the maximum drawdown together with its peak, trough and recovery.
///
/// When several troughs share the same depth the earliest one is reported.
///
/// # Example
///
/// ```rust
/// use quantz_analytics::risk::drawdown_analysis;
///
/// let prices = [100.0, 120.0, 130.0, 90.0, 85.0, 95.0, 80.0, 120.0, 150.0];
/// let dd = drawdown_analysis(&prices).unwrap();
///
/// // Peak 130, trough 80
/// assert!((dd.max_drawdown + 50.0 / 130.0).abs() < 1e-12);
/// assert_eq!((dd.peak_index, dd.trough_index), (2, 6));
/// assert_eq!(dd.recovery_index, Some(8));
/// ```
pub fn drawdown_analysis(prices: &[f64]) -> AnalyticsResult<DrawdownResult> {
    validate_prices(prices)?;

    let mut peak = prices[0];
    let mut peak_index = 0;
    let mut result = DrawdownResult {
        max_drawdown: 0.0,
        peak_index: 0,
        trough_index: 0,
        recovery_index: None,
    };

    for (i, &price) in prices.iter().enumerate() {
        if price > peak {
            peak = price;
            peak_index = i;
        }
        let drawdown = (price - peak) / peak;
        if drawdown < result.max_drawdown {
            result.max_drawdown = drawdown;
            result.peak_index = peak_index;
            result.trough_index = i;
        }
    }

    if result.max_drawdown < 0.0 {
        let peak_price = prices[result.peak_index];
        result.recovery_index = prices[result.trough_index..]
            .iter()
            .position(|&p| p >= peak_price)
            .map(|offset| result.trough_index + offset);
    }

    Ok(result)
}

/// Maximum drawdown of a price series: the most negative `(price - peak) / peak`.
///
/// Returns `0.0` for a single price or a non-decreasing series.
pub fn max_drawdown(prices: &[f64]) -> AnalyticsResult<f64> {
    let result = drawdown_analysis(prices)?;
    tracing::trace!(
        len = prices.len(),
        max_drawdown = result.max_drawdown,
        "computed max drawdown"
    );
    Ok(result.max_drawdown)
}

//! Property-based tests for the analytics invariants.
//!
//! - Drawdowns are never positive and vanish on non-decreasing series
//! - Eigenportfolio and VaR-optimised weights lie on the simplex
//! - Principal component matrices have shape `(n, assets)`
//! - VaR is bounded by the sample and deepens with confidence

use nalgebra::DMatrix;
use proptest::prelude::*;
use quantz_analytics::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

// =============================================================================
// STRATEGIES
// =============================================================================

fn price_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0..1_000.0_f64, 1..100)
}

/// `(periods, assets, data)` with at least two periods.
fn returns_strategy() -> impl Strategy<Value = DMatrix<f64>> {
    (2usize..40, 1usize..6).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-0.1..0.1_f64, rows * cols)
            .prop_map(move |data| DMatrix::from_row_slice(rows, cols, &data))
    })
}

fn is_simplex(weights: &[f64]) -> bool {
    weights.iter().all(|w| *w >= 0.0) && (weights.iter().sum::<f64>() - 1.0).abs() < 1e-6
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn drawdown_is_non_positive(prices in price_strategy()) {
        let dd = max_drawdown(&prices).unwrap();
        prop_assert!(dd <= 0.0);
        prop_assert!(dd > -1.0);
    }

    #[test]
    fn drawdown_of_sorted_series_is_zero(mut prices in price_strategy()) {
        prices.sort_by(f64::total_cmp);
        prop_assert_eq!(max_drawdown(&prices).unwrap(), 0.0);
    }

    #[test]
    fn drawdown_series_bottom_matches_max(prices in price_strategy()) {
        let series = drawdown_series(&prices).unwrap();
        let min = series.iter().copied().fold(0.0, f64::min);
        prop_assert_eq!(min, max_drawdown(&prices).unwrap());
    }

    #[test]
    fn eigenportfolio_is_on_simplex(returns in returns_strategy()) {
        let weights = eigenportfolio(&returns).unwrap();
        prop_assert_eq!(weights.len(), returns.ncols());
        prop_assert!(is_simplex(&weights), "{:?}", weights);
    }

    #[test]
    fn principal_components_have_requested_shape(
        returns in returns_strategy(),
        pick in 0usize..100,
    ) {
        let n = 1 + pick % returns.ncols();
        let components = top_principal_components(&returns, n).unwrap();
        prop_assert_eq!(components.shape(), (n, returns.ncols()));
    }

    #[test]
    fn var_is_bounded_by_sample(
        returns in prop::collection::vec(-0.2..0.2_f64, 1..200),
        confidence in 0.5..0.999_f64,
    ) {
        let var = calculate_var(&returns, confidence).unwrap();
        let min = returns.iter().copied().fold(f64::INFINITY, f64::min);
        let max = returns.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(var >= min - 1e-12 && var <= max + 1e-12);
    }

    #[test]
    fn var_deepens_with_confidence(
        returns in prop::collection::vec(-0.2..0.2_f64, 1..200),
        c1 in 0.5..0.99_f64,
        c2 in 0.5..0.99_f64,
    ) {
        let (lo, hi) = if c1 <= c2 { (c1, c2) } else { (c2, c1) };
        let var_lo = calculate_var(&returns, lo).unwrap();
        let var_hi = calculate_var(&returns, hi).unwrap();
        prop_assert!(var_hi <= var_lo + 1e-12);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn optimized_weights_are_on_simplex(
        returns in returns_strategy(),
        confidence in 0.8..0.99_f64,
        seed in any::<u64>(),
    ) {
        let optimizer = VaROptimizer::new(
            VaRConfig::default(),
            OptimizerConfig::new().with_max_iterations(200),
        );
        let mut rng = StdRng::seed_from_u64(seed);

        let result = optimizer.optimize(&returns, confidence, &mut rng).unwrap();

        prop_assert_eq!(result.weights.len(), returns.ncols());
        prop_assert!(is_simplex(&result.weights), "{:?}", result.weights);
        prop_assert!(result.var >= result.initial_var);
    }
}

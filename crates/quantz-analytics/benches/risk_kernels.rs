//! Benchmarks for the quantz-analytics risk kernels.
//!
//! Run with: cargo bench -p quantz-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use quantz_analytics::config::MonteCarloConfig;
use quantz_analytics::functions::{
    calculate_var, eigenportfolio, max_drawdown, optimize_var, top_principal_components,
};
use quantz_analytics::options::{MonteCarloPricer, OptionParams, OptionType};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_returns(periods: usize, assets: usize) -> DMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(42);
    let dist = Normal::new(0.0005, 0.01).unwrap();
    DMatrix::from_fn(periods, assets, |_, _| dist.sample(&mut rng))
}

fn create_prices(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(7);
    let dist = Normal::new(0.0002, 0.01).unwrap();
    let mut price = 100.0;
    (0..len)
        .map(|_| {
            price *= 1.0 + dist.sample(&mut rng);
            price
        })
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_max_drawdown(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_drawdown");

    for len in [252, 2_520, 25_200] {
        let prices = create_prices(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &prices, |b, prices| {
            b.iter(|| max_drawdown(black_box(prices)))
        });
    }
    group.finish();
}

fn bench_calculate_var(c: &mut Criterion) {
    let mut group = c.benchmark_group("historical_var");

    for len in [250, 1_000, 10_000] {
        let returns: Vec<f64> = create_returns(len, 1).iter().copied().collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &returns, |b, returns| {
            b.iter(|| calculate_var(black_box(returns), 0.99))
        });
    }
    group.finish();
}

fn bench_eigen(c: &mut Criterion) {
    let mut group = c.benchmark_group("eigen");

    for assets in [5, 20, 50] {
        let returns = create_returns(500, assets);
        group.bench_with_input(
            BenchmarkId::new("eigenportfolio", assets),
            &returns,
            |b, returns| b.iter(|| eigenportfolio(black_box(returns))),
        );
        group.bench_with_input(
            BenchmarkId::new("top_principal_components", assets),
            &returns,
            |b, returns| b.iter(|| top_principal_components(black_box(returns), 3.min(assets))),
        );
    }
    group.finish();
}

fn bench_monte_carlo(c: &mut Criterion) {
    let params = OptionParams::new(100.0, 105.0, 1.0, 0.05, 0.2);

    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(20);

    for paths in [10_000, 100_000] {
        for antithetic in [false, true] {
            let pricer = MonteCarloPricer::new(
                MonteCarloConfig::new()
                    .with_num_simulations(paths)
                    .with_antithetic(antithetic),
            );
            let label = if antithetic { "antithetic" } else { "plain" };

            group.throughput(Throughput::Elements(paths as u64));
            group.bench_function(BenchmarkId::new(label, paths), |b| {
                let mut rng = StdRng::seed_from_u64(1);
                b.iter(|| pricer.price(OptionType::Call, black_box(&params), &mut rng))
            });
        }
    }
    group.finish();
}

fn bench_optimize_var(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize_var");
    group.sample_size(10);

    for assets in [3, 10] {
        let returns = create_returns(500, assets);
        group.bench_with_input(BenchmarkId::from_parameter(assets), &returns, |b, returns| {
            let mut rng = StdRng::seed_from_u64(3);
            b.iter(|| optimize_var(black_box(returns), 0.95, &mut rng))
        });
    }
    group.finish();
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(series, bench_max_drawdown, bench_calculate_var);

criterion_group!(portfolio, bench_eigen, bench_optimize_var);

criterion_group!(pricing, bench_monte_carlo);

criterion_main!(series, portfolio, pricing);

//! Criterion benchmarks for u-knapsack solvers.
//!
//! Uses seeded random instances with capacity at half the total weight,
//! the usual hard region for uncorrelated knapsack data.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_knapsack::dp::{DpConfig, DpSolver};
use u_knapsack::ga::{GaConfig, GaRunner};
use u_knapsack::greedy::GreedySolver;
use u_knapsack::repair::{improve, RepairConfig};
use u_knapsack::Instance;

fn random_instance(n: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let weights: Vec<f64> = (0..n).map(|_| f64::from(rng.random_range(1u32..=100))).collect();
    let values: Vec<f64> = (0..n).map(|_| f64::from(rng.random_range(1u32..=100))).collect();
    let capacity = weights.iter().sum::<f64>() / 2.0;
    Instance::new(weights, values, capacity).unwrap()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_dp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dp");
    group.sample_size(10);

    // Integer weights need no fractional scaling.
    let solver = DpSolver::new(DpConfig::default().with_scale(1));
    for &n in &[20, 100, 500] {
        let inst = random_instance(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &inst, |b, inst| {
            b.iter(|| black_box(solver.solve(black_box(inst))))
        });
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[100, 500, 2_000] {
        let inst = random_instance(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &inst, |b, inst| {
            b.iter(|| black_box(GreedySolver.solve(black_box(inst))))
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for (n, config) in [
        (20usize, GaConfig::fast()),
        (100, GaConfig::balanced()),
        (200, GaConfig::quality().with_generations(50)),
    ] {
        let inst = random_instance(n, 42);
        let config = config.with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(
                format!("p{}_g{}", config.population_size, config.generations),
                n,
            ),
            &(inst, config),
            |b, (inst, config)| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(inst), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_improve(c: &mut Criterion) {
    let mut group = c.benchmark_group("improve_all_ones");
    group.sample_size(10);

    let config = RepairConfig::default();
    for &n in &[20, 50, 100] {
        let inst = random_instance(n, 42);
        let raw = vec![1.0; n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &(inst, raw), |b, (inst, raw)| {
            b.iter(|| black_box(improve(black_box(raw), black_box(inst), &config)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dp, bench_greedy, bench_ga, bench_improve);
criterion_main!(benches);

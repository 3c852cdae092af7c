//! Benchmark for WalkSim stepping and Monte Carlo throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use walksim::core::types::{Bounds, WalkConfig};
use walksim::montecarlo::runner::{estimate_mean_distance, MonteCarloConfig};
use walksim::walk::direction::RngDirections;
use walksim::walk::engine::WalkEngine;

fn bench_stepping(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepping");

    for steps in [1_000usize, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("unbounded", steps), &steps, |b, &steps| {
            b.iter(|| {
                let mut walk = WalkEngine::new(WalkConfig::default());
                let mut src = RngDirections::new(StdRng::seed_from_u64(42));
                for _ in 0..steps {
                    walk.step(&mut src).unwrap();
                }
                black_box(walk.distance())
            })
        });

        group.bench_with_input(BenchmarkId::new("bounded", steps), &steps, |b, &steps| {
            let config = WalkConfig {
                bounds: Bounds::symmetric(20, 20, 20),
                bounds_enabled: true,
                loop_erased: false,
            };
            b.iter(|| {
                let mut walk = WalkEngine::new(config);
                let mut src = RngDirections::new(StdRng::seed_from_u64(42));
                for _ in 0..steps {
                    walk.step(&mut src).unwrap();
                }
                black_box(walk.distance())
            })
        });
    }

    group.finish();
}

fn bench_loop_erasure(c: &mut Criterion) {
    c.bench_function("loop_erased_10k_steps", |b| {
        b.iter(|| {
            let mut walk = WalkEngine::new(WalkConfig {
                loop_erased: true,
                ..WalkConfig::default()
            });
            let mut src = RngDirections::new(StdRng::seed_from_u64(42));
            for _ in 0..10_000 {
                walk.step(&mut src).unwrap();
                walk.check_loop();
                walk.consume_loop();
            }
            black_box(walk.erased_loop_count())
        })
    });
}

fn bench_monte_carlo(c: &mut Criterion) {
    c.bench_function("mean_distance_100_trials_1k_steps", |b| {
        let config = WalkConfig::default();
        let mc = MonteCarloConfig {
            trials: 100,
            seed: 42,
        };
        b.iter(|| black_box(estimate_mean_distance(1_000, &config, &mc).unwrap()))
    });
}

criterion_group!(benches, bench_stepping, bench_loop_erasure, bench_monte_carlo);
criterion_main!(benches);

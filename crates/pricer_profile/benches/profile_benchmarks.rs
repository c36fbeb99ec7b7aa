//! Criterion benchmarks for the price-risk profile engine.
//!
//! Benchmarks cover:
//! - Box-Muller normal generation
//! - Path simulation (single stream and seeded blocks) at 1K / 10K / 100K paths
//! - Terminal statistics, histogram and percentile bands

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_profile::analysis::{build_histogram, build_percentile_bands, compute_stats};
use pricer_profile::rng::{fill_normal, PricerRng};
use pricer_profile::simulation::PathSimulator;
use pricer_profile::{SimulationConfig, SimulationRequest};

fn request(path_count: usize) -> SimulationRequest {
    SimulationRequest::new(100.0, 95.0, 30, 0.30, 0.045).with_path_count(path_count)
}

fn bench_normal_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng_generation");

    for n_samples in [1_000, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::new("box_muller_batch", n_samples),
            &n_samples,
            |b, &n| {
                let mut rng = PricerRng::from_seed(42);
                let mut buffer = vec![0.0; n];
                b.iter(|| {
                    fill_normal(&mut rng, &mut buffer);
                    black_box(buffer.iter().sum::<f64>())
                });
            },
        );
    }

    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulation");
    group.sample_size(20);

    for n_paths in [1_000, 10_000, 100_000] {
        let req = request(n_paths);

        group.bench_with_input(
            BenchmarkId::new("single_stream", n_paths),
            &req,
            |b, req| {
                let simulator = PathSimulator::default();
                b.iter(|| {
                    let mut rng = PricerRng::from_seed(42);
                    black_box(simulator.simulate(req, &mut rng).unwrap())
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("seeded_blocks", n_paths), &req, |b, req| {
            let config = SimulationConfig::builder().seed(42).build().unwrap();
            let simulator = PathSimulator::new(config);
            b.iter(|| black_box(simulator.simulate_seeded(req).unwrap()));
        });
    }

    group.finish();
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    let req = request(100_000);
    let result = PathSimulator::default()
        .simulate(&req, &mut PricerRng::from_seed(7))
        .unwrap();

    group.bench_function("compute_stats_100k", |b| {
        b.iter(|| black_box(compute_stats(&result, req.strike).unwrap()))
    });
    group.bench_function("histogram_100k", |b| {
        b.iter(|| black_box(build_histogram(result.terminal_prices(), 50).unwrap()))
    });
    group.bench_function("percentile_bands_100x31", |b| {
        b.iter(|| black_box(build_percentile_bands(result.sampled_paths()).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normal_generation,
    bench_simulation,
    bench_analysis
);
criterion_main!(benches);

//! Compare sequential vs parallel trial sweep run times.
//!
//! Run with: `cargo bench --bench monte_carlo_parallel`
//! Or quick comparison: `cargo run --bin benchmark_parallel_speedup` (see src/bin)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nimrod::scenario::ScenarioParams;
use nimrod::sim::{run, run_parallel};

fn bench_monte_carlo_sequential_vs_parallel(c: &mut Criterion) {
    let seed = 42u64;
    let params = ScenarioParams {
        num_simulations: 50_000,
        ..ScenarioParams::default()
    };

    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(20);
    group.measurement_time(std::time::Duration::from_secs(10));

    group.bench_function("sequential", |b| {
        b.iter(|| black_box(run(&params, seed).expect("sequential run")));
    });

    group.bench_function("parallel", |b| {
        b.iter(|| black_box(run_parallel(&params, seed).expect("parallel run")));
    });

    group.finish();
}

criterion_group!(benches, bench_monte_carlo_sequential_vs_parallel);
criterion_main!(benches);

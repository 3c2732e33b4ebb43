//! Sampler throughput benchmarks: trials per second for one draw chain and
//! for a full run.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use nimrod::scenario::ScenarioParams;
use nimrod::sim::{run, sample_trial, Rng};

fn bench_simulator(c: &mut Criterion) {
    let params = ScenarioParams::default();

    let mut group = c.benchmark_group("simulator");
    group.sample_size(100);

    group.throughput(Throughput::Elements(1));
    group.bench_function("sample_trial", |b| {
        let mut trial = 0u64;
        b.iter(|| {
            trial += 1;
            let mut rng = Rng::for_trial(7, trial);
            black_box(sample_trial(&params, trial as usize, &mut rng).expect("trial sample"))
        });
    });

    let run_params = ScenarioParams {
        num_simulations: 1000,
        ..ScenarioParams::default()
    };
    group.throughput(Throughput::Elements(1000));
    group.bench_function("run_1000_trials", |b| {
        b.iter(|| black_box(run(&run_params, 7).expect("run")));
    });

    group.finish();
}

criterion_group!(benches, bench_simulator);
criterion_main!(benches);

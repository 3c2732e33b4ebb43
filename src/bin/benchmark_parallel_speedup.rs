//! Run the trial sweep once sequentially and once in parallel, then print
//! timings and speedup.
//!
//! Usage: cargo run --release --bin benchmark_parallel_speedup

use std::time::Instant;

use nimrod::scenario::ScenarioParams;
use nimrod::sim::{run, run_parallel};

fn main() {
    let seed = 12345u64;
    let params = ScenarioParams {
        num_simulations: 200_000,
        ..ScenarioParams::default()
    };
    let n = params.num_simulations;

    println!("Monte Carlo: {n} trials (seed={seed})");
    println!();

    // Sequential
    let t0 = Instant::now();
    let records_seq = run(&params, seed).expect("sequential run");
    let elapsed_seq = t0.elapsed();
    let seq_ms = elapsed_seq.as_secs_f64() * 1000.0;
    println!(
        "Sequential:  {:.2} ms  ({:.1} trials/s)",
        seq_ms,
        n as f64 / elapsed_seq.as_secs_f64()
    );

    // Parallel
    let t0 = Instant::now();
    let records_par = run_parallel(&params, seed).expect("parallel run");
    let elapsed_par = t0.elapsed();
    let par_ms = elapsed_par.as_secs_f64() * 1000.0;
    println!(
        "Parallel:    {:.2} ms  ({:.1} trials/s)",
        par_ms,
        n as f64 / elapsed_par.as_secs_f64()
    );

    let speedup = seq_ms / par_ms;
    println!();
    println!("Speedup:     {speedup:.2}x faster (parallel vs sequential)");

    assert_eq!(records_seq.len(), records_par.len());
    // Sanity: per-trial seed streams make the two paths bit-identical
    for (i, (a, b)) in records_seq.iter().zip(records_par.iter()).enumerate() {
        assert_eq!(a, b, "trial {i} differs between sequential and parallel");
    }
    println!("(Records match sequential vs parallel)");
}

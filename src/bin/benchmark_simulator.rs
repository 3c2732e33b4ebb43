//! Run sampler benchmark and optionally append one line to a log file for
//! trend tracking.
//!
//! Usage:
//!   cargo run --release --bin benchmark_simulator
//!   cargo run --release --bin benchmark_simulator -- --log
//!
//! --log  Append one row to benchmark_log.csv (date, trials_per_sec, trials_per_min, draws_per_trial).

use std::fs::OpenOptions;
use std::io::Write;
use std::time::Instant;

use nimrod::scenario::ScenarioParams;
use nimrod::sim::{sample_trial, Rng};

/// Random draws consumed by one trial of the default scenario: 4 trial-level
/// scalars plus 14 per-field draws.
const DRAWS_PER_TRIAL: u32 = 18;

fn main() {
    let log = std::env::args().any(|a| a == "--log");

    let params = ScenarioParams::default();

    // Run for at least this long or this many trials
    const MIN_DURATION_MS: u64 = 2000;
    const MIN_TRIALS: u32 = 10_000;

    let start = Instant::now();
    let mut trials: u32 = 0;
    while start.elapsed().as_millis() < MIN_DURATION_MS as u128 || trials < MIN_TRIALS {
        let mut rng = Rng::for_trial(7, u64::from(trials));
        let _ = sample_trial(&params, trials as usize, &mut rng).expect("trial sample");
        trials += 1;
    }
    let elapsed_secs = start.elapsed().as_secs_f64();

    let trials_per_sec = f64::from(trials) / elapsed_secs;
    let trials_per_min = trials_per_sec * 60.0;

    println!("Sampler benchmark ({DRAWS_PER_TRIAL} draws/trial):");
    println!("  Trials:      {trials}");
    println!("  Duration:    {elapsed_secs:.2} s");
    println!("  Trials/s:    {trials_per_sec:.2}");
    println!("  Trials/min:  {trials_per_min:.2}");

    if log {
        let date = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
        let line = format!(
            "{date},{trials_per_sec:.4},{trials_per_min:.4},{DRAWS_PER_TRIAL}\n"
        );
        let path = "benchmark_log.csv";
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("open benchmark_log.csv for append");
        if file.metadata().map(|m| m.len() == 0).unwrap_or(true) {
            let _ = file.write_all(b"date,trials_per_sec,trials_per_min,draws_per_trial\n");
        }
        file.write_all(line.as_bytes())
            .expect("write benchmark_log.csv");
        file.flush().expect("flush benchmark_log.csv");
        println!("Appended to {path}");
    }
}

//! Command dispatch for the `nimrod` binary.
//!
//! The CLI is a consumer of the engine: it builds a validated scenario,
//! hands it to the run driver, and renders whatever comes back. Scenario
//! files are read here, never inside the engine.

use std::fs;

use serde::Serialize;

use crate::report::console::render_summary;
use crate::report::csv::export_records;
use crate::scenario::ScenarioParams;
use crate::sim::{run, run_parallel};
use crate::stats::{summarize, SummaryStatistics};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Simulate,
    Export,
    Validate,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("simulate") => Some(Command::Simulate),
        Some("export") => Some(Command::Export),
        Some("validate") => Some(Command::Validate),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Simulate) => handle_simulate(args),
        Some(Command::Export) => handle_export(args),
        Some(Command::Validate) => handle_validate(args),
        None => {
            eprintln!("usage: nimrod <simulate|export|validate>");
            2
        }
    }
}

#[derive(Debug, Serialize)]
struct SimulateReport {
    seed: u64,
    summary: SummaryStatistics,
}

fn handle_simulate(args: &[String]) -> i32 {
    let positionals = positional_args(args);
    let as_json = args.iter().any(|arg| arg == "--json");
    let sequential = args.iter().any(|arg| arg == "--sequential");

    let params = match scenario_from_args(args) {
        Ok(params) => params,
        Err(message) => {
            eprintln!("{message}");
            return 1;
        }
    };
    let params = ScenarioParams {
        num_simulations: parse_usize_arg(positionals.first().copied(), "trials", params.num_simulations),
        ..params
    };
    if let Err(err) = params.validate() {
        eprintln!("invalid scenario: {err}");
        return 1;
    }

    let seed = match positionals.get(1).copied() {
        Some(raw) => parse_u64_arg(Some(raw), "seed", 0),
        None => entropy_seed(),
    };

    let outcome = if sequential {
        run(&params, seed)
    } else {
        run_parallel(&params, seed)
    };
    let records = match outcome {
        Ok(records) => records,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            return 1;
        }
    };
    let summary = match summarize(&params, &records) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("summary failed: {err}");
            return 1;
        }
    };

    if as_json {
        match serde_json::to_string_pretty(&SimulateReport { seed, summary }) {
            Ok(payload) => println!("{payload}"),
            Err(err) => {
                eprintln!("failed to serialize simulation summary: {err}");
                return 1;
            }
        }
    } else {
        print!("{}", render_summary(&summary));
    }

    0
}

fn handle_export(args: &[String]) -> i32 {
    let positionals = positional_args(args);
    let Some(path) = positionals.first() else {
        eprintln!("usage: nimrod export <output.csv> [trials] [seed]");
        return 2;
    };

    let params = match scenario_from_args(args) {
        Ok(params) => params,
        Err(message) => {
            eprintln!("{message}");
            return 1;
        }
    };
    let params = ScenarioParams {
        num_simulations: parse_usize_arg(positionals.get(1).copied(), "trials", params.num_simulations),
        ..params
    };
    if let Err(err) = params.validate() {
        eprintln!("invalid scenario: {err}");
        return 1;
    }

    let seed = match positionals.get(2).copied() {
        Some(raw) => parse_u64_arg(Some(raw), "seed", 0),
        None => entropy_seed(),
    };

    let records = match run_parallel(&params, seed) {
        Ok(records) => records,
        Err(err) => {
            eprintln!("simulation failed: {err}");
            return 1;
        }
    };
    if let Err(err) = export_records(path, &records) {
        eprintln!("export failed: {err}");
        return 1;
    }

    println!(
        "export complete: trials={}, seed={}, path='{}'",
        records.len(),
        seed,
        path
    );
    0
}

fn handle_validate(args: &[String]) -> i32 {
    let Some(path) = args.get(2) else {
        eprintln!("usage: nimrod validate <scenario.json>");
        return 2;
    };

    let params = match load_scenario(path) {
        Ok(params) => params,
        Err(message) => {
            eprintln!("validation failed: {message}");
            return 1;
        }
    };
    match params.validate() {
        Ok(()) => {
            println!("validation passed: {path}");
            0
        }
        Err(err) => {
            eprintln!("validation failed: {err}");
            1
        }
    }
}

/// Load a scenario bundle from JSON. Fields absent from the file keep their
/// defaults; validation is the caller's step.
pub fn load_scenario(path: &str) -> Result<ScenarioParams, String> {
    let raw =
        fs::read_to_string(path).map_err(|err| format!("unable to read '{path}': {err}"))?;
    serde_json::from_str(&raw).map_err(|err| format!("unable to parse json '{path}': {err}"))
}

fn scenario_from_args(args: &[String]) -> Result<ScenarioParams, String> {
    match flag_value(args, "--scenario") {
        Some(path) => load_scenario(path),
        None => Ok(ScenarioParams::default()),
    }
}

/// Positional operands after the command, with flags and flag values removed.
fn positional_args(args: &[String]) -> Vec<&String> {
    let mut positionals = Vec::new();
    let mut skip_next = false;
    for arg in args.iter().skip(2) {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--scenario" {
            skip_next = true;
            continue;
        }
        if arg.starts_with("--") {
            continue;
        }
        positionals.push(arg);
    }
    positionals
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a String> {
    args.iter()
        .position(|arg| arg == name)
        .and_then(|index| args.get(index + 1))
}

/// Seed from OS entropy when the caller does not pin one.
fn entropy_seed() -> u64 {
    let mut buf = [0u8; 8];
    match getrandom::getrandom(&mut buf) {
        Ok(()) => u64::from_le_bytes(buf),
        Err(_) => 0x9e3779b97f4a7c15,
    }
}

fn parse_usize_arg(raw: Option<&String>, name: &str, default: usize) -> usize {
    raw.and_then(|value| value.parse::<usize>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

fn parse_u64_arg(raw: Option<&String>, name: &str, default: u64) -> u64 {
    raw.and_then(|value| value.parse::<u64>().ok())
        .unwrap_or_else(|| {
            if let Some(value) = raw {
                eprintln!("invalid {name} '{value}', defaulting to {default}");
            }
            default
        })
}

//! nimrod: Monte Carlo outcome simulator for hostage-rescue raids.
//!
//! The engine draws one complete set of random variables per trial
//! (raid timing, rescue progress, casualties, building layout), derives the
//! adjusted rescue time from them, and aggregates many independent trials
//! into summary statistics. Reporting and export read the collected records
//! through named fields only and never influence simulation semantics.
//!
//! Module map:
//! - [scenario]: validated, immutable scenario parameters
//! - [sim]: RNG, distribution draws, per-trial sampler, run driver
//! - [stats]: summary statistics over a completed run
//! - [parallel]: Rayon pool sizing and batch splitting
//! - [report]: console summary and CSV export collaborators
//! - [cli]: command dispatch for the `nimrod` binary

pub mod cli;
pub mod parallel;
pub mod report;
pub mod scenario;
pub mod sim;
pub mod stats;

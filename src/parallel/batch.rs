//! Batch distribution for parallel simulation.
//!
//! Splits a trial sweep into batches for parallel execution or progress
//! reporting. The run driver hands one trial per parallel task; this module
//! provides helpers for batch boundaries and pool-scoped runs.

use crate::parallel::pool::WorkerPool;
use crate::scenario::ScenarioParams;
use crate::sim::distributions::SamplingError;
use crate::sim::runner::run_parallel;
use crate::sim::trial::TrialRecord;

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; later batches may be smaller.
///
/// # Example
/// ```
/// # use nimrod::parallel::batch_ranges;
/// let ranges = batch_ranges(100, 4);
/// assert_eq!(ranges, vec![(0, 25), (25, 50), (50, 75), (75, 100)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let size = base + if i < remainder { 1 } else { 0 };
        let end = start + size;
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Run the full trial sweep on `pool`. This is a convenience that calls
/// [run_parallel] inside [WorkerPool::install] when a custom worker count is
/// set.
pub fn run_trial_batches(
    params: &ScenarioParams,
    seed: u64,
    pool: &WorkerPool,
) -> Result<Vec<TrialRecord>, SamplingError> {
    pool.install(|| run_parallel(params, seed))
}

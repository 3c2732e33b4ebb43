//! Rayon thread pool configuration for simulation workloads.
//!
//! Use [WorkerPool::install] to run a parallel trial sweep with a fixed
//! number of threads, or rely on Rayon's default (all CPU cores). Thread
//! count only affects wall-clock time: trial records are derived from
//! per-trial seed streams and come out identical either way.

use rayon::ThreadPoolBuilder;

/// Configures how many worker threads are used for parallel trial execution.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use Rayon default (num_cpus).
    pub workers: usize,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self {
            workers: 0, // Rayon default
        }
    }
}

impl WorkerPool {
    /// Use all available CPU cores (Rayon default).
    pub fn default_workers() -> Self {
        Self::default()
    }

    /// Use exactly `n` worker threads.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Run a closure on a thread pool with this worker count. If
    /// [workers](WorkerPool::workers) is 0, uses the global Rayon pool (all
    /// cores). Otherwise builds a temporary pool with that many threads.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            f()
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .build()
                .expect("Rayon thread pool");
            pool.install(f)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::ScenarioParams;
    use crate::sim::run_parallel;

    #[test]
    fn pinned_pool_matches_default_pool_output() {
        let params = ScenarioParams {
            num_simulations: 64,
            ..ScenarioParams::default()
        };
        let default_pool = WorkerPool::default_workers()
            .install(|| run_parallel(&params, 3))
            .unwrap();
        let two_workers = WorkerPool::with_workers(2)
            .install(|| run_parallel(&params, 3))
            .unwrap();
        assert_eq!(default_pool, two_workers);
    }
}

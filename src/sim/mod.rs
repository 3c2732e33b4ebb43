pub mod distributions;
pub mod rng;
pub mod runner;
pub mod sampler;
pub mod trial;

pub use distributions::SamplingError;
pub use rng::Rng;
pub use runner::{run, run_parallel};
pub use sampler::{adjusted_rescue_time, sample_trial};
pub use trial::{TrialRecord, NUMERIC_FIELDS};

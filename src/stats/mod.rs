pub mod summary;

pub use summary::{summarize, EmptyInputError, SummaryStatistics};

//! # Pair-Sum Bench
//!
//! Times three strategies for the pair-sum problem over datasets of growing
//! size and projects the quadratic one past the size where running it stops
//! being practical.

pub mod collector;
pub mod config;
pub mod dataset;
pub mod error;
pub mod extrapolate;
pub mod pair_sum;
pub mod result;
pub mod utils;

pub use collector::ResultCollector;
pub use config::BenchConfig;
pub use error::{BenchError, ContractViolation, LoadError};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::collector::ResultCollector;
    pub use crate::config::BenchConfig;
    pub use crate::dataset::{CsvDirSource, Dataset, DatasetSource, InMemorySource, SyntheticSource};
    pub use crate::extrapolate::{CalibrationPoint, Extrapolator};
    pub use crate::pair_sum::{brute_force, hash_table, sort_pointers};
    pub use crate::result::{BruteForceTiming, ResultTable, RunReport, TimingResult};
}

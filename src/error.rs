//! Error types for the benchmark.
//!
//! Load failures are recoverable and only cost the affected dataset its row.
//! Contract violations mean one of the strategies is wrong and stop the run.

use std::path::PathBuf;

use thiserror::Error;

/// A dataset could not be turned into a usable integer sequence.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: '{content}' is not an integer")]
    Parse { line: usize, content: String },

    #[error("no '{0}' column in header")]
    MissingColumn(&'static str),

    #[error("dataset is empty")]
    Empty,

    #[error("declared size {declared} but {actual} values were read")]
    SizeMismatch { declared: usize, actual: usize },

    #[error("size {0} was already processed")]
    DuplicateSize(usize),

    #[error("{0}")]
    Unavailable(String),
}

/// A strategy returned something that cannot be a correct answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("{algorithm} returned ({i}, {j}) at size {size}: indices not strictly increasing")]
    IndexOrder {
        algorithm: &'static str,
        size: usize,
        i: usize,
        j: usize,
    },

    #[error("{algorithm} returned ({i}, {j}) at size {size}: index out of bounds")]
    OutOfBounds {
        algorithm: &'static str,
        size: usize,
        i: usize,
        j: usize,
    },

    #[error("{algorithm} returned ({i}, {j}) at size {size}: values do not sum to {target}")]
    WrongSum {
        algorithm: &'static str,
        size: usize,
        i: usize,
        j: usize,
        target: i64,
    },

    #[error("{algorithm} found={found} disagrees with {reference} found={reference_found} at size {size}")]
    Disagreement {
        algorithm: &'static str,
        reference: &'static str,
        size: usize,
        found: bool,
        reference_found: bool,
    },
}

impl ContractViolation {
    /// Name of the strategy at fault.
    pub fn algorithm(&self) -> &'static str {
        match self {
            Self::IndexOrder { algorithm, .. }
            | Self::OutOfBounds { algorithm, .. }
            | Self::WrongSum { algorithm, .. }
            | Self::Disagreement { algorithm, .. } => algorithm,
        }
    }

    /// Size of the dataset the violation happened on.
    pub fn size(&self) -> usize {
        match self {
            Self::IndexOrder { size, .. }
            | Self::OutOfBounds { size, .. }
            | Self::WrongSum { size, .. }
            | Self::Disagreement { size, .. } => *size,
        }
    }
}

/// Errors that end a run.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),

    #[error("dataset discovery failed: {0}")]
    Discovery(#[source] LoadError),

    #[error("cannot write {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Benchmark configuration.

use std::path::{Path, PathBuf};

use crate::extrapolate::DEFAULT_CUTOFF;

/// Target used when none is given. Chosen far outside generated data so no
/// pair hits it and every strategy does its worst-case traversal.
pub const DEFAULT_TARGET: i64 = -999_999;

/// Configuration for a benchmark run.
///
/// # Example
///
/// ```
/// use pair_sum_bench::BenchConfig;
///
/// let config = BenchConfig::new()
///     .with_cutoff(5_000)
///     .with_target(-1)
///     .with_csv_output("results.csv");
///
/// assert_eq!(config.cutoff(), 5_000);
/// assert_eq!(config.target(), -1);
/// assert!(config.pin_cpu());
/// ```
#[derive(Debug, Clone)]
pub struct BenchConfig {
    cutoff: usize,
    target: i64,
    pin_cpu: bool,
    csv_output_path: Option<PathBuf>,
}

impl BenchConfig {
    /// Creates a configuration with defaults:
    /// - cutoff: 10 000
    /// - target: -999 999
    /// - pin_cpu: true
    pub fn new() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            target: DEFAULT_TARGET,
            pin_cpu: true,
            csv_output_path: None,
        }
    }

    /// Sets the largest size for which brute force is measured.
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Sets the target used for every dataset.
    pub fn with_target(mut self, target: i64) -> Self {
        self.target = target;
        self
    }

    /// Enables or disables CPU pinning during measurements.
    pub fn with_pin_cpu(mut self, pin: bool) -> Self {
        self.pin_cpu = pin;
        self
    }

    /// Sets the output path for CSV export.
    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn pin_cpu(&self) -> bool {
        self.pin_cpu
    }

    pub fn csv_output_path(&self) -> Option<&Path> {
        self.csv_output_path.as_deref()
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! Drives the benchmark over every dataset of a source.
//!
//! The run is one ascending pass. The only state carried from one dataset to
//! the next is the optional calibration point, threaded explicitly through
//! [`ResultCollector::process`], so a run is a fold over the sorted datasets.

use tracing::{debug, error, info, warn};

use crate::config::BenchConfig;
use crate::dataset::{Dataset, DatasetHandle, DatasetSource};
use crate::error::{BenchError, ContractViolation, LoadError};
use crate::extrapolate::{CalibrationPoint, Extrapolator};
use crate::pair_sum::{
    brute_force_variant, check_agreement, check_outcome, hash_table_variant,
    sort_pointers_variant, PairSumFn,
};
use crate::result::{BruteForceTiming, RunReport, SkippedDataset, TimingResult};
use crate::utils::timer::{time_once, Timed, TimingConfig};
use crate::utils::VariantInfo;

/// Runs the three strategies over a source and builds the result table.
pub struct ResultCollector {
    target: i64,
    extrapolator: Extrapolator,
    timing: TimingConfig,
    brute_force: VariantInfo<PairSumFn>,
    sort_pointers: VariantInfo<PairSumFn>,
    hash_table: VariantInfo<PairSumFn>,
}

impl ResultCollector {
    pub fn new(config: &BenchConfig) -> Self {
        Self {
            target: config.target(),
            extrapolator: Extrapolator::new(config.cutoff()),
            timing: TimingConfig {
                pin_cpu: config.pin_cpu(),
            },
            brute_force: brute_force_variant(),
            sort_pointers: sort_pointers_variant(),
            hash_table: hash_table_variant(),
        }
    }

    /// Replace the strategies, in brute force, sort + pointers, hash table order.
    pub fn with_variants(
        mut self,
        brute_force: VariantInfo<PairSumFn>,
        sort_pointers: VariantInfo<PairSumFn>,
        hash_table: VariantInfo<PairSumFn>,
    ) -> Self {
        self.brute_force = brute_force;
        self.sort_pointers = sort_pointers;
        self.hash_table = hash_table;
        self
    }

    /// Process every dataset of `source` in ascending declared size.
    ///
    /// Datasets that fail to load are recorded in `skipped` and the run goes
    /// on. A contract violation aborts the run. Failing to list the datasets
    /// at all is also fatal.
    pub fn run<S>(&self, source: &S) -> Result<RunReport, BenchError>
    where
        S: DatasetSource + ?Sized,
    {
        let handles = source.discover().map_err(BenchError::Discovery)?;
        let handles = ordered(handles);
        info!(
            datasets = handles.len(),
            cutoff = self.extrapolator.cutoff(),
            target = self.target,
            "benchmark started"
        );

        let mut report = RunReport::default();
        let mut calibration = None;

        for handle in handles {
            let dataset = match self.load(source, &handle, &report) {
                Ok(dataset) => dataset,
                Err(reason) => {
                    warn!(dataset = %handle.label, size = handle.declared_size, %reason, "dataset skipped");
                    report.skipped.push(SkippedDataset {
                        label: handle.label,
                        declared_size: handle.declared_size,
                        reason,
                    });
                    continue;
                }
            };

            let (row, next) = match self.process(calibration, &dataset) {
                Ok(step) => step,
                Err(violation) => {
                    error!(
                        algorithm = violation.algorithm(),
                        size = violation.size(),
                        dataset = %handle.label,
                        "{violation}"
                    );
                    return Err(violation.into());
                }
            };
            calibration = next;
            let size = row.size;
            if !report.table.push(row) {
                error!(size, dataset = %handle.label, "row out of size order, dropped");
                debug_assert!(false, "row for size {size} out of order");
            }
        }

        report.final_calibration = calibration;
        info!(
            rows = report.table.len(),
            skipped = report.skipped.len(),
            "benchmark finished"
        );
        Ok(report)
    }

    fn load<S>(
        &self,
        source: &S,
        handle: &DatasetHandle,
        report: &RunReport,
    ) -> Result<Dataset, LoadError>
    where
        S: DatasetSource + ?Sized,
    {
        if report.table.get(handle.declared_size).is_some() {
            return Err(LoadError::DuplicateSize(handle.declared_size));
        }
        info!(dataset = %handle.label, size = handle.declared_size, "loading dataset");
        source.load(handle)
    }

    /// Time all strategies on one dataset.
    ///
    /// Returns the row and the calibration point to carry into the next
    /// dataset, which must be larger than this one.
    pub fn process(
        &self,
        calibration: Option<CalibrationPoint>,
        dataset: &Dataset,
    ) -> Result<(TimingResult, Option<CalibrationPoint>), ContractViolation> {
        let nums = dataset.values();
        let size = dataset.size();

        let (brute_force, brute_outcome, next) = if self.extrapolator.is_measurable(size) {
            let timed = self.measure(&self.brute_force, nums)?;
            let next = self.extrapolator.calibrate(calibration, size, timed.seconds());
            (BruteForceTiming::Measured(timed.seconds()), Some(timed.outcome), next)
        } else {
            (self.estimate(calibration.as_ref(), size), None, calibration)
        };

        let sort_pointers = self.measure(&self.sort_pointers, nums)?;
        let hash_table = self.measure(&self.hash_table, nums)?;

        let reference = (self.hash_table.name, hash_table.outcome);
        check_agreement(size, reference, (self.sort_pointers.name, sort_pointers.outcome))?;
        if let Some(outcome) = brute_outcome {
            check_agreement(size, reference, (self.brute_force.name, outcome))?;
        }

        let pair_found = hash_table.outcome.is_some();
        if pair_found {
            warn!(size, target = self.target, "a pair sums to the target, timings are not worst case");
        }

        let row = TimingResult {
            size,
            brute_force,
            sort_pointers_seconds: sort_pointers.seconds(),
            hash_table_seconds: hash_table.seconds(),
            pair_found,
        };
        info!(
            size,
            brute_force = ?row.brute_force_seconds(),
            estimated = row.brute_force_is_estimated(),
            sort_pointers = row.sort_pointers_seconds,
            hash_table = row.hash_table_seconds,
            "dataset done"
        );
        Ok((row, next))
    }

    fn measure(
        &self,
        variant: &VariantInfo<PairSumFn>,
        nums: &[i64],
    ) -> Result<Timed, ContractViolation> {
        let timed = time_once(variant, nums, self.target, &self.timing);
        check_outcome(variant.name, nums, self.target, timed.outcome)?;
        debug!(algorithm = variant.name, size = nums.len(), seconds = timed.seconds(), "measured");
        Ok(timed)
    }

    fn estimate(&self, calibration: Option<&CalibrationPoint>, size: usize) -> BruteForceTiming {
        match (calibration, self.extrapolator.estimate(calibration, size)) {
            (Some(basis), Some(seconds)) => {
                debug!(
                    size,
                    seconds,
                    reference_size = basis.reference_size,
                    reference_time = basis.reference_time,
                    "brute force estimated"
                );
                BruteForceTiming::Estimated {
                    seconds,
                    basis: *basis,
                }
            }
            _ => {
                warn!(
                    size,
                    cutoff = self.extrapolator.cutoff(),
                    "no measured size at or below the cutoff, brute force estimate unavailable"
                );
                BruteForceTiming::Unavailable
            }
        }
    }
}

/// Sort handles by declared size. The sort is stable, so among equal sizes the
/// first discovered is loaded first.
pub fn ordered(mut handles: Vec<DatasetHandle>) -> Vec<DatasetHandle> {
    handles.sort_by_key(|h| h.declared_size);
    handles
}

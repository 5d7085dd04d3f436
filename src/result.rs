//! Result table types.

use crate::error::LoadError;
use crate::extrapolate::CalibrationPoint;

/// Brute-force cell of a result row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BruteForceTiming {
    /// Run directly (size at or below the cutoff).
    Measured(f64),
    /// Projected from `basis` (size above the cutoff).
    Estimated { seconds: f64, basis: CalibrationPoint },
    /// Above the cutoff with no measurement to project from.
    Unavailable,
}

impl BruteForceTiming {
    pub fn seconds(&self) -> Option<f64> {
        match self {
            Self::Measured(s) => Some(*s),
            Self::Estimated { seconds, .. } => Some(*seconds),
            Self::Unavailable => None,
        }
    }

    /// True for every over-cutoff cell, including unavailable ones.
    pub fn is_estimated(&self) -> bool {
        !matches!(self, Self::Measured(_))
    }
}

/// One row of the result table.
#[derive(Clone, Debug, PartialEq)]
pub struct TimingResult {
    pub size: usize,
    pub brute_force: BruteForceTiming,
    pub sort_pointers_seconds: f64,
    pub hash_table_seconds: f64,
    /// Whether a pair summing to the target exists in this dataset.
    pub pair_found: bool,
}

impl TimingResult {
    pub fn brute_force_seconds(&self) -> Option<f64> {
        self.brute_force.seconds()
    }

    pub fn brute_force_is_estimated(&self) -> bool {
        self.brute_force.is_estimated()
    }
}

/// Rows in strictly ascending size order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultTable {
    rows: Vec<TimingResult>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row. Returns `false` and leaves the table unchanged when the
    /// row's size is not larger than the last one.
    pub fn push(&mut self, row: TimingResult) -> bool {
        if self.rows.last().is_some_and(|last| last.size >= row.size) {
            return false;
        }
        self.rows.push(row);
        true
    }

    pub fn rows(&self) -> &[TimingResult] {
        &self.rows
    }

    pub fn get(&self, size: usize) -> Option<&TimingResult> {
        self.rows
            .binary_search_by_key(&size, |r| r.size)
            .ok()
            .map(|idx| &self.rows[idx])
    }

    pub fn sizes(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.size).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A dataset that produced no row.
#[derive(Debug)]
pub struct SkippedDataset {
    pub label: String,
    pub declared_size: usize,
    pub reason: LoadError,
}

/// Everything a run produces.
#[derive(Debug, Default)]
pub struct RunReport {
    pub table: ResultTable,
    pub skipped: Vec<SkippedDataset>,
    /// Calibration state after the last dataset.
    pub final_calibration: Option<CalibrationPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(size: usize) -> TimingResult {
        TimingResult {
            size,
            brute_force: BruteForceTiming::Measured(0.1),
            sort_pointers_seconds: 0.01,
            hash_table_seconds: 0.001,
            pair_found: false,
        }
    }

    #[test]
    fn test_table_rejects_out_of_order_and_duplicates() {
        let mut table = ResultTable::new();
        assert!(table.push(row(100)));
        assert!(table.push(row(1000)));
        assert!(!table.push(row(1000)));
        assert!(!table.push(row(500)));
        assert_eq!(table.sizes(), vec![100, 1000]);
        assert_eq!(table.get(1000).map(|r| r.size), Some(1000));
        assert!(table.get(500).is_none());
    }

    #[test]
    fn test_brute_force_cell_accessors() {
        let basis = CalibrationPoint::new(10, 1.0);
        assert!(!BruteForceTiming::Measured(1.0).is_estimated());
        assert_eq!(BruteForceTiming::Measured(1.0).seconds(), Some(1.0));

        let est = BruteForceTiming::Estimated { seconds: 4.0, basis };
        assert!(est.is_estimated());
        assert_eq!(est.seconds(), Some(4.0));

        assert!(BruteForceTiming::Unavailable.is_estimated());
        assert_eq!(BruteForceTiming::Unavailable.seconds(), None);
    }
}

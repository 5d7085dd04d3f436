//! Quadratic extrapolation of brute-force running time.
//!
//! Above the cutoff the brute-force strategy is not run. Its time is projected
//! from the largest size that was actually measured:
//!
//! `estimated(n) = reference_time * (n / reference_size)²`

use tracing::debug;

/// Default largest size for which brute force is measured.
pub const DEFAULT_CUTOFF: usize = 10_000;

/// A measured brute-force timing used as the anchor for estimates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationPoint {
    pub reference_size: usize,
    pub reference_time: f64,
}

impl CalibrationPoint {
    pub fn new(reference_size: usize, reference_time: f64) -> Self {
        Self {
            reference_size,
            reference_time,
        }
    }

    /// Project the running time at `size` from this point.
    ///
    /// # Example
    /// ```
    /// use pair_sum_bench::extrapolate::CalibrationPoint;
    ///
    /// let point = CalibrationPoint::new(1000, 2.0);
    /// assert!((point.estimate(4000) - 32.0).abs() < 1e-9);
    /// ```
    pub fn estimate(&self, size: usize) -> f64 {
        let ratio = size as f64 / self.reference_size as f64;
        self.reference_time * ratio * ratio
    }
}

/// Decides between measuring and estimating, and carries the rule for
/// replacing the calibration point.
#[derive(Clone, Copy, Debug)]
pub struct Extrapolator {
    cutoff: usize,
}

impl Extrapolator {
    pub fn new(cutoff: usize) -> Self {
        Self { cutoff }
    }

    pub fn cutoff(&self) -> usize {
        self.cutoff
    }

    /// Whether brute force is run directly at `size`.
    pub fn is_measurable(&self, size: usize) -> bool {
        size <= self.cutoff
    }

    /// Fold a new measurement into the calibration state.
    ///
    /// Sizes arrive in ascending order, so a measured size replaces the
    /// previous point only when it is larger. Over-cutoff sizes and zero
    /// sizes never become calibration points.
    pub fn calibrate(
        &self,
        current: Option<CalibrationPoint>,
        size: usize,
        seconds: f64,
    ) -> Option<CalibrationPoint> {
        if size == 0 || !self.is_measurable(size) {
            return current;
        }
        match current {
            Some(point) if point.reference_size >= size => Some(point),
            _ => {
                debug!(reference_size = size, reference_time = seconds, "calibration updated");
                Some(CalibrationPoint::new(size, seconds))
            }
        }
    }

    /// Estimate brute-force time at `size`, or `None` when nothing has been
    /// measured yet.
    pub fn estimate(&self, calibration: Option<&CalibrationPoint>, size: usize) -> Option<f64> {
        calibration.map(|point| point.estimate(size))
    }
}

impl Default for Extrapolator {
    fn default() -> Self {
        Self::new(DEFAULT_CUTOFF)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rel_close(actual: f64, expected: f64) {
        let rel = ((actual - expected) / expected).abs();
        assert!(rel <= 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_quadratic_estimate() {
        let point = CalibrationPoint::new(1000, 2.0);
        assert_rel_close(point.estimate(4000), 32.0);
        assert_rel_close(point.estimate(1000), 2.0);
        assert_rel_close(point.estimate(500), 0.5);
    }

    #[test]
    fn test_estimate_unavailable_without_calibration() {
        let ex = Extrapolator::default();
        assert_eq!(ex.estimate(None, 50_000), None);
    }

    #[test]
    fn test_calibration_only_grows() {
        let ex = Extrapolator::new(10_000);

        let point = ex.calibrate(None, 100, 0.001);
        assert_eq!(point, Some(CalibrationPoint::new(100, 0.001)));

        let point = ex.calibrate(point, 5_000, 0.2);
        assert_eq!(point, Some(CalibrationPoint::new(5_000, 0.2)));

        // smaller and over-cutoff sizes leave it alone
        assert_eq!(ex.calibrate(point, 200, 9.0), point);
        assert_eq!(ex.calibrate(point, 20_000, 9.0), point);
    }

    #[test]
    fn test_cutoff_is_inclusive() {
        let ex = Extrapolator::new(10_000);
        assert!(ex.is_measurable(10_000));
        assert!(!ex.is_measurable(10_001));
        assert_eq!(ex.cutoff(), 10_000);
    }
}

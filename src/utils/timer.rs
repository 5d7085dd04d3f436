//! Single-shot wall-clock timing of one strategy on one dataset.
//!
//! Each (strategy, dataset) pair is run exactly once: no warmup, no repeats,
//! no summary statistic. Sizes in a run span several orders of magnitude and
//! the quadratic strategy makes repetition expensive, so the single sample is
//! the measurement. Expect run-to-run noise on small sizes.

use std::hint::black_box;
use std::time::{Duration, Instant};

use super::cpu_affinity::CpuPinGuard;
use super::VariantInfo;
use crate::pair_sum::PairSumFn;

/// Configuration for a single measurement.
#[derive(Clone, Copy, Debug)]
pub struct TimingConfig {
    /// Pin the thread to its current core for the duration of the call.
    pub pin_cpu: bool,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self { pin_cpu: true }
    }
}

/// Outcome of one timed invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timed {
    pub elapsed: Duration,
    pub outcome: Option<(usize, usize)>,
}

impl Timed {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Time one call of `variant` on `nums` with a monotonic clock.
pub fn time_once(
    variant: &VariantInfo<PairSumFn>,
    nums: &[i64],
    target: i64,
    config: &TimingConfig,
) -> Timed {
    let func = variant.function;
    let _pin = CpuPinGuard::when(config.pin_cpu);

    let start = Instant::now();
    let outcome = black_box(func(black_box(nums), black_box(target)));
    let elapsed = start.elapsed();

    Timed { elapsed, outcome }
}

//! Utility modules for timing and presenting results.

pub mod cpu_affinity;
pub mod export;
pub mod timer;
pub mod tui;

pub use cpu_affinity::CpuPinGuard;
pub use export::export_csv;
pub use timer::{time_once, Timed, TimingConfig};

/// A named implementation of an algorithm.
/// Generic over F which is the function signature.
#[derive(Clone, Copy, Debug)]
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "brute_force")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}

//! Thread pinning while a single invocation is timed.
//!
//! A timed run can take seconds for the quadratic strategy; letting the
//! scheduler migrate the thread mid-run adds cache refill noise to the one
//! sample we take. On Linux the thread is pinned to the core it is running on
//! and the previous mask is restored when the guard drops. Elsewhere the guard
//! does nothing.

#[cfg(target_os = "linux")]
mod platform {
    /// Affinity mask saved before pinning.
    pub struct SavedMask(libc::cpu_set_t);

    pub fn current_cpu() -> Option<usize> {
        // SAFETY: sched_getcpu takes no arguments and only reads kernel state.
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn save() -> Option<SavedMask> {
        // SAFETY: cpu_set_t is a plain bitmask, all-zero is a valid value, and
        // the pointer/size pair describes that local for the whole call.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            let rc = libc::sched_getaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &mut set);
            (rc == 0).then_some(SavedMask(set))
        }
    }

    pub fn pin(core: usize) -> bool {
        // SAFETY: as in `save`; CPU_SET only writes inside the local set.
        unsafe {
            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core, &mut set);
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
        }
    }

    pub fn restore(saved: &SavedMask) -> bool {
        // SAFETY: the mask came from sched_getaffinity for this thread.
        unsafe {
            libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &saved.0) == 0
        }
    }
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub struct SavedMask;

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn save() -> Option<SavedMask> {
        None
    }

    pub fn pin(_core: usize) -> bool {
        false
    }

    pub fn restore(_saved: &SavedMask) -> bool {
        true
    }
}

/// Pins the current thread on creation and restores its affinity on drop.
///
/// Failing to pin is not an error: the guard is simply inactive and the
/// measurement runs unpinned.
///
/// # Example
/// ```
/// use pair_sum_bench::utils::CpuPinGuard;
///
/// {
///     let pin = CpuPinGuard::new();
///     if let Some(core) = pin.core_id() {
///         println!("timing on core {core}");
///     }
/// } // affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned: Option<(usize, platform::SavedMask)>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is currently running on.
    pub fn new() -> Self {
        let pinned = platform::current_cpu().and_then(|core| {
            let saved = platform::save()?;
            platform::pin(core).then_some((core, saved))
        });
        if pinned.is_none() {
            tracing::trace!("cpu pinning unavailable, timing unpinned");
        }
        Self { pinned }
    }

    /// A guard that never pins.
    pub fn disabled() -> Self {
        Self { pinned: None }
    }

    /// Pin only when `enabled` is set.
    pub fn when(enabled: bool) -> Self {
        if enabled {
            Self::new()
        } else {
            Self::disabled()
        }
    }

    /// Core the thread is pinned to, if pinning succeeded.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned.as_ref().map(|(core, _)| *core)
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let Some((core, saved)) = self.pinned.take() {
            if !platform::restore(&saved) {
                tracing::warn!(core, "failed to restore cpu affinity");
            }
        }
    }
}

//! CPU affinity pinning for stable timing runs.
//!
//! A thread that migrates between cores mid-measurement mixes cache state
//! and clock domains into the numbers. The harness pins the measuring
//! thread to the core it is already running on for the duration of a sweep
//! and restores the previous affinity afterwards.
//!
//! Real affinity control is implemented for Linux via libc; other
//! platforms get an inert guard.

// ============================================================================
// Linux implementation using libc
// ============================================================================

#[cfg(target_os = "linux")]
mod platform {
    use std::cell::RefCell;

    thread_local! {
        static ORIGINAL_AFFINITY: RefCell<Option<libc::cpu_set_t>> = const { RefCell::new(None) };
    }

    /// Get the core the calling thread is currently running on
    pub fn current_core() -> Option<usize> {
        let core = unsafe { libc::sched_getcpu() };
        if core >= 0 {
            Some(core as usize)
        } else {
            None
        }
    }

    /// Save the current affinity mask, then pin the thread to `core_id`
    pub fn pin(core_id: usize) -> bool {
        unsafe {
            let mut original: libc::cpu_set_t = std::mem::zeroed();
            if libc::sched_getaffinity(
                0,
                std::mem::size_of::<libc::cpu_set_t>(),
                &mut original,
            ) != 0
            {
                return false;
            }

            let mut set: libc::cpu_set_t = std::mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            if libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) != 0 {
                return false;
            }

            ORIGINAL_AFFINITY.with(|cell| {
                *cell.borrow_mut() = Some(original);
            });
            true
        }
    }

    /// Restore the affinity mask saved by `pin`
    pub fn unpin() -> bool {
        ORIGINAL_AFFINITY.with(|cell| {
            if let Some(set) = cell.borrow_mut().take() {
                unsafe {
                    libc::sched_setaffinity(0, std::mem::size_of::<libc::cpu_set_t>(), &set) == 0
                }
            } else {
                false
            }
        })
    }
}

// ============================================================================
// Fallback for platforms without affinity control
// ============================================================================

#[cfg(not(target_os = "linux"))]
mod platform {
    pub fn current_core() -> Option<usize> {
        None
    }

    pub fn pin(_core_id: usize) -> bool {
        false
    }

    pub fn unpin() -> bool {
        false
    }
}

// ============================================================================
// RAII Guard
// ============================================================================

/// RAII guard for CPU pinning - pins on creation, unpins on drop.
///
/// Dropping the guard restores the previous affinity even if the
/// measurement code panics.
///
/// # Example
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new(); // Thread pinned
///     // ... timing measurements ...
/// } // Previous affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
}

impl CpuPinGuard {
    /// Pin the calling thread to the core it is currently running on.
    ///
    /// Pinning to the current core avoids forcing a migration just to
    /// start measuring. If pinning fails the guard is inert and dropping
    /// it does nothing.
    pub fn new() -> Self {
        let pinned_core = match platform::current_core() {
            Some(core) if platform::pin(core) => Some(core),
            _ => None,
        };
        Self { pinned_core }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    /// Check if the thread was successfully pinned.
    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if self.pinned_core.is_some() {
            platform::unpin();
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

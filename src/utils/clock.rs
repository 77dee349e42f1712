//! Timing source for the benchmark harness.
//!
//! By default (`thread_cpu` feature), batches are timed with the per-thread
//! CPU-time clock, which excludes time the thread spends descheduled. Use
//! `--features use_time` or `--no-default-features` to time with the
//! monotonic wall clock instead. Non-unix targets always use the wall clock.

// ============================================================================
// Measurement abstraction: thread CPU time or wall time depending on features
// ============================================================================
//
// Use thread CPU time if: unix AND thread_cpu is enabled AND use_time is NOT
// Use wall-clock time if: use_time is enabled OR thread_cpu is disabled OR non-unix

/// Measurement value type - nanoseconds of thread CPU time (u64) or Duration
#[cfg(all(unix, feature = "thread_cpu", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(unix), not(feature = "thread_cpu"), feature = "use_time"))]
pub type Measurement = std::time::Duration;

/// Read the current measurement (thread CPU time or wall time)
#[cfg(all(unix, feature = "thread_cpu", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Measurement {
    unsafe {
        let mut ts: libc::timespec = std::mem::zeroed();
        let rc = libc::clock_gettime(libc::CLOCK_THREAD_CPUTIME_ID, &mut ts);
        debug_assert_eq!(rc, 0, "clock_gettime(CLOCK_THREAD_CPUTIME_ID) failed");
        ts.tv_sec as u64 * 1_000_000_000 + ts.tv_nsec as u64
    }
}

#[cfg(any(not(unix), not(feature = "thread_cpu"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> std::time::Instant {
    std::time::Instant::now()
}

/// Calculate elapsed measurement
#[cfg(all(unix, feature = "thread_cpu", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Measurement) -> Measurement {
    now().saturating_sub(start)
}

#[cfg(any(not(unix), not(feature = "thread_cpu"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: std::time::Instant) -> Measurement {
    start.elapsed()
}

/// Convert a measurement to seconds for reporting
#[cfg(all(unix, feature = "thread_cpu", not(feature = "use_time")))]
pub fn to_seconds(m: Measurement) -> f64 {
    m as f64 / 1_000_000_000.0
}

#[cfg(any(not(unix), not(feature = "thread_cpu"), feature = "use_time"))]
pub fn to_seconds(m: Measurement) -> f64 {
    m.as_secs_f64()
}

/// Get the name of the active clock source
#[cfg(all(unix, feature = "thread_cpu", not(feature = "use_time")))]
pub const fn source_name() -> &'static str {
    "thread CPU time"
}

#[cfg(any(not(unix), not(feature = "thread_cpu"), feature = "use_time"))]
pub const fn source_name() -> &'static str {
    "wall-clock time"
}

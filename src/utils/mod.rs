//! Utility modules for benchmarking and measurement.

pub mod bench;
pub mod clock;
pub mod cpu_affinity;
pub mod sweep;

// Re-export commonly used items
pub use bench::{generate_pairs, generate_sequence, rng_from_seed, shuffle_copy, SamplePair};
pub use cpu_affinity::CpuPinGuard;
pub use sweep::{measure_batch, run_sweep, warm_up, SweepConfig, SweepReport, SweepRow};

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "hash", "sort")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}

//! # Perm-Dist-Bench
//!
//! Distance measures for permutations and sequences of doubles, with drivers
//! that benchmark alternative implementations of the same measure.

pub mod drivers;
pub mod permutations;
pub mod registry;
pub mod sequences;
pub mod tui;
pub mod utils;

/// Re-export the sweep harness, the main entry point for timing runs
pub use utils::sweep::{run_sweep, SweepConfig, SweepReport, SweepRow};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::permutations::{all_measures, Permutation, PermutationDistance};
    pub use crate::registry::{build_registry, Driver, DriverRegistry, RunOptions};
    pub use crate::sequences::kendall_tau::{kendall_tau_hash, kendall_tau_sort};
    pub use crate::utils::sweep::{run_sweep, SweepConfig, SweepReport, SweepRow};
}

//! Benchmark entry points for the Kendall tau sequence distance.

use super::code::{kendall_tau_hash, kendall_tau_sort};
use crate::utils::sweep::{run_sweep, SweepConfig, SweepReport, SweepRow};

/// Sweep both variants across the configured grid of input shapes.
///
/// Streams one row per (length, alphabet size) point through `on_row` and
/// returns the full report, whose `check` field is zero exactly when the
/// variants agreed on every input.
pub fn run_comparison(config: &SweepConfig, on_row: impl FnMut(&SweepRow)) -> SweepReport {
    let mut hash = kendall_tau_hash;
    let mut sort = kendall_tau_sort;
    run_sweep(config, &mut hash, &mut sort, on_row)
}

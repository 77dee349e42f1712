//! Replication driver: times the two Kendall tau sequence distance
//! variants against each other across the full input grid.

use crate::registry::{Driver, RunOptions};
use crate::sequences::kendall_tau::bench::run_comparison;
use crate::utils::sweep::SweepRow;

/// Prints one row per (length, alphabet) point with mean seconds per call
/// for each variant, then a final `Done` line whose value is zero exactly
/// when the variants agreed on every input.
pub struct CompareDriver;

impl Driver for CompareDriver {
    fn name(&self) -> &'static str {
        "compare"
    }

    fn description(&self) -> &'static str {
        "Times the hash- and sort-based Kendall tau sequence distance across a length/alphabet sweep"
    }

    fn run(&self, opts: &RunOptions) -> Result<(), String> {
        if !opts.positionals.is_empty() {
            return Err("compare takes no positional arguments".to_string());
        }
        opts.sweep.validate()?;

        println!(
            "{:>8}\t{:>8}\t{:>8}\t{:>8}",
            "L", "Alphabet", "TimeHash", "TimeSort"
        );
        let report = run_comparison(&opts.sweep, |row| {
            println!("{}", format_row(row));
        });
        println!("Done {}", report.check);

        Ok(())
    }
}

/// One report row, widths matching the header.
fn format_row(row: &SweepRow) -> String {
    format!(
        "{:>8}\t{:>8}\t{:>8.6}\t{:>8.6}",
        row.length, row.alphabet_size, row.secs_a, row.secs_b
    )
}

//! Distance-table driver: every permutation of a short length against a
//! random reference, one column per distance measure.

use crate::permutations::distance::all_measures;
use crate::permutations::perm::Permutation;
use crate::registry::{Driver, RunOptions};
use crate::utils::bench::rng_from_seed;

const DEFAULT_LENGTH: usize = 4;
/// The table has LENGTH! rows, so anything beyond this is a mistake.
const MAX_LENGTH: usize = 8;

/// Tabulates each measure's distance from a random reference permutation
/// to every permutation of the same length, then prints a legend mapping
/// the column labels to measure names.
pub struct TableDriver;

impl Driver for TableDriver {
    fn name(&self) -> &'static str {
        "table"
    }

    fn description(&self) -> &'static str {
        "Tabulates every distance measure over all permutations of a short length"
    }

    fn run(&self, opts: &RunOptions) -> Result<(), String> {
        if opts.positionals.len() > 1 {
            return Err("table takes at most one positional argument: LENGTH".to_string());
        }
        let length = opts.positionals.first().copied().unwrap_or(DEFAULT_LENGTH);
        if length == 0 || length > MAX_LENGTH {
            return Err(format!(
                "LENGTH must be between 1 and {MAX_LENGTH}: the table has LENGTH! rows"
            ));
        }

        let mut rng = rng_from_seed(opts.seed);
        let measures = all_measures();
        let reference = Permutation::random(length, &mut rng);

        print!("Permutation");
        for i in 0..measures.len() {
            print!("\td{i}");
        }
        println!();

        for q in Permutation::iter_all(length) {
            print!("{q}");
            for measure in &measures {
                print!("\t{:>3}", measure.distance(&reference, &q));
            }
            println!();
        }
        println!();

        println!("Distance measures used above");
        for (i, measure) in measures.iter().enumerate() {
            println!("d{}: {}", i, measure.name());
        }

        Ok(())
    }
}

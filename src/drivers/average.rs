//! Average-distance driver: means of every distance measure over pairs
//! of random permutations.

use crate::permutations::distance::all_measures;
use crate::permutations::perm::Permutation;
use crate::registry::{Driver, RunOptions};
use crate::utils::bench::rng_from_seed;

const DEFAULT_LENGTH: usize = 100;
const DEFAULT_SAMPLES: usize = 100;

/// For every measure, averages the distance between freshly generated
/// pairs of random permutations.
///
/// Random permutations tend to be very dissimilar, so expect averages
/// near each measure's maximum: a random permutation has one fixed point
/// on average regardless of length, for example, so the exact match
/// average lands around `LENGTH - 1`.
pub struct AverageDriver;

impl Driver for AverageDriver {
    fn name(&self) -> &'static str {
        "average"
    }

    fn description(&self) -> &'static str {
        "Averages every distance measure over pairs of random permutations"
    }

    fn run(&self, opts: &RunOptions) -> Result<(), String> {
        if opts.positionals.len() > 2 {
            return Err(
                "average takes at most two positional arguments: LENGTH and SAMPLES".to_string(),
            );
        }
        let length = opts.positionals.first().copied().unwrap_or(DEFAULT_LENGTH);
        let samples = opts.positionals.get(1).copied().unwrap_or(DEFAULT_SAMPLES);
        if samples == 0 {
            return Err("SAMPLES must be at least 1".to_string());
        }

        let mut rng = rng_from_seed(opts.seed);

        println!("Computes the average distance between pairs of random permutations.");
        println!("Permutation length: {length}");
        println!("Number of samples used in averages: {samples}");
        println!();

        for measure in all_measures() {
            let mut sum = 0u64;
            for _ in 0..samples {
                let p1 = Permutation::random(length, &mut rng);
                let p2 = Permutation::random(length, &mut rng);
                sum += measure.distance(&p1, &p2);
            }
            let average = sum as f64 / samples as f64;
            println!("{}: {:.2}", measure.name(), average);
        }

        Ok(())
    }
}

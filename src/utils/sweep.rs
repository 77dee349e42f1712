//! Sweep benchmark harness for comparing two sequence distance variants.
//!
//! A sweep walks a grid of input shapes: sequence lengths doubling from a
//! minimum to a maximum, crossed with a list of alphabet sizes. At each
//! point it generates a batch of sample pairs, times each variant over the
//! whole batch with a single clock bracket, and reports mean per-call
//! seconds. Both variants run on identical inputs.
//!
//! Before anything is timed, both variants are warmed up on inputs of a
//! fixed moderate shape and those inputs are dropped, so allocator and
//! code-cache state from the warm-up cannot leak into the measurements.

use std::hint::black_box;

use rand::Rng;

use crate::utils::bench::{generate_pairs, rng_from_seed, SamplePair};
use crate::utils::clock;
use crate::utils::cpu_affinity::CpuPinGuard;

/// Sequence length of warm-up inputs.
pub const WARMUP_LENGTH: usize = 1000;
/// Alphabet size of warm-up inputs.
pub const WARMUP_ALPHABET: usize = 100;

/// Configuration for a comparison sweep.
///
/// The defaults reproduce the published comparison: lengths doubling from
/// 256 to 131072, nine alphabet sizes, 100 pairs per point.
#[derive(Clone, Debug)]
pub struct SweepConfig {
    /// Smallest sequence length; lengths double from here.
    pub min_len: usize,
    /// Largest sequence length (inclusive).
    pub max_len: usize,
    /// Alphabet sizes enumerated at every length, in the order given.
    pub alphabet_sizes: Vec<usize>,
    /// Sample pairs generated and measured per grid point.
    pub trials: usize,
    /// Sample pairs exercised (then dropped) before timing starts.
    pub warmup_pairs: usize,
    /// Seed for input generation; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_len: 256,
            max_len: 131_072,
            alphabet_sizes: vec![1, 4, 16, 64, 256, 1024, 4096, 16_384, 65_536],
            trials: 100,
            warmup_pairs: 10_000,
            seed: None,
        }
    }
}

impl SweepConfig {
    /// Check the configuration for shapes that cannot be swept.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_len == 0 {
            return Err("minimum length must be at least 1".to_string());
        }
        if self.max_len < self.min_len {
            return Err(format!(
                "maximum length {} is below minimum length {}",
                self.max_len, self.min_len
            ));
        }
        if self.trials == 0 {
            return Err("trials must be at least 1".to_string());
        }
        if self.alphabet_sizes.is_empty() {
            return Err("alphabet size list must not be empty".to_string());
        }
        if self.alphabet_sizes.contains(&0) {
            return Err("alphabet sizes must be at least 1".to_string());
        }
        Ok(())
    }

    /// Lengths visited by the sweep: `min_len` doubling up to `max_len`.
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths = Vec::new();
        let mut len = self.min_len;
        while len <= self.max_len {
            lengths.push(len);
            match len.checked_mul(2) {
                Some(next) => len = next,
                None => break,
            }
        }
        lengths
    }
}

/// One report row: mean per-call seconds for both variants at a grid point.
#[derive(Clone, Debug)]
pub struct SweepRow {
    pub length: usize,
    pub alphabet_size: usize,
    /// Mean seconds per call for the first variant.
    pub secs_a: f64,
    /// Mean seconds per call for the second variant.
    pub secs_b: f64,
}

/// A completed sweep: every row plus the functional-agreement check.
#[derive(Clone, Debug)]
pub struct SweepReport {
    pub rows: Vec<SweepRow>,
    /// Accumulated difference between the two variants' distance sums.
    /// Zero exactly when they agreed on every input.
    pub check: i64,
}

/// Run both variants over warm-up inputs of a fixed moderate shape.
///
/// The warm-up inputs are dropped before this returns, so nothing timed
/// later can alias them. Returns the combined distance sum through
/// `black_box` so the calls cannot be optimized away.
pub fn warm_up<R: Rng>(
    variant_a: &mut dyn FnMut(&[f64], &[f64]) -> u64,
    variant_b: &mut dyn FnMut(&[f64], &[f64]) -> u64,
    pair_count: usize,
    rng: &mut R,
) -> u64 {
    let pairs = generate_pairs(pair_count, WARMUP_LENGTH, WARMUP_ALPHABET, rng);
    let (_, sum_a) = measure_batch(variant_a, &pairs);
    let (_, sum_b) = measure_batch(variant_b, &pairs);
    // Free the warm-up inputs before anything is timed
    drop(pairs);
    black_box(sum_a.wrapping_add(sum_b))
}

/// Time one variant over a whole batch with a single clock bracket.
///
/// Returns the elapsed measurement and the wrapping sum of every call's
/// result. The sum both feeds the agreement check and anchors the calls
/// against dead-code elimination.
pub fn measure_batch(
    variant: &mut dyn FnMut(&[f64], &[f64]) -> u64,
    pairs: &[SamplePair],
) -> (clock::Measurement, u64) {
    let start = clock::now();
    let mut sum = 0u64;
    for pair in pairs {
        sum = sum.wrapping_add(variant(&pair.original, &pair.shuffled));
    }
    let elapsed = clock::elapsed(start);
    (elapsed, black_box(sum))
}

/// Run a full comparison sweep, streaming one row per grid point.
///
/// Points are visited in row-major order: lengths outermost, alphabet
/// sizes innermost. `on_row` is called as soon as a point is measured, so
/// long sweeps produce output incrementally.
///
/// # Panics
/// Panics if the configuration fails [`SweepConfig::validate`]. Callers
/// that assemble configurations from user input should validate first.
pub fn run_sweep(
    config: &SweepConfig,
    variant_a: &mut dyn FnMut(&[f64], &[f64]) -> u64,
    variant_b: &mut dyn FnMut(&[f64], &[f64]) -> u64,
    mut on_row: impl FnMut(&SweepRow),
) -> SweepReport {
    if let Err(msg) = config.validate() {
        panic!("invalid sweep configuration: {msg}");
    }

    let mut rng = rng_from_seed(config.seed);

    // Pin for the whole sweep; the guard restores affinity on drop
    let _pin = CpuPinGuard::new();

    if config.warmup_pairs > 0 {
        warm_up(variant_a, variant_b, config.warmup_pairs, &mut rng);
    }

    let mut rows = Vec::new();
    let mut check: i64 = 0;

    for length in config.lengths() {
        for &alphabet_size in &config.alphabet_sizes {
            let pairs = generate_pairs(config.trials, length, alphabet_size, &mut rng);

            let (elapsed_a, sum_a) = measure_batch(variant_a, &pairs);
            let (elapsed_b, sum_b) = measure_batch(variant_b, &pairs);

            let row = SweepRow {
                length,
                alphabet_size,
                secs_a: clock::to_seconds(elapsed_a) / config.trials as f64,
                secs_b: clock::to_seconds(elapsed_b) / config.trials as f64,
            };
            check = check.wrapping_add(sum_a.wrapping_sub(sum_b) as i64);

            on_row(&row);
            rows.push(row);
        }
    }

    SweepReport { rows, check }
}

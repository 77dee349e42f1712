//! # Kendall Tau Sequence Distance
//!
//! The Kendall tau sequence distance counts the pairwise ordering
//! disagreements between two sequences holding the same multiset of
//! elements. Equal elements are paired by occurrence rank (the i-th copy
//! of a value in one sequence corresponds to the i-th copy in the other),
//! which induces an index mapping whose inversion count is the distance.
//!
//! Two O(n log n) variants build that mapping differently:
//!
//! - **hash**: buckets element positions in a hash map keyed by value
//! - **sort**: pairs the k-th smallest elements of both sequences via a
//!   stable sort
//!
//! Both then count inversions with the same merge-sort counter, so any
//! runtime difference between them comes from the pairing step alone.

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::utils::bench::{generate_pairs, rng_from_seed};

/// Check that every variant agrees with the reference variant on a
/// battery of generated inputs.
///
/// The battery mixes tiny, odd-length and duplicate-heavy shapes; it is
/// seeded, so a failure reproduces exactly.
pub fn verify() -> Result<(), String> {
    let variants = code::available_variants();
    let reference = variants
        .first()
        .ok_or("No variants registered for kendall_tau")?;

    let mut rng = rng_from_seed(Some(0xD15E));
    let shapes: [(usize, usize); 6] = [(1, 1), (2, 1), (16, 4), (100, 16), (257, 3), (512, 64)];

    for &(length, alphabet_size) in &shapes {
        let pairs = generate_pairs(4, length, alphabet_size, &mut rng);
        for pair in &pairs {
            let expected = (reference.function)(&pair.original, &pair.shuffled);

            for variant in &variants[1..] {
                let result = (variant.function)(&pair.original, &pair.shuffled);
                if result != expected {
                    return Err(format!(
                        "Variant '{}' failed verification at length {} alphabet {}. Expected {}, got {}",
                        variant.name, length, alphabet_size, expected, result
                    ));
                }
            }
        }
    }

    Ok(())
}

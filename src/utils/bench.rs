//! Benchmark input generation.
//!
//! Every driver works on sequences of whole-valued `f64` elements drawn
//! from a bounded alphabet, paired with shuffled copies. Generation is
//! reproducible when a seed is supplied and OS-seeded otherwise.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One measurement input: a generated sequence and a shuffled copy of it.
///
/// The copy holds the same multiset of elements in a different order, so
/// any sequence distance over the pair is well defined.
#[derive(Clone, Debug)]
pub struct SamplePair {
    pub original: Vec<f64>,
    pub shuffled: Vec<f64>,
}

/// Build a generator from an optional seed.
///
/// `Some(seed)` gives a reproducible stream; `None` seeds from the OS.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generate a sequence of `length` elements drawn uniformly from
/// `{0, 1, ..., alphabet_size - 1}`, stored as `f64`.
///
/// Alphabet size 1 produces an all-zero sequence; elements repeat whenever
/// `length` exceeds `alphabet_size`.
///
/// # Panics
/// Panics if `alphabet_size` is zero.
pub fn generate_sequence<R: Rng>(length: usize, alphabet_size: usize, rng: &mut R) -> Vec<f64> {
    assert!(alphabet_size >= 1, "alphabet size must be at least 1");
    (0..length)
        .map(|_| rng.random_range(0..alphabet_size) as f64)
        .collect()
}

/// Return a shuffled copy of `sequence`, leaving the original untouched.
///
/// Fisher-Yates over the copy: every position `i` from the back swaps with
/// a uniform index in `0..=i`, so all orderings are equally likely.
pub fn shuffle_copy<R: Rng>(sequence: &[f64], rng: &mut R) -> Vec<f64> {
    let mut shuffled = sequence.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.random_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}

/// Generate `count` sample pairs with the given shape.
pub fn generate_pairs<R: Rng>(
    count: usize,
    length: usize,
    alphabet_size: usize,
    rng: &mut R,
) -> Vec<SamplePair> {
    (0..count)
        .map(|_| {
            let original = generate_sequence(length, alphabet_size, rng);
            let shuffled = shuffle_copy(&original, rng);
            SamplePair { original, shuffled }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_elements_are_whole_and_in_range() {
        let mut rng = rng_from_seed(Some(42));
        let sequence = generate_sequence(500, 16, &mut rng);

        assert_eq!(sequence.len(), 500);
        for &x in &sequence {
            assert!(x >= 0.0 && x < 16.0, "element {x} out of range");
            assert_eq!(x, x.trunc(), "element {x} is not a whole value");
        }
    }

    #[test]
    fn test_alphabet_of_one_is_all_zero() {
        let mut rng = rng_from_seed(Some(42));
        let sequence = generate_sequence(100, 1, &mut rng);
        assert!(sequence.iter().all(|&x| x == 0.0));
    }

    #[test]
    #[should_panic(expected = "alphabet size must be at least 1")]
    fn test_zero_alphabet_panics() {
        let mut rng = rng_from_seed(Some(42));
        generate_sequence(10, 0, &mut rng);
    }

    #[test]
    fn test_shuffle_preserves_multiset_and_source() {
        let mut rng = rng_from_seed(Some(7));
        let original = generate_sequence(200, 8, &mut rng);
        let before = original.clone();

        let shuffled = shuffle_copy(&original, &mut rng);

        assert_eq!(original, before, "source sequence must not change");
        assert_eq!(shuffled.len(), original.len());

        let mut a = original.clone();
        let mut b = shuffled.clone();
        a.sort_by(f64::total_cmp);
        b.sort_by(f64::total_cmp);
        assert_eq!(a, b, "shuffle must keep the same multiset");
    }

    #[test]
    fn test_shuffle_handles_tiny_inputs() {
        let mut rng = rng_from_seed(Some(3));
        assert!(shuffle_copy(&[], &mut rng).is_empty());
        assert_eq!(shuffle_copy(&[5.0], &mut rng), vec![5.0]);
    }

    #[test]
    fn test_shuffle_is_statistically_uniform() {
        // All 24 orderings of 4 distinct elements should come up equally
        // often. Chi-square with df = 23: the 0.999 critical value is 49.7;
        // allow a little slack since the seed is fixed. A biased shuffle
        // (e.g. swapping with 0..i instead of 0..=i) lands in the hundreds.
        const TRIALS: usize = 24_000;
        let base = [0.0, 1.0, 2.0, 3.0];
        let mut counts = [0u64; 24];
        let mut rng = rng_from_seed(Some(0x5EED));

        for _ in 0..TRIALS {
            let shuffled = shuffle_copy(&base, &mut rng);
            counts[ordering_index(&shuffled)] += 1;
        }

        let expected = (TRIALS / 24) as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(
            chi2 < 55.0,
            "chi-square statistic {chi2} is too large for a uniform shuffle"
        );
    }

    /// Index of an ordering of distinct elements in the factorial number
    /// system, in `0..len!`.
    fn ordering_index(sequence: &[f64]) -> usize {
        let mut index = 0;
        for i in 0..sequence.len() {
            let smaller_after = sequence[i + 1..].iter().filter(|&&x| x < sequence[i]).count();
            index = index * (sequence.len() - i) + smaller_after;
        }
        index
    }

    #[test]
    fn test_pair_generation_shape() {
        let mut rng = rng_from_seed(Some(11));
        let pairs = generate_pairs(5, 64, 4, &mut rng);

        assert_eq!(pairs.len(), 5);
        for pair in &pairs {
            assert_eq!(pair.original.len(), 64);
            assert_eq!(pair.shuffled.len(), 64);

            let mut a = pair.original.clone();
            let mut b = pair.shuffled.clone();
            a.sort_by(f64::total_cmp);
            b.sort_by(f64::total_cmp);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut rng1 = rng_from_seed(Some(99));
        let mut rng2 = rng_from_seed(Some(99));

        let a = generate_sequence(50, 16, &mut rng1);
        let b = generate_sequence(50, 16, &mut rng2);
        assert_eq!(a, b);

        assert_eq!(shuffle_copy(&a, &mut rng1), shuffle_copy(&b, &mut rng2));
    }
}

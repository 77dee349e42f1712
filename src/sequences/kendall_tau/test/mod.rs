//! Test utilities for the Kendall tau sequence distance implementations.

#[cfg(test)]
mod tests {
    use crate::sequences::kendall_tau::bench::run_comparison;
    use crate::sequences::kendall_tau::code::*;
    use crate::utils::bench::{generate_pairs, generate_sequence, rng_from_seed, shuffle_copy};
    use crate::utils::sweep::SweepConfig;
    use rand::Rng;

    /// O(n^2) reference for sequences of distinct elements: a pair is
    /// discordant when `b` orders it opposite to `a`.
    fn brute_force_distance_distinct(a: &[f64], b: &[f64]) -> u64 {
        let position_in_b = |value: f64| b.iter().position(|&x| x == value).unwrap();
        let mut count = 0u64;
        for i in 0..a.len() {
            for j in (i + 1)..a.len() {
                if position_in_b(a[i]) > position_in_b(a[j]) {
                    count += 1;
                }
            }
        }
        count
    }

    fn brute_force_inversions(values: &[usize]) -> u64 {
        let mut count = 0u64;
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                if values[i] > values[j] {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_identical_sequences_have_zero_distance() {
        let mut rng = rng_from_seed(Some(1));
        for &(length, alphabet_size) in &[(1usize, 1usize), (10, 3), (100, 100), (257, 5)] {
            let sequence = generate_sequence(length, alphabet_size, &mut rng);
            assert_eq!(kendall_tau_hash(&sequence, &sequence), 0);
            assert_eq!(kendall_tau_sort(&sequence, &sequence), 0);
        }
    }

    #[test]
    fn test_empty_and_single_element() {
        assert_eq!(kendall_tau_hash(&[], &[]), 0);
        assert_eq!(kendall_tau_sort(&[], &[]), 0);
        assert_eq!(kendall_tau_hash(&[4.0], &[4.0]), 0);
        assert_eq!(kendall_tau_sort(&[4.0], &[4.0]), 0);
    }

    #[test]
    fn test_reversal_of_distinct_elements() {
        let a: Vec<f64> = (0..10).map(|i| i as f64).collect();
        let b: Vec<f64> = a.iter().rev().copied().collect();
        // Every one of the 10*9/2 pairs is discordant
        assert_eq!(kendall_tau_hash(&a, &b), 45);
        assert_eq!(kendall_tau_sort(&a, &b), 45);
    }

    #[test]
    fn test_adjacent_swap_is_distance_one() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [1.0, 3.0, 2.0, 4.0];
        assert_eq!(kendall_tau_hash(&a, &b), 1);
        assert_eq!(kendall_tau_sort(&a, &b), 1);
    }

    #[test]
    fn test_known_distance_with_duplicates() {
        // Occurrence pairing maps a onto positions [1, 2, 3, 0] of b,
        // which has exactly 3 inversions
        let a = [2.0, 4.0, 2.0, 6.0];
        let b = [6.0, 2.0, 4.0, 2.0];
        assert_eq!(kendall_tau_hash(&a, &b), 3);
        assert_eq!(kendall_tau_sort(&a, &b), 3);
    }

    #[test]
    fn test_constant_sequences_have_zero_distance() {
        let a = vec![0.0; 50];
        let b = vec![0.0; 50];
        assert_eq!(kendall_tau_hash(&a, &b), 0);
        assert_eq!(kendall_tau_sort(&a, &b), 0);
    }

    #[test]
    fn test_non_integer_elements_are_supported() {
        let a = [0.5, -3.25, 0.5, 11.75, -3.25];
        let b = [11.75, 0.5, -3.25, -3.25, 0.5];
        let distance = kendall_tau_hash(&a, &b);
        assert_eq!(distance, kendall_tau_sort(&a, &b));
        assert!(distance > 0);
    }

    #[test]
    fn test_variants_agree_on_generated_inputs() {
        let mut rng = rng_from_seed(Some(0xAB));
        let shapes = [
            (1usize, 1usize),
            (2, 2),
            (33, 1),
            (100, 4),
            (256, 16),
            (500, 1000),
        ];
        for &(length, alphabet_size) in &shapes {
            for pair in generate_pairs(3, length, alphabet_size, &mut rng) {
                let hash = kendall_tau_hash(&pair.original, &pair.shuffled);
                let sort = kendall_tau_sort(&pair.original, &pair.shuffled);
                assert_eq!(
                    hash, sort,
                    "variants disagree at length {length} alphabet {alphabet_size}"
                );
            }
        }
    }

    #[test]
    fn test_variants_match_brute_force_on_distinct_elements() {
        let mut rng = rng_from_seed(Some(21));
        for n in [2usize, 3, 8, 17, 40] {
            let base: Vec<f64> = (0..n).map(|i| i as f64).collect();
            let a = shuffle_copy(&base, &mut rng);
            let b = shuffle_copy(&base, &mut rng);

            let expected = brute_force_distance_distinct(&a, &b);
            assert_eq!(kendall_tau_hash(&a, &b), expected, "hash, n = {n}");
            assert_eq!(kendall_tau_sort(&a, &b), expected, "sort, n = {n}");
        }
    }

    #[test]
    fn test_inversion_counter_known_values() {
        assert_eq!(count_inversions(&mut []), 0);
        assert_eq!(count_inversions(&mut [7]), 0);
        assert_eq!(count_inversions(&mut [0, 1, 2, 3]), 0);
        assert_eq!(count_inversions(&mut [3, 2, 1, 0]), 6);
        assert_eq!(count_inversions(&mut [1, 0, 3, 2]), 2);
        // Equal values are concordant
        assert_eq!(count_inversions(&mut [5, 5, 5]), 0);
    }

    #[test]
    fn test_inversion_counter_matches_brute_force() {
        let mut rng = rng_from_seed(Some(33));
        for n in [0usize, 1, 2, 5, 64, 257] {
            let values: Vec<usize> = (0..n).map(|_| rng.random_range(0..10usize)).collect();
            let expected = brute_force_inversions(&values);
            let mut scratch = values.clone();
            assert_eq!(count_inversions(&mut scratch), expected, "n = {n}");
        }
    }

    #[test]
    fn test_inversion_counter_sorts_its_input() {
        let mut values = [4usize, 1, 3, 0, 2];
        count_inversions(&mut values);
        assert_eq!(values, [0, 1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_hash_rejects_mismatched_lengths() {
        kendall_tau_hash(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_sort_rejects_mismatched_lengths() {
        kendall_tau_sort(&[1.0, 2.0], &[1.0]);
    }

    #[test]
    #[should_panic(expected = "same multiset")]
    fn test_hash_rejects_mismatched_multisets() {
        kendall_tau_hash(&[1.0, 2.0], &[1.0, 3.0]);
    }

    #[test]
    #[should_panic(expected = "same multiset")]
    fn test_sort_rejects_mismatched_multisets() {
        kendall_tau_sort(&[1.0, 2.0], &[1.0, 3.0]);
    }

    #[test]
    fn test_available_variants_start_with_reference() {
        let variants = available_variants();
        assert_eq!(variants.len(), 2);
        assert_eq!(variants[0].name, "hash");
        assert_eq!(variants[1].name, "sort");
    }

    #[test]
    fn test_comparison_sweep_reports_agreement() {
        let config = SweepConfig {
            min_len: 64,
            max_len: 256,
            alphabet_sizes: vec![1, 8],
            trials: 3,
            warmup_pairs: 2,
            seed: Some(9),
        };

        let mut streamed = 0usize;
        let report = run_comparison(&config, |_| streamed += 1);

        assert_eq!(streamed, 6);
        assert_eq!(report.rows.len(), 6);
        assert_eq!(report.check, 0, "hash and sort variants must agree");
    }
}

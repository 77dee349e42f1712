//! Distance measures counting rearrangement operations.

use super::PermutationDistance;
use crate::permutations::perm::Permutation;

/// Count of elements that must be removed and reinserted elsewhere to
/// turn one permutation into the other: the length minus their longest
/// common subsequence.
pub struct ReinsertionDistance;

impl PermutationDistance for ReinsertionDistance {
    fn name(&self) -> &'static str {
        "reinsertion"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        // Relabeled through p, a common subsequence of p and q becomes an
        // increasing subsequence
        let positions_p = p.inverse();
        let relabeled: Vec<usize> = q
            .as_slice()
            .iter()
            .map(|&element| positions_p[element])
            .collect();
        (q.len() - longest_increasing_subsequence(&relabeled)) as u64
    }
}

/// Length of the longest strictly increasing subsequence, by patience
/// sorting in O(n log n).
fn longest_increasing_subsequence(values: &[usize]) -> usize {
    // tails[k] holds the smallest possible tail of an increasing
    // subsequence of length k + 1
    let mut tails: Vec<usize> = Vec::new();
    for &value in values {
        match tails.binary_search(&value) {
            Ok(position) | Err(position) => {
                if position == tails.len() {
                    tails.push(value);
                } else {
                    tails[position] = value;
                }
            }
        }
    }
    tails.len()
}

/// Minimum count of swaps of two elements (at any positions) turning one
/// permutation into the other: the length minus the cycle count of the
/// mapping between them.
pub struct InterchangeDistance;

impl PermutationDistance for InterchangeDistance {
    fn name(&self) -> &'static str {
        "interchange"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        let positions_q = q.inverse();
        let n = p.len();

        // Count the cycles of i -> position in q of p's element at i
        let mut visited = vec![false; n];
        let mut cycles = 0u64;
        for start in 0..n {
            if visited[start] {
                continue;
            }
            cycles += 1;
            let mut i = start;
            while !visited[i] {
                visited[i] = true;
                i = positions_q[p.get(i)];
            }
        }
        n as u64 - cycles
    }
}

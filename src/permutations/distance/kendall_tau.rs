//! Kendall tau distance between permutations.

use super::PermutationDistance;
use crate::permutations::perm::Permutation;
use crate::sequences::kendall_tau::count_inversions;

/// Count of discordant pairs: element pairs ordered one way by `p` and
/// the other way by `q`. Equivalently, the minimum number of adjacent
/// swaps turning one permutation into the other.
pub struct KendallTauDistance;

impl PermutationDistance for KendallTauDistance {
    fn name(&self) -> &'static str {
        "kendall_tau"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        // Relabel q by each element's position in p; the result is the
        // identity exactly when q == p, and its inversions are the
        // discordant pairs
        let positions_p = p.inverse();
        let mut relabeled: Vec<usize> = q
            .as_slice()
            .iter()
            .map(|&element| positions_p[element])
            .collect();
        count_inversions(&mut relabeled)
    }
}

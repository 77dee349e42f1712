//! Position- and value-based distance measures.

use super::PermutationDistance;
use crate::permutations::perm::Permutation;

/// Count of positions holding different elements.
pub struct ExactMatchDistance;

impl PermutationDistance for ExactMatchDistance {
    fn name(&self) -> &'static str {
        "exact_match"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        p.as_slice()
            .iter()
            .zip(q.as_slice())
            .filter(|(a, b)| a != b)
            .count() as u64
    }
}

/// Sum over elements of how far each one moved between the permutations.
pub struct DeviationDistance;

impl PermutationDistance for DeviationDistance {
    fn name(&self) -> &'static str {
        "deviation"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        let (positions_p, positions_q) = (p.inverse(), q.inverse());
        (0..p.len())
            .map(|element| positions_p[element].abs_diff(positions_q[element]) as u64)
            .sum()
    }
}

/// Like [`DeviationDistance`] but squaring each element's displacement,
/// so long moves dominate.
pub struct SquaredDeviationDistance;

impl PermutationDistance for SquaredDeviationDistance {
    fn name(&self) -> &'static str {
        "squared_deviation"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        let (positions_p, positions_q) = (p.inverse(), q.inverse());
        (0..p.len())
            .map(|element| {
                let deviation = positions_p[element].abs_diff(positions_q[element]) as u64;
                deviation * deviation
            })
            .sum()
    }
}

/// Sum of circular differences between the values at each position: a
/// difference of `d` counts as `min(d, n - d)`.
pub struct LeeDistance;

impl PermutationDistance for LeeDistance {
    fn name(&self) -> &'static str {
        "lee"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        let n = p.len() as u64;
        p.as_slice()
            .iter()
            .zip(q.as_slice())
            .map(|(&a, &b)| {
                let diff = a.abs_diff(b) as u64;
                diff.min(n - diff)
            })
            .sum()
    }
}

//! Adjacency-based distance measures.
//!
//! These measures compare which elements sit next to each other. Edge
//! measures treat adjacency as unordered, r-type measures as directed,
//! and the cyclic versions also count the pair formed by the last and
//! first elements.

use super::PermutationDistance;
use crate::permutations::perm::Permutation;

/// Count of undirected adjacencies of one permutation absent from the
/// other.
pub struct AcyclicEdgeDistance;

/// Like [`AcyclicEdgeDistance`], with a wraparound adjacency between the
/// last and first elements.
pub struct CyclicEdgeDistance;

/// Count of directed adjacencies of one permutation absent from the
/// other.
pub struct RTypeDistance;

/// Like [`RTypeDistance`], with a wraparound adjacency.
pub struct CyclicRTypeDistance;

/// Adjacencies of `p` also present in `q`.
///
/// `successor[a] == b` records a directed adjacency `a -> b` of `q`;
/// undirected lookups also accept the reverse direction. Elements are
/// distinct, so a sentinel of `usize::MAX` can never collide.
fn common_adjacencies(p: &Permutation, q: &Permutation, cyclic: bool, directed: bool) -> u64 {
    let n = p.len();
    if n < 2 {
        return 0;
    }
    let limit = if cyclic { n } else { n - 1 };

    let q = q.as_slice();
    let mut successor = vec![usize::MAX; n];
    let mut predecessor = vec![usize::MAX; n];
    for i in 0..limit {
        let (a, b) = (q[i], q[(i + 1) % n]);
        successor[a] = b;
        predecessor[b] = a;
    }

    let p = p.as_slice();
    let mut common = 0;
    for i in 0..limit {
        let (a, b) = (p[i], p[(i + 1) % n]);
        if successor[a] == b || (!directed && predecessor[a] == b) {
            common += 1;
        }
    }
    common
}

/// Adjacency count of a single permutation of length `n`.
fn adjacency_count(n: usize, cyclic: bool) -> u64 {
    if n < 2 {
        0
    } else if cyclic {
        n as u64
    } else {
        (n - 1) as u64
    }
}

impl PermutationDistance for AcyclicEdgeDistance {
    fn name(&self) -> &'static str {
        "acyclic_edge"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        adjacency_count(p.len(), false) - common_adjacencies(p, q, false, false)
    }
}

impl PermutationDistance for CyclicEdgeDistance {
    fn name(&self) -> &'static str {
        "cyclic_edge"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        adjacency_count(p.len(), true) - common_adjacencies(p, q, true, false)
    }
}

impl PermutationDistance for RTypeDistance {
    fn name(&self) -> &'static str {
        "rtype"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        adjacency_count(p.len(), false) - common_adjacencies(p, q, false, true)
    }
}

impl PermutationDistance for CyclicRTypeDistance {
    fn name(&self) -> &'static str {
        "cyclic_rtype"
    }

    fn distance(&self, p: &Permutation, q: &Permutation) -> u64 {
        assert_eq!(p.len(), q.len(), "Permutations must have the same length");
        adjacency_count(p.len(), true) - common_adjacencies(p, q, true, true)
    }
}

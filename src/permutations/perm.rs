//! Permutation container and iteration.
//!
//! A [`Permutation`] holds an arrangement of the integers `0..n` in
//! one-line notation. The measures in [`crate::permutations::distance`]
//! operate on pairs of these.

use std::fmt;

use rand::Rng;

/// A permutation of the integers `0..n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    elements: Vec<usize>,
}

impl Permutation {
    /// The identity permutation of the given length.
    pub fn identity(len: usize) -> Self {
        Self {
            elements: (0..len).collect(),
        }
    }

    /// A uniformly random permutation of the given length, by Fisher-Yates.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        let mut elements: Vec<usize> = (0..len).collect();
        for i in (1..len).rev() {
            let j = rng.random_range(0..=i);
            elements.swap(i, j);
        }
        Self { elements }
    }

    /// Build a permutation from raw elements.
    ///
    /// Fails unless every integer in `0..elements.len()` occurs exactly
    /// once.
    pub fn from_vec(elements: Vec<usize>) -> Result<Self, String> {
        let mut seen = vec![false; elements.len()];
        for &element in &elements {
            if element >= elements.len() {
                return Err(format!(
                    "element {element} is out of range for length {}",
                    elements.len()
                ));
            }
            if seen[element] {
                return Err(format!("element {element} appears more than once"));
            }
            seen[element] = true;
        }
        Ok(Self { elements })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The element at position `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> usize {
        self.elements[index]
    }

    /// The elements in one-line notation.
    pub fn as_slice(&self) -> &[usize] {
        &self.elements
    }

    /// Positions of each element: `inverse()[e]` is the index where `e`
    /// sits.
    ///
    /// # Example
    /// ```
    /// use perm_dist_bench::permutations::perm::Permutation;
    ///
    /// let p = Permutation::from_vec(vec![2, 0, 1]).unwrap();
    /// assert_eq!(p.inverse(), vec![1, 2, 0]);
    /// ```
    pub fn inverse(&self) -> Vec<usize> {
        let mut inverse = vec![0usize; self.elements.len()];
        for (index, &element) in self.elements.iter().enumerate() {
            inverse[element] = index;
        }
        inverse
    }

    /// Iterate over every permutation of length `len` in lexicographic
    /// order, starting from the identity.
    ///
    /// There are `len!` of them, so this is only practical for small
    /// lengths.
    ///
    /// # Example
    /// ```
    /// use perm_dist_bench::permutations::perm::Permutation;
    ///
    /// assert_eq!(Permutation::iter_all(3).count(), 6);
    /// ```
    pub fn iter_all(len: usize) -> AllPermutations {
        AllPermutations {
            next: Some(Self::identity(len)),
        }
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = "";
        for element in &self.elements {
            write!(f, "{separator}{element}")?;
            separator = " ";
        }
        Ok(())
    }
}

/// Iterator over all permutations of a fixed length in lexicographic
/// order.
pub struct AllPermutations {
    next: Option<Permutation>,
}

impl Iterator for AllPermutations {
    type Item = Permutation;

    fn next(&mut self) -> Option<Permutation> {
        let current = self.next.take()?;
        self.next = next_lexicographic(&current);
        Some(current)
    }
}

/// The lexicographic successor of `perm`, or `None` at the last one.
fn next_lexicographic(perm: &Permutation) -> Option<Permutation> {
    let mut elements = perm.elements.clone();
    let n = elements.len();
    if n < 2 {
        return None;
    }

    // Pivot: start of the longest non-increasing suffix
    let mut pivot = n - 1;
    while pivot > 0 && elements[pivot - 1] >= elements[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        // Fully descending: this was the last permutation
        return None;
    }

    // Swap the element before the suffix with the smallest suffix element
    // above it, then flip the suffix from descending to ascending
    let mut successor = n - 1;
    while elements[successor] <= elements[pivot - 1] {
        successor -= 1;
    }
    elements.swap(pivot - 1, successor);
    elements[pivot..].reverse();

    Some(Permutation { elements })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bench::rng_from_seed;
    use std::collections::HashSet;

    #[test]
    fn test_identity() {
        let p = Permutation::identity(4);
        assert_eq!(p.as_slice(), &[0, 1, 2, 3]);
        assert_eq!(p.len(), 4);
        assert!(!p.is_empty());
        assert!(Permutation::identity(0).is_empty());
    }

    #[test]
    fn test_random_is_a_valid_permutation() {
        let mut rng = rng_from_seed(Some(17));
        for len in [0usize, 1, 2, 10, 100] {
            let p = Permutation::random(len, &mut rng);
            let mut sorted = p.as_slice().to_vec();
            sorted.sort_unstable();
            let expected: Vec<usize> = (0..len).collect();
            assert_eq!(sorted, expected, "len = {len}");
        }
    }

    #[test]
    fn test_from_vec_accepts_valid_elements() {
        let p = Permutation::from_vec(vec![3, 1, 0, 2]).unwrap();
        assert_eq!(p.get(0), 3);
        assert_eq!(p.get(3), 2);
    }

    #[test]
    fn test_from_vec_rejects_out_of_range() {
        let err = Permutation::from_vec(vec![0, 4, 1, 2]).unwrap_err();
        assert!(err.contains("out of range"));
    }

    #[test]
    fn test_from_vec_rejects_duplicates() {
        let err = Permutation::from_vec(vec![0, 1, 1, 3]).unwrap_err();
        assert!(err.contains("more than once"));
    }

    #[test]
    fn test_inverse_roundtrip() {
        let mut rng = rng_from_seed(Some(23));
        let p = Permutation::random(50, &mut rng);
        let inverse = p.inverse();
        for i in 0..p.len() {
            assert_eq!(inverse[p.get(i)], i);
        }
    }

    #[test]
    fn test_display_is_space_separated() {
        let p = Permutation::from_vec(vec![2, 0, 1]).unwrap();
        assert_eq!(p.to_string(), "2 0 1");
        assert_eq!(Permutation::identity(0).to_string(), "");
        assert_eq!(Permutation::identity(1).to_string(), "0");
    }

    #[test]
    fn test_iter_all_is_lexicographic() {
        let all: Vec<Vec<usize>> = Permutation::iter_all(3)
            .map(|p| p.as_slice().to_vec())
            .collect();
        let expected = vec![
            vec![0, 1, 2],
            vec![0, 2, 1],
            vec![1, 0, 2],
            vec![1, 2, 0],
            vec![2, 0, 1],
            vec![2, 1, 0],
        ];
        assert_eq!(all, expected);
    }

    #[test]
    fn test_iter_all_counts_degenerate_lengths() {
        assert_eq!(Permutation::iter_all(0).count(), 1);
        assert_eq!(Permutation::iter_all(1).count(), 1);
    }

    #[test]
    fn test_iter_all_visits_each_permutation_once() {
        let distinct: HashSet<Vec<usize>> = Permutation::iter_all(4)
            .map(|p| p.as_slice().to_vec())
            .collect();
        assert_eq!(distinct.len(), 24);
    }
}

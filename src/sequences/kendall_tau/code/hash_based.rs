//! Hash-based implementation of the Kendall tau sequence distance.
//!
//! Pairs equal elements by bucketing the positions of every distinct
//! value of `b` in a hash map, then draining each bucket front-to-back
//! while walking `a`. Bucket order pairs the i-th occurrence of a value
//! in `a` with its i-th occurrence in `b`.

use std::collections::{HashMap, VecDeque};

use super::common::count_inversions;

/// Compute the Kendall tau sequence distance via hash-map bucketing.
///
/// Element identity is bitwise (`f64::to_bits`), so `-0.0` and `0.0` are
/// distinct values. The same convention holds in the sort-based variant,
/// which keeps the two in exact agreement on every input.
///
/// # Panics
/// Panics if the sequences differ in length or do not hold the same
/// multiset of elements.
///
/// # Example
/// ```
/// use perm_dist_bench::sequences::kendall_tau::kendall_tau_hash;
///
/// let a = [2.0, 4.0, 2.0, 6.0];
/// let b = [6.0, 2.0, 4.0, 2.0];
/// assert_eq!(kendall_tau_hash(&a, &b), 3);
/// ```
pub fn kendall_tau_hash(a: &[f64], b: &[f64]) -> u64 {
    assert_eq!(a.len(), b.len(), "Sequences must have the same length");

    let mut positions: HashMap<u64, VecDeque<usize>> = HashMap::with_capacity(b.len());
    for (index, &value) in b.iter().enumerate() {
        positions.entry(value.to_bits()).or_default().push_back(index);
    }

    let mut mapping = Vec::with_capacity(a.len());
    for &value in a {
        let Some(index) = positions
            .get_mut(&value.to_bits())
            .and_then(|bucket| bucket.pop_front())
        else {
            panic!("Sequences must contain the same multiset of elements");
        };
        mapping.push(index);
    }

    count_inversions(&mut mapping)
}

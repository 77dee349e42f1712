//! Sort-based implementation of the Kendall tau sequence distance.
//!
//! Pairs equal elements by sorting the index range of each sequence by
//! element value. The k-th smallest element of `a` then corresponds to
//! the k-th smallest of `b`; stability keeps equal elements in occurrence
//! order, matching the pairing the hash-based variant produces.

use super::common::count_inversions;

/// Compute the Kendall tau sequence distance via stable sorting.
///
/// Element identity is bitwise, as in [`kendall_tau_hash`]; the ordering
/// is `f64::total_cmp`, so NaNs and signed zeros sort consistently.
///
/// [`kendall_tau_hash`]: super::hash_based::kendall_tau_hash
///
/// # Panics
/// Panics if the sequences differ in length or do not hold the same
/// multiset of elements.
///
/// # Example
/// ```
/// use perm_dist_bench::sequences::kendall_tau::kendall_tau_sort;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [3.0, 2.0, 1.0];
/// assert_eq!(kendall_tau_sort(&a, &b), 3);
/// ```
pub fn kendall_tau_sort(a: &[f64], b: &[f64]) -> u64 {
    assert_eq!(a.len(), b.len(), "Sequences must have the same length");

    let order_a = sorted_order(a);
    let order_b = sorted_order(b);

    let mut mapping = vec![0usize; a.len()];
    for k in 0..a.len() {
        let (index_a, index_b) = (order_a[k], order_b[k]);
        assert!(
            a[index_a].to_bits() == b[index_b].to_bits(),
            "Sequences must contain the same multiset of elements"
        );
        mapping[index_a] = index_b;
    }

    count_inversions(&mut mapping)
}

/// Indices of `values` sorted by element value, occurrence order preserved
/// among equals.
fn sorted_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| values[i].total_cmp(&values[j]));
    order
}

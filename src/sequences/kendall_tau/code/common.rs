//! Inversion counting shared by every distance variant.

/// Count the inversions of `values`: pairs at positions `i < j` with
/// `values[i] > values[j]`. Equal values are not inversions.
///
/// Runs a counting merge sort in O(n log n); the slice is sorted in place
/// as a side effect.
///
/// # Example
/// ```
/// use perm_dist_bench::sequences::kendall_tau::count_inversions;
///
/// let mut values: [usize; 3] = [2, 0, 1];
/// assert_eq!(count_inversions(&mut values), 2);
/// ```
pub fn count_inversions(values: &mut [usize]) -> u64 {
    let mut buffer = Vec::with_capacity(values.len());
    merge_count(values, &mut buffer)
}

fn merge_count(values: &mut [usize], buffer: &mut Vec<usize>) -> u64 {
    let n = values.len();
    if n < 2 {
        return 0;
    }
    let mid = n / 2;

    let mut inversions = 0;
    {
        let (left, right) = values.split_at_mut(mid);
        inversions += merge_count(left, buffer);
        inversions += merge_count(right, buffer);
    }

    buffer.clear();
    let (mut i, mut j) = (0, mid);
    while i < mid && j < n {
        if values[i] <= values[j] {
            buffer.push(values[i]);
            i += 1;
        } else {
            // values[i..mid] is sorted, so every remaining left element
            // crosses values[j]
            inversions += (mid - i) as u64;
            buffer.push(values[j]);
            j += 1;
        }
    }
    buffer.extend_from_slice(&values[i..mid]);
    buffer.extend_from_slice(&values[j..n]);
    values.copy_from_slice(buffer);

    inversions
}

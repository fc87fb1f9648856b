use tracing::trace;

use crate::keyed::{is_ascending, Keyed};

/*
--------------------------------------------------------------------------------
   MERGE SORT - stable, non-destructive
--------------------------------------------------------------------------------
*/

/// Sort `data` into a new ascending vector. The input is left untouched.
///
/// Equal keys keep their input order.
pub fn merge_sort<T: Keyed>(data: &[T]) -> Vec<T> {
    merge_sort_from_depth(data, 0)
}

/// Same as [`merge_sort`], with the recursion depth reported in trace events
/// starting at `depth` instead of zero.
pub fn merge_sort_from_depth<T: Keyed>(data: &[T], depth: usize) -> Vec<T> {
    trace!(depth, window = ?data, "merge_sort");

    match data.len() {
        0 | 1 => return data.to_vec(),
        2 => return merge_two_sorted(&data[..1], &data[1..]),
        _ => {}
    }

    // odd lengths give the extra element to the right half
    let half = data.len() / 2;
    let (left, right) = data.split_at(half);

    merge_two_sorted(
        &merge_sort_from_depth(left, depth + 1),
        &merge_sort_from_depth(right, depth + 1),
    )
}

/// Merge two ascending slices into one ascending vector.
///
/// On equal keys the element from `left` is taken first, which is what makes
/// [`merge_sort`] stable. Both inputs must already be ascending.
pub fn merge_two_sorted<T: Keyed>(left: &[T], right: &[T]) -> Vec<T> {
    debug_assert!(is_ascending(left), "left input is not ascending");
    debug_assert!(is_ascending(right), "right input is not ascending");

    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i].key() <= right[j].key() {
            result.push(left[i]);
            i += 1;
        } else {
            result.push(right[j]);
            j += 1;
        }
    }

    // at most one of these is non-empty
    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);

    result
}

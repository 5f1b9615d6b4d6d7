//! Textbook quicksort, kept as a reference point for benchmarks.
//!
//! First-key pivot, Lomuto partition, and the pivot excluded from both
//! recursive calls. Quadratic on already-sorted input; use [`hybrid_sort`]
//! for real work.
//!
//! [`hybrid_sort`]: crate::hybrid_sort

use crate::core::SortKey;
use log::trace;

/// Sorts `v` in place with the textbook quicksort.
///
/// # Examples
///
/// ```
/// use kqsort::baseline::quicksort;
///
/// let mut v = [11, 67, 23, 10, 34, 5, 32, 48, 9];
/// quicksort(&mut v);
/// assert_eq!(v, [5, 9, 10, 11, 23, 32, 34, 48, 67]);
/// ```
pub fn quicksort<K: SortKey>(v: &mut [K]) {
    quicksort_forked(v, 0);
}

/// Same as [`quicksort`], but ranges longer than `fork_threshold` sort their
/// halves concurrently. `0` disables forking.
pub fn quicksort_forked<K: SortKey>(mut v: &mut [K], fork_threshold: usize) {
    loop {
        let len = v.len();
        if len < 2 {
            return;
        }

        let mid = lomuto(v);
        let (lo, rest) = std::mem::take(&mut v).split_at_mut(mid);
        let hi = &mut rest[1..];

        if fork_threshold > 0 && len > fork_threshold {
            trace!("baseline fork: {} + {} keys", lo.len(), hi.len());
            rayon::join(
                || quicksort_forked(lo, fork_threshold),
                || quicksort_forked(hi, fork_threshold),
            );
            return;
        }

        // Recurse into the shorter side so sorted input cannot blow the stack.
        if lo.len() <= hi.len() {
            quicksort_forked(lo, fork_threshold);
            v = hi;
        } else {
            quicksort_forked(hi, fork_threshold);
            v = lo;
        }
    }
}

/// Partitions around `v[0]` and returns the pivot's final index.
fn lomuto<K: SortKey>(v: &mut [K]) -> usize {
    let pivot = v[0];
    let mut store = 0;
    for j in 1..v.len() {
        if v[j] <= pivot {
            store += 1;
            v.swap(store, j);
        }
    }
    v.swap(0, store);
    store
}

//! Adaptive classifier: the base case of the hybrid sort.
//!
//! The classifier sorts a range in a single left-to-right pass without
//! partitioning it. Every key is routed by comparing it with a pivot:
//!
//! - **Low-run**: keys `< pivot` are insertion-sorted into the prefix of the
//!   range itself. The prefix never overtakes the scan position, so the range
//!   doubles as storage.
//! - **High-run**: keys `>= pivot` are insertion-sorted into a side buffer.
//!
//! When the scan ends the high-run is copied back behind the low-run. Because
//! every low key is below the pivot and every high key is at or above it, the
//! concatenation is sorted.
//!
//! ## Pivot switch
//!
//! A poor pivot sends almost every key to one run, turning the pass into a
//! plain insertion sort. Once per call, if one run has outgrown the other by
//! more than a third of the range, the classifier may move the pivot to the
//! current key. The key must lie strictly between the pivot and the boundary
//! of the heavy run (the low-run's maximum, or the high-run's minimum), which
//! keeps `low < pivot <= high` true for every key already placed.

use crate::core::SortKey;

/// Sorts `v` in place using `pivot` as the initial split value and `run` as
/// scratch for the high-run.
///
/// Not stable. Worst case is quadratic in `v.len()`, which is why callers only
/// hand it chunk-sized or degenerate ranges.
///
/// # Panics
///
/// Panics if `run` is shorter than `v`.
///
/// # Examples
///
/// ```
/// use kqsort::classify::classify;
///
/// let mut v = [4, 67, 23, 10, 34, 5, 32, 48, 9];
/// let mut run = [0; 9];
/// classify(&mut v, 34, &mut run);
/// assert_eq!(v, [4, 5, 9, 10, 23, 32, 34, 48, 67]);
/// ```
pub fn classify<K: SortKey>(v: &mut [K], pivot: K, run: &mut [K]) {
    let len = v.len();
    assert!(
        run.len() >= len,
        "side buffer holds {} keys but the range has {}",
        run.len(),
        len
    );

    let mut pivot = pivot;
    let mut low = 0;
    let mut high = 0;
    let skew = len / 3;
    let mut switched = false;

    for pos in 0..len {
        let element = v[pos];

        if !switched {
            // Either run being heavy implies it is non-empty.
            let low_heavy = low > high + skew && element < pivot && element > v[low - 1];
            let high_heavy = high > low + skew && element > pivot && element < run[0];
            if low_heavy || high_heavy {
                pivot = element;
                switched = true;
            }
        }

        if element < pivot {
            // low <= pos, so this never clobbers an unread key.
            shift_insert(v, low, element);
            low += 1;
        } else {
            shift_insert(run, high, element);
            high += 1;
        }
    }

    debug_assert_eq!(low + high, len);
    v[low..].copy_from_slice(&run[..high]);
}

/// Inserts `element` into the sorted prefix `buf[..len]`, shifting larger keys
/// one slot right. `buf[len]` must be writable.
#[inline(always)]
fn shift_insert<K: SortKey>(buf: &mut [K], len: usize, element: K) {
    let mut pos = len;
    while pos > 0 && element < buf[pos - 1] {
        buf[pos] = buf[pos - 1];
        pos -= 1;
    }
    buf[pos] = element;
}

//! Hoare-style two-pointer partition.

use crate::core::SortKey;

/// Reorders `v` around `pivot` and returns the split index.
///
/// On return every key in `v[..split]` is `< pivot` and every key in
/// `v[split..]` is `>= pivot`, provided `pivot` occurs in `v` (which is always
/// the case for [`select_pivot`](crate::pivot::select_pivot)).
///
/// A split of `0` or `v.len()` is degenerate: the scan made no progress, which
/// happens when `pivot` is the minimum of `v` (every key compares `>= pivot`).
/// Recursing on such a split would not shrink the range.
///
/// # Examples
///
/// ```
/// use kqsort::partition::partition;
///
/// let mut v = [4, 67, 23, 10, 34, 5, 32, 48, 9];
/// let split = partition(&mut v, 34);
/// assert_eq!(split, 6);
/// assert!(v[..split].iter().all(|&x| x < 34));
/// assert!(v[split..].iter().all(|&x| x >= 34));
/// ```
pub fn partition<K: SortKey>(v: &mut [K], pivot: K) -> usize {
    if v.is_empty() {
        return 0;
    }

    let mut left = 0;
    let mut right = v.len() - 1;

    loop {
        while left < right && v[left] < pivot {
            left += 1;
        }
        while left < right && v[right] >= pivot {
            right -= 1;
        }
        if left >= right {
            return left;
        }
        // v[left] >= pivot and v[right] < pivot: both are on the wrong side.
        v.swap(left, right);
    }
}

/// Moves every key equal to `pivot` to the front of `v` and returns how many
/// there are.
///
/// Intended for degenerate splits, where `pivot` is the minimum of `v`: the
/// gathered keys are then already in their final position and the remainder
/// is strictly greater than `pivot`.
///
/// # Examples
///
/// ```
/// use kqsort::partition::gather_equal;
///
/// let mut v = [3, 1, 2, 1, 1];
/// assert_eq!(gather_equal(&mut v, 1), 3);
/// assert_eq!(&v[..3], &[1, 1, 1]);
/// ```
pub fn gather_equal<K: SortKey>(v: &mut [K], pivot: K) -> usize {
    let mut count = 0;
    for i in 0..v.len() {
        if v[i] == pivot {
            v.swap(count, i);
            count += 1;
        }
    }
    count
}

//! Pivot selection.

use crate::core::SortKey;

/// Returns the key at the midpoint of `v`, i.e. `v[v.len() / 2]`.
///
/// The choice is positional only. Bad pivots are absorbed later by the
/// classifier's one-time pivot switch rather than by sampling here.
///
/// # Panics
///
/// Panics if `v` is empty.
///
/// # Examples
///
/// ```
/// use kqsort::pivot::select_pivot;
///
/// let v = [4, 67, 23, 10, 34, 5, 32, 48, 9];
/// assert_eq!(select_pivot(&v), 34);
/// ```
#[inline(always)]
pub fn select_pivot<K: SortKey>(v: &[K]) -> K {
    v[v.len() / 2]
}

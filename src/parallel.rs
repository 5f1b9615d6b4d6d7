//! Fork-join dispatch of sibling ranges.
//!
//! A split produces two disjoint sub-slices, so the halves can be sorted
//! concurrently without any locking. Each forked branch owns a fresh
//! [`SideBuffer`]; buffers are never shared between branches.

use crate::algo::divide_or_sort;
use crate::config::SortConfig;
use crate::core::{SideBuffer, SortKey};
use log::trace;

/// Sorts `lo` and `hi` concurrently and returns once both are sorted.
///
/// Runs in whichever rayon pool the caller is in (a dedicated pool installed
/// by [`Sorter`](crate::Sorter), or the global one). A panic in either branch
/// is re-raised here after both branches have stopped.
pub(crate) fn fork<K: SortKey>(lo: &mut [K], hi: &mut [K], config: &SortConfig) {
    trace!("fork: {} + {} keys", lo.len(), hi.len());
    join_halves(lo, hi, |half| branch(half, config));
}

/// Runs `sort_half` on both halves through `rayon::join`.
fn join_halves<K, F>(lo: &mut [K], hi: &mut [K], sort_half: F)
where
    K: SortKey,
    F: Fn(&mut [K]) + Sync,
{
    rayon::join(|| sort_half(lo), || sort_half(hi));
}

fn branch<K: SortKey>(v: &mut [K], config: &SortConfig) {
    // Heap-allocated so nested forks only keep a pointer on the worker stack.
    let mut buffer = Box::new(SideBuffer::new());
    divide_or_sort(v, &mut buffer, config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_branch_panic_reaches_caller() {
        let mut data: Vec<i32> = (0..2_000).rev().collect();
        let (lo, hi) = data.split_at_mut(1_000);
        let config = SortConfig::default();

        let result = catch_unwind(AssertUnwindSafe(|| {
            join_halves(lo, hi, |half| {
                if half[0] < 1_000 {
                    panic!("branch failed");
                }
                branch(half, &config);
            })
        }));

        let err = result.expect_err("panic in one branch must surface from the join");
        assert_eq!(err.downcast_ref::<&str>(), Some(&"branch failed"));

        // The sibling ran to completion; no rollback of the slice is attempted.
        assert_eq!(data[..1_000], (1_000..2_000).collect::<Vec<i32>>()[..]);
    }

    #[test]
    fn test_fork_sorts_both_halves() {
        let mut data: Vec<u64> = (0..10_000).map(|i| (i * 7_919) % 10_000).collect();
        let (lo, hi) = data.split_at_mut(4_000);
        fork(lo, hi, &SortConfig::default().with_fork_threshold(1_000));

        assert!(data[..4_000].windows(2).all(|w| w[0] <= w[1]));
        assert!(data[4_000..].windows(2).all(|w| w[0] <= w[1]));
    }
}

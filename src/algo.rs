//! Hybrid quicksort driver.
//!
//! Every range goes through the same steps:
//!
//! 1. Pick the midpoint key as pivot and run a Hoare partition.
//! 2. If the split is degenerate (the pivot was the range minimum), hand the
//!    whole range to the classifier. Partitioning again would not shrink it.
//!    A degenerate range longer than the chunk size first has its minimum keys
//!    gathered at the front, and the remainder starts over at step 1.
//! 3. Otherwise sort both halves: halves longer than the chunk size go back to
//!    step 1, shorter ones go straight to the classifier.
//! 4. If the range is longer than the fork threshold and the split is not
//!    lopsided, the two halves of step 3 are sorted concurrently.
//!
//! The main entry points are [`hybrid_sort`], [`hybrid_sort_forked`] and
//! [`Sorter`].

use crate::classify::classify;
use crate::config::SortConfig;
use crate::core::{SideBuffer, SortKey};
use crate::error::SortError;
use crate::parallel::fork;
use crate::partition::{gather_equal, partition};
use crate::pivot::select_pivot;
use log::{debug, trace};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// The shorter half of a split must hold at least `1 / FORK_MIN_SHARE` of the
/// range for the halves to be forked.
const FORK_MIN_SHARE: usize = 8;

/// Sorts a slice of integers in place, on the current thread.
///
/// Not stable; equal keys are indistinguishable anyway.
///
/// # Examples
///
/// ```
/// use kqsort::hybrid_sort;
///
/// let mut data = vec![4, 67, 23, 10, 34, 5, 32, 48, 9];
/// hybrid_sort(&mut data);
///
/// assert_eq!(data, vec![4, 5, 9, 10, 23, 32, 34, 48, 67]);
/// ```
pub fn hybrid_sort<K: SortKey>(v: &mut [K]) {
    sort_with(v, &SortConfig::default());
}

/// Sorts a slice of integers in place, forking ranges longer than
/// `fork_threshold` onto rayon's global pool.
///
/// Only reasonably balanced splits fork; a split that peels off a sliver is
/// handled sequentially even above the threshold.
///
/// A `fork_threshold` of `0` is fully sequential and equivalent to
/// [`hybrid_sort`]. The result does not depend on the threshold.
///
/// # Panics
///
/// A panic raised while sorting any forked range is propagated to the caller
/// once the sibling range has finished. The slice is left partially sorted.
///
/// # Examples
///
/// ```
/// use kqsort::hybrid_sort_forked;
///
/// let mut data: Vec<i64> = (0..10_000).rev().collect();
/// hybrid_sort_forked(&mut data, 1_000);
///
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub fn hybrid_sort_forked<K: SortKey>(v: &mut [K], fork_threshold: usize) {
    sort_with(v, &SortConfig::default().with_fork_threshold(fork_threshold));
}

/// A validated, reusable sorting configuration.
///
/// When [`SortConfig::num_threads`] is set the sorter owns a dedicated rayon
/// pool and every sort it runs forks onto that pool.
///
/// # Examples
///
/// ```
/// use kqsort::{SortConfig, Sorter};
///
/// let sorter = Sorter::new(
///     SortConfig::default()
///         .with_fork_threshold(4_096)
///         .with_num_threads(2),
/// )
/// .unwrap();
///
/// let mut data: Vec<u32> = (0..50_000).map(|i| (i * 7919) % 50_000).collect();
/// sorter.sort(&mut data);
/// assert!(data.windows(2).all(|w| w[0] <= w[1]));
/// ```
pub struct Sorter {
    config: SortConfig,
    pool: Option<ThreadPool>,
}

impl Sorter {
    /// Validates `config` and builds the dedicated pool it asks for, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidChunkSize`] or [`SortError::InvalidThreadCount`]
    /// for an invalid configuration, and [`SortError::ThreadPool`] if the pool
    /// cannot be created.
    pub fn new(config: SortConfig) -> Result<Self, SortError> {
        config.validate()?;

        let pool = match config.num_threads {
            Some(threads) => {
                debug!("building fork-join pool with {threads} threads");
                Some(
                    ThreadPoolBuilder::new()
                        .num_threads(threads)
                        .thread_name(|i| format!("kqsort-{i}"))
                        .build()?,
                )
            }
            None => None,
        };

        Ok(Self { config, pool })
    }

    /// The configuration this sorter was built with.
    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Sorts `v` in place. Blocks until every forked range has finished.
    pub fn sort<K: SortKey>(&self, v: &mut [K]) {
        match &self.pool {
            Some(pool) if self.config.fork_threshold > 0 => {
                pool.install(|| sort_with(v, &self.config))
            }
            _ => sort_with(v, &self.config),
        }
    }
}

pub(crate) fn sort_with<K: SortKey>(v: &mut [K], config: &SortConfig) {
    if v.len() < 2 {
        return;
    }
    debug!("sorting {} keys with {:?}", v.len(), config);

    let mut buffer = SideBuffer::new();
    divide_and_conquer(v, &mut buffer, config);
}

/// Partitions `v` and sorts both halves, falling back to the classifier when
/// the partition makes no progress.
///
/// Sequentially, the shorter half is handled by recursion and the longer one
/// by the next loop iteration, so stack depth stays logarithmic.
fn divide_and_conquer<K: SortKey>(
    mut v: &mut [K],
    buffer: &mut SideBuffer<K>,
    config: &SortConfig,
) {
    loop {
        let len = v.len();
        let pivot = select_pivot(v);
        let split = partition(v, pivot);
        debug_assert!(split <= len, "split {split} outside range of {len}");

        if split == 0 || split == len {
            if len <= config.chunk_size {
                trace!("degenerate split over {len} keys, classifying whole range");
                classify_range(v, buffer);
                return;
            }

            let equal = gather_equal(v, pivot);
            trace!("degenerate split over {len} keys, {equal} minimum keys gathered");
            let rest = &mut std::mem::take(&mut v)[equal..];
            if rest.len() <= config.chunk_size {
                classify_range(rest, buffer);
                return;
            }
            v = rest;
            continue;
        }

        let (lo, hi) = std::mem::take(&mut v).split_at_mut(split);
        let (shorter, longer) = if lo.len() <= hi.len() {
            (lo, hi)
        } else {
            (hi, lo)
        };

        // Lopsided splits stay sequential: forking them nests one join per
        // peeled-off sliver and the depth grows linearly with the range.
        if config.should_fork(len) && is_balanced(shorter.len(), len, config) {
            fork(shorter, longer, config);
            return;
        }

        divide_or_sort(shorter, buffer, config);

        if longer.len() <= config.chunk_size {
            classify_range(longer, buffer);
            return;
        }
        v = longer;
    }
}

/// Whether a split leaves enough work on both sides to fork.
///
/// The longer half of a forked split is at most `(FORK_MIN_SHARE - 1) / FORK_MIN_SHARE`
/// of the range, which keeps nested forks logarithmic in depth.
#[inline(always)]
fn is_balanced(shorter: usize, len: usize, config: &SortConfig) -> bool {
    shorter > config.chunk_size && shorter >= len / FORK_MIN_SHARE
}

/// Re-partitions ranges longer than the chunk size, classifies the rest.
pub(crate) fn divide_or_sort<K: SortKey>(
    v: &mut [K],
    buffer: &mut SideBuffer<K>,
    config: &SortConfig,
) {
    if v.len() > config.chunk_size {
        divide_and_conquer(v, buffer, config);
    } else {
        classify_range(v, buffer);
    }
}

fn classify_range<K: SortKey>(v: &mut [K], buffer: &mut SideBuffer<K>) {
    let len = v.len();
    if len < 2 {
        return;
    }
    let pivot = select_pivot(v);
    classify(v, pivot, buffer.scratch(len));
}

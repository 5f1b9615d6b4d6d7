//! # Kqsort
//!
//! `kqsort` is an in-place hybrid quicksort for slices of fixed-width integers.
//!
//! It combines a cheap **Hoare partition** around the midpoint key with an
//! **adaptive classifier** that sorts small or badly split ranges in a single
//! pass, and can fork large ranges onto a **rayon** thread pool.
//!
//! ## Key Features
//!
//! - **Adaptive base case**: Small ranges are split into a low-run (kept in the
//!   slice) and a high-run (kept in a side buffer), each built by insertion.
//!   A one-time pivot switch keeps a bad pivot from collapsing the pass into a
//!   plain insertion sort.
//! - **Degenerate-safe**: When partitioning makes no progress (all keys equal,
//!   pivot is the minimum) the range goes to the classifier instead of
//!   recursing on itself.
//! - **Fork-join**: Ranges longer than a fork threshold sort their halves
//!   concurrently. Halves are disjoint sub-slices and every branch owns its
//!   own scratch buffer, so no locking is involved.
//! - **Deterministic**: The sorted output is the same for every fork threshold.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use kqsort::hybrid_sort;
//!
//! let mut data = vec![4, 67, 23, 10, 34, 5, 32, 48, 9];
//! hybrid_sort(&mut data);
//!
//! assert_eq!(data, vec![4, 5, 9, 10, 23, 32, 34, 48, 67]);
//! ```
//!
//! ### Parallel Sorting
//!
//! ```rust
//! use kqsort::hybrid_sort_forked;
//!
//! let mut data: Vec<u64> = (0..100_000).map(|i| (i * 2_654_435_761) % 1_000_003).collect();
//! hybrid_sort_forked(&mut data, 10_000);
//!
//! assert!(data.windows(2).all(|w| w[0] <= w[1]));
//! ```
//!
//! ### Custom Configuration
//!
//! [`Sorter`] validates a [`SortConfig`] once and can own a dedicated pool.
//!
//! ```rust
//! use kqsort::{SortConfig, Sorter};
//!
//! let sorter = Sorter::new(
//!     SortConfig::default()
//!         .with_chunk_size(128)
//!         .with_fork_threshold(50_000)
//!         .with_num_threads(4),
//! )?;
//!
//! let mut data = vec![3i32, -1, 2];
//! sorter.sort(&mut data);
//! assert_eq!(data, vec![-1, 2, 3]);
//! # Ok::<(), kqsort::SortError>(())
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Typical**: O(N log N) comparisons on random input.
//! - **Base case**: O(K²) worst case per classified range of K keys.
//! - **Memory Overhead**: One side buffer of 301 keys for the top-level call plus
//!   one per forked branch, enlarged only when a classified range is longer
//!   than that (chunk sizes above 301).
//!
//! Sorting is not stable.

pub mod algo;
pub mod baseline;
pub mod classify;
pub mod config;
pub mod core;
pub mod error;
mod parallel;
pub mod partition;
pub mod pivot;

pub use crate::algo::{Sorter, hybrid_sort, hybrid_sort_forked};
pub use crate::config::SortConfig;
pub use crate::core::{CHUNK_SIZE, DEFAULT_BUFFER_CAPACITY, SideBuffer, SortKey};
pub use crate::error::SortError;

pub mod prelude {
    pub use crate::algo::{Sorter, hybrid_sort, hybrid_sort_forked};
    pub use crate::config::SortConfig;
    pub use crate::core::SortKey;
    pub use crate::error::SortError;
}

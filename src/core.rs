//! Core traits and types for Kqsort.
//!
//! This module defines:
//! - [`SortKey`]: The fixed-width integer types the sorter accepts.
//! - [`SideBuffer`]: Scratch space the classifier builds its high-run in.
//! - The tuning constants shared by every entry point.

use cuneiform::cuneiform;
use std::fmt::Debug;

/// Largest range handed straight to the classifier without attempting a partition.
pub const CHUNK_SIZE: usize = 301;

/// Number of keys a [`SideBuffer`] holds before it spills to the heap.
pub const DEFAULT_BUFFER_CAPACITY: usize = 301;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width integer that can be sorted by `kqsort`.
///
/// The trait is sealed: it is implemented for every primitive integer type and
/// cannot be implemented outside this crate.
///
/// # Examples
///
/// ```
/// use kqsort::hybrid_sort;
///
/// let mut bytes: Vec<u8> = vec![200, 3, 77, 3];
/// hybrid_sort(&mut bytes);
/// assert_eq!(bytes, vec![3, 3, 77, 200]);
/// ```
pub trait SortKey: sealed::Sealed + Copy + Ord + Default + Send + Sync + Debug + 'static {}

macro_rules! impl_sort_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl SortKey for $t {}
        )*
    };
}

impl_sort_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Cache-aligned inline scratch.
#[cuneiform]
struct InlineRun<K> {
    data: [K; DEFAULT_BUFFER_CAPACITY],
}

/// Scratch space for the classifier's high-run.
///
/// Ranges up to [`DEFAULT_BUFFER_CAPACITY`] keys are served from an inline,
/// cache-aligned block. Larger ranges enlarge a heap spill that is kept for
/// later calls on the same buffer.
///
/// A `SideBuffer` is owned by exactly one thread of control. Sequential
/// recursion borrows a single buffer; every forked branch builds its own.
pub struct SideBuffer<K: SortKey> {
    inline: InlineRun<K>,
    spill: Vec<K>,
}

impl<K: SortKey> SideBuffer<K> {
    /// Creates a buffer with only the inline block; nothing is allocated.
    pub fn new() -> Self {
        Self {
            inline: InlineRun {
                data: [K::default(); DEFAULT_BUFFER_CAPACITY],
            },
            spill: Vec::new(),
        }
    }

    /// Returns exactly `len` writable slots.
    ///
    /// Contents are unspecified; the classifier never reads a slot before writing it.
    pub fn scratch(&mut self, len: usize) -> &mut [K] {
        if len <= DEFAULT_BUFFER_CAPACITY {
            return &mut self.inline.data[..len];
        }
        if self.spill.len() < len {
            self.spill.resize(len, K::default());
        }
        &mut self.spill[..len]
    }

    /// Number of keys currently available without allocating.
    pub fn capacity(&self) -> usize {
        DEFAULT_BUFFER_CAPACITY.max(self.spill.len())
    }
}

impl<K: SortKey> Default for SideBuffer<K> {
    fn default() -> Self {
        Self::new()
    }
}

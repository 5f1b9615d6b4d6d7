//! Error types for Kqsort.
//!
//! Only configuration can fail in a recoverable way. Faults inside a sort
//! (an out-of-range split, a panicking branch) are programming errors and
//! surface as panics at the call site of the top-level sort.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

/// Error returned when a [`Sorter`](crate::Sorter) cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// Chunk size must be at least 1.
    InvalidChunkSize(usize),

    /// A dedicated pool needs at least one worker thread.
    InvalidThreadCount(usize),

    /// The fork-join thread pool could not be created.
    ThreadPool(String),
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SortError::InvalidChunkSize(size) => {
                write!(f, "Invalid chunk size: {size} (must be at least 1)")
            }
            SortError::InvalidThreadCount(count) => {
                write!(f, "Invalid thread count: {count} (must be at least 1)")
            }
            SortError::ThreadPool(msg) => write!(f, "Failed to build thread pool: {msg}"),
        }
    }
}

impl Error for SortError {}

impl From<rayon::ThreadPoolBuildError> for SortError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        SortError::ThreadPool(err.to_string())
    }
}

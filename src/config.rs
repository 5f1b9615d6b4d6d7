//! Sorter configuration.

use crate::core::CHUNK_SIZE;
use crate::error::SortError;

/// Tuning knobs for a [`Sorter`](crate::Sorter).
///
/// # Examples
///
/// ```
/// use kqsort::SortConfig;
///
/// let config = SortConfig::default()
///     .with_fork_threshold(500_000)
///     .with_num_threads(4);
/// assert!(config.validate().is_ok());
/// assert!(config.should_fork(1_000_000));
/// assert!(!config.should_fork(500_000));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortConfig {
    /// Ranges of at most this many keys are classified without partitioning.
    pub chunk_size: usize,

    /// Ranges longer than this fork their two halves. `0` disables forking.
    pub fork_threshold: usize,

    /// Worker count of a dedicated pool. `None` uses rayon's global pool.
    pub num_threads: Option<usize>,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            fork_threshold: 0,
            num_threads: None,
        }
    }
}

impl SortConfig {
    /// Sets the largest range classified without partitioning.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the range length above which halves are forked. `0` disables forking.
    pub fn with_fork_threshold(mut self, fork_threshold: usize) -> Self {
        self.fork_threshold = fork_threshold;
        self
    }

    /// Requests a dedicated pool with `num_threads` workers.
    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = Some(num_threads);
        self
    }

    /// Checks the configuration without building anything.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::InvalidChunkSize`] if `chunk_size` is `0`, and
    /// [`SortError::InvalidThreadCount`] if `num_threads` is `Some(0)`.
    pub fn validate(&self) -> Result<(), SortError> {
        if self.chunk_size == 0 {
            return Err(SortError::InvalidChunkSize(self.chunk_size));
        }
        if let Some(0) = self.num_threads {
            return Err(SortError::InvalidThreadCount(0));
        }
        Ok(())
    }

    /// Whether a range of `len` keys dispatches its halves concurrently.
    #[inline(always)]
    pub fn should_fork(&self, len: usize) -> bool {
        self.fork_threshold > 0 && len > self.fork_threshold
    }
}

//! Rayon-based parallelisation utilities.
//!
//! Per-leg exposure work is independent, so large books are mapped in
//! parallel. Results keep input order; any reduction over them is done
//! sequentially by the caller so totals do not depend on thread scheduling.

use rayon::prelude::*;

/// Minimum number of items handed to one Rayon task.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default leg count at which aggregation switches to Rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Configuration for parallel execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum items per Rayon task
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Configuration that never parallelises.
    pub fn sequential() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, usize::MAX)
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }
}

/// Order-preserving parallel map.
///
/// # Arguments
///
/// * `items` - Slice of items to process
/// * `batch_size` - Minimum items per Rayon task
/// * `mapper` - Function to apply to each item
pub fn parallel_map<T, R, F>(items: &[T], batch_size: usize, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items
        .par_iter()
        .with_min_len(batch_size.max(1))
        .map(mapper)
        .collect()
}

/// Maps sequentially or in parallel depending on `config` and the item count.
pub fn map_with_config<T, R, F>(items: &[T], config: &ParallelConfig, mapper: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    if config.should_parallelize(items.len()) {
        parallel_map(items, config.batch_size, mapper)
    } else {
        items.iter().map(mapper).collect()
    }
}

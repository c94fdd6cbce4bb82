use std::str::FromStr;

use rayon::prelude::*;
use thiserror::Error;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The chunk length must be valid.
    #[error("chunk length must be > 0, got {0}")]
    InvalidChunkLength(usize),

    /// The destination length is not a multiple of the chunk length.
    #[error("destination length {0} is not a multiple of the chunk length {1}")]
    SizeMismatch(usize, usize),

    /// The strategy name could not be parsed.
    #[error("unknown execution strategy '{0}', expected serial, slices, rows or fixed:<n>")]
    UnknownStrategy(String),
}

/// Controls how the output voxels are dispatched.
///
/// Every strategy writes disjoint chunks of the output buffer and produces
/// byte-identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small volumes, debugging, or when the overhead of
    /// parallelization outweighs the benefits.
    Serial,

    /// Use the global Rayon thread pool with one task per z-slice.
    #[default]
    ParallelSlices,

    /// Use the global Rayon thread pool with one task per output row.
    ///
    /// Better load balancing for volumes with few, large slices.
    ParallelRows,

    /// Run on a local thread pool with `n` threads, one task per z-slice.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

impl std::fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionStrategy::Serial => write!(f, "serial"),
            ExecutionStrategy::ParallelSlices => write!(f, "slices"),
            ExecutionStrategy::ParallelRows => write!(f, "rows"),
            ExecutionStrategy::Fixed(n) => write!(f, "fixed:{n}"),
        }
    }
}

impl FromStr for ExecutionStrategy {
    type Err = ParallelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ParallelError::UnknownStrategy(s.to_string());
        match s.trim().to_ascii_lowercase().as_str() {
            "serial" => Ok(ExecutionStrategy::Serial),
            "slices" => Ok(ExecutionStrategy::ParallelSlices),
            "rows" => Ok(ExecutionStrategy::ParallelRows),
            other => {
                let n = other
                    .strip_prefix("fixed:")
                    .ok_or_else(unknown)?
                    .parse::<usize>()
                    .map_err(|_| unknown())?;
                if n == 0 {
                    return Err(ParallelError::InvalidThreadCount(n));
                }
                Ok(ExecutionStrategy::Fixed(n))
            }
        }
    }
}

/// Apply `op` to every `chunk_len`-sized chunk of `dst` with the given strategy.
///
/// # Arguments
///
/// * `dst` - The destination slice, split into disjoint chunks.
/// * `chunk_len` - The length of each chunk. Must divide `dst.len()`.
/// * `strategy` - The execution strategy.
/// * `op` - The operation, called with the chunk index and the chunk.
///
/// # Errors
///
/// Returns an error if the chunk length is zero or does not divide the
/// destination, or if a local thread pool cannot be built.
pub fn execute_chunks<T, F>(
    dst: &mut [T],
    chunk_len: usize,
    strategy: ExecutionStrategy,
    op: F,
) -> Result<(), ParallelError>
where
    T: Send,
    F: Fn(usize, &mut [T]) + Send + Sync,
{
    if chunk_len == 0 {
        return Err(ParallelError::InvalidChunkLength(chunk_len));
    }
    if dst.len() % chunk_len != 0 {
        return Err(ParallelError::SizeMismatch(dst.len(), chunk_len));
    }

    match strategy {
        ExecutionStrategy::Serial => {
            dst.chunks_exact_mut(chunk_len)
                .enumerate()
                .for_each(|(i, chunk)| op(i, chunk));
        }
        ExecutionStrategy::ParallelSlices | ExecutionStrategy::ParallelRows => {
            dst.par_chunks_exact_mut(chunk_len)
                .enumerate()
                .for_each(|(i, chunk)| op(i, chunk));
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            log::trace!("building local thread pool with {n} threads");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst.par_chunks_exact_mut(chunk_len)
                    .enumerate()
                    .for_each(|(i, chunk)| op(i, chunk));
            });
        }
    }
    Ok(())
}

use voxresize_volume::VolumeError;

use crate::parallel::ParallelError;

/// An error type for the resample module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResizeError {
    /// Error when the target extent is zero, overflows, or yields a non-finite scale.
    #[error("Invalid target dimensions ({0}x{1}x{2})")]
    InvalidTargetDimensions(usize, usize, usize),

    /// Error coming from the source or destination volume.
    #[error(transparent)]
    Volume(#[from] VolumeError),

    /// Error while dispatching work to the thread pool.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

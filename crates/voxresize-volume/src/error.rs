use crate::volume::VolumeSize;

/// An error type for the volume module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum VolumeError {
    /// Error when a dimension is zero or the voxel count overflows.
    #[error("Invalid volume dimensions ({0}x{1}x{2})")]
    InvalidDimensions(usize, usize, usize),

    /// Error when the buffer length does not match the volume size.
    #[error("Data length ({1}) does not match the volume size ({0})")]
    BufferSizeMismatch(usize, usize),

    /// Error when a sampling coordinate lies outside the volume.
    #[error("Coordinate ({0}, {1}, {2}) is out of bounds for {3}")]
    CoordinateOutOfBounds(f32, f32, f32, VolumeSize),

    /// Error when a voxel index lies outside the volume.
    #[error("Voxel index ({0}, {1}, {2}) is out of bounds for {3}")]
    IndexOutOfBounds(usize, usize, usize, VolumeSize),
}

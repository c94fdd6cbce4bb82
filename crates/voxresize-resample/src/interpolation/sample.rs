use voxresize_volume::{VolumeError, VolumeSize};

use super::trilinear::trilinear_interpolation;

/// Sample a volume at a fractional coordinate with trilinear interpolation.
///
/// # Arguments
///
/// * `x` - The x coordinate in source voxel units.
/// * `y` - The y coordinate in source voxel units.
/// * `z` - The z coordinate in source voxel units.
/// * `volume` - The flat row-major voxel buffer.
/// * `size` - The size of the volume.
///
/// # Returns
///
/// The interpolated intensity as `f32`, not clamped nor rounded.
///
/// # Errors
///
/// * The size is invalid or does not match the buffer length.
/// * A coordinate is not finite or lies outside `[0, extent)` on its axis.
///
/// # Example
///
/// ```
/// use voxresize_resample::interpolation::sample;
/// use voxresize_volume::VolumeSize;
///
/// let data = vec![0u8, 255, 0, 255, 0, 255, 0, 255];
/// let size = VolumeSize::new(2, 2, 2).unwrap();
///
/// let v = sample(0.5, 1.0, 0.0, &data, size).unwrap();
/// assert_eq!(v, 127.5);
/// ```
pub fn sample(x: f32, y: f32, z: f32, volume: &[u8], size: VolumeSize) -> Result<f32, VolumeError> {
    size.validate()?;
    size.check_buffer(volume.len())?;

    let inside = |c: f32, extent: usize| c >= 0.0 && c < extent as f32;
    if !(inside(x, size.width) && inside(y, size.height) && inside(z, size.depth)) {
        return Err(VolumeError::CoordinateOutOfBounds(x, y, z, size));
    }

    Ok(trilinear_interpolation(volume, size, x, y, z))
}

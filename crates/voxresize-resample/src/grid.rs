use voxresize_volume::VolumeSize;

use crate::error::ResizeError;

/// Per-axis ratio between the source and the target extent.
///
/// A target voxel `(x, y, z)` maps to the source coordinate
/// `(x * scale_x, y * scale_y, z * scale_z)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    /// Scale along the x axis
    pub x: f32,
    /// Scale along the y axis
    pub y: f32,
    /// Scale along the z axis
    pub z: f32,
}

impl ScaleFactors {
    /// Compute `src / dst` on every axis.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::InvalidTargetDimensions`] if any factor is not a
    /// finite positive number, e.g. when a target axis is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxresize_resample::grid::ScaleFactors;
    ///
    /// let scale = ScaleFactors::new([4, 4, 4].into(), [8, 2, 4].into()).unwrap();
    ///
    /// assert_eq!(scale.map(3, 1, 2), [1.5, 2.0, 2.0]);
    /// ```
    pub fn new(src: VolumeSize, dst: VolumeSize) -> Result<Self, ResizeError> {
        let scale = Self {
            x: src.width as f32 / dst.width as f32,
            y: src.height as f32 / dst.height as f32,
            z: src.depth as f32 / dst.depth as f32,
        };

        let valid = |s: f32| s.is_finite() && s > 0.0;
        if !(valid(scale.x) && valid(scale.y) && valid(scale.z)) {
            return Err(ResizeError::InvalidTargetDimensions(
                dst.width, dst.height, dst.depth,
            ));
        }

        Ok(scale)
    }

    /// Map a target voxel index into source space.
    #[inline]
    pub fn map(&self, x: usize, y: usize, z: usize) -> [f32; 3] {
        [x as f32 * self.x, y as f32 * self.y, z as f32 * self.z]
    }
}

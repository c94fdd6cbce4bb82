use crate::volume::VolumeSize;

/// Physical size of a voxel along each axis, typically in millimetres.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeSpacing {
    /// Spacing along the x axis
    pub x: f64,
    /// Spacing along the y axis
    pub y: f64,
    /// Spacing along the z axis
    pub z: f64,
}

impl VolumeSpacing {
    /// Create a new spacing.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Spacing of the grid obtained by resampling `from` onto `to` voxels.
    ///
    /// The physical extent of the volume is kept constant, so each axis is
    /// scaled by `from / to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxresize_volume::{VolumeSize, VolumeSpacing};
    ///
    /// let spacing = VolumeSpacing::new(1.0, 1.0, 2.0);
    /// let resampled = spacing.resampled([64, 64, 32].into(), [32, 128, 32].into());
    ///
    /// assert_eq!(resampled, VolumeSpacing::new(2.0, 0.5, 2.0));
    /// ```
    pub fn resampled(&self, from: VolumeSize, to: VolumeSize) -> Self {
        Self {
            x: self.x * from.width as f64 / to.width as f64,
            y: self.y * from.height as f64 / to.height as f64,
            z: self.z * from.depth as f64 / to.depth as f64,
        }
    }
}

impl Default for VolumeSpacing {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

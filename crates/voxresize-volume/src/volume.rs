use crate::error::VolumeError;
use crate::spacing::VolumeSpacing;

/// Volume size in voxels
///
/// A struct to represent the extent of a volume along each axis.
///
/// # Examples
///
/// ```
/// use voxresize_volume::VolumeSize;
///
/// let size = VolumeSize::new(4, 3, 2).unwrap();
///
/// assert_eq!(size.num_voxels(), 24);
/// assert_eq!(size.linear_index(1, 2, 1), 12 + 8 + 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeSize {
    /// Number of voxels along the x axis
    pub width: usize,
    /// Number of voxels along the y axis
    pub height: usize,
    /// Number of voxels along the z axis
    pub depth: usize,
}

impl VolumeSize {
    /// Create a validated volume size.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::InvalidDimensions`] if any dimension is zero or
    /// the voxel count does not fit in a `usize`.
    pub fn new(width: usize, height: usize, depth: usize) -> Result<Self, VolumeError> {
        let size = Self {
            width,
            height,
            depth,
        };
        size.validate()?;
        Ok(size)
    }

    /// Check that every dimension is positive and the voxel count does not overflow.
    pub fn validate(&self) -> Result<(), VolumeError> {
        let err = VolumeError::InvalidDimensions(self.width, self.height, self.depth);
        if self.width == 0 || self.height == 0 || self.depth == 0 {
            return Err(err);
        }
        self.checked_num_voxels().map(|_| ()).ok_or(err)
    }

    /// Number of voxels, or `None` on overflow.
    pub fn checked_num_voxels(&self) -> Option<usize> {
        self.width
            .checked_mul(self.height)
            .and_then(|plane| plane.checked_mul(self.depth))
    }

    /// Total number of voxels `W * H * D`.
    pub fn num_voxels(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Number of voxels in a single z-slice `W * H`.
    pub fn plane_len(&self) -> usize {
        self.width * self.height
    }

    /// Row-major linear index `z * H * W + y * W + x`.
    #[inline]
    pub fn linear_index(&self, x: usize, y: usize, z: usize) -> usize {
        z * self.plane_len() + y * self.width + x
    }

    /// Check that a buffer length matches the voxel count.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::BufferSizeMismatch`] with the expected and actual lengths.
    pub fn check_buffer(&self, len: usize) -> Result<(), VolumeError> {
        let expected = self.num_voxels();
        if len != expected {
            return Err(VolumeError::BufferSizeMismatch(expected, len));
        }
        Ok(())
    }
}

impl std::fmt::Display for VolumeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "VolumeSize {{ width: {}, height: {}, depth: {} }}",
            self.width, self.height, self.depth
        )
    }
}

/// Unchecked conversion from `[width, height, depth]`.
impl From<[usize; 3]> for VolumeSize {
    fn from(size: [usize; 3]) -> Self {
        VolumeSize {
            width: size[0],
            height: size[1],
            depth: size[2],
        }
    }
}

impl From<VolumeSize> for [usize; 3] {
    fn from(size: VolumeSize) -> Self {
        [size.width, size.height, size.depth]
    }
}

/// Represents an owned 3D volume of 8-bit intensity samples.
///
/// The samples are stored in a flat row-major buffer with x varying fastest,
/// see [`VolumeSize::linear_index`]. The buffer itself carries no shape; the
/// size and the physical spacing travel alongside it.
#[derive(Clone, Debug, PartialEq)]
pub struct Volume {
    size: VolumeSize,
    spacing: VolumeSpacing,
    data: Vec<u8>,
}

impl Volume {
    /// Create a new volume from voxel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the volume in voxels.
    /// * `data` - The voxel data in row-major order.
    ///
    /// # Errors
    ///
    /// If the size is invalid or the length of the data does not match it, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use voxresize_volume::{Volume, VolumeSize};
    ///
    /// let volume = Volume::new(
    ///     VolumeSize {
    ///         width: 2,
    ///         height: 2,
    ///         depth: 2,
    ///     },
    ///     vec![0u8, 1, 2, 3, 4, 5, 6, 7],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(volume.get(1, 0, 1), Some(&5));
    /// ```
    pub fn new(size: VolumeSize, data: Vec<u8>) -> Result<Self, VolumeError> {
        size.validate()?;
        size.check_buffer(data.len())?;

        Ok(Self {
            size,
            spacing: VolumeSpacing::default(),
            data,
        })
    }

    /// Create a new volume with every voxel set to `val`.
    pub fn from_size_val(size: VolumeSize, val: u8) -> Result<Self, VolumeError> {
        size.validate()?;
        Self::new(size, vec![val; size.num_voxels()])
    }

    /// Replace the physical voxel spacing.
    pub fn with_spacing(mut self, spacing: VolumeSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the physical voxel spacing in place.
    pub fn set_spacing(&mut self, spacing: VolumeSpacing) {
        self.spacing = spacing;
    }

    /// Get the size of the volume in voxels.
    pub fn size(&self) -> VolumeSize {
        self.size
    }

    /// Get the physical voxel spacing.
    pub fn spacing(&self) -> VolumeSpacing {
        self.spacing
    }

    /// Get the width of the volume in voxels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the volume in voxels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the depth of the volume in voxels.
    pub fn depth(&self) -> usize {
        self.size.depth
    }

    /// Get the voxel data as a flat slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Get the voxel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the volume and return the flat voxel buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Get a reference to the voxel at `(x, y, z)`, or `None` if out of bounds.
    pub fn get(&self, x: usize, y: usize, z: usize) -> Option<&u8> {
        if x >= self.size.width || y >= self.size.height || z >= self.size.depth {
            return None;
        }
        self.data.get(self.size.linear_index(x, y, z))
    }

    /// Set the voxel at `(x, y, z)`.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::IndexOutOfBounds`] if the index lies outside the volume.
    pub fn set(&mut self, x: usize, y: usize, z: usize, val: u8) -> Result<(), VolumeError> {
        if x >= self.size.width || y >= self.size.height || z >= self.size.depth {
            return Err(VolumeError::IndexOutOfBounds(x, y, z, self.size));
        }
        let idx = self.size.linear_index(x, y, z);
        self.data[idx] = val;
        Ok(())
    }

    /// Minimum and maximum intensity over the whole volume.
    pub fn min_max(&self) -> (u8, u8) {
        self.data
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

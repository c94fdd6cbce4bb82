use voxresize_volume::{Volume, VolumeSize};

use crate::error::ResizeError;
use crate::grid::ScaleFactors;
use crate::interpolation::trilinear::trilinear_interpolation;
use crate::parallel::{self, ExecutionStrategy, ParallelError};

/// Resize a flat volume buffer to new dimensions with trilinear interpolation.
///
/// The output buffer is zero-filled and then every voxel is written, so no
/// stale content survives. The input is left untouched. Work runs on the
/// current thread; see [`resize_raw_with`] for parallel dispatch.
///
/// # Arguments
///
/// * `src` - The source voxels in row-major order.
/// * `src_dims` - The source `[width, height, depth]`.
/// * `dst` - The caller-allocated output buffer.
/// * `dst_dims` - The target `[width, height, depth]`.
///
/// # Errors
///
/// * [`ResizeError::InvalidTargetDimensions`] if a target axis is zero or the
///   target voxel count overflows.
/// * [`ResizeError::Volume`] if a source axis is zero or a buffer length does
///   not match its dimensions.
///
/// On error the output buffer is not modified.
///
/// # Example
///
/// ```
/// use voxresize_resample::resize::resize_raw;
///
/// let src = vec![0u8, 255, 0, 255, 0, 255, 0, 255];
/// let mut dst = vec![0u8; 4 * 2 * 2];
///
/// resize_raw(&src, [2, 2, 2], &mut dst, [4, 2, 2]).unwrap();
///
/// assert_eq!(&dst[..4], &[0, 127, 255, 255]);
/// ```
pub fn resize_raw(
    src: &[u8],
    src_dims: [usize; 3],
    dst: &mut [u8],
    dst_dims: [usize; 3],
) -> Result<(), ResizeError> {
    resize_raw_with(src, src_dims, dst, dst_dims, ExecutionStrategy::Serial)
}

/// Resize a flat volume buffer with the given execution strategy.
///
/// The result does not depend on the strategy.
pub fn resize_raw_with(
    src: &[u8],
    src_dims: [usize; 3],
    dst: &mut [u8],
    dst_dims: [usize; 3],
    strategy: ExecutionStrategy,
) -> Result<(), ResizeError> {
    let src_size = VolumeSize::new(src_dims[0], src_dims[1], src_dims[2])?;
    let dst_size = VolumeSize::from(dst_dims);
    dst_size.validate().map_err(|_| {
        ResizeError::InvalidTargetDimensions(dst_dims[0], dst_dims[1], dst_dims[2])
    })?;

    src_size.check_buffer(src.len())?;
    dst_size.check_buffer(dst.len())?;

    resize_kernel(src, src_size, dst, dst_size, strategy)
}

fn resize_kernel(
    src: &[u8],
    src_size: VolumeSize,
    dst: &mut [u8],
    dst_size: VolumeSize,
    strategy: ExecutionStrategy,
) -> Result<(), ResizeError> {
    let scale = ScaleFactors::new(src_size, dst_size)?;

    if let ExecutionStrategy::Fixed(0) = strategy {
        return Err(ParallelError::InvalidThreadCount(0).into());
    }

    log::debug!(
        "resizing {}x{}x{} -> {}x{}x{} (scale {:.4}, {:.4}, {:.4}, strategy {})",
        src_size.width,
        src_size.height,
        src_size.depth,
        dst_size.width,
        dst_size.height,
        dst_size.depth,
        scale.x,
        scale.y,
        scale.z,
        strategy
    );

    let (width, height) = (dst_size.width, dst_size.height);
    let chunk_len = match strategy {
        ExecutionStrategy::ParallelRows => width,
        _ => dst_size.plane_len(),
    };
    let rows_per_chunk = chunk_len / width;

    dst.fill(0);

    parallel::execute_chunks(dst, chunk_len, strategy, |chunk_idx, chunk| {
        for (r, row) in chunk.chunks_exact_mut(width).enumerate() {
            let row_idx = chunk_idx * rows_per_chunk + r;
            let (y, z) = (row_idx % height, row_idx / height);
            for (x, voxel) in row.iter_mut().enumerate() {
                let [sx, sy, sz] = scale.map(x, y, z);
                // truncation toward zero, the blend never leaves the corner range
                *voxel = trilinear_interpolation(src, src_size, sx, sy, sz) as u8;
            }
        }
    })?;

    Ok(())
}

/// Resize a volume into a destination volume of the desired size.
///
/// The target dimensions are taken from `dst.size()` and the destination
/// spacing is updated so that the physical extent stays the same.
///
/// # Arguments
///
/// * `src` - The input volume.
/// * `dst` - The output volume, fully overwritten.
///
/// # Example
///
/// ```
/// use voxresize_resample::resize::resize;
/// use voxresize_volume::{Volume, VolumeSize, VolumeSpacing};
///
/// let src = Volume::from_size_val(VolumeSize::new(4, 4, 4).unwrap(), 9)
///     .unwrap()
///     .with_spacing(VolumeSpacing::new(1.0, 1.0, 2.0));
/// let mut dst = Volume::from_size_val(VolumeSize::new(2, 8, 4).unwrap(), 0).unwrap();
///
/// resize(&src, &mut dst).unwrap();
///
/// assert!(dst.as_slice().iter().all(|&v| v == 9));
/// assert_eq!(dst.spacing(), VolumeSpacing::new(2.0, 0.5, 2.0));
/// ```
pub fn resize(src: &Volume, dst: &mut Volume) -> Result<(), ResizeError> {
    resize_with(src, dst, ExecutionStrategy::default())
}

/// Resize a volume into a destination volume with the given execution strategy.
pub fn resize_with(
    src: &Volume,
    dst: &mut Volume,
    strategy: ExecutionStrategy,
) -> Result<(), ResizeError> {
    let (src_size, dst_size) = (src.size(), dst.size());
    resize_kernel(src.as_slice(), src_size, dst.as_slice_mut(), dst_size, strategy)?;
    dst.set_spacing(src.spacing().resampled(src_size, dst_size));
    Ok(())
}

/// Allocate a new volume of `new_size` and resize `src` into it.
///
/// # Errors
///
/// Returns [`ResizeError::InvalidTargetDimensions`] if `new_size` is invalid.
pub fn resized(
    src: &Volume,
    new_size: VolumeSize,
    strategy: ExecutionStrategy,
) -> Result<Volume, ResizeError> {
    new_size.validate().map_err(|_| {
        let [w, h, d]: [usize; 3] = new_size.into();
        ResizeError::InvalidTargetDimensions(w, h, d)
    })?;
    let mut dst = Volume::from_size_val(new_size, 0)?;
    resize_with(src, &mut dst, strategy)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxresize_volume::{VolumeError, VolumeSpacing};

    #[test]
    fn resize_smoke() -> Result<(), ResizeError> {
        let src = Volume::new(VolumeSize::new(4, 3, 2)?, (0..24).collect())?;
        let dst = resized(&src, VolumeSize::new(2, 3, 5)?, ExecutionStrategy::Serial)?;

        assert_eq!(dst.width(), 2);
        assert_eq!(dst.height(), 3);
        assert_eq!(dst.depth(), 5);
        assert_eq!(dst.as_slice().len(), 30);
        Ok(())
    }

    #[test]
    fn resize_identity() -> Result<(), ResizeError> {
        let data = (0..60).map(|v| (v * 7 % 256) as u8).collect::<Vec<_>>();
        let mut out = vec![0u8; 60];

        resize_raw(&data, [5, 4, 3], &mut out, [5, 4, 3])?;

        assert_eq!(out, data);
        Ok(())
    }

    #[test]
    fn resize_alternating_x() -> Result<(), ResizeError> {
        let src = [0u8, 255, 0, 255, 0, 255, 0, 255];
        let mut dst = [0u8; 16];

        resize_raw(&src, [2, 2, 2], &mut dst, [4, 2, 2])?;

        // every (y, z) row is [0, 127, 255, 255]
        for row in dst.chunks_exact(4) {
            assert_eq!(row, &[0, 127, 255, 255]);
        }
        Ok(())
    }

    #[test]
    fn resize_uniform() -> Result<(), ResizeError> {
        let k = 173u8;
        let src = Volume::from_size_val(VolumeSize::new(5, 7, 3)?, k)?;

        for dims in [[1, 1, 1], [9, 2, 13], [5, 7, 3], [16, 16, 16]] {
            let dst = resized(&src, dims.into(), ExecutionStrategy::Serial)?;
            assert!(dst.as_slice().iter().all(|&v| v == k), "dims {dims:?}");
        }
        Ok(())
    }

    #[test]
    fn resize_zero_target() {
        let src = [1u8; 8];
        let mut dst = [9u8; 8];

        let res = resize_raw(&src, [2, 2, 2], &mut dst, [0, 2, 2]);
        assert_eq!(res, Err(ResizeError::InvalidTargetDimensions(0, 2, 2)));

        // validation happens before the zero fill
        assert_eq!(dst, [9u8; 8]);
    }

    #[test]
    fn resize_overflowing_target() {
        let src = [7u8; 8];
        let mut dst = [3u8; 8];

        let res = resize_raw(&src, [2, 2, 2], &mut dst, [usize::MAX, 2, 1]);
        assert_eq!(
            res,
            Err(ResizeError::InvalidTargetDimensions(usize::MAX, 2, 1))
        );
        assert_eq!(dst, [3u8; 8]);
    }

    #[test]
    fn resize_zero_source() {
        let mut dst = [0u8; 8];
        let res = resize_raw(&[], [0, 2, 2], &mut dst, [2, 2, 2]);
        assert_eq!(
            res,
            Err(ResizeError::Volume(VolumeError::InvalidDimensions(0, 2, 2)))
        );
    }

    #[test]
    fn resize_buffer_mismatch() {
        let src = [0u8; 8];
        let mut dst = [0u8; 7];
        let res = resize_raw(&src, [2, 2, 2], &mut dst, [2, 2, 2]);
        assert_eq!(
            res,
            Err(ResizeError::Volume(VolumeError::BufferSizeMismatch(8, 7)))
        );

        let res = resize_raw(&src[..6], [2, 2, 2], &mut [0u8; 8], [2, 2, 2]);
        assert_eq!(
            res,
            Err(ResizeError::Volume(VolumeError::BufferSizeMismatch(8, 6)))
        );
    }

    #[test]
    fn resize_overwrites_stale_output() -> Result<(), ResizeError> {
        let src = [0u8; 8];
        let mut dst = [200u8; 27];
        resize_raw(&src, [2, 2, 2], &mut dst, [3, 3, 3])?;
        assert!(dst.iter().all(|&v| v == 0));
        Ok(())
    }

    #[test]
    fn resize_fixed_zero_threads() {
        let src = [0u8; 8];
        let mut dst = [5u8; 8];
        let strategy = ExecutionStrategy::Fixed(0);
        let res = resize_raw_with(&src, [2, 2, 2], &mut dst, [2, 2, 2], strategy);
        assert_eq!(
            res,
            Err(ResizeError::Parallel(ParallelError::InvalidThreadCount(0)))
        );
        assert_eq!(dst, [5u8; 8]);
    }

    #[test]
    fn resize_updates_spacing() -> Result<(), ResizeError> {
        let src = Volume::from_size_val(VolumeSize::new(64, 64, 32)?, 0)?
            .with_spacing(VolumeSpacing::new(0.5, 0.5, 1.0));
        let dst = resized(&src, VolumeSize::new(32, 64, 64)?, ExecutionStrategy::default())?;

        assert_eq!(dst.spacing(), VolumeSpacing::new(1.0, 0.5, 0.5));
        Ok(())
    }

    #[test]
    fn resized_rejects_invalid_size() -> Result<(), ResizeError> {
        let src = Volume::from_size_val(VolumeSize::new(2, 2, 2)?, 0)?;
        let res = resized(&src, [2, 0, 2].into(), ExecutionStrategy::Serial);
        assert_eq!(res, Err(ResizeError::InvalidTargetDimensions(2, 0, 2)));

        let res = resized(&src, [usize::MAX, 3, 1].into(), ExecutionStrategy::Serial);
        assert_eq!(
            res,
            Err(ResizeError::InvalidTargetDimensions(usize::MAX, 3, 1))
        );
        Ok(())
    }
}

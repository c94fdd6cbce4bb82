use voxresize_volume::VolumeSize;

#[inline(always)]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    // returns `a` exactly when `a == b`
    a + (b - a) * t
}

/// Kernel for trilinear interpolation
///
/// # Arguments
///
/// * `data` - The flat row-major voxel buffer, `size.num_voxels()` long.
/// * `size` - The size of the volume.
/// * `x` - The x coordinate to interpolate, in `[0, width)`.
/// * `y` - The y coordinate to interpolate, in `[0, height)`.
/// * `z` - The z coordinate to interpolate, in `[0, depth)`.
///
/// # Returns
///
/// The interpolated intensity, not clamped nor rounded.
#[inline]
pub(crate) fn trilinear_interpolation(
    data: &[u8],
    size: VolumeSize,
    x: f32,
    y: f32,
    z: f32,
) -> f32 {
    let (w, h, d) = (size.width, size.height, size.depth);

    let x0 = (x.floor() as usize).min(w - 1);
    let y0 = (y.floor() as usize).min(h - 1);
    let z0 = (z.floor() as usize).min(d - 1);

    let x1 = if x0 + 1 < w { x0 + 1 } else { x0 };
    let y1 = if y0 + 1 < h { y0 + 1 } else { y0 };
    let z1 = if z0 + 1 < d { z0 + 1 } else { z0 };

    let dx = x - x0 as f32;
    let dy = y - y0 as f32;
    let dz = z - z0 as f32;

    let at = |xi: usize, yi: usize, zi: usize| data[size.linear_index(xi, yi, zi)] as f32;

    let c000 = at(x0, y0, z0);
    let c100 = at(x1, y0, z0);
    let c010 = at(x0, y1, z0);
    let c110 = at(x1, y1, z0);
    let c001 = at(x0, y0, z1);
    let c101 = at(x1, y0, z1);
    let c011 = at(x0, y1, z1);
    let c111 = at(x1, y1, z1);

    // along x
    let c00 = lerp(c000, c100, dx);
    let c10 = lerp(c010, c110, dx);
    let c01 = lerp(c001, c101, dx);
    let c11 = lerp(c011, c111, dx);

    // along y
    let c0 = lerp(c00, c10, dy);
    let c1 = lerp(c01, c11, dy);

    // along z
    lerp(c0, c1, dz)
}

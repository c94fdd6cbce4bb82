use argh::FromArgs;
use std::path::PathBuf;
use std::time::Instant;

use voxresize::{
    resample::{parallel::ExecutionStrategy, resize},
    volume::{Volume, VolumeSize, VolumeSpacing},
};

fn parse_size(value: &str) -> Result<VolumeSize, String> {
    let dims = value
        .split('x')
        .map(|d| d.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid size '{value}': {e}"))?;

    match dims.as_slice() {
        [w, h, d] => VolumeSize::new(*w, *h, *d).map_err(|e| e.to_string()),
        _ => Err(format!("expected WxHxD, got '{value}'")),
    }
}

fn parse_strategy(value: &str) -> Result<ExecutionStrategy, String> {
    value
        .parse::<ExecutionStrategy>()
        .map_err(|e| e.to_string())
}

#[derive(FromArgs)]
/// Resize a synthetic volume with trilinear interpolation
struct Args {
    /// source size as WxHxD
    #[argh(option, default = "VolumeSize::from([64, 64, 64])", from_str_fn(parse_size))]
    src: VolumeSize,

    /// target size as WxHxD
    #[argh(option, default = "VolumeSize::from([32, 48, 96])", from_str_fn(parse_size))]
    dst: VolumeSize,

    /// execution strategy: serial, slices, rows or fixed:<n>
    #[argh(option, default = "ExecutionStrategy::ParallelSlices", from_str_fn(parse_strategy))]
    strategy: ExecutionStrategy,

    /// optional path to write the raw resized voxels to
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,
}

/// A sphere with a radial intensity ramp, dark outside.
fn sphere_phantom(size: VolumeSize) -> Result<Volume, Box<dyn std::error::Error>> {
    let center = [
        (size.width as f32 - 1.0) / 2.0,
        (size.height as f32 - 1.0) / 2.0,
        (size.depth as f32 - 1.0) / 2.0,
    ];
    let radius = center.iter().cloned().fold(f32::MAX, f32::min).max(0.5);

    let mut data = Vec::with_capacity(size.num_voxels());
    for z in 0..size.depth {
        for y in 0..size.height {
            for x in 0..size.width {
                let dx = x as f32 - center[0];
                let dy = y as f32 - center[1];
                let dz = z as f32 - center[2];
                let r = (dx * dx + dy * dy + dz * dz).sqrt() / radius;
                let v = if r <= 1.0 { 255.0 * (1.0 - 0.75 * r) } else { 0.0 };
                data.push(v as u8);
            }
        }
    }

    Ok(Volume::new(size, data)?.with_spacing(VolumeSpacing::new(1.0, 1.0, 1.5)))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let src = sphere_phantom(args.src)?;
    let (lo, hi) = src.min_max();
    log::info!(
        "source {} spacing {:?} range [{lo}, {hi}]",
        src.size(),
        src.spacing()
    );

    let start = Instant::now();
    let dst = resize::resized(&src, args.dst, args.strategy)?;
    let elapsed = start.elapsed();

    let (lo, hi) = dst.min_max();
    log::info!(
        "target {} spacing {:?} range [{lo}, {hi}] in {elapsed:?} ({})",
        dst.size(),
        dst.spacing(),
        args.strategy
    );

    if let Some(path) = args.output {
        let voxels = dst.into_vec();
        std::fs::write(&path, &voxels)?;
        log::info!("wrote {} bytes to {}", voxels.len(), path.display());
    }

    Ok(())
}

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// volume representation for flat 8-bit scalar grids.
pub mod volume;

/// physical voxel spacing.
pub mod spacing;

/// Error types for the volume module.
pub mod error;

pub use crate::error::VolumeError;
pub use crate::spacing::VolumeSpacing;
pub use crate::volume::{Volume, VolumeSize};

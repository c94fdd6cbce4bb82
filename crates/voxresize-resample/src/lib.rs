#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the resample module.
pub mod error;

/// mapping of target voxels into source space.
pub mod grid;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// utility functions for resizing volumes.
pub mod resize;

pub use crate::error::ResizeError;

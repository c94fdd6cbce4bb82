//! Voxel interpolation for volume resampling.
//!
//! The only kernel is trilinear: a fractional coordinate is resolved from
//! the 8 integer-grid samples surrounding it, with three sequential 1D
//! blends along x, then y, then z.
//!
//! # Boundary handling
//!
//! The upper neighbour on each axis is clamped to the last valid index, so
//! coordinates between `extent - 1` and `extent` repeat the edge sample.
//! There is no wraparound and no zero padding.
//!
//! # Common Use Cases
//!
//! - Volume resizing with `crate::resize`
//! - Probing a single intensity with [`sample`]

mod sample;
pub(crate) mod trilinear;

pub use sample::sample;

#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use voxresize_volume as volume;

#[doc(inline)]
pub use voxresize_resample as resample;

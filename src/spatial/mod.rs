//! Spatial data structures: the pixel buffer view and the strips cut from it
//!
//! This module contains spatial-related functionality including:
//! - The read-only pixel source the core consumes
//! - Strip records and equal-width partitioning

/// Pixel buffer abstraction and the ndarray-backed grid
pub mod pixels;
/// Strip records and partitioning
pub mod strips;

pub use pixels::{PixelSource, RgbGrid};
pub use strips::Strip;

//! npatch-raster: software RGBA canvas.
//!
//! Implements `Canvas` by drawing into a `Vec<u8>` RGBA buffer. Bitmap-rect
//! blits and textured triangle meshes are rasterized with nearest-neighbour
//! sampling at pixel centers and source-over blending.

mod canvas;
mod triangle;

pub use canvas::RasterCanvas;

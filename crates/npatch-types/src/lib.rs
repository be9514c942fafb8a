//! Foundation types and traits for npatch.
//!
//! This crate contains the backend-agnostic types shared by all npatch
//! crates: geometry, colors, bitmaps with scoped pixel locking, paints and
//! shaders, the `Canvas` trait that renderers implement, configuration, and
//! error types.

pub mod bitmap;
pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod geom;
pub mod paint;

pub use bitmap::{Bitmap, PixelLock};
pub use canvas::{Canvas, Mesh};
pub use color::Color;
pub use config::{NinePatchConfig, NineStrategy};
pub use error::{NpatchError, Result};
pub use geom::{IRect, Point, Rect};
pub use paint::{Paint, Shader, TileMode};

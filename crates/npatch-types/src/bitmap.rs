//! Source bitmaps with scoped pixel locking.
//!
//! A [`Bitmap`] is a cheap handle: cloning it shares the pixel buffer and the
//! lock counter. Drawing code reads pixels only while holding a
//! [`PixelLock`], which releases on drop along every exit path.

use std::cell::Cell;
use std::rc::Rc;

use crate::color::Color;
use crate::error::{NpatchError, Result};
use crate::geom::IRect;

/// An RGBA8 image, row-major, 4 bytes per pixel.
#[derive(Debug, Clone)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Option<Rc<Vec<u8>>>,
    locks: Rc<Cell<u32>>,
}

impl Bitmap {
    /// Wrap an RGBA8 buffer. The buffer must hold exactly `width * height`
    /// pixels.
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(NpatchError::Bitmap(format!(
                "{width}x{height} bitmap needs {expected} bytes, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels: Some(Rc::new(pixels)),
            locks: Rc::new(Cell::new(0)),
        })
    }

    /// A bitmap filled with one color.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 4);
        for _ in 0..count {
            pixels.extend_from_slice(&[color.r, color.g, color.b, color.a]);
        }
        Self {
            width,
            height,
            pixels: Some(Rc::new(pixels)),
            locks: Rc::new(Cell::new(0)),
        }
    }

    /// A bitmap with dimensions but no pixel storage. Locking it never
    /// reports ready.
    pub fn unallocated(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: None,
            locks: Rc::new(Cell::new(0)),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Full-image bounds as an integer rect.
    pub fn bounds(&self) -> IRect {
        IRect::from_wh(self.width as i32, self.height as i32)
    }

    /// Number of live [`PixelLock`] guards across all clones of this bitmap.
    pub fn lock_count(&self) -> u32 {
        self.locks.get()
    }

    /// Acquire a scoped pixel lock.
    pub fn lock_pixels(&self) -> PixelLock<'_> {
        self.locks.set(self.locks.get() + 1);
        PixelLock { bitmap: self }
    }

    /// Read one pixel without locking. Out-of-range or unallocated reads
    /// return `None`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let data = self.pixels.as_deref()?;
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        data.get(offset..offset + 4).map(Color::from_rgba_slice)
    }
}

/// RAII guard returned by [`Bitmap::lock_pixels`].
#[derive(Debug)]
pub struct PixelLock<'a> {
    bitmap: &'a Bitmap,
}

impl PixelLock<'_> {
    /// Whether the pixels can be drawn from.
    pub fn is_ready(&self) -> bool {
        self.pixels().is_some()
    }

    /// The locked pixel buffer, when present and correctly sized.
    pub fn pixels(&self) -> Option<&[u8]> {
        let bitmap = self.bitmap;
        let data = bitmap.pixels.as_deref()?;
        let expected = bitmap.width as usize * bitmap.height as usize * 4;
        (data.len() == expected).then_some(data.as_slice())
    }
}

impl Drop for PixelLock<'_> {
    fn drop(&mut self) {
        let locks = &self.bitmap.locks;
        locks.set(locks.get().saturating_sub(1));
    }
}

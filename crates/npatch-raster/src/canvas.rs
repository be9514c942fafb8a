//! Software RGBA framebuffer canvas.

use npatch_types::{Bitmap, Canvas, Color, IRect, Mesh, NpatchError, Paint, Rect, Result, Shader};

use crate::triangle::{Texture, fill_solid_triangle, fill_textured_triangle};

/// Software RGBA framebuffer canvas.
///
/// All draw calls write directly into an RGBA pixel buffer. `gpu_backed`
/// only changes what [`Canvas::is_gpu_backed`] reports, for driving
/// strategy selection in tests and tools.
pub struct RasterCanvas {
    width: u32,
    height: u32,
    buffer: Vec<u8>,
    clip: Option<IRect>,
    gpu_backed: bool,
}

/// Scale a color's alpha by `alpha / 255`.
pub(crate) fn modulate(color: Color, alpha: u8) -> Color {
    if alpha == 255 {
        return color;
    }
    let a = (color.a as u16 * alpha as u16 + 127) / 255;
    color.with_alpha(a as u8)
}

/// Pixel indices whose centers fall in `[lo, hi)`.
pub(crate) fn pixel_span(lo: f32, hi: f32) -> (i64, i64) {
    ((lo - 0.5).ceil() as i64, (hi - 0.5).ceil() as i64)
}

impl RasterCanvas {
    /// Create a transparent canvas with the given resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buffer: vec![0; width as usize * height as usize * 4],
            clip: None,
            gpu_backed: false,
        }
    }

    /// Report as GPU-backed so automatic strategy selection picks meshes.
    pub fn with_gpu_backed(mut self, gpu_backed: bool) -> Self {
        self.gpu_backed = gpu_backed;
        self
    }

    /// Get a read-only reference to the RGBA pixel buffer.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Buffer dimensions.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Fill the whole buffer with one color, ignoring the clip.
    pub fn clear(&mut self, color: Color) {
        for pixel in self.buffer.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Restrict drawing to `clip`.
    pub fn set_clip(&mut self, clip: IRect) {
        self.clip = Some(clip);
    }

    /// Reset clipping to the full canvas.
    pub fn reset_clip(&mut self) {
        self.clip = None;
    }

    /// Read one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        Some(Color::from_rgba_slice(&self.buffer[offset..offset + 4]))
    }

    /// Copy a region out as RGBA. Pixels outside the canvas read as
    /// transparent.
    pub fn read_pixels(&self, x: i32, y: i32, w: u32, h: u32) -> Vec<u8> {
        let mut out = vec![0u8; w as usize * h as usize * 4];
        for row in 0..h {
            let sy = i64::from(y) + i64::from(row);
            if sy < 0 || sy >= i64::from(self.height) {
                continue;
            }
            for col in 0..w {
                let sx = i64::from(x) + i64::from(col);
                if sx < 0 || sx >= i64::from(self.width) {
                    continue;
                }
                let src_idx = (sy as usize * self.width as usize + sx as usize) * 4;
                let dst_idx = (row as usize * w as usize + col as usize) * 4;
                out[dst_idx..dst_idx + 4].copy_from_slice(&self.buffer[src_idx..src_idx + 4]);
            }
        }
        out
    }

    /// Whether `(x, y)` is inside the canvas and the clip.
    fn writable(&self, x: i64, y: i64) -> bool {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return false;
        }
        match &self.clip {
            Some(clip) => {
                x >= i64::from(clip.left)
                    && x < i64::from(clip.right)
                    && y >= i64::from(clip.top)
                    && y < i64::from(clip.bottom)
            }
            None => true,
        }
    }

    /// Blend one pixel (source over). Performs bounds and clip checking.
    pub(crate) fn blend_pixel(&mut self, x: i64, y: i64, color: Color) {
        if color.a == 0 || !self.writable(x, y) {
            return;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        let dst = &mut self.buffer[offset..offset + 4];
        if color.a == 255 {
            dst.copy_from_slice(&[color.r, color.g, color.b, 255]);
            return;
        }
        let sa = color.a as u16;
        let da = 255 - sa;
        for (d, s) in dst[..3].iter_mut().zip([color.r, color.g, color.b]) {
            *d = ((s as u16 * sa + *d as u16 * da + 127) / 255) as u8;
        }
        dst[3] = (sa + (dst[3] as u16 * da + 127) / 255) as u8;
    }

    /// Pixel rows and columns the canvas can actually touch within `r`.
    fn visible_span(&self, r: &Rect) -> ((i64, i64), (i64, i64)) {
        let (x0, x1) = pixel_span(r.left, r.right);
        let (y0, y1) = pixel_span(r.top, r.bottom);
        (
            (x0.max(0), x1.min(i64::from(self.width))),
            (y0.max(0), y1.min(i64::from(self.height))),
        )
    }
}

impl Canvas for RasterCanvas {
    fn draw_bitmap_rect(
        &mut self,
        bitmap: &Bitmap,
        src: Option<IRect>,
        dst: Rect,
        paint: &Paint,
    ) -> Result<()> {
        let src = src.unwrap_or_else(|| bitmap.bounds());
        if src.is_empty() || dst.is_empty() {
            return Ok(());
        }
        let bmp = bitmap.bounds();
        if src.left < 0 || src.top < 0 || src.right > bmp.right || src.bottom > bmp.bottom {
            return Err(NpatchError::Canvas(format!(
                "source rect {src:?} outside {}x{} bitmap",
                bitmap.width(),
                bitmap.height()
            )));
        }

        let lock = bitmap.lock_pixels();
        let Some(pixels) = lock.pixels() else {
            log::debug!("bitmap rect skipped: pixels not ready");
            return Ok(());
        };

        let bw = bitmap.width() as usize;
        let scale_x = src.width() as f32 / dst.width();
        let scale_y = src.height() as f32 / dst.height();
        let ((x0, x1), (y0, y1)) = self.visible_span(&dst);
        for py in y0..y1 {
            let fy = ((py as f32 + 0.5 - dst.top) * scale_y).floor() as i32;
            let sy = (src.top + fy).clamp(src.top, src.bottom - 1) as usize;
            for px in x0..x1 {
                let fx = ((px as f32 + 0.5 - dst.left) * scale_x).floor() as i32;
                let sx = (src.left + fx).clamp(src.left, src.right - 1) as usize;
                let offset = (sy * bw + sx) * 4;
                let color = Color::from_rgba_slice(&pixels[offset..offset + 4]);
                self.blend_pixel(px, py, modulate(color, paint.alpha()));
            }
        }
        Ok(())
    }

    fn draw_triangle_mesh(&mut self, mesh: &Mesh<'_>, paint: &Paint) -> Result<()> {
        let vertex_count = mesh.vertex_count();
        if mesh.tex_coords.len() < vertex_count {
            return Err(NpatchError::Canvas(format!(
                "mesh has {vertex_count} vertices but {} texture coordinates",
                mesh.tex_coords.len()
            )));
        }
        if let Some(bad) = mesh.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(NpatchError::Canvas(format!(
                "mesh index {bad} out of range for {vertex_count} vertices"
            )));
        }

        match &paint.shader {
            Some(Shader::Bitmap {
                bitmap,
                tile_x,
                tile_y,
            }) => {
                let lock = bitmap.lock_pixels();
                let Some(pixels) = lock.pixels() else {
                    log::debug!("mesh skipped: shader pixels not ready");
                    return Ok(());
                };
                let texture = Texture {
                    pixels,
                    width: bitmap.width(),
                    height: bitmap.height(),
                    tile_x: *tile_x,
                    tile_y: *tile_y,
                };
                for [a, b, c] in mesh.triangles() {
                    let (a, b, c) = (a as usize, b as usize, c as usize);
                    fill_textured_triangle(
                        self,
                        [mesh.vertices[a], mesh.vertices[b], mesh.vertices[c]],
                        [mesh.tex_coords[a], mesh.tex_coords[b], mesh.tex_coords[c]],
                        &texture,
                        paint.alpha(),
                    );
                }
            }
            None => {
                for [a, b, c] in mesh.triangles() {
                    let verts = [a, b, c].map(|i| mesh.vertices[i as usize]);
                    fill_solid_triangle(self, verts, paint.color);
                }
            }
        }
        Ok(())
    }

    fn is_gpu_backed(&self) -> bool {
        self.gpu_backed
    }
}


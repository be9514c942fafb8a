//! Shared test utilities for npatch-mesh tests.
//!
//! Provides a [`RecordingCanvas`] that records all draw calls for assertion.

use npatch_types::{
    Bitmap, Canvas, IRect, Mesh, NpatchError, Paint, Point, Rect, Result, Shader, TileMode,
};

/// A recorded draw call from the recording canvas.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub enum DrawCall {
    BitmapRect {
        src: Option<IRect>,
        dst: Rect,
        alpha: u8,
        filter: bool,
    },
    Mesh {
        vertices: Vec<Point>,
        tex_coords: Vec<Point>,
        indices: Vec<u16>,
        has_colors: bool,
        tiles: Option<(TileMode, TileMode)>,
        alpha: u8,
    },
}

/// A canvas that records every call and the pixel-lock count it saw.
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
    pub locks_seen: Vec<u32>,
    gpu: bool,
    fail: bool,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            locks_seen: Vec::new(),
            gpu: false,
            fail: false,
        }
    }

    /// A canvas that reports itself as GPU-backed.
    pub fn gpu() -> Self {
        Self {
            gpu: true,
            ..Self::new()
        }
    }

    /// A canvas whose draw calls all fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    fn check(&self) -> Result<()> {
        if self.fail {
            Err(NpatchError::Canvas("recording canvas set to fail".into()))
        } else {
            Ok(())
        }
    }

    /// Count of `Mesh` calls.
    pub fn mesh_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Mesh { .. }))
            .count()
    }

    /// `(src, dst)` of every `BitmapRect` call, in order.
    pub fn rect_calls(&self) -> Vec<(Option<IRect>, Rect)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::BitmapRect { src, dst, .. } => Some((*src, *dst)),
                DrawCall::Mesh { .. } => None,
            })
            .collect()
    }

    /// Raw bit patterns of every mesh call, for exact comparisons.
    pub fn mesh_bits(&self) -> Vec<u32> {
        let mut bits = Vec::new();
        for call in &self.calls {
            if let DrawCall::Mesh {
                vertices,
                tex_coords,
                indices,
                ..
            } = call
            {
                for p in vertices.iter().chain(tex_coords) {
                    bits.push(p.x.to_bits());
                    bits.push(p.y.to_bits());
                }
                bits.extend(indices.iter().map(|&i| u32::from(i)));
            }
        }
        bits
    }
}

impl Canvas for RecordingCanvas {
    fn draw_bitmap_rect(
        &mut self,
        bitmap: &Bitmap,
        src: Option<IRect>,
        dst: Rect,
        paint: &Paint,
    ) -> Result<()> {
        self.check()?;
        self.locks_seen.push(bitmap.lock_count());
        self.calls.push(DrawCall::BitmapRect {
            src,
            dst,
            alpha: paint.alpha(),
            filter: paint.filter,
        });
        Ok(())
    }

    fn draw_triangle_mesh(&mut self, mesh: &Mesh<'_>, paint: &Paint) -> Result<()> {
        self.check()?;
        let tiles = match &paint.shader {
            Some(Shader::Bitmap {
                bitmap,
                tile_x,
                tile_y,
            }) => {
                self.locks_seen.push(bitmap.lock_count());
                Some((*tile_x, *tile_y))
            }
            None => None,
        };
        self.calls.push(DrawCall::Mesh {
            vertices: mesh.vertices.to_vec(),
            tex_coords: mesh.tex_coords.to_vec(),
            indices: mesh.indices.to_vec(),
            has_colors: mesh.colors.is_some(),
            tiles,
            alpha: paint.alpha(),
        });
        Ok(())
    }

    fn is_gpu_backed(&self) -> bool {
        self.gpu
    }
}

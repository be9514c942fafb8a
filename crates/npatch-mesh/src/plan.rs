//! Mesh-or-fallback decision.
//!
//! [`plan_mesh`] runs before any mesh storage exists. It either yields the
//! parameters of a mesh or tells the caller to draw the whole bitmap into
//! the bounds with one rect blit.

use npatch_types::Rect;

use crate::divs::{stretch_count, stretch_factor};

/// Largest vertex count addressable by 16-bit indices.
pub const MAX_MESH_VERTICES: usize = u16::MAX as usize + 1;

/// Why a draw took the whole-bounds bitmap-rect path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// Neither axis has a stretch segment.
    NoStretch,
    /// The destination is narrower than the fixed content.
    NegativeStretchX,
    /// The destination is shorter than the fixed content.
    NegativeStretchY,
    /// The mesh would overflow 16-bit indices.
    TooManyVertices,
}

/// Everything needed to fill a mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshParams<'a> {
    pub x_divs: &'a [i32],
    pub y_divs: &'a [i32],
    pub stretch_x: f32,
    pub stretch_y: f32,
    pub width: u32,
    pub height: u32,
}

impl MeshParams<'_> {
    /// Vertices per row.
    pub fn row_len(&self) -> usize {
        self.x_divs.len() + 2
    }

    pub fn row_count(&self) -> usize {
        self.y_divs.len() + 2
    }

    pub fn vertex_count(&self) -> usize {
        self.row_len() * self.row_count()
    }

    /// Two triangles per cell.
    pub fn index_count(&self) -> usize {
        (self.x_divs.len() + 1) * (self.y_divs.len() + 1) * 6
    }
}

/// Outcome of [`plan_mesh`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshPlan<'a> {
    Mesh(MeshParams<'a>),
    BitmapRect(FallbackReason),
}

/// Decide between a mesh and a single bitmap-rect draw.
///
/// `y_divs` should already be trimmed. An axis without stretch segments gets
/// a stretch factor of zero.
pub fn plan_mesh<'a>(
    bounds: &Rect,
    width: u32,
    height: u32,
    x_divs: &'a [i32],
    y_divs: &'a [i32],
) -> MeshPlan<'a> {
    if stretch_count(x_divs.len()) == 0 && stretch_count(y_divs.len()) == 0 {
        return MeshPlan::BitmapRect(FallbackReason::NoStretch);
    }

    let stretch_x = stretch_factor(x_divs, width, bounds.width()).unwrap_or(0.0);
    if stretch_x < 0.0 {
        return MeshPlan::BitmapRect(FallbackReason::NegativeStretchX);
    }
    let stretch_y = stretch_factor(y_divs, height, bounds.height()).unwrap_or(0.0);
    if stretch_y < 0.0 {
        return MeshPlan::BitmapRect(FallbackReason::NegativeStretchY);
    }

    let params = MeshParams {
        x_divs,
        y_divs,
        stretch_x,
        stretch_y,
        width,
        height,
    };
    if params.vertex_count() > MAX_MESH_VERTICES {
        return MeshPlan::BitmapRect(FallbackReason::TooManyVertices);
    }
    MeshPlan::Mesh(params)
}

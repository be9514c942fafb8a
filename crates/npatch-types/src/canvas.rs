//! Canvas trait definition and the borrowed mesh view.
//!
//! Every renderer implements [`Canvas`]. Nine-patch drawing dispatches all
//! output through these two calls -- it never touches a backend directly.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::error::Result;
use crate::geom::{IRect, Point, Rect};
use crate::paint::Paint;

/// A triangle mesh borrowed from the caller's scratch storage.
///
/// Vertices and texture coordinates are parallel arrays. Texture
/// coordinates are in bitmap pixel space. Every three entries of `indices`
/// form one triangle.
#[derive(Debug, Clone, Copy)]
pub struct Mesh<'a> {
    pub vertices: &'a [Point],
    pub tex_coords: &'a [Point],
    pub colors: Option<&'a [Color]>,
    pub indices: &'a [u16],
}

impl<'a> Mesh<'a> {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Iterate triangles as index triples. A trailing partial triple is
    /// ignored.
    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + 'a {
        let indices = self.indices;
        indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

/// Rendering target trait.
///
/// # Required Methods
///
/// `draw_bitmap_rect` and `draw_triangle_mesh` cover everything the
/// nine-patch drawer emits.
///
/// # Optional Methods
///
/// `is_gpu_backed` steers automatic strategy selection and defaults to a
/// raster answer.
pub trait Canvas {
    /// Draw `src` (or the whole bitmap when `None`) scaled into `dst`.
    fn draw_bitmap_rect(
        &mut self,
        bitmap: &Bitmap,
        src: Option<IRect>,
        dst: Rect,
        paint: &Paint,
    ) -> Result<()>;

    /// Draw an indexed triangle list. Color comes from `paint.shader`,
    /// sampled at the interpolated texture coordinates.
    fn draw_triangle_mesh(&mut self, mesh: &Mesh<'_>, paint: &Paint) -> Result<()>;

    /// Whether this canvas renders through a GPU, where mesh vertex math is
    /// preferred over rect decomposition.
    fn is_gpu_backed(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangles_group_by_three() {
        let verts = [Point::ZERO; 4];
        let indices = [0u16, 3, 1, 0, 2, 3, 7];
        let mesh = Mesh {
            vertices: &verts,
            tex_coords: &verts,
            colors: None,
            indices: &indices,
        };
        let tris: Vec<_> = mesh.triangles().collect();
        assert_eq!(tris, vec![[0, 3, 1], [0, 2, 3]]);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 7);
    }

    struct NullCanvas;

    impl Canvas for NullCanvas {
        fn draw_bitmap_rect(
            &mut self,
            _bitmap: &Bitmap,
            _src: Option<IRect>,
            _dst: Rect,
            _paint: &Paint,
        ) -> Result<()> {
            Ok(())
        }

        fn draw_triangle_mesh(&mut self, _mesh: &Mesh<'_>, _paint: &Paint) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_is_raster() {
        assert!(!NullCanvas.is_gpu_backed());
    }
}

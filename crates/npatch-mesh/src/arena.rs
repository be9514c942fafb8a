//! Single-allocation scratch storage for one mesh.
//!
//! Vertices, texture coordinates and indices live in one `Vec<u32>` and are
//! handed out as three non-overlapping typed views.

use npatch_types::Point;

/// Scratch storage sized for exactly one mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshArena {
    storage: Vec<u32>,
    vertex_count: usize,
    index_count: usize,
}

/// Mutable views over a [`MeshArena`].
pub struct ArenaViews<'a> {
    pub vertices: &'a mut [Point],
    pub tex_coords: &'a mut [Point],
    pub indices: &'a mut [u16],
}

impl MeshArena {
    /// Allocate room for `vertex_count` vertex/texcoord pairs and
    /// `index_count` 16-bit indices.
    pub fn new(vertex_count: usize, index_count: usize) -> Self {
        let words = Self::point_words(vertex_count) * 2 + index_count.div_ceil(2);
        Self {
            storage: vec![0; words],
            vertex_count,
            index_count,
        }
    }

    /// `u32` words occupied by one point array.
    fn point_words(vertex_count: usize) -> usize {
        vertex_count * (size_of::<Point>() / size_of::<u32>())
    }

    /// Total allocation in bytes.
    pub fn byte_len(&self) -> usize {
        self.storage.len() * size_of::<u32>()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn index_count(&self) -> usize {
        self.index_count
    }

    pub fn views_mut(&mut self) -> ArenaViews<'_> {
        let point_words = Self::point_words(self.vertex_count);
        let (verts, rest) = self.storage.split_at_mut(point_words);
        let (texs, indices) = rest.split_at_mut(point_words);
        let indices: &mut [u16] = bytemuck::cast_slice_mut(indices);
        ArenaViews {
            vertices: bytemuck::cast_slice_mut(verts),
            tex_coords: bytemuck::cast_slice_mut(texs),
            indices: &mut indices[..self.index_count],
        }
    }

    pub fn vertices(&self) -> &[Point] {
        let point_words = Self::point_words(self.vertex_count);
        bytemuck::cast_slice(&self.storage[..point_words])
    }

    pub fn tex_coords(&self) -> &[Point] {
        let point_words = Self::point_words(self.vertex_count);
        bytemuck::cast_slice(&self.storage[point_words..point_words * 2])
    }

    pub fn indices(&self) -> &[u16] {
        let point_words = Self::point_words(self.vertex_count);
        let indices: &[u16] = bytemuck::cast_slice(&self.storage[point_words * 2..]);
        &indices[..self.index_count]
    }
}

//! Mesh assembly: sizing, index selection and row filling in one pass.

use npatch_types::{Mesh, Rect};

use crate::arena::MeshArena;
use crate::indices::{G3X3_INDICES, fill_indices, uses_static_table};
use crate::plan::MeshParams;
use crate::row::fill_rows;

/// A fully built mesh that owns its scratch storage.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltMesh {
    arena: MeshArena,
    index_count: usize,
    static_indices: bool,
}

impl BuiltMesh {
    /// Borrow the mesh for a draw call.
    pub fn mesh(&self) -> Mesh<'_> {
        let indices = if self.static_indices {
            &G3X3_INDICES[..self.index_count]
        } else {
            self.arena.indices()
        };
        Mesh {
            vertices: self.arena.vertices(),
            tex_coords: self.arena.tex_coords(),
            colors: None,
            indices,
        }
    }

    /// Whether indices come from the prebuilt 3x3 table.
    pub fn uses_static_indices(&self) -> bool {
        self.static_indices
    }

    /// Backing storage. Holds no index space when the static table is used.
    pub fn arena(&self) -> &MeshArena {
        &self.arena
    }
}

/// Build the mesh described by `params` over `bounds`.
pub fn build_mesh(params: &MeshParams<'_>, bounds: &Rect) -> BuiltMesh {
    let vertex_count = params.vertex_count();
    let index_count = params.index_count();
    let num_x_divs = params.x_divs.len();
    let num_y_divs = params.y_divs.len();

    let static_indices = uses_static_table(num_x_divs, num_y_divs);
    let arena_indices = if static_indices { 0 } else { index_count };
    let mut arena = MeshArena::new(vertex_count, arena_indices);
    {
        let views = arena.views_mut();
        if !static_indices {
            let written = fill_indices(views.indices, num_x_divs + 1, num_y_divs + 1);
            debug_assert_eq!(written, index_count);
        }
        fill_rows(views.vertices, views.tex_coords, bounds, params);
    }

    log::trace!(
        "built {}x{} mesh: {vertex_count} vertices, {index_count} indices, {} bytes scratch",
        params.row_len(),
        params.row_count(),
        arena.byte_len()
    );

    BuiltMesh {
        arena,
        index_count,
        static_indices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use npatch_types::Point;

    fn params<'a>(x_divs: &'a [i32], y_divs: &'a [i32]) -> MeshParams<'a> {
        MeshParams {
            x_divs,
            y_divs,
            stretch_x: 120.0,
            stretch_y: 120.0,
            width: 100,
            height: 100,
        }
    }

    #[test]
    fn nine_patch_uses_static_table() {
        let divs = [10, 90];
        let built = build_mesh(&params(&divs, &divs), &Rect::from_ltrb(0.0, 0.0, 200.0, 200.0));
        assert!(built.uses_static_indices());
        let mesh = built.mesh();
        assert_eq!(mesh.vertex_count(), 16);
        assert_eq!(mesh.indices, &G3X3_INDICES[..]);
        assert!(mesh.colors.is_none());
    }

    #[test]
    fn static_table_leaves_indices_out_of_arena() {
        let divs = [10, 90];
        let built = build_mesh(&params(&divs, &divs), &Rect::from_ltrb(0.0, 0.0, 200.0, 200.0));
        assert_eq!(built.arena().byte_len(), 16 * 8 * 2);
        assert!(built.arena().indices().is_empty());
        assert_eq!(built.mesh().index_count(), 54);
    }

    #[test]
    fn three_by_two_uses_table_prefix() {
        let x_divs = [10, 90];
        let y_divs = [50];
        let built = build_mesh(
            &params(&x_divs, &y_divs),
            &Rect::from_ltrb(0.0, 0.0, 200.0, 200.0),
        );
        let mesh = built.mesh();
        assert_eq!(mesh.vertex_count(), 12);
        assert_eq!(mesh.indices, &G3X3_INDICES[..36]);
    }

    #[test]
    fn general_shape_fills_arena_indices() {
        let x_divs = [10, 20, 30, 40];
        let y_divs = [10, 90];
        let built = build_mesh(
            &params(&x_divs, &y_divs),
            &Rect::from_ltrb(0.0, 0.0, 200.0, 200.0),
        );
        assert!(!built.uses_static_indices());
        let mesh = built.mesh();
        assert_eq!(mesh.vertex_count(), 6 * 4);
        assert_eq!(mesh.index_count(), 5 * 3 * 6);
        assert_eq!(&mesh.indices[..6], &[0, 7, 1, 0, 6, 7]);
        assert_eq!(built.arena().indices(), mesh.indices);
        assert_eq!(built.arena().byte_len(), 24 * 8 * 2 + 90 * 2);
    }

    #[test]
    fn corners_are_exact() {
        let divs = [10, 90];
        let bounds = Rect::from_ltrb(5.0, 6.0, 205.0, 206.0);
        let built = build_mesh(&params(&divs, &divs), &bounds);
        let mesh = built.mesh();
        assert_eq!(mesh.vertices[0], Point::new(5.0, 6.0));
        assert_eq!(mesh.vertices[15], Point::new(205.0, 206.0));
        assert_eq!(mesh.tex_coords[0], Point::new(0.0, 0.0));
        assert_eq!(mesh.tex_coords[15], Point::new(100.0, 100.0));
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        /// An extent and sorted divisions within `[0, extent]`.
        fn arb_axis() -> impl Strategy<Value = (u32, Vec<i32>)> {
            (1u32..200).prop_flat_map(|extent| {
                (
                    Just(extent),
                    proptest::collection::vec(0..=extent as i32, 0..20).prop_map(|mut v| {
                        v.sort_unstable();
                        v
                    }),
                )
            })
        }

        proptest! {
            #[test]
            fn counts_bounds_and_corners(
                (width, x_divs) in arb_axis(),
                (height, y_divs) in arb_axis(),
                stretch_x in 0.0f32..500.0,
                stretch_y in 0.0f32..500.0,
            ) {
                let params = MeshParams { x_divs: &x_divs, y_divs: &y_divs, stretch_x, stretch_y, width, height };
                let bounds = Rect::from_ltrb(-3.0, 4.0, 640.0, 480.0);
                let built = build_mesh(&params, &bounds);
                let mesh = built.mesh();

                let vertex_count = (x_divs.len() + 2) * (y_divs.len() + 2);
                prop_assert_eq!(mesh.vertex_count(), vertex_count);
                prop_assert_eq!(mesh.tex_coords.len(), vertex_count);
                prop_assert_eq!(mesh.index_count(), (x_divs.len() + 1) * (y_divs.len() + 1) * 6);
                prop_assert!(mesh.indices.iter().all(|&i| (i as usize) < vertex_count));

                prop_assert_eq!(mesh.tex_coords[0], Point::new(0.0, 0.0));
                prop_assert_eq!(
                    mesh.tex_coords[vertex_count - 1],
                    Point::new(width as f32, height as f32)
                );
                prop_assert_eq!(mesh.vertices[0], Point::new(bounds.left, bounds.top));
                prop_assert_eq!(
                    mesh.vertices[vertex_count - 1],
                    Point::new(bounds.right, bounds.bottom)
                );
            }

            #[test]
            fn build_is_deterministic(
                (width, x_divs) in arb_axis(),
                (height, y_divs) in arb_axis(),
                stretch in 0.0f32..100.0,
            ) {
                let params = MeshParams { x_divs: &x_divs, y_divs: &y_divs, stretch_x: stretch, stretch_y: stretch, width, height };
                let bounds = Rect::from_ltrb(0.5, 0.25, 333.3, 222.2);
                prop_assert_eq!(build_mesh(&params, &bounds), build_mesh(&params, &bounds));
            }
        }
    }
}

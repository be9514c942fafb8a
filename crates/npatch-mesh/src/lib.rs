//! npatch-mesh: nine-patch and N-patch stretchable mesh drawing.
//!
//! A bitmap is split along each axis by a list of divisions into segments
//! that alternate fixed / stretch. Fixed segments draw at 1:1, stretch
//! segments absorb the remaining destination space. The drawer turns that
//! into one textured triangle mesh, or into plain bitmap-rect blits when a
//! mesh is unsuitable. All output goes through the `Canvas` trait.

pub mod arena;
pub mod builder;
pub mod divs;
pub mod draw;
pub mod indices;
pub mod plan;
pub mod row;

#[cfg(test)]
pub(crate) mod test_utils;

pub use builder::{BuiltMesh, build_mesh};
pub use draw::{
    draw_mesh, draw_mesh_with, draw_nine, draw_nine_via_rects, draw_nine_with, nine_divs,
};
pub use plan::{FallbackReason, MeshParams, MeshPlan, plan_mesh};

//! Vertex and texture-coordinate row generation.

use npatch_types::{Point, Rect};

use crate::plan::MeshParams;

/// Distance from the previous division to division `index` in destination
/// space. Even divisions close a fixed segment and keep the source length;
/// odd divisions close a stretch segment.
fn advance(index: usize, coord: i32, prev: i32, stretch: f32) -> f32 {
    if index & 1 == 1 {
        stretch
    } else {
        (coord - prev) as f32
    }
}

/// Fill one row of `x_divs.len() + 2` vertex/texcoord pairs at height `vy`
/// with texture row `ty`.
#[allow(clippy::too_many_arguments)]
pub fn fill_row(
    verts: &mut [Point],
    texs: &mut [Point],
    vy: f32,
    ty: f32,
    bounds: &Rect,
    x_divs: &[i32],
    stretch_x: f32,
    width: u32,
) {
    debug_assert_eq!(verts.len(), x_divs.len() + 2);
    debug_assert_eq!(texs.len(), x_divs.len() + 2);

    let last = x_divs.len() + 1;
    let mut vx = bounds.left;
    verts[0].set(vx, vy);
    texs[0].set(0.0, ty);

    let mut prev = 0;
    for (x, &div) in x_divs.iter().enumerate() {
        vx += advance(x, div, prev, stretch_x);
        prev = div;
        verts[x + 1].set(vx, vy);
        texs[x + 1].set(div as f32, ty);
    }

    verts[last].set(bounds.right, vy);
    texs[last].set(width as f32, ty);
}

/// Fill every row of the mesh: top edge, one row per y-division, bottom
/// edge.
pub fn fill_rows(verts: &mut [Point], texs: &mut [Point], bounds: &Rect, params: &MeshParams<'_>) {
    let row_len = params.row_len();
    let x_divs = params.x_divs;
    let mut rows = verts
        .chunks_exact_mut(row_len)
        .zip(texs.chunks_exact_mut(row_len));

    let mut emit = |vy: f32, ty: f32| {
        if let Some((v, t)) = rows.next() {
            fill_row(v, t, vy, ty, bounds, x_divs, params.stretch_x, params.width);
        }
    };

    emit(bounds.top, 0.0);
    let mut vy = bounds.top;
    let mut prev = 0;
    for (y, &div) in params.y_divs.iter().enumerate() {
        vy += advance(y, div, prev, params.stretch_y);
        prev = div;
        emit(vy, div as f32);
    }
    emit(bounds.bottom, params.height as f32);
}

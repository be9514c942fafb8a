//! Triangle rasterization with pixel-center sampling.
//!
//! Coverage uses edge functions with a top-left fill rule, so two triangles
//! sharing an edge never both cover a pixel on it.

use npatch_types::{Color, Point, TileMode};

use crate::canvas::{RasterCanvas, modulate, pixel_span};

/// A locked bitmap ready for sampling in pixel-space coordinates.
pub(crate) struct Texture<'a> {
    pub pixels: &'a [u8],
    pub width: u32,
    pub height: u32,
    pub tile_x: TileMode,
    pub tile_y: TileMode,
}

impl Texture<'_> {
    /// Nearest texel at `(u, v)`.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        let x = self.tile_x.apply(u.floor() as i64, self.width) as usize;
        let y = self.tile_y.apply(v.floor() as i64, self.height) as usize;
        let offset = (y * self.width as usize + x) * 4;
        Color::from_rgba_slice(&self.pixels[offset..offset + 4])
    }
}

fn edge(a: Point, b: Point, px: f32, py: f32) -> f32 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

/// Top edges run rightwards horizontally, left edges run upwards, for
/// triangles with positive `edge` area.
fn is_top_left(a: Point, b: Point) -> bool {
    (a.y == b.y && b.x > a.x) || b.y < a.y
}

fn covers(w: f32, top_left: bool) -> bool {
    w > 0.0 || (w == 0.0 && top_left)
}

/// Visit every covered pixel with its barycentric weights.
fn rasterize(
    canvas: &mut RasterCanvas,
    mut v: [Point; 3],
    mut order: [usize; 3],
    mut plot: impl FnMut(&mut RasterCanvas, i64, i64, [f32; 3], [usize; 3]),
) {
    let mut area = edge(v[0], v[1], v[2].x, v[2].y);
    if area == 0.0 || !area.is_finite() {
        return;
    }
    if area < 0.0 {
        v.swap(1, 2);
        order.swap(1, 2);
        area = -area;
    }

    let min_x = v[0].x.min(v[1].x).min(v[2].x);
    let max_x = v[0].x.max(v[1].x).max(v[2].x);
    let min_y = v[0].y.min(v[1].y).min(v[2].y);
    let max_y = v[0].y.max(v[1].y).max(v[2].y);
    let (w, h) = canvas.dimensions();
    let (x0, x1) = pixel_span(min_x, max_x + 1.0);
    let (y0, y1) = pixel_span(min_y, max_y + 1.0);
    let (x0, x1) = (x0.max(0), x1.min(i64::from(w)));
    let (y0, y1) = (y0.max(0), y1.min(i64::from(h)));

    let tl = [
        is_top_left(v[1], v[2]),
        is_top_left(v[2], v[0]),
        is_top_left(v[0], v[1]),
    ];
    for py in y0..y1 {
        let cy = py as f32 + 0.5;
        for px in x0..x1 {
            let cx = px as f32 + 0.5;
            let w0 = edge(v[1], v[2], cx, cy);
            let w1 = edge(v[2], v[0], cx, cy);
            let w2 = edge(v[0], v[1], cx, cy);
            if covers(w0, tl[0]) && covers(w1, tl[1]) && covers(w2, tl[2]) {
                plot(&mut *canvas, px, py, [w0 / area, w1 / area, w2 / area], order);
            }
        }
    }
}

/// Fill a triangle sampling `texture` at interpolated coordinates.
pub(crate) fn fill_textured_triangle(
    canvas: &mut RasterCanvas,
    verts: [Point; 3],
    texs: [Point; 3],
    texture: &Texture<'_>,
    alpha: u8,
) {
    rasterize(canvas, verts, [0, 1, 2], |canvas, px, py, bary, order| {
        let mut u = 0.0;
        let mut v = 0.0;
        for (weight, &i) in bary.iter().zip(&order) {
            u += weight * texs[i].x;
            v += weight * texs[i].y;
        }
        canvas.blend_pixel(px, py, modulate(texture.sample(u, v), alpha));
    });
}

/// Fill a triangle with one color.
pub(crate) fn fill_solid_triangle(canvas: &mut RasterCanvas, verts: [Point; 3], color: Color) {
    rasterize(canvas, verts, [0, 1, 2], |canvas, px, py, _, _| {
        canvas.blend_pixel(px, py, color);
    });
}

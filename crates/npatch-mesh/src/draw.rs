//! Nine-patch and N-patch drawing entry points.
//!
//! [`draw_mesh`] renders an arbitrary set of stretch divisions as one
//! triangle mesh. [`draw_nine`] is the margin-based convenience that picks
//! between the mesh and nine rect blits according to [`NinePatchConfig`].
//!
//! None of these report geometry problems as errors. Unusable input is a
//! no-op, input that cannot be meshed is drawn as one bitmap rect. The only
//! errors returned are the canvas's own.

use npatch_types::{Bitmap, Canvas, IRect, NinePatchConfig, Paint, Rect, Result, Shader};

use crate::builder::build_mesh;
use crate::divs::trim_y_divs;
use crate::plan::{MeshPlan, plan_mesh};

/// Copy of the caller's paint (or the default paint) with config hints
/// applied.
fn base_paint(paint: Option<&Paint>, config: &NinePatchConfig) -> Paint {
    let mut p = paint.cloned().unwrap_or_default();
    p.filter |= config.filter;
    p
}

fn is_drawable(bounds: &Rect, bitmap: &Bitmap) -> bool {
    !bounds.is_empty() && bitmap.width() != 0 && bitmap.height() != 0
}

/// Draw `bitmap` into `bounds`, stretching along the given divisions.
pub fn draw_mesh(
    canvas: &mut dyn Canvas,
    bounds: &Rect,
    bitmap: &Bitmap,
    x_divs: &[i32],
    y_divs: &[i32],
    paint: Option<&Paint>,
) -> Result<()> {
    draw_mesh_with(
        canvas,
        &NinePatchConfig::default(),
        bounds,
        bitmap,
        x_divs,
        y_divs,
        paint,
    )
}

/// [`draw_mesh`] with explicit options.
pub fn draw_mesh_with(
    canvas: &mut dyn Canvas,
    config: &NinePatchConfig,
    bounds: &Rect,
    bitmap: &Bitmap,
    x_divs: &[i32],
    y_divs: &[i32],
    paint: Option<&Paint>,
) -> Result<()> {
    if !is_drawable(bounds, bitmap) {
        return Ok(());
    }

    let lock = bitmap.lock_pixels();
    if !lock.is_ready() {
        log::debug!(
            "skipping nine-patch: {}x{} bitmap pixels not ready",
            bitmap.width(),
            bitmap.height()
        );
        return Ok(());
    }

    let y_divs = trim_y_divs(y_divs, bitmap.height() as i32);
    if config.log_divisions {
        for (i, d) in x_divs.iter().enumerate() {
            log::trace!("x_divs[{i}] {d}");
        }
        for (i, d) in y_divs.iter().enumerate() {
            log::trace!("y_divs[{i}] {d}");
        }
    }

    let paint = base_paint(paint, config);
    match plan_mesh(bounds, bitmap.width(), bitmap.height(), x_divs, y_divs) {
        MeshPlan::BitmapRect(reason) => {
            log::debug!("nine-patch falls back to bitmap rect: {reason:?}");
            canvas.draw_bitmap_rect(bitmap, None, *bounds, &paint)
        }
        MeshPlan::Mesh(params) => {
            let built = build_mesh(&params, bounds);
            let paint = paint.with_shader(Shader::clamped_bitmap(bitmap));
            canvas.draw_triangle_mesh(&built.mesh(), &paint)
        }
    }
}

/// Collapse an inverted inner pair `(a, b)` to one coordinate weighted by
/// the two margins. `start`/`end` are the outer edges.
fn collapse_f32(start: f32, end: f32, first: i32, second: i32) -> f32 {
    let total = first as f32 + second as f32;
    if total <= 0.0 {
        return start;
    }
    start + (end - start) * first as f32 / total
}

/// Source-space inner boundaries for one axis: `[first, extent - second]`,
/// collapsed to a single proportional coordinate when the margins overlap.
fn margin_divs(extent: i32, first: i32, second: i32) -> [i32; 2] {
    let a = first;
    let b = extent - second;
    let total = i64::from(first) + i64::from(second);
    if a > b && total > 0 {
        let c = (i64::from(extent) * i64::from(first) / total) as i32;
        [c, c]
    } else {
        [a, b]
    }
}

/// Stretch divisions equivalent to nine-patch `margins` on `bitmap`.
///
/// Margins are insets: `left`/`top` from the origin, `right`/`bottom` from
/// the far edges.
pub fn nine_divs(bitmap: &Bitmap, margins: &IRect) -> ([i32; 2], [i32; 2]) {
    (
        margin_divs(bitmap.width() as i32, margins.left, margins.right),
        margin_divs(bitmap.height() as i32, margins.top, margins.bottom),
    )
}

/// Draw a nine-patch with the default configuration.
pub fn draw_nine(
    canvas: &mut dyn Canvas,
    bounds: &Rect,
    bitmap: &Bitmap,
    margins: &IRect,
    paint: Option<&Paint>,
) -> Result<()> {
    draw_nine_with(
        canvas,
        &NinePatchConfig::default(),
        bounds,
        bitmap,
        margins,
        paint,
    )
}

/// Draw a nine-patch, choosing mesh or rects per `config.strategy`.
pub fn draw_nine_with(
    canvas: &mut dyn Canvas,
    config: &NinePatchConfig,
    bounds: &Rect,
    bitmap: &Bitmap,
    margins: &IRect,
    paint: Option<&Paint>,
) -> Result<()> {
    if !is_drawable(bounds, bitmap) {
        return Ok(());
    }
    if config.strategy.use_mesh(canvas.is_gpu_backed()) {
        let (x_divs, y_divs) = nine_divs(bitmap, margins);
        draw_mesh_with(canvas, config, bounds, bitmap, &x_divs, &y_divs, paint)
    } else {
        let paint = base_paint(paint, config);
        draw_nine_via_rects(canvas, bounds, bitmap, margins, &paint)
    }
}

/// Draw a nine-patch as exactly nine bitmap-rect blits.
///
/// Corners keep their source size, edges stretch along one axis and the
/// center along both. When the destination is too small for the margins,
/// the inner destination edges meet at a point weighted by the margins.
/// Margins that overlap inside the bitmap collapse the source edges the same
/// way, so each corner resamples only its share of the source instead of
/// the full margin.
pub fn draw_nine_via_rects(
    canvas: &mut dyn Canvas,
    dst: &Rect,
    bitmap: &Bitmap,
    margins: &IRect,
    paint: &Paint,
) -> Result<()> {
    let width = bitmap.width() as i32;
    let height = bitmap.height() as i32;
    let [sx1, sx2] = margin_divs(width, margins.left, margins.right);
    let [sy1, sy2] = margin_divs(height, margins.top, margins.bottom);
    let src_x = [0, sx1, sx2, width];
    let src_y = [0, sy1, sy2, height];

    let mut dst_x = [
        dst.left,
        dst.left + margins.left as f32,
        dst.right - margins.right as f32,
        dst.right,
    ];
    let mut dst_y = [
        dst.top,
        dst.top + margins.top as f32,
        dst.bottom - margins.bottom as f32,
        dst.bottom,
    ];
    if dst_x[1] > dst_x[2] {
        dst_x[1] = collapse_f32(dst_x[0], dst_x[3], margins.left, margins.right);
        dst_x[2] = dst_x[1];
    }
    if dst_y[1] > dst_y[2] {
        dst_y[1] = collapse_f32(dst_y[0], dst_y[3], margins.top, margins.bottom);
        dst_y[2] = dst_y[1];
    }

    for y in 0..3 {
        for x in 0..3 {
            let src = IRect::from_ltrb(src_x[x], src_y[y], src_x[x + 1], src_y[y + 1]);
            let d = Rect::from_ltrb(dst_x[x], dst_y[y], dst_x[x + 1], dst_y[y + 1]);
            canvas.draw_bitmap_rect(bitmap, Some(src), d, paint)?;
        }
    }
    Ok(())
}

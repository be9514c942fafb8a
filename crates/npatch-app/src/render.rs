//! Execute a render job against the software canvas.

use npatch_mesh::{draw_mesh_with, draw_nine_with};
use npatch_raster::RasterCanvas;
use npatch_types::{Bitmap, Paint};

use crate::job::{RenderJob, Slicing};

/// Draw `bitmap` as described by `job` into a fresh canvas.
pub fn render(job: &RenderJob, bitmap: &Bitmap) -> anyhow::Result<RasterCanvas> {
    let mut canvas = RasterCanvas::new(job.canvas_width, job.canvas_height);
    canvas.clear(job.background);

    let paint = Paint {
        color: Paint::default().color.with_alpha(job.alpha),
        ..Paint::default()
    };
    match &job.slicing {
        Slicing::Margins(margins) => {
            log::info!(
                "drawing nine-patch {}x{} -> {:?} (margins {margins:?}, {:?})",
                bitmap.width(),
                bitmap.height(),
                job.bounds,
                job.nine.strategy
            );
            draw_nine_with(&mut canvas, &job.nine, &job.bounds, bitmap, margins, Some(&paint))?;
        }
        Slicing::Divisions { x_divs, y_divs } => {
            log::info!(
                "drawing N-patch {}x{} -> {:?} ({} x divs, {} y divs)",
                bitmap.width(),
                bitmap.height(),
                job.bounds,
                x_divs.len(),
                y_divs.len()
            );
            draw_mesh_with(
                &mut canvas,
                &job.nine,
                &job.bounds,
                bitmap,
                x_divs,
                y_divs,
                Some(&paint),
            )?;
        }
    }
    Ok(canvas)
}

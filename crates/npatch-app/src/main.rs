//! Command-line nine-patch renderer.
//!
//! Reads a render job (TOML), loads the source PNG, draws it stretched into
//! a software canvas and writes the result as PNG.
//!
//! Usage:
//!   npatch-render job.toml
//!   NPATCH_JOB=job.toml npatch-render

mod image_io;
mod job;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};

use job::RenderJob;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let job_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("NPATCH_JOB").ok())
        .map(PathBuf::from)
        .context("usage: npatch-render <job.toml> (or set NPATCH_JOB)")?;

    let job = RenderJob::load(&job_path)?;
    log::info!(
        "job {}: {} -> {} ({}x{})",
        job_path.display(),
        job.input.display(),
        job.output.display(),
        job.canvas_width,
        job.canvas_height
    );

    let bitmap = image_io::load_png(&job.input)?;
    let canvas = render::render(&job, &bitmap)?;
    let (w, h) = canvas.dimensions();
    image_io::save_png(&job.output, w, h, canvas.buffer())?;
    log::info!("wrote {}", job.output.display());
    Ok(())
}

//! PNG loading and saving.

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, bail};
use npatch_types::Bitmap;

/// Decode a PNG into an RGBA8 bitmap.
///
/// Palette, low-bit-depth and 16-bit images are expanded or stripped to
/// 8 bits per channel; gray and RGB gain an opaque alpha channel.
pub fn load_png(path: &Path) -> anyhow::Result<Bitmap> {
    let file = fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut decoder = png::Decoder::new(file);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        other => bail!("unsupported PNG color type {other:?} in {}", path.display()),
    };
    log::debug!("loaded {} ({}x{})", path.display(), info.width, info.height);
    Ok(Bitmap::from_rgba(info.width, info.height, rgba)?)
}

/// Save RGBA pixel data as a PNG file.
pub fn save_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> anyhow::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = fs::File::create(path)?;
    let writer = BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}

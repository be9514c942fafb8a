//! Render job description (`job.toml`).
//!
//! ```toml
//! input = "button.png"
//! output = "button_wide.png"
//! canvas_width = 320
//! canvas_height = 120
//! background = "#202028"
//!
//! [bounds]
//! x = 10.0
//! y = 10.0
//! w = 300.0
//! h = 100.0
//!
//! [margins]
//! left = 12
//! top = 12
//! right = 12
//! bottom = 12
//!
//! [nine]
//! strategy = "rects"
//! ```
//!
//! `x_divs`/`y_divs` may be given instead of `[margins]` for an N-patch.

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use npatch_types::color::parse_hex_color;
use npatch_types::{Color, IRect, NinePatchConfig, Rect};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoundsDef {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MarginsDef {
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub right: i32,
    #[serde(default)]
    pub bottom: i32,
}

/// How the bitmap is split.
#[derive(Debug, Clone, PartialEq)]
pub enum Slicing {
    Margins(IRect),
    Divisions { x_divs: Vec<i32>, y_divs: Vec<i32> },
}

#[derive(Debug, Clone, Deserialize)]
struct RawJob {
    input: PathBuf,
    output: PathBuf,
    canvas_width: u32,
    canvas_height: u32,
    #[serde(default)]
    background: Option<String>,
    #[serde(default = "default_alpha")]
    alpha: u8,
    bounds: Option<BoundsDef>,
    margins: Option<MarginsDef>,
    x_divs: Option<Vec<i32>>,
    y_divs: Option<Vec<i32>>,
    #[serde(default)]
    nine: NinePatchConfig,
}

fn default_alpha() -> u8 {
    255
}

/// A validated render job with paths resolved against the job file.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub background: Color,
    pub alpha: u8,
    pub bounds: Rect,
    pub slicing: Slicing,
    pub nine: NinePatchConfig,
}

impl RenderJob {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading job file {}", path.display()))?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&text, base)
    }

    /// Parse job TOML. Relative paths are joined onto `base`.
    pub fn parse(text: &str, base: &Path) -> anyhow::Result<Self> {
        let raw: RawJob = toml::from_str(text)?;
        if raw.canvas_width == 0 || raw.canvas_height == 0 {
            bail!(
                "canvas must be non-empty, got {}x{}",
                raw.canvas_width,
                raw.canvas_height
            );
        }

        let background = match raw.background.as_deref() {
            Some(hex) => {
                parse_hex_color(hex).with_context(|| format!("invalid background color {hex:?}"))?
            }
            None => Color::TRANSPARENT,
        };

        let bounds = match raw.bounds {
            Some(b) => Rect::from_xywh(b.x, b.y, b.w, b.h),
            None => Rect::from_xywh(0.0, 0.0, raw.canvas_width as f32, raw.canvas_height as f32),
        };

        let slicing = match (raw.margins, raw.x_divs, raw.y_divs) {
            (Some(_), Some(_), _) | (Some(_), _, Some(_)) => {
                bail!("give either [margins] or x_divs/y_divs, not both")
            }
            (Some(m), None, None) => {
                Slicing::Margins(IRect::from_ltrb(m.left, m.top, m.right, m.bottom))
            }
            (None, x, y) => {
                let x_divs = x.unwrap_or_default();
                let y_divs = y.unwrap_or_default();
                for (axis, divs) in [("x_divs", &x_divs), ("y_divs", &y_divs)] {
                    if divs.windows(2).any(|w| w[0] > w[1]) {
                        bail!("{axis} must be non-decreasing: {divs:?}");
                    }
                }
                Slicing::Divisions { x_divs, y_divs }
            }
        };

        Ok(Self {
            input: base.join(raw.input),
            output: base.join(raw.output),
            canvas_width: raw.canvas_width,
            canvas_height: raw.canvas_height,
            background,
            alpha: raw.alpha,
            bounds,
            slicing,
            nine: raw.nine,
        })
    }
}

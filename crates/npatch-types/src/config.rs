//! Nine-patch drawing configuration.
//!
//! Loaded from TOML:
//!
//! ```toml
//! strategy = "rects"    # "auto" | "mesh" | "rects"
//! log_divisions = true
//! filter = false
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Which path `draw_nine` takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NineStrategy {
    /// Mesh on GPU-backed canvases, nine rect blits elsewhere.
    #[default]
    Auto,
    /// Always build a triangle mesh.
    Mesh,
    /// Always decompose into nine bitmap-rect draws.
    Rects,
}

impl NineStrategy {
    /// Resolve `Auto` against the target canvas.
    pub fn use_mesh(self, gpu_backed: bool) -> bool {
        match self {
            NineStrategy::Auto => gpu_backed,
            NineStrategy::Mesh => true,
            NineStrategy::Rects => false,
        }
    }
}

/// Nine-patch drawing options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NinePatchConfig {
    #[serde(default)]
    pub strategy: NineStrategy,
    /// Dump normalized divisions at trace level before meshing.
    #[serde(default)]
    pub log_divisions: bool,
    /// Request filtered bitmap sampling on the paint used for drawing.
    #[serde(default)]
    pub filter: bool,
}

impl NinePatchConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded nine-patch config from {}: {config:?}", path.display());
        Ok(config)
    }
}

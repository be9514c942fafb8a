//! Error types for npatch.

use std::io;

/// Errors produced by the npatch crates.
///
/// Drawing itself never fails on bad geometry (it degrades to a no-op or a
/// cheaper fallback); these variants cover the collaborators around it.
#[derive(Debug, thiserror::Error)]
pub enum NpatchError {
    #[error("canvas error: {0}")]
    Canvas(String),

    #[error("bitmap error: {0}")]
    Bitmap(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, NpatchError>;

//! Error types for loading inputs and scaling coordinates

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a layout or point file
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to decode TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl LoadError {
    /// Create an I/O error for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors raised by the checked scaling wrappers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// The source range of a conversion has `min == max`
    #[error("zero-width {axis} range ({min}..{max}) cannot scale value {value}")]
    ZeroWidthRange {
        axis: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
}

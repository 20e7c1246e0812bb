//! Error types for colorscatter.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for colorscatter operations.
pub type Result<T> = std::result::Result<T, FigureError>;

/// Errors that can occur while building, exporting or presenting a figure.
#[derive(Debug, Error)]
pub enum FigureError {
    /// The x, y and color sequences do not have the same length.
    #[error("Sequence lengths differ: x={x}, y={y}, color={color}")]
    LengthMismatch {
        /// Number of x values.
        x: usize,
        /// Number of y values.
        y: usize,
        /// Number of color values.
        color: usize,
    },

    /// Failed to write a figure file.
    #[error("Failed to write file: {path}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a figure file.
    #[error("Failed to read file: {path}")]
    Read {
        /// Source path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// A layout patch was not a JSON object.
    #[error("Layout update must be a JSON object, got {kind}")]
    InvalidPatch {
        /// JSON type of the rejected patch.
        kind: &'static str,
    },

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FigureError {
    /// Create a LengthMismatch error.
    pub fn length_mismatch(x: usize, y: usize, color: usize) -> Self {
        Self::LengthMismatch { x, y, color }
    }

    /// Create a Write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a Read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

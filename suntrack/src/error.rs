//! Error types for the sun tracking pipeline.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by frame loading, detection and export.
///
/// A frame with no detectable bright region is NOT an error; it is
/// reported as an empty detection result.
#[derive(Debug, Error)]
pub enum TrackError {
    /// Detector configuration failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The frame is too small to survive the border crop.
    #[error("Frame '{id}' ({width}x{height}) too small for a {margin}px border crop")]
    FrameTooSmall {
        id: String,
        width: usize,
        height: usize,
        margin: usize,
    },

    /// An input image could not be read or decoded.
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The input directory could not be enumerated.
    #[error("Failed to read directory {}: {source}", .path.display())]
    Enumerate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The result table could not be written.
    #[error("Failed to write table {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Standard Result type for all tracking operations.
pub type Result<T> = std::result::Result<T, TrackError>;

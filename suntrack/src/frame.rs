//! Frame and coordinate types shared across the pipeline.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in frame-local pixel coordinates.
///
/// `x` runs along columns, `y` along rows. Note that pixel arrays are
/// indexed `[y, x]` (row-major) while points carry `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A single grayscale photograph in the input sequence.
///
/// Pixel values are f32 in the 0..255 domain, row-major with shape
/// `(height, width)`. Frames are immutable once loaded.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Identifier derived from the file name (first 10 characters,
    /// encoding the capture date).
    pub id: String,
    /// Luminance plane.
    pub data: Array2<f32>,
}

impl Frame {
    pub fn new(id: impl Into<String>, data: Array2<f32>) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }
}

/// One row of the result table: a frame identifier and the accepted
/// center, if any. `None` means no detection for that frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SunRecord {
    pub id: String,
    pub center: Option<Point>,
}

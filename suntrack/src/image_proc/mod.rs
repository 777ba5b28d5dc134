//! Image processing primitives for sun disc detection.
//!
//! Everything operates on ndarray planes: f32 luminance in the 0..255
//! domain, u8 binary masks. These stages are composed by the detector:
//! blur, threshold, morphological open, boundary extraction, minimal
//! enclosing circle.

pub mod blur;
pub mod edges;
pub mod enclosing;
pub mod morphology;
pub mod thresholding;

// Re-export key functionality for easier access
pub use blur::{gaussian_blur, gaussian_kernel, sigma_for_kernel};
pub use edges::boundary_points;
pub use enclosing::{min_enclosing_circle, Circle};
pub use morphology::{dilate, erode};
pub use thresholding::apply_threshold;

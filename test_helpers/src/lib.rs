//! Synthetic photograph generation for sun tracker validation.
//!
//! Builders for the two frame classes the detector has to tell apart: a
//! compact saturated sun disc, and a diffuse bright patch (haze, flare)
//! that fools a pure maximum search. Frames are f32 luminance planes in
//! the 0..255 domain, row-major `(height, width)`.

use image::GrayImage;
use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::Path;

/// A dark sky frame with a saturated sun disc at `(center_x, center_y)`.
///
/// The disc has a hard core of `peak` and a narrow Gaussian falloff at
/// the rim, so thresholding isolates a compact blob.
pub fn sun_disc_frame(
    width: usize,
    height: usize,
    center_x: f64,
    center_y: f64,
    radius: f64,
    peak: f32,
) -> Array2<f32> {
    let edge_softness = 2.0f64;
    let mut frame = Array2::<f32>::zeros((height, width));
    for ((y, x), value) in frame.indexed_iter_mut() {
        let dx = x as f64 - center_x;
        let dy = y as f64 - center_y;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= radius {
            *value = peak;
        } else {
            let overshoot = distance - radius;
            let falloff = (-(overshoot * overshoot) / (2.0 * edge_softness * edge_softness)).exp();
            *value = peak * falloff as f32;
        }
    }
    frame
}

/// A broad Gaussian brightness patch peaking below saturation.
///
/// Models haze or lens flare: bright enough to win a maximum search,
/// too diffuse and too dim to survive the region threshold.
pub fn diffuse_patch_frame(
    width: usize,
    height: usize,
    center_x: f64,
    center_y: f64,
    sigma: f64,
    peak: f32,
) -> Array2<f32> {
    let mut frame = Array2::<f32>::zeros((height, width));
    for ((y, x), value) in frame.indexed_iter_mut() {
        let dx = x as f64 - center_x;
        let dy = y as f64 - center_y;
        let r2 = dx * dx + dy * dy;
        *value = peak * (-r2 / (2.0 * sigma * sigma)).exp() as f32;
    }
    frame
}

/// Add uniform background noise in `[-amplitude, amplitude]`, seeded for
/// reproducibility. Results are clamped to the 0..255 domain.
pub fn add_noise(frame: &mut Array2<f32>, amplitude: f32, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for value in frame.iter_mut() {
        *value = (*value + rng.gen_range(-amplitude..amplitude)).clamp(0.0, 255.0);
    }
}

/// Save a frame as an 8-bit grayscale PNG.
pub fn save_png(path: &Path, frame: &Array2<f32>) -> Result<(), image::ImageError> {
    let (height, width) = frame.dim();
    let mut gray = GrayImage::new(width as u32, height as u32);
    for ((y, x), &value) in frame.indexed_iter() {
        gray.put_pixel(
            x as u32,
            y as u32,
            image::Luma([value.round().clamp(0.0, 255.0) as u8]),
        );
    }
    gray.save(path)
}

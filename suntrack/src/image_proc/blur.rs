//! Separable Gaussian smoothing.
//!
//! Suppresses pixel-level noise before the maximum search so a single
//! saturated pixel cannot dominate the result.

use ndarray::{Array2, ArrayView2};

/// Standard deviation derived from kernel size.
///
/// The conventional auto-sigma rule used when only a kernel size is
/// specified: `0.3 * ((k - 1) * 0.5 - 1) + 0.8`.
pub fn sigma_for_kernel(kernel_size: usize) -> f64 {
    0.3 * ((kernel_size as f64 - 1.0) * 0.5 - 1.0) + 0.8
}

/// Build a normalized 1-D Gaussian kernel of the given (odd) size.
///
/// Sigma is derived from the size via [`sigma_for_kernel`].
pub fn gaussian_kernel(kernel_size: usize) -> Vec<f32> {
    let sigma = sigma_for_kernel(kernel_size);
    let half = (kernel_size / 2) as isize;
    let denom = 2.0 * sigma * sigma;

    let mut kernel: Vec<f32> = (-half..=half)
        .map(|i| {
            let d = i as f64;
            (-(d * d) / denom).exp() as f32
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }
    kernel
}

/// Apply a separable Gaussian blur with the given kernel size in both
/// dimensions. Borders are clamped to the edge pixel.
pub fn gaussian_blur(image: ArrayView2<f32>, kernel_size: usize) -> Array2<f32> {
    let kernel = gaussian_kernel(kernel_size);
    let half = (kernel_size / 2) as isize;
    let (height, width) = image.dim();

    // Horizontal pass
    let mut horizontal = Array2::<f32>::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let xi = (x as isize + k as isize - half).clamp(0, width as isize - 1) as usize;
                acc += image[[y, xi]] * weight;
            }
            horizontal[[y, x]] = acc;
        }
    }

    // Vertical pass
    let mut blurred = Array2::<f32>::zeros((height, width));
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0f32;
            for (k, &weight) in kernel.iter().enumerate() {
                let yi = (y as isize + k as isize - half).clamp(0, height as isize - 1) as usize;
                acc += horizontal[[yi, x]] * weight;
            }
            blurred[[y, x]] = acc;
        }
    }

    blurred
}

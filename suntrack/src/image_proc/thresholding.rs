//! Binary thresholding for bright-region isolation.

use ndarray::{Array2, ArrayView2};

/// Apply a binary threshold to a luminance plane.
///
/// Pixels strictly above `cutoff` take `on_value`; all others are zero.
/// Any nonzero mask pixel counts as "set" for the morphology and edge
/// stages; `on_value` is carried for parity with the original tuning.
pub fn apply_threshold(image: ArrayView2<f32>, cutoff: f32, on_value: u8) -> Array2<u8> {
    image.mapv(|v| if v > cutoff { on_value } else { 0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array2};

    #[test]
    fn test_apply_threshold() {
        let image = arr2(&[[100.0f32, 211.0], [210.0, 255.0]]);
        let mask = apply_threshold(image.view(), 210.0, 225);

        assert_eq!(mask[[0, 0]], 0);
        assert_eq!(mask[[0, 1]], 225);
        // Exactly at the cutoff stays off.
        assert_eq!(mask[[1, 0]], 0);
        assert_eq!(mask[[1, 1]], 225);
    }

    #[test]
    fn test_all_dark_yields_empty_mask() {
        let image = Array2::<f32>::from_elem((4, 4), 50.0);
        let mask = apply_threshold(image.view(), 210.0, 225);
        assert!(mask.iter().all(|&v| v == 0));
    }
}

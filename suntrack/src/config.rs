//! Detector tuning parameters.

use crate::error::{Result, TrackError};
use serde::{Deserialize, Serialize};

/// Tunable parameters for sun disc detection.
///
/// The defaults are calibrated for daylight sky photographs where the sun
/// disc saturates or nearly saturates the sensor. All values can be
/// overridden from the CLI or a JSON config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Gaussian blur kernel size in pixels. Must be odd and positive.
    pub blur_kernel: usize,

    /// Border trim applied to all four sides before detection, in pixels.
    pub crop_margin: usize,

    /// Luminance cutoff for the bright-region mask (0..255 domain).
    pub threshold: f32,

    /// Value assigned to mask pixels above the cutoff.
    pub threshold_value: u8,

    /// Erosion iterations applied to the bright-region mask.
    pub erode_iterations: usize,

    /// Dilation iterations applied after erosion.
    pub dilate_iterations: usize,

    /// Maximum plausible frame-to-frame movement of the sun center, in
    /// pixels. Larger jumps of the global-maximum candidate are rejected
    /// when the region method finds nothing.
    pub max_jump: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            blur_kernel: 51,
            crop_margin: 20,
            threshold: 210.0,
            threshold_value: 225,
            erode_iterations: 7,
            dilate_iterations: 4,
            max_jump: 50.0,
        }
    }
}

impl DetectorConfig {
    /// Check parameter constraints.
    ///
    /// # Errors
    /// Returns `TrackError::InvalidConfig` if the blur kernel is zero
    /// or even.
    pub fn validate(&self) -> Result<()> {
        if self.blur_kernel == 0 {
            return Err(TrackError::InvalidConfig(
                "blur kernel size must be positive".to_string(),
            ));
        }
        if self.blur_kernel % 2 == 0 {
            return Err(TrackError::InvalidConfig(format!(
                "blur kernel size must be odd, got {}",
                self.blur_kernel
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = DetectorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.blur_kernel, 51);
        assert_eq!(config.crop_margin, 20);
        assert_eq!(config.threshold, 210.0);
        assert_eq!(config.threshold_value, 225);
        assert_eq!(config.erode_iterations, 7);
        assert_eq!(config.dilate_iterations, 4);
        assert_eq!(config.max_jump, 50.0);
    }

    #[test]
    fn test_even_kernel_rejected() {
        let config = DetectorConfig {
            blur_kernel: 50,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_kernel_rejected() {
        let config = DetectorConfig {
            blur_kernel: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DetectorConfig = serde_json::from_str(r#"{"blur_kernel": 31}"#).unwrap();
        assert_eq!(config.blur_kernel, 31);
        assert_eq!(config.crop_margin, 20);
        assert_eq!(config.max_jump, 50.0);
    }
}

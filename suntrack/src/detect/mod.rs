//! Sun disc localization for a single frame.
//!
//! Two independent candidate methods run on every frame:
//!
//! - the **global-maximum** method takes the brightest pixel of the
//!   blurred plane. Usually right and cheap, but it locks onto diffuse
//!   overexposed patches (haze, flare) as readily as onto the disc;
//! - the **region** method thresholds, morphologically cleans and
//!   outlines the bright mask, then fits the minimal enclosing circle.
//!   It fails outright when no compact bright blob exists.
//!
//! Arbitration trusts the global maximum unless the region method found
//! nothing AND the maximum jumped implausibly far from the last accepted
//! center. Continuity with history is the only signal cheap enough to
//! catch the global maximum's failure mode.

use crate::config::DetectorConfig;
use crate::error::{Result, TrackError};
use crate::frame::{Frame, Point};
use crate::image_proc::{
    apply_threshold, boundary_points, dilate, erode, gaussian_blur, min_enclosing_circle, Circle,
};
use log::debug;
use ndarray::s;

/// Per-frame detection evidence, surfaced to observers.
///
/// Coordinates are in cropped-frame space (the border trim is not
/// compensated).
#[derive(Debug, Clone)]
pub struct CandidateSet {
    /// Global-maximum candidate: brightest pixel of the blurred plane.
    pub min_max: Point,
    /// Peak luminance at the global-maximum candidate.
    pub peak_luminance: f32,
    /// Region candidate: minimal enclosing circle of the cleaned
    /// bright-mask outline. `None` when no bright region survived.
    pub region: Option<Circle>,
    /// Distance from the global-maximum candidate to the previously
    /// accepted center. `None` on cold start.
    pub jump: Option<f64>,
}

/// Result of one detector invocation.
#[derive(Debug, Clone)]
pub struct Detection {
    /// The accepted center, or `None` when no detection was made.
    pub center: Option<Point>,
    /// Evidence behind the decision.
    pub candidates: CandidateSet,
}

/// Sun disc detector. Stateless across frames; temporal continuity is
/// passed in per call.
#[derive(Debug, Clone)]
pub struct Detector {
    config: DetectorConfig,
}

impl Detector {
    /// Create a detector from a validated configuration.
    ///
    /// # Errors
    /// Returns `TrackError::InvalidConfig` for an even or zero blur
    /// kernel size.
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Locate the sun disc center in one frame.
    ///
    /// `last_center` is the most recently accepted center from earlier
    /// frames, if any. The returned coordinates are in cropped-frame
    /// space. `Ok(Detection { center: None, .. })` means no detection;
    /// all-dark and all-bright frames are valid inputs.
    ///
    /// # Errors
    /// Returns `TrackError::FrameTooSmall` if the border crop would
    /// consume the frame.
    pub fn detect(&self, frame: &Frame, last_center: Option<Point>) -> Result<Detection> {
        let margin = self.config.crop_margin;
        let (height, width) = frame.data.dim();
        if height <= 2 * margin || width <= 2 * margin {
            return Err(TrackError::FrameTooSmall {
                id: frame.id.clone(),
                width,
                height,
                margin,
            });
        }

        let cropped = frame
            .data
            .slice(s![margin..height - margin, margin..width - margin]);
        let blurred = gaussian_blur(cropped, self.config.blur_kernel);

        // Global-maximum candidate. Ties break to the first pixel in
        // row-major order.
        let mut peak = f32::NEG_INFINITY;
        let mut peak_pos = (0usize, 0usize);
        for ((y, x), &value) in blurred.indexed_iter() {
            if value > peak {
                peak = value;
                peak_pos = (y, x);
            }
        }
        let min_max = Point::new(peak_pos.1 as f64, peak_pos.0 as f64);

        // Region candidate.
        let mask = apply_threshold(
            blurred.view(),
            self.config.threshold,
            self.config.threshold_value,
        );
        let eroded = erode(mask.view(), self.config.erode_iterations);
        let cleaned = dilate(eroded.view(), self.config.dilate_iterations);
        let outline = boundary_points(cleaned.view());
        let region = min_enclosing_circle(&outline);

        let jump = last_center.map(|prev| min_max.distance(&prev));

        debug!(
            "frame {}: last center {:?}, minMax {} (peak {:.1}), region {:?}, jump {:?}",
            frame.id, last_center, min_max, peak, region, jump
        );

        let center = if region.is_some() {
            // A valid region never overrides the maximum; only its
            // absence combined with a suspicious jump does.
            Some(min_max)
        } else {
            match jump {
                Some(distance) if distance < self.config.max_jump => Some(min_max),
                Some(_) => None,
                None => None,
            }
        };

        Ok(Detection {
            center,
            candidates: CandidateSet {
                min_max,
                peak_luminance: peak,
                region,
                jump,
            },
        })
    }
}

//! Sequential frame controller.
//!
//! Drives the detector across an ordered frame sequence, carries the last
//! accepted center forward as temporal state, and accumulates the result
//! table. Frames must be processed in order: every detection depends on
//! the history produced by the previous one.

use crate::config::DetectorConfig;
use crate::detect::{CandidateSet, Detector};
use crate::error::Result;
use crate::frame::{Frame, Point, SunRecord};
use crate::loader;
use log::info;
use std::path::Path;

/// Per-frame report delivered to registered observers after each frame.
///
/// Observers receive evidence only; they cannot influence results.
#[derive(Debug)]
pub struct FrameReport<'a> {
    pub frame_id: &'a str,
    /// History as it was BEFORE this frame.
    pub last_center: Option<Point>,
    pub candidates: &'a CandidateSet,
    /// The accepted decision for this frame.
    pub center: Option<Point>,
}

/// Frame controller: owns the detector, the continuity state and the
/// result table.
pub struct SunTracker {
    detector: Detector,
    last_center: Option<Point>,
    records: Vec<SunRecord>,
    observers: Vec<Box<dyn FnMut(&FrameReport)>>,
}

impl SunTracker {
    /// Create a tracker with a validated detector configuration.
    pub fn new(config: DetectorConfig) -> Result<Self> {
        Ok(Self {
            detector: Detector::new(config)?,
            last_center: None,
            records: Vec::new(),
            observers: Vec::new(),
        })
    }

    /// Register an observer called once per processed frame.
    pub fn register_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&FrameReport) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Process one frame and return the accepted center, if any.
    ///
    /// History is overwritten only by accepted (`Some`) centers, so "last
    /// accepted center" stays meaningful across detection gaps. A record
    /// is appended for every frame regardless of the outcome.
    pub fn process_frame(&mut self, frame: &Frame) -> Result<Option<Point>> {
        let previous = self.last_center;
        let detection = self.detector.detect(frame, previous)?;

        if let Some(center) = detection.center {
            self.last_center = Some(center);
        }
        self.records.push(SunRecord {
            id: frame.id.clone(),
            center: detection.center,
        });

        let report = FrameReport {
            frame_id: &frame.id,
            last_center: previous,
            candidates: &detection.candidates,
            center: detection.center,
        };
        for observer in self.observers.iter_mut() {
            observer(&report);
        }

        Ok(detection.center)
    }

    /// The most recently accepted center.
    pub fn last_center(&self) -> Option<Point> {
        self.last_center
    }

    /// Result rows accumulated so far, in processing order.
    pub fn records(&self) -> &[SunRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SunRecord> {
        self.records
    }
}

/// Run the full pipeline over a directory of photographs.
///
/// Frames are enumerated, sorted by derived identifier and processed in
/// that order. A decode failure aborts the run; frames are never silently
/// skipped, since completeness and order matter to the continuity
/// heuristic.
pub fn track_directory(dir: &Path, config: DetectorConfig) -> Result<Vec<SunRecord>> {
    let mut tracker = SunTracker::new(config)?;
    let paths = loader::list_frames(dir)?;
    info!("Processing {} frames from {}", paths.len(), dir.display());

    for path in &paths {
        let frame = loader::load_frame(path)?;
        tracker.process_frame(&frame)?;
    }

    Ok(tracker.into_records())
}

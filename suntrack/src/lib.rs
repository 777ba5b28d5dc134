//! Sun disc localization for analemma photography.
//!
//! Locates the brightest compact region in each photograph of a
//! time-ordered sequence and reports its center per frame. Two
//! independent candidate methods (blurred global maximum, minimal
//! enclosing circle of a cleaned bright-region outline) are arbitrated
//! by a temporal-continuity heuristic that uses the previously accepted
//! center; see [`detect`] for the decision rule.
//!
//! The [`pipeline::SunTracker`] controller drives the detector over a
//! sorted frame sequence and accumulates one `Date,X,Y` row per frame
//! for [`export::write_table`].

pub mod config;
pub mod detect;
pub mod error;
pub mod export;
pub mod frame;
pub mod image_proc;
pub mod loader;
pub mod pipeline;

// Re-export key functionality for easier access
pub use config::DetectorConfig;
pub use detect::{CandidateSet, Detection, Detector};
pub use error::{Result, TrackError};
pub use export::write_table;
pub use frame::{Frame, Point, SunRecord};
pub use pipeline::{track_directory, FrameReport, SunTracker};

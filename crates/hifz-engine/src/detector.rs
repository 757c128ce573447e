//! Detector interface
//!
//! The hand-landmark detector is an external model: given a video frame
//! it produces zero or more 21-point landmark sets with handedness
//! labels. The engine takes the detector as a constructor argument and
//! only drives its lifecycle; landmark results arrive through
//! [`crate::RecitationEngine::ingest`].

use hifz_core::{HifzResult, Landmark};

/// One hand as reported by the detector, before validation
///
/// The side label is whatever string the detector emitted; the point list
/// is unchecked. The engine validates both while assembling a frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDetection {
    pub side: String,
    pub points: Vec<Landmark>,
}

impl RawDetection {
    pub fn new(side: impl Into<String>, points: Vec<Landmark>) -> Self {
        Self {
            side: side.into(),
            points,
        }
    }
}

/// Camera/detector lifecycle, injected into the engine
///
/// Both operations are idempotent: `start` on a running detector and
/// `stop` on a stopped one are no-ops. `stop` is additionally guaranteed
/// on engine teardown.
pub trait HandDetector {
    /// Acquire the camera and begin producing frames.
    ///
    /// A [`hifz_core::HifzError::DetectionUnavailable`] failure is
    /// non-fatal; the caller may retry.
    fn start(&mut self) -> HifzResult<()>;

    /// Release the camera. Safe to call any number of times.
    fn stop(&mut self);

    fn is_running(&self) -> bool;
}

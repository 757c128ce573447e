//! Recitation engine - per-frame pipeline
//!
//! Runs synchronously inside the detector's results callback: assemble a
//! frame from the raw detections, classify it, feed the label to the
//! progression machine. No I/O, no blocking; ordering is the order frames
//! are delivered.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, MutexGuard};
use tracing::{debug, warn};

use hifz_core::{Frame, GestureLabel, HandSide, HandSnapshot, HifzResult, Surah, TickTime};
use hifz_gesture::{Classifier, ClassifierConfig};
use hifz_session::{Progression, ProgressionConfig, ProgressionEvent, SessionSnapshot};
use hifz_time::FrameClock;

use crate::{HandDetector, RawDetection};

/// Engine configuration
#[derive(Clone, Debug, Default)]
pub struct EngineConfig {
    pub classifier: ClassifierConfig,
    pub progression: ProgressionConfig,
}

/// Per-engine counters
#[derive(Clone, Debug, Default)]
pub struct EngineStats {
    pub frames: u64,
    pub hands_seen: u64,
    pub malformed_hands: u64,
    pub unknown_sides: u64,
}

/// Everything the UI needs to render one frame
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSnapshot {
    /// Label produced by the classifier for the latest frame
    pub gesture: GestureLabel,
    /// Camera/detector acquired and producing frames
    pub camera_ready: bool,
    /// Progression state
    pub session: SessionSnapshot,
}

/// The recitation runtime
///
/// Owns the injected detector, the classifier, and the per-surah
/// progression. One instance per recitation session.
pub struct RecitationEngine {
    detector: Box<dyn HandDetector>,
    classifier: Classifier,
    progression: Progression,
    clock: FrameClock,
    current_gesture: GestureLabel,
    camera_ready: bool,
    stats: EngineStats,
}

impl RecitationEngine {
    pub fn new(detector: Box<dyn HandDetector>, surah: Surah) -> Self {
        Self::with_config(detector, surah, EngineConfig::default())
    }

    pub fn with_config(detector: Box<dyn HandDetector>, surah: Surah, config: EngineConfig) -> Self {
        RecitationEngine {
            detector,
            classifier: Classifier::with_config(config.classifier),
            progression: Progression::with_config(surah, config.progression),
            clock: FrameClock::new(),
            current_gesture: GestureLabel::Unknown,
            camera_ready: false,
            stats: EngineStats::default(),
        }
    }

    /// Acquire the camera. Idempotent; a failure leaves the engine in the
    /// not-ready state and may be retried.
    pub fn start_camera(&mut self) -> HifzResult<()> {
        if self.camera_ready {
            return Ok(());
        }
        self.detector.start()?;
        self.camera_ready = true;
        debug!("camera ready");
        Ok(())
    }

    /// Release the camera. Safe to call any number of times.
    pub fn stop_camera(&mut self) {
        self.detector.stop();
        self.camera_ready = false;
    }

    /// Feed one frame of raw detections, stamping it against real time
    pub fn ingest(&mut self, detections: &[RawDetection]) -> Vec<ProgressionEvent> {
        let (now, dt) = self.clock.tick();
        self.ingest_at(detections, now, dt)
    }

    /// Feed one frame at an explicit point on the tick timeline
    /// (injectable for tests and simulations)
    pub fn ingest_at(
        &mut self,
        detections: &[RawDetection],
        now: TickTime,
        dt: Duration,
    ) -> Vec<ProgressionEvent> {
        self.stats.frames += 1;

        let frame = self.assemble_frame(detections);
        let label = self.classifier.classify(&frame);
        if label != self.current_gesture {
            debug!(from = %self.current_gesture, to = %label, "gesture changed");
            self.current_gesture = label;
        }

        self.progression.observe(label, now, dt)
    }

    /// Validate raw detections into a frame, degrading rather than
    /// failing: malformed hands and unrecognized side labels are skipped.
    fn assemble_frame(&mut self, detections: &[RawDetection]) -> Frame {
        let mut frame = Frame::new();
        for detection in detections {
            let Some(side) = HandSide::from_label(&detection.side) else {
                warn!(side = %detection.side, "unrecognized handedness label, hand skipped");
                self.stats.unknown_sides += 1;
                continue;
            };
            match HandSnapshot::from_points(side, &detection.points) {
                Ok(snapshot) => {
                    frame.insert(snapshot);
                    self.stats.hands_seen += 1;
                }
                Err(err) => {
                    warn!(%err, "hand skipped");
                    self.stats.malformed_hands += 1;
                }
            }
        }
        frame
    }

    /// Current view for rendering
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            gesture: self.current_gesture,
            camera_ready: self.camera_ready,
            session: SessionSnapshot::of(&self.progression),
        }
    }

    pub fn current_gesture(&self) -> GestureLabel {
        self.current_gesture
    }

    pub fn camera_ready(&self) -> bool {
        self.camera_ready
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }
}

impl Drop for RecitationEngine {
    fn drop(&mut self) {
        // Teardown guarantees: camera released, no window left in flight
        self.stop_camera();
        self.progression.cancel_windows();
    }
}

/// Engine handle shared between the detector callback context and the UI
/// poller
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<RecitationEngine>>,
}

impl SharedEngine {
    pub fn new(engine: RecitationEngine) -> Self {
        SharedEngine {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, RecitationEngine> {
        self.inner.lock()
    }

    /// Convenience for the UI side: grab a consistent snapshot
    pub fn snapshot(&self) -> EngineSnapshot {
        self.inner.lock().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hifz_core::{HifzError, Landmark, Verse, LANDMARK_COUNT};

    /// Detector stub with a scriptable first-start failure
    struct StubDetector {
        running: bool,
        fail_next_start: bool,
    }

    impl StubDetector {
        fn new() -> Self {
            StubDetector {
                running: false,
                fail_next_start: false,
            }
        }
    }

    impl HandDetector for StubDetector {
        fn start(&mut self) -> HifzResult<()> {
            if self.fail_next_start {
                self.fail_next_start = false;
                return Err(HifzError::DetectionUnavailable(
                    "camera permission denied".into(),
                ));
            }
            self.running = true;
            Ok(())
        }

        fn stop(&mut self) {
            self.running = false;
        }

        fn is_running(&self) -> bool {
            self.running
        }
    }

    fn surah() -> Surah {
        Surah::new(
            "test",
            vec![Verse {
                ordinal: 0,
                display_id: 1,
                arabic_text: "a".into(),
                translation: "t".into(),
                required_gesture: GestureLabel::IndexFingerUp,
                gesture_name: "g".into(),
            }],
        )
        .unwrap()
    }

    fn engine() -> RecitationEngine {
        RecitationEngine::new(Box::new(StubDetector::new()), surah())
    }

    fn flat_points() -> Vec<Landmark> {
        vec![Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT]
    }

    #[test]
    fn test_start_camera_idempotent() {
        let mut engine = engine();

        engine.start_camera().unwrap();
        engine.start_camera().unwrap();
        assert!(engine.camera_ready());
        assert!(engine.snapshot().camera_ready);
    }

    #[test]
    fn test_failed_start_is_retryable() {
        let mut stub = StubDetector::new();
        stub.fail_next_start = true;
        let mut engine = RecitationEngine::new(Box::new(stub), surah());

        let err = engine.start_camera().unwrap_err();
        assert!(matches!(err, HifzError::DetectionUnavailable(_)));
        assert!(!engine.camera_ready());

        // Second attempt succeeds
        engine.start_camera().unwrap();
        assert!(engine.camera_ready());
    }

    #[test]
    fn test_stop_camera_safe_to_repeat() {
        let mut engine = engine();
        engine.start_camera().unwrap();

        engine.stop_camera();
        engine.stop_camera();
        assert!(!engine.camera_ready());
    }

    #[test]
    fn test_malformed_hand_degrades_frame() {
        let mut engine = engine();

        let detections = vec![
            RawDetection::new("Left", flat_points()),
            RawDetection::new("Right", vec![Landmark::default(); 7]),
        ];
        engine.ingest_at(&detections, TickTime::from_millis(33), Duration::from_millis(33));

        assert_eq!(engine.stats().hands_seen, 1);
        assert_eq!(engine.stats().malformed_hands, 1);
    }

    #[test]
    fn test_unknown_side_label_skipped() {
        let mut engine = engine();

        let detections = vec![RawDetection::new("Both", flat_points())];
        engine.ingest_at(&detections, TickTime::from_millis(33), Duration::from_millis(33));

        assert_eq!(engine.stats().unknown_sides, 1);
        assert_eq!(engine.stats().hands_seen, 0);
        assert_eq!(engine.current_gesture(), GestureLabel::Unknown);
    }

    #[test]
    fn test_duplicate_side_last_writer_wins() {
        let mut engine = engine();

        let mut second = flat_points();
        second[0] = Landmark::new(0.1, 0.9, 0.0);
        let detections = vec![
            RawDetection::new("Left", flat_points()),
            RawDetection::new("left", second),
        ];
        engine.ingest_at(&detections, TickTime::from_millis(33), Duration::from_millis(33));

        // Both parsed, one frame slot: the later detection replaced the
        // earlier one
        assert_eq!(engine.stats().hands_seen, 2);
    }

    #[test]
    fn test_empty_frame_classifies_unknown() {
        let mut engine = engine();
        engine.ingest_at(&[], TickTime::from_millis(33), Duration::from_millis(33));

        assert_eq!(engine.current_gesture(), GestureLabel::Unknown);
        assert_eq!(engine.stats().frames, 1);
    }

    #[test]
    fn test_shared_engine_snapshot() {
        let shared = SharedEngine::new(engine());

        shared.lock().start_camera().unwrap();
        let snapshot = shared.snapshot();

        assert!(snapshot.camera_ready);
        assert_eq!(snapshot.gesture, GestureLabel::Unknown);
        assert_eq!(snapshot.session.verse_count, 1);
    }
}

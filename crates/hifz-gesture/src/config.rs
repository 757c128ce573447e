//! Classifier configuration
//!
//! All distance thresholds are empirical constants tuned against the
//! expected gesture vocabulary. They are configuration, not derived values;
//! a calibration pass adjusts them here without touching control flow.

/// Classifier thresholds
#[derive(Clone, Debug)]
pub struct ClassifierConfig {
    /// Maximum wrist-to-wrist distance before the fingertip-touch fine
    /// check is even attempted
    pub touch_gate_max_wrist_dist: f32,
    /// Maximum index-tip distance, normalized by the smaller hand scale,
    /// for a fingertip touch
    pub touch_norm_threshold: f32,
    /// Minimum wrist-to-wrist distance for hands-moving-apart
    pub apart_min_wrist_dist: f32,
    /// Maximum |index_tip.z - wrist.z| for a palm to count as flat toward
    /// the camera
    pub palm_flat_max_depth: f32,
    /// Maximum wrist-to-wrist distance for palms-facing
    pub palms_max_wrist_dist: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        // Tuned against recorded gesture samples
        ClassifierConfig {
            touch_gate_max_wrist_dist: 0.5,
            touch_norm_threshold: 0.15,
            apart_min_wrist_dist: 0.35,
            palm_flat_max_depth: 0.15,
            palms_max_wrist_dist: 0.5,
        }
    }
}

//! Gesture classifier
//!
//! One frame in, one label out. Predicates are evaluated in fixed priority
//! order and the first match wins; the ordering is part of the contract
//! because predicate regions overlap (a deliberate fingertip touch is also
//! geometrically plausible as a facing pose, so touch is tested first).

use hifz_core::{landmarks, Frame, GestureLabel, HandSnapshot};

use crate::ClassifierConfig;

/// Stateless frame classifier
///
/// Deterministic and side-effect-free; always returns a label, defaulting
/// to [`GestureLabel::Unknown`].
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Classifier { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one frame. First matching predicate wins.
    pub fn classify(&self, frame: &Frame) -> GestureLabel {
        if self.is_index_finger_up(frame) {
            return GestureLabel::IndexFingerUp;
        }
        if self.is_fingertips_touch(frame) {
            return GestureLabel::FingertipsTouch;
        }
        if self.is_hands_moving_apart(frame) {
            return GestureLabel::HandsMovingApart;
        }
        if self.is_palms_facing(frame) {
            return GestureLabel::PalmsFacing;
        }
        GestureLabel::Unknown
    }

    /// Index finger extended upward with the other fingers folded, on
    /// either available hand (prefer right).
    pub fn is_index_finger_up(&self, frame: &Frame) -> bool {
        let Some(hand) = frame.either() else {
            return false;
        };

        let index_extended = finger_extended(
            hand,
            landmarks::INDEX_FINGER_TIP,
            landmarks::INDEX_FINGER_PIP,
            landmarks::INDEX_FINGER_MCP,
        );
        let others_down = finger_folded(hand, landmarks::MIDDLE_FINGER_TIP, landmarks::MIDDLE_FINGER_PIP)
            && finger_folded(hand, landmarks::RING_FINGER_TIP, landmarks::RING_FINGER_PIP)
            && finger_folded(hand, landmarks::PINKY_TIP, landmarks::PINKY_PIP);

        index_extended && others_down
    }

    /// Index fingertips of both hands touching, normalized by hand scale
    /// to stay invariant to distance from the camera.
    pub fn is_fingertips_touch(&self, frame: &Frame) -> bool {
        let Some((left, right)) = frame.both() else {
            return false;
        };

        // Coarse proximity gate first: far-apart hands can still produce a
        // small ratio when one hand dwarfs the other.
        let wrist_dist = left.wrist().distance(&right.wrist());
        if wrist_dist > self.config.touch_gate_max_wrist_dist {
            return false;
        }

        let min_scale = left.scale().min(right.scale());
        if min_scale < f32::EPSILON {
            return false;
        }

        let tip_dist = left
            .point(landmarks::INDEX_FINGER_TIP)
            .distance(&right.point(landmarks::INDEX_FINGER_TIP));

        tip_dist / min_scale < self.config.touch_norm_threshold
    }

    /// Both wrists spread beyond the separation threshold. Static geometry
    /// only; no frame-to-frame velocity.
    pub fn is_hands_moving_apart(&self, frame: &Frame) -> bool {
        let Some((left, right)) = frame.both() else {
            return false;
        };

        left.wrist().distance(&right.wrist()) > self.config.apart_min_wrist_dist
    }

    /// Both palms roughly perpendicular to the camera axis, hands close
    /// together.
    pub fn is_palms_facing(&self, frame: &Frame) -> bool {
        let Some((left, right)) = frame.both() else {
            return false;
        };

        palm_flat(left, self.config.palm_flat_max_depth)
            && palm_flat(right, self.config.palm_flat_max_depth)
            && left.wrist().distance(&right.wrist()) < self.config.palms_max_wrist_dist
    }
}

/// Monotonic extension test: tip above PIP above MCP
#[inline]
fn finger_extended(hand: &HandSnapshot, tip: usize, pip: usize, mcp: usize) -> bool {
    hand.point(tip).y < hand.point(pip).y && hand.point(pip).y < hand.point(mcp).y
}

/// Folded test: tip not above its PIP
#[inline]
fn finger_folded(hand: &HandSnapshot, tip: usize, pip: usize) -> bool {
    hand.point(tip).y > hand.point(pip).y
}

/// Depth difference between index fingertip and wrist below the flatness
/// threshold
#[inline]
fn palm_flat(hand: &HandSnapshot, max_depth: f32) -> bool {
    let tip_z = hand.point(landmarks::INDEX_FINGER_TIP).z;
    let wrist_z = hand.point(landmarks::WRIST).z;
    (tip_z - wrist_z).abs() < max_depth
}

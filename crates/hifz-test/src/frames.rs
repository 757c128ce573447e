//! Synthetic hand detections
//!
//! Raw detection builders whose geometry satisfies exactly one classifier
//! predicate each, plus neutral and empty variants. All builders produce
//! what the external detector would: side-labelled 21-point lists.

use hifz_core::{landmarks, GestureLabel, Landmark, LANDMARK_COUNT};
use hifz_engine::RawDetection;

/// A neutral open hand at the given wrist position: fingers curled
/// downward, palm flat (all z = 0), hand scale 0.2
pub fn neutral_points(wrist_x: f32, wrist_y: f32) -> Vec<Landmark> {
    let mut points = vec![Landmark::default(); LANDMARK_COUNT];
    points[landmarks::WRIST] = Landmark::new(wrist_x, wrist_y, 0.0);
    points[landmarks::MIDDLE_FINGER_MCP] = Landmark::new(wrist_x, wrist_y - 0.2, 0.0);
    points[landmarks::INDEX_FINGER_MCP] = Landmark::new(wrist_x - 0.05, wrist_y - 0.2, 0.0);
    points[landmarks::RING_FINGER_MCP] = Landmark::new(wrist_x + 0.05, wrist_y - 0.2, 0.0);
    points[landmarks::PINKY_MCP] = Landmark::new(wrist_x + 0.1, wrist_y - 0.18, 0.0);
    points[landmarks::INDEX_FINGER_PIP] = Landmark::new(wrist_x - 0.05, wrist_y - 0.26, 0.0);
    points[landmarks::INDEX_FINGER_TIP] = Landmark::new(wrist_x - 0.05, wrist_y - 0.22, 0.0);
    points[landmarks::MIDDLE_FINGER_PIP] = Landmark::new(wrist_x, wrist_y - 0.28, 0.0);
    points[landmarks::MIDDLE_FINGER_TIP] = Landmark::new(wrist_x, wrist_y - 0.23, 0.0);
    points[landmarks::RING_FINGER_PIP] = Landmark::new(wrist_x + 0.05, wrist_y - 0.26, 0.0);
    points[landmarks::RING_FINGER_TIP] = Landmark::new(wrist_x + 0.05, wrist_y - 0.21, 0.0);
    points[landmarks::PINKY_PIP] = Landmark::new(wrist_x + 0.1, wrist_y - 0.24, 0.0);
    points[landmarks::PINKY_TIP] = Landmark::new(wrist_x + 0.1, wrist_y - 0.2, 0.0);
    points
}

/// One right hand pointing upward: index chain extended, other fingers
/// folded
pub fn index_up_detections() -> Vec<RawDetection> {
    let mut points = neutral_points(0.5, 0.9);
    points[landmarks::INDEX_FINGER_PIP] = Landmark::new(0.45, 0.55, 0.0);
    points[landmarks::INDEX_FINGER_TIP] = Landmark::new(0.45, 0.4, 0.0);
    vec![RawDetection::new("Right", points)]
}

/// Two close hands with index fingertips meeting between them
pub fn fingertips_touch_detections() -> Vec<RawDetection> {
    let mut left = neutral_points(0.4, 0.6);
    let mut right = neutral_points(0.6, 0.6);
    left[landmarks::INDEX_FINGER_TIP] = Landmark::new(0.5, 0.45, 0.0);
    right[landmarks::INDEX_FINGER_TIP] = Landmark::new(0.5, 0.45, 0.0);
    // Extension chains stay broken so index-finger-up cannot fire first
    left[landmarks::INDEX_FINGER_PIP] = Landmark::new(0.45, 0.42, 0.0);
    right[landmarks::INDEX_FINGER_PIP] = Landmark::new(0.55, 0.42, 0.0);
    vec![
        RawDetection::new("Left", left),
        RawDetection::new("Right", right),
    ]
}

/// Two hands spread wide apart
pub fn hands_apart_detections() -> Vec<RawDetection> {
    let mut left = neutral_points(0.08, 0.6);
    let mut right = neutral_points(0.92, 0.6);
    // Tilted palms keep the pose out of palms-facing territory even if
    // the separation threshold is retuned below the proximity gate
    left[landmarks::INDEX_FINGER_TIP].z = -0.3;
    right[landmarks::INDEX_FINGER_TIP].z = -0.3;
    vec![
        RawDetection::new("Left", left),
        RawDetection::new("Right", right),
    ]
}

/// Two flat hands close together, fingertips apart
pub fn palms_facing_detections() -> Vec<RawDetection> {
    vec![
        RawDetection::new("Left", neutral_points(0.35, 0.6)),
        RawDetection::new("Right", neutral_points(0.65, 0.6)),
    ]
}

/// One neutral hand: present but matching no gesture
pub fn idle_detections() -> Vec<RawDetection> {
    vec![RawDetection::new("Right", neutral_points(0.5, 0.7))]
}

/// No hands at all
pub fn empty_detections() -> Vec<RawDetection> {
    Vec::new()
}

/// Detections whose geometry classifies as the given label
///
/// `Unknown` maps to an empty frame (no hands detected).
pub fn detections_for(label: GestureLabel) -> Vec<RawDetection> {
    match label {
        GestureLabel::IndexFingerUp => index_up_detections(),
        GestureLabel::FingertipsTouch => fingertips_touch_detections(),
        GestureLabel::HandsMovingApart => hands_apart_detections(),
        GestureLabel::PalmsFacing => palms_facing_detections(),
        GestureLabel::Unknown => empty_detections(),
    }
}

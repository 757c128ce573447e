//! Gesture labels
//!
//! The closed vocabulary recognized by the classifier. Exactly one label
//! is produced per frame; `Unknown` is the fallback whenever no hand is
//! detected or no positive predicate fires.

use std::fmt;

/// Recognized gesture categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GestureLabel {
    /// Index finger extended upward, other fingers folded
    IndexFingerUp,
    /// Both palms flat toward the camera, hands close together
    PalmsFacing,
    /// Both hands spread wide apart
    HandsMovingApart,
    /// Index fingertips of both hands touching
    FingertipsTouch,
    /// No hand detected, or no positive predicate fired
    Unknown,
}

impl Default for GestureLabel {
    fn default() -> Self {
        Self::Unknown
    }
}

impl GestureLabel {
    /// Key string as used by surah documents
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IndexFingerUp => "index_finger_up",
            Self::PalmsFacing => "palms_facing",
            Self::HandsMovingApart => "hands_moving_apart",
            Self::FingertipsTouch => "fingertips_touch",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a surah document gesture key
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "index_finger_up" => Some(Self::IndexFingerUp),
            "palms_facing" => Some(Self::PalmsFacing),
            "hands_moving_apart" => Some(Self::HandsMovingApart),
            "fingertips_touch" => Some(Self::FingertipsTouch),
            "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

impl fmt::Display for GestureLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

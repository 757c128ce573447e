//! Error types for the hifz engine

use thiserror::Error;

/// Engine errors
///
/// The classifier and progression machine are total over the declared data
/// model and never error; these cover the loading and lifecycle boundary.
#[derive(Error, Debug)]
pub enum HifzError {
    // Detection errors
    #[error("Detector unavailable: {0}")]
    DetectionUnavailable(String),

    // Data loading errors
    #[error("Surah document failed to load: {0}")]
    DataLoadFailure(String),

    #[error("Unknown gesture key '{key}' in verse {verse}")]
    UnknownGestureKey { key: String, verse: u32 },

    #[error("Surah '{name}' has no verses")]
    EmptySurah { name: String },

    #[error("Surah '{name}' verse ordinals not contiguous: expected {expected}, found {found}")]
    NonContiguousVerses {
        name: String,
        expected: usize,
        found: usize,
    },

    // Frame errors
    #[error("Malformed hand snapshot: expected 21 landmarks, got {0}")]
    MalformedFrame(usize),
}

/// Result type for hifz operations
pub type HifzResult<T> = Result<T, HifzError>;

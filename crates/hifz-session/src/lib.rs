//! Hifz Session - Recitation progression
//!
//! Consumes the per-frame gesture stream and governs the step-by-step
//! reveal of memorization content: a verse's required gesture must be held
//! continuously before its text is revealed, the reveal stays on screen
//! for a fixed window, and a short transition separates verses.

pub mod progression;
pub mod snapshot;

pub use progression::*;
pub use snapshot::*;

//! UI-facing session snapshot

use crate::{Phase, Progression};

/// Immutable view of the progression state for rendering
///
/// The engine hands this to the UI every frame; it carries everything the
/// recitation screen draws and nothing it can mutate.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Index of the verse currently gating progression
    pub verse_index: usize,
    /// Total verses in the surah
    pub verse_count: usize,
    /// Hold progress toward acceptance in [0, 1]
    pub hold_ratio: f32,
    /// Verse content currently displayed
    pub revealed: bool,
    /// Between verses
    pub transitioning: bool,
    /// Whole surah finished
    pub completed: bool,
}

impl SessionSnapshot {
    pub fn of(progression: &Progression) -> Self {
        let phase = progression.phase();
        SessionSnapshot {
            verse_index: progression.verse_index(),
            verse_count: progression.surah().len(),
            hold_ratio: progression.hold_ratio(),
            revealed: phase == Phase::Revealed,
            transitioning: phase == Phase::Transitioning,
            completed: phase == Phase::Completed,
        }
    }

    /// Whole-surah progress in [0, 1]: verses fully or currently revealed
    /// over the total, as drawn by the progress bar.
    pub fn surah_progress(&self) -> f32 {
        let done = self.verse_index + self.revealed as usize;
        if self.completed {
            return 1.0;
        }
        done as f32 / self.verse_count as f32
    }
}

//! Progression state machine
//!
//! Phases per verse: `AwaitingGesture` → `Revealed` → `Transitioning`,
//! then either back to `AwaitingGesture` on the next verse or to the
//! terminal `Completed`. Gesture acceptance is active if and only if the
//! phase is `AwaitingGesture` — a pose held through a reveal cannot skip
//! ahead.

use std::time::Duration;

use tracing::debug;

use hifz_core::{GestureLabel, Surah, TickTime};
use hifz_time::{HoldConfig, HoldResult, HoldTimer, WindowGuard, WindowTimer};

/// Progression timing configuration
#[derive(Clone, Debug)]
pub struct ProgressionConfig {
    /// How long a revealed verse stays displayed before auto-advancing
    pub reveal_window: Duration,
    /// Visual transition between verses; gestures are ignored during it
    pub transition_window: Duration,
    /// Hold timer settings
    pub hold: HoldConfig,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        ProgressionConfig {
            reveal_window: Duration::from_millis(3000),
            transition_window: Duration::from_millis(500),
            hold: HoldConfig::default(),
        }
    }
}

/// Progression phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the current verse's required gesture to be held
    AwaitingGesture,
    /// Verse content displayed; the reveal window is running
    Revealed,
    /// Between verses; the transition window is running
    Transitioning,
    /// All verses done. Terminal.
    Completed,
}

/// Discrete transition emitted by [`Progression::observe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionEvent {
    /// The verse at this index was revealed
    VerseRevealed(usize),
    /// The verse at this index became the active target
    VerseAdvanced(usize),
    /// The whole surah finished
    Completed,
}

/// Per-surah progression state machine
pub struct Progression {
    surah: Surah,
    config: ProgressionConfig,
    phase: Phase,
    verse_index: usize,
    hold: HoldTimer,
    reveal: WindowTimer,
    reveal_guard: Option<WindowGuard>,
    transition: WindowTimer,
    transition_guard: Option<WindowGuard>,
}

impl Progression {
    pub fn new(surah: Surah) -> Self {
        Self::with_config(surah, ProgressionConfig::default())
    }

    pub fn with_config(surah: Surah, config: ProgressionConfig) -> Self {
        let hold = HoldTimer::with_config(config.hold.clone());
        Progression {
            surah,
            config,
            phase: Phase::AwaitingGesture,
            verse_index: 0,
            hold,
            reveal: WindowTimer::new(),
            reveal_guard: None,
            transition: WindowTimer::new(),
            transition_guard: None,
        }
    }

    /// Feed one classified frame.
    ///
    /// `now` is the engine tick time of the frame; `dt` is the time since
    /// the previous frame. Returns the transitions this tick produced (at
    /// most one in practice).
    pub fn observe(
        &mut self,
        label: GestureLabel,
        now: TickTime,
        dt: Duration,
    ) -> Vec<ProgressionEvent> {
        let mut events = Vec::new();

        match self.phase {
            Phase::AwaitingGesture => {
                let target = self.required_gesture();
                if self.hold.advance(label, target, dt) == HoldResult::Reached {
                    self.phase = Phase::Revealed;
                    self.reveal_guard = Some(self.reveal.arm(now, self.config.reveal_window));
                    debug!(verse = self.verse_index, "verse revealed");
                    events.push(ProgressionEvent::VerseRevealed(self.verse_index));
                }
            }
            Phase::Revealed => {
                // Classifier keeps running; its output is ignored here.
                if let Some(guard) = self.reveal_guard {
                    if self.reveal.poll(now, guard) {
                        self.reveal_guard = None;
                        self.phase = Phase::Transitioning;
                        self.transition_guard =
                            Some(self.transition.arm(now, self.config.transition_window));
                    }
                }
            }
            Phase::Transitioning => {
                if let Some(guard) = self.transition_guard {
                    if self.transition.poll(now, guard) {
                        self.transition_guard = None;
                        if self.verse_index < self.surah.last_index() {
                            self.verse_index += 1;
                            self.hold.reset();
                            self.phase = Phase::AwaitingGesture;
                            debug!(verse = self.verse_index, "advanced to next verse");
                            events.push(ProgressionEvent::VerseAdvanced(self.verse_index));
                        } else {
                            self.phase = Phase::Completed;
                            debug!(surah = self.surah.name(), "surah completed");
                            events.push(ProgressionEvent::Completed);
                        }
                    }
                }
            }
            Phase::Completed => {
                // Terminal: classifier output is discarded.
            }
        }

        events
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn surah(&self) -> &Surah {
        &self.surah
    }

    /// Index of the verse currently gating progression
    pub fn verse_index(&self) -> usize {
        self.verse_index
    }

    /// The gesture required by the current verse
    pub fn required_gesture(&self) -> GestureLabel {
        self.surah.verses()[self.verse_index].required_gesture
    }

    /// Hold progress toward acceptance in [0, 1]; zero outside
    /// `AwaitingGesture`
    pub fn hold_ratio(&self) -> f32 {
        match self.phase {
            Phase::AwaitingGesture => self.hold.progress_ratio(),
            _ => 0.0,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Cancel in-flight windows, e.g. on teardown mid-reveal
    pub fn cancel_windows(&mut self) {
        self.reveal.cancel();
        self.reveal_guard = None;
        self.transition.cancel();
        self.transition_guard = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hifz_core::Verse;

    const TICK: Duration = Duration::from_millis(100);

    fn verse(ordinal: usize, gesture: GestureLabel) -> Verse {
        Verse {
            ordinal,
            display_id: ordinal as u32 + 1,
            arabic_text: format!("آية {}", ordinal + 1),
            translation: format!("verse {}", ordinal + 1),
            required_gesture: gesture,
            gesture_name: gesture.as_str().to_string(),
        }
    }

    fn two_verse_surah() -> Surah {
        Surah::new(
            "test",
            vec![
                verse(0, GestureLabel::IndexFingerUp),
                verse(1, GestureLabel::PalmsFacing),
            ],
        )
        .unwrap()
    }

    /// Drive the machine with a fixed label for `ticks` ticks of 100ms,
    /// starting the timeline at `start`. Returns events and the end time.
    fn run(
        progression: &mut Progression,
        label: GestureLabel,
        start: TickTime,
        ticks: usize,
    ) -> (Vec<ProgressionEvent>, TickTime) {
        let mut events = Vec::new();
        let mut now = start;
        for _ in 0..ticks {
            now = now + TICK;
            events.extend(progression.observe(label, now, TICK));
        }
        (events, now)
    }

    #[test]
    fn test_hold_reveals_first_verse() {
        let mut p = Progression::new(two_verse_surah());

        let (events, _) = run(&mut p, GestureLabel::IndexFingerUp, TickTime::ZERO, 15);

        assert_eq!(events, vec![ProgressionEvent::VerseRevealed(0)]);
        assert_eq!(p.phase(), Phase::Revealed);
    }

    #[test]
    fn test_wrong_gesture_never_reveals() {
        let mut p = Progression::new(two_verse_surah());

        let (events, _) = run(&mut p, GestureLabel::PalmsFacing, TickTime::ZERO, 100);

        assert!(events.is_empty());
        assert_eq!(p.phase(), Phase::AwaitingGesture);
        assert_eq!(p.verse_index(), 0);
    }

    #[test]
    fn test_reveal_window_then_transition_then_advance() {
        let mut p = Progression::new(two_verse_surah());

        let (_, t) = run(&mut p, GestureLabel::IndexFingerUp, TickTime::ZERO, 15);
        assert_eq!(p.phase(), Phase::Revealed);

        // 3000ms reveal window elapses
        let (events, t) = run(&mut p, GestureLabel::Unknown, t, 30);
        assert!(events.is_empty());
        assert_eq!(p.phase(), Phase::Transitioning);

        // 500ms transition elapses; next verse becomes the target
        let (events, _) = run(&mut p, GestureLabel::Unknown, t, 5);
        assert_eq!(events, vec![ProgressionEvent::VerseAdvanced(1)]);
        assert_eq!(p.phase(), Phase::AwaitingGesture);
        assert_eq!(p.verse_index(), 1);
        assert_eq!(p.required_gesture(), GestureLabel::PalmsFacing);
    }

    #[test]
    fn test_no_skip_while_revealed_or_transitioning() {
        let mut p = Progression::new(two_verse_surah());

        run(&mut p, GestureLabel::IndexFingerUp, TickTime::ZERO, 15);
        assert_eq!(p.phase(), Phase::Revealed);

        // Holding the NEXT verse's gesture all through the reveal and
        // transition must not move the index early.
        let (events, t) = run(&mut p, GestureLabel::PalmsFacing, TickTime::from_millis(1500), 30);
        assert!(events.is_empty());
        assert_eq!(p.verse_index(), 0);
        assert_eq!(p.phase(), Phase::Transitioning);

        let (events, _) = run(&mut p, GestureLabel::PalmsFacing, t, 5);
        assert_eq!(events, vec![ProgressionEvent::VerseAdvanced(1)]);
        // The sustained pose contributed nothing: the new verse's hold
        // starts from zero.
        assert_eq!(p.hold_ratio(), 0.0);
    }

    #[test]
    fn test_last_verse_completes() {
        let surah = Surah::new("single", vec![verse(0, GestureLabel::FingertipsTouch)]).unwrap();
        let mut p = Progression::new(surah);

        let (events, t) = run(&mut p, GestureLabel::FingertipsTouch, TickTime::ZERO, 15);
        assert_eq!(events, vec![ProgressionEvent::VerseRevealed(0)]);

        let (_, t) = run(&mut p, GestureLabel::Unknown, t, 30);
        assert_eq!(p.phase(), Phase::Transitioning);

        let (events, t) = run(&mut p, GestureLabel::Unknown, t, 5);
        assert_eq!(events, vec![ProgressionEvent::Completed]);
        assert!(p.is_completed());

        // Terminal: nothing ever happens again
        let (events, _) = run(&mut p, GestureLabel::FingertipsTouch, t, 100);
        assert!(events.is_empty());
        assert_eq!(p.verse_index(), 0);
    }

    #[test]
    fn test_hand_loss_resets_hold() {
        let mut p = Progression::new(two_verse_surah());

        // 1000ms into the hold
        let (_, t) = run(&mut p, GestureLabel::IndexFingerUp, TickTime::ZERO, 10);
        assert!(p.hold_ratio() > 0.6);

        // Hand leaves the frame: classifier yields Unknown, hold resets
        let (_, t) = run(&mut p, GestureLabel::Unknown, t, 1);
        assert_eq!(p.hold_ratio(), 0.0);

        // Resuming needs the full 1500ms again, not the remaining 500ms
        let (events, t) = run(&mut p, GestureLabel::IndexFingerUp, t, 14);
        assert!(events.is_empty());
        let (events, _) = run(&mut p, GestureLabel::IndexFingerUp, t, 1);
        assert_eq!(events, vec![ProgressionEvent::VerseRevealed(0)]);
        assert_eq!(p.phase(), Phase::Revealed);
    }

    #[test]
    fn test_hold_ratio_zero_outside_awaiting() {
        let mut p = Progression::new(two_verse_surah());

        run(&mut p, GestureLabel::IndexFingerUp, TickTime::ZERO, 15);
        assert_eq!(p.phase(), Phase::Revealed);
        assert_eq!(p.hold_ratio(), 0.0);
    }

    #[test]
    fn test_cancel_windows_freezes_reveal() {
        let mut p = Progression::new(two_verse_surah());

        let (_, t) = run(&mut p, GestureLabel::IndexFingerUp, TickTime::ZERO, 15);
        assert_eq!(p.phase(), Phase::Revealed);

        p.cancel_windows();

        // The reveal window can no longer fire; the phase holds
        let (events, _) = run(&mut p, GestureLabel::Unknown, t, 100);
        assert!(events.is_empty());
        assert_eq!(p.phase(), Phase::Revealed);
    }
}

//! Frame clock
//!
//! The detector delivers frames at its own cadence, which is not
//! guaranteed to be fixed-rate; frames may be dropped under load. The
//! frame clock turns wall deltas into tick-timeline deltas so the rest of
//! the engine never touches `Instant` directly.

use std::time::{Duration, Instant};

use hifz_core::TickTime;

/// Monotonic tick clock driven by frame arrivals
/// INVARIANT: tick time never decreases, never jumps
pub struct FrameClock {
    /// Current tick time
    value: TickTime,
    /// Last observed instant
    last_update: Instant,
    /// Maximum single step, absorbing system sleeps and stalls
    max_step: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        FrameClock {
            value: TickTime::ZERO,
            last_update: Instant::now(),
            max_step: Duration::from_millis(100),
        }
    }

    /// Advance based on elapsed real time, returning the step applied
    pub fn tick(&mut self) -> (TickTime, Duration) {
        self.tick_at(Instant::now())
    }

    /// Advance to a specific instant (injectable for tests)
    pub fn tick_at(&mut self, now: Instant) -> (TickTime, Duration) {
        let elapsed = now.saturating_duration_since(self.last_update);
        let step = elapsed.min(self.max_step);

        self.value = self.value.saturating_add(step);
        self.last_update = now;
        (self.value, step)
    }

    /// Current tick time without advancing
    pub fn now(&self) -> TickTime {
        self.value
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

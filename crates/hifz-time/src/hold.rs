//! Gesture hold timer
//!
//! A gesture is only accepted after matching the target continuously for
//! the hold threshold. Any mismatch resets the accumulator to zero; hand
//! loss classifies as `Unknown` upstream and therefore also resets — the
//! hold must be unbroken.

use std::time::Duration;

use hifz_core::GestureLabel;

/// Hold timer configuration
#[derive(Clone, Debug)]
pub struct HoldConfig {
    /// Minimum continuous match duration before a gesture is accepted
    pub hold_threshold: Duration,
}

impl Default for HoldConfig {
    fn default() -> Self {
        HoldConfig {
            hold_threshold: Duration::from_millis(1500),
        }
    }
}

/// Outcome of one hold-timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldResult {
    /// Still accumulating toward the threshold
    Matching(Duration),
    /// Mismatch broke the hold; accumulator is back at zero
    Reset,
    /// Threshold met. One-shot: the accumulator is already reset for the
    /// next cycle.
    Reached,
}

/// Tracks continuous-match duration against the live classifier output
#[derive(Debug, Clone)]
pub struct HoldTimer {
    config: HoldConfig,
    elapsed: Duration,
}

impl HoldTimer {
    pub fn new() -> Self {
        Self::with_config(HoldConfig::default())
    }

    pub fn with_config(config: HoldConfig) -> Self {
        HoldTimer {
            config,
            elapsed: Duration::ZERO,
        }
    }

    /// Feed one classification tick.
    ///
    /// `dt` is the time since the previous tick, whatever cadence the
    /// calling loop runs at.
    pub fn advance(
        &mut self,
        current: GestureLabel,
        target: GestureLabel,
        dt: Duration,
    ) -> HoldResult {
        if current != target {
            self.elapsed = Duration::ZERO;
            return HoldResult::Reset;
        }

        self.elapsed += dt;
        if self.elapsed >= self.config.hold_threshold {
            self.elapsed = Duration::ZERO;
            return HoldResult::Reached;
        }

        HoldResult::Matching(self.elapsed)
    }

    /// Zero the accumulator (verse change, phase change)
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Accumulated continuous-match time
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Progress toward the threshold in [0, 1]
    pub fn progress_ratio(&self) -> f32 {
        let threshold = self.config.hold_threshold.as_secs_f32();
        if threshold <= 0.0 {
            return 0.0;
        }
        (self.elapsed.as_secs_f32() / threshold).clamp(0.0, 1.0)
    }
}

impl Default for HoldTimer {
    fn default() -> Self {
        Self::new()
    }
}

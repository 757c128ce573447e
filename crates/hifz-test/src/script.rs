//! Scripted timeline runner
//!
//! Feeds synthetic detections into a [`RecitationEngine`] along an
//! explicit tick timeline, at fixed or jittered cadence. The detector's
//! real cadence is not fixed-rate, so scenarios should survive both.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hifz_core::{GestureLabel, TickTime};
use hifz_engine::RecitationEngine;
use hifz_session::ProgressionEvent;

use crate::detections_for;

/// Drives an engine with synthetic frames along a deterministic timeline
pub struct ScriptedRun {
    engine: RecitationEngine,
    now: TickTime,
}

impl ScriptedRun {
    pub fn new(engine: RecitationEngine) -> Self {
        ScriptedRun {
            engine,
            now: TickTime::ZERO,
        }
    }

    /// Feed `label` frames for `total` at a fixed `cadence`, collecting
    /// progression events
    pub fn feed(
        &mut self,
        label: GestureLabel,
        total: Duration,
        cadence: Duration,
    ) -> Vec<ProgressionEvent> {
        let detections = detections_for(label);
        let mut events = Vec::new();
        let mut remaining = total;

        while remaining > Duration::ZERO {
            let dt = cadence.min(remaining);
            self.now = self.now + dt;
            events.extend(self.engine.ingest_at(&detections, self.now, dt));
            remaining -= dt;
        }

        events
    }

    /// Like [`feed`](Self::feed) but with per-frame cadence jitter of
    /// ±50%, seeded for reproducibility
    pub fn feed_jittered(
        &mut self,
        label: GestureLabel,
        total: Duration,
        cadence: Duration,
        rng: &mut StdRng,
    ) -> Vec<ProgressionEvent> {
        let detections = detections_for(label);
        let mut events = Vec::new();
        let mut remaining = total;
        let base = cadence.as_micros() as u64;

        while remaining > Duration::ZERO {
            let jittered = Duration::from_micros(rng.gen_range(base / 2..=base * 3 / 2));
            let dt = jittered.min(remaining);
            self.now = self.now + dt;
            events.extend(self.engine.ingest_at(&detections, self.now, dt));
            remaining -= dt;
        }

        events
    }

    /// Seeded RNG for jittered runs
    pub fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    pub fn now(&self) -> TickTime {
        self.now
    }

    pub fn engine(&self) -> &RecitationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut RecitationEngine {
        &mut self.engine
    }
}

//! Tick-time primitive
//!
//! The engine never reads wall-clock time. All timing flows from a
//! monotonic tick timeline measured in microseconds since engine start.

use std::ops::{Add, Sub};
use std::time::Duration;

/// Monotonic engine time, microseconds since engine start
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TickTime(pub u64);

impl TickTime {
    pub const ZERO: TickTime = TickTime(0);

    #[inline]
    pub fn from_micros(micros: u64) -> Self {
        TickTime(micros)
    }

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        TickTime(millis * 1000)
    }

    #[inline]
    pub fn as_micros(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0 / 1000
    }

    #[inline]
    pub fn saturating_add(self, duration: Duration) -> Self {
        TickTime(self.0.saturating_add(duration.as_micros() as u64))
    }
}

impl Add<Duration> for TickTime {
    type Output = TickTime;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        TickTime(self.0 + rhs.as_micros() as u64)
    }
}

impl Sub<TickTime> for TickTime {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: TickTime) -> Self::Output {
        Duration::from_micros(self.0.saturating_sub(rhs.0))
    }
}

impl std::fmt::Debug for TickTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t({}ms)", self.as_millis())
    }
}

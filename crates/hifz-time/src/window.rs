//! One-shot window timers
//!
//! Reveal and transition windows are deferred, cancellable deadlines on
//! the tick timeline. Each timer role holds at most one in-flight
//! deadline: arming replaces any previous one. A guard from a superseded
//! arm never fires — a stale timer is a no-op, not a corrupting write.

use std::time::Duration;

use hifz_core::TickTime;

/// Token returned by [`WindowTimer::arm`]; required to poll the deadline
///
/// Carries the generation at arm time so that polls against a replaced or
/// cancelled deadline cannot observe a fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGuard {
    generation: u64,
}

/// A single-role one-shot deadline
#[derive(Debug, Clone, Default)]
pub struct WindowTimer {
    deadline: Option<TickTime>,
    generation: u64,
}

impl WindowTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the deadline `duration` from `now`, cancelling any
    /// previous deadline for this role.
    pub fn arm(&mut self, now: TickTime, duration: Duration) -> WindowGuard {
        self.generation += 1;
        self.deadline = Some(now + duration);
        WindowGuard {
            generation: self.generation,
        }
    }

    /// Drop the in-flight deadline, invalidating outstanding guards
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.deadline = None;
    }

    /// Fire check. Returns true at most once per arm, and only for the
    /// guard of the current generation.
    pub fn poll(&mut self, now: TickTime, guard: WindowGuard) -> bool {
        if guard.generation != self.generation {
            return false;
        }
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Whether a deadline is currently scheduled
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

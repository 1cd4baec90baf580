//! Frame scheduling for the update step.
//!
//! The simulation only advances while a run is active, so the main loop
//! starts this clock on every transition into `Active` and stops it on
//! every transition out. A stopped clock never reports a due tick,
//! which guarantees no stray update runs against a non-active session.

use std::time::{Duration, Instant};

/// A start/stop clock that fires at a fixed interval while running.
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    next_tick: Option<Instant>,
}

impl FrameClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_tick: None,
        }
    }

    pub fn running(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Begin firing ticks. The first tick is due one interval from now.
    pub fn start(&mut self, now: Instant) {
        self.next_tick = Some(now + self.interval);
    }

    /// Stop firing ticks until the next `start`.
    pub fn stop(&mut self) {
        self.next_tick = None;
    }

    /// Consume a due tick, if any, and schedule the next one.
    pub fn tick_due(&mut self, now: Instant) -> bool {
        match self.next_tick {
            Some(due) if now >= due => {
                // Schedule from now, not from `due`: a stalled terminal
                // should not cause a burst of catch-up frames
                self.next_tick = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// How long the event loop may block before the next tick is due.
    /// Falls back to `idle` while stopped.
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.next_tick {
            Some(due) => due.saturating_duration_since(now),
            None => idle,
        }
    }
}

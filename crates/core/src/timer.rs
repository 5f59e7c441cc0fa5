//! Frame clock driving the per-tick update loop.

use std::time::{Duration, Instant};

/// Counts update ticks and measures the time between them.
///
/// The rig is updated once per tick; the clock is only used for pacing
/// diagnostics, never to scale adjustment deltas (held keys repeat a fixed
/// step every tick).
#[derive(Debug)]
pub struct FrameClock {
    start: Instant,
    last_tick: Instant,
    ticks: u64,
}

impl FrameClock {
    /// Create a new clock, starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            ticks: 0,
        }
    }

    /// Advance to the next tick and return the time since the previous one.
    pub fn tick(&mut self) -> Duration {
        let now = Instant::now();
        let delta = now - self.last_tick;
        self.last_tick = now;
        self.ticks += 1;
        delta
    }

    /// Number of ticks taken so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Total time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Average tick rate since the clock was created, in ticks per second.
    pub fn average_rate(&self) -> f32 {
        let secs = self.elapsed().as_secs_f32();
        if secs > 0.0 {
            self.ticks as f32 / secs
        } else {
            0.0
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

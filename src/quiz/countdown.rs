//! Per-question countdown.
//!
//! The countdown owns no thread or interval. The caller drives it by calling
//! `tick()` once per elapsed second; a stopped countdown ignores ticks, so a
//! stale tick arriving after a transition is harmless.

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Countdown is stopped or untimed; nothing happened.
    Idle,
    /// One second elapsed, this many remain.
    Running(u32),
    /// Reached zero on this tick. The countdown stops itself.
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    running: bool,
}

impl Countdown {
    /// A running countdown of `limit` seconds. A limit of `0` is untimed and never runs.
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            remaining: limit,
            running: limit > 0,
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_timed(&self) -> bool {
        self.limit > 0
    }

    /// Resumes from the current remaining time.
    pub fn start(&mut self) {
        self.running = self.limit > 0 && self.remaining > 0;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Re-arms with the full limit.
    pub fn reset(&mut self) {
        self.remaining = self.limit;
        self.running = self.limit > 0;
    }

    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }
}

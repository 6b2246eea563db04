//! Clock module - session timing
//!
//! Two f32 second counters driven by the caller's frame delta: total elapsed
//! time, which ends the session at [`SESSION_LIMIT_SECS`], and a step
//! accumulator that meters gravity to one forced down-step per
//! [`STEP_INTERVAL_SECS`]. The accumulator zeroes on consumption rather than
//! carrying the remainder, so a long frame still yields a single step.

use sumfall_types::{SESSION_LIMIT_SECS, STEP_INTERVAL_SECS};

/// Session timing state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionClock {
    elapsed: f32,
    step_accumulator: f32,
}

impl SessionClock {
    /// Create a clock at zero
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            step_accumulator: 0.0,
        }
    }

    /// Seconds of play time accumulated so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Zero both counters for a new session
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.step_accumulator = 0.0;
    }

    /// Advance both counters by one frame delta (non-negative seconds)
    /// Returns true when the session limit has been reached
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        self.step_accumulator += dt;
        self.is_expired()
    }

    /// Whether the elapsed counter has reached the session limit
    pub fn is_expired(&self) -> bool {
        self.elapsed >= SESSION_LIMIT_SECS
    }

    /// Consume one gravity step if a full interval has accumulated
    /// Zeroes the accumulator on consumption
    pub fn try_consume_step(&mut self) -> bool {
        if self.step_accumulator >= STEP_INTERVAL_SECS {
            self.step_accumulator = 0.0;
            true
        } else {
            false
        }
    }

    /// Clamp elapsed to the session limit (game-over bookkeeping)
    pub fn clamp_to_limit(&mut self) {
        self.elapsed = self.elapsed.min(SESSION_LIMIT_SECS);
    }
}

impl Default for SessionClock {
    fn default() -> Self {
        Self::new()
    }
}

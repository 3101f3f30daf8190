//! Per-turn countdown timer for Zuul.
//!
//! The timer is a logical clock, not a wall clock: it moves exactly once
//! per qualifying turn, by a fixed `delta`. Nothing runs in the
//! background and nothing is ever clamped, so the value can go negative
//! (or grow without bound when `delta` is positive).
//!
//! # Thresholds
//!
//! Both checks are inclusive:
//!
//! - [`Timer::is_low`]: `value <= low_threshold`
//! - [`Timer::is_expired`]: `value <= 0`
//!
//! # Integration
//!
//! The session advances the timer after dispatching a command:
//!
//! ```ignore
//! if cmd.consumes_turn() {
//!     timer.tick();
//!     if timer.is_expired() { /* game over */ }
//!     else if timer.is_low() { /* warn */ }
//! }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Starting parameters for a [`Timer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimerConfig {
    /// Value at the start of the game.
    pub initial: i64,
    /// Applied once per qualifying turn. Negative counts down.
    pub delta: i64,
    /// The timer reports low once the value drops to this (inclusive).
    pub low_threshold: i64,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            initial: 60,
            delta: -1,
            low_threshold: 5,
        }
    }
}

impl TimerConfig {
    /// Creates a config with the given values.
    pub fn new(initial: i64, delta: i64, low_threshold: i64) -> Self {
        Self {
            initial,
            delta,
            low_threshold,
        }
    }

    /// Returns the config unchanged, warning about setups that are legal
    /// but probably unintended.
    ///
    /// Called automatically by [`Timer::new`]. Values are never altered.
    pub fn validated(self) -> Self {
        if self.turns_until_expiry().is_none() {
            warn!(
                initial = self.initial,
                delta = self.delta,
                "timer can never expire"
            );
        }
        if self.initial <= self.low_threshold {
            warn!(
                initial = self.initial,
                low_threshold = self.low_threshold,
                "timer starts at or below its low threshold"
            );
        }
        self
    }

    /// Number of qualifying turns until the timer expires, or `None` if
    /// it never does. Zero if it starts expired.
    pub fn turns_until_expiry(&self) -> Option<u64> {
        if self.initial <= 0 {
            return Some(0);
        }
        if self.delta >= 0 {
            return None;
        }
        let step = self.delta.unsigned_abs();
        Some((self.initial as u64).div_ceil(step))
    }
}

// ---------------------------------------------------------------------------
// Timer
// ---------------------------------------------------------------------------

/// A countdown (or count-up) clock advanced once per turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    value: i64,
    delta: i64,
    low_threshold: i64,
    /// Ticks applied since creation.
    turns: u64,
}

impl Timer {
    /// Creates a timer from config.
    pub fn new(config: TimerConfig) -> Self {
        let config = config.validated();
        Self {
            value: config.initial,
            delta: config.delta,
            low_threshold: config.low_threshold,
            turns: 0,
        }
    }

    /// Shorthand for `Timer::new(TimerConfig::new(..))`.
    pub fn with(initial: i64, delta: i64, low_threshold: i64) -> Self {
        Self::new(TimerConfig::new(initial, delta, low_threshold))
    }

    /// Applies `value += delta`. Unconditional; returns the new value.
    pub fn tick(&mut self) -> i64 {
        self.value = self.value.saturating_add(self.delta);
        self.turns += 1;
        trace!(value = self.value, turns = self.turns, "timer ticked");
        self.value
    }

    /// `true` once the value is at or below zero.
    pub fn is_expired(&self) -> bool {
        self.value <= 0
    }

    /// `true` once the value is at or below the low threshold.
    pub fn is_low(&self) -> bool {
        self.value <= self.low_threshold
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Per-turn delta.
    pub fn delta(&self) -> i64 {
        self.delta
    }

    /// Inclusive low threshold.
    pub fn low_threshold(&self) -> i64 {
        self.low_threshold
    }

    /// Number of ticks applied so far.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn set_value(&mut self, value: i64) {
        self.value = value;
    }

    pub fn set_delta(&mut self, delta: i64) {
        self.delta = delta;
    }

    pub fn set_low_threshold(&mut self, low_threshold: i64) {
        self.low_threshold = low_threshold;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

/// Prints the current value.
impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

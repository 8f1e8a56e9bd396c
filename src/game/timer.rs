//! Countdown timer
//!
//! Pure countdown logic with one-second resolution. The caller drives
//! `tick()` from its event loop and wires the single expiry signal to
//! [`GameSession::force_timeout`](crate::game::GameSession::force_timeout).
//! Carries no game logic itself.

/// Default round duration in seconds
pub const DEFAULT_DURATION: u32 = 60;

/// A countdown with a configurable duration and a single expiry signal
#[derive(Debug, Clone)]
pub struct TimerCoordinator {
    duration: u32,
    remaining: u32,
    running: bool,
    expired: bool,
}

impl TimerCoordinator {
    /// Create a stopped timer with the given duration in seconds
    #[must_use]
    pub const fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
            expired: false,
        }
    }

    /// Start (or restart) the countdown from the full duration
    pub const fn start(&mut self) {
        self.remaining = self.duration;
        self.running = true;
        self.expired = false;
    }

    /// Advance the countdown by one second
    ///
    /// Returns `true` exactly once, on the tick that exhausts the countdown.
    /// Never fires when stopped or after expiry.
    pub const fn tick(&mut self) -> bool {
        if !self.running || self.remaining == 0 {
            return false;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            self.running = false;
            self.expired = true;
            return true;
        }
        false
    }

    /// Stop the countdown; idempotent, keeps the expired flag
    pub const fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and rewind to a new duration
    pub const fn reset(&mut self, duration: u32) {
        self.duration = duration;
        self.remaining = duration;
        self.running = false;
        self.expired = false;
    }

    /// Seconds left on the countdown
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Configured duration in seconds
    #[inline]
    #[must_use]
    pub const fn duration(&self) -> u32 {
        self.duration
    }

    #[inline]
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    #[must_use]
    pub const fn has_expired(&self) -> bool {
        self.expired
    }

    /// Display threshold: 30 seconds or less remain
    #[must_use]
    pub const fn is_low_time(&self) -> bool {
        self.remaining <= 30 && self.remaining > 10 && self.running
    }

    /// Display threshold: 10 seconds or less remain
    #[must_use]
    pub const fn is_critical_time(&self) -> bool {
        self.remaining <= 10 && self.remaining > 0 && self.running
    }

    /// Remaining time as `MM:SS`
    #[must_use]
    pub fn formatted(&self) -> String {
        format!("{:02}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}

impl Default for TimerCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

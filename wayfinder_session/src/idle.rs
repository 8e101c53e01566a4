// Copyright 2026 the Wayfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inactivity timer: report once when no activity has been seen for a while.
//!
//! The timer never reads a clock. Hosts pass a monotonic timestamp in
//! milliseconds to [`IdleTimer::touch`] on every user interaction and to
//! [`IdleTimer::poll`] from their frame or timer callback.
//!
//! ```
//! use wayfinder_session::IdleTimer;
//!
//! let mut idle = IdleTimer::new(30_000);
//! assert!(!idle.poll(100_000)); // Nothing to time out yet.
//!
//! idle.touch(1_000);
//! assert_eq!(idle.remaining(11_000), Some(20_000));
//! assert!(!idle.poll(30_999));
//! assert!(idle.poll(31_000));
//! assert!(!idle.poll(90_000)); // Fires once per idle period.
//! ```

/// Default idle period before a kiosk session resets, in milliseconds.
pub const DEFAULT_IDLE_TIMEOUT_MS: u64 = 60_000;

/// Tracks the time since the last user activity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdleTimer {
    timeout_ms: u64,
    last_activity: Option<u64>,
}

impl IdleTimer {
    /// Creates a disarmed timer with the given idle period.
    #[must_use]
    pub const fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            last_activity: None,
        }
    }

    /// Returns the idle period in milliseconds.
    #[must_use]
    pub const fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Records activity at `now`, arming the timer.
    pub fn touch(&mut self, now: u64) {
        self.last_activity = Some(now);
    }

    /// Disarms the timer without firing.
    pub fn disarm(&mut self) {
        self.last_activity = None;
    }

    /// Returns `true` while activity has been recorded and not yet timed out.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.last_activity.is_some()
    }

    /// Returns `true` if the idle period has elapsed at `now`, disarming the
    /// timer so the expiry is reported only once.
    ///
    /// Timestamps earlier than the last activity count as no time elapsed.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.last_activity {
            Some(at) if now.saturating_sub(at) >= self.timeout_ms => {
                self.last_activity = None;
                true
            }
            _ => false,
        }
    }

    /// Milliseconds left before the timer fires, or `None` when disarmed.
    #[must_use]
    pub fn remaining(&self, now: u64) -> Option<u64> {
        self.last_activity
            .map(|at| self.timeout_ms.saturating_sub(now.saturating_sub(at)))
    }
}

impl Default for IdleTimer {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_TIMEOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_disarmed() {
        let mut idle = IdleTimer::default();
        assert!(!idle.is_armed());
        assert_eq!(idle.remaining(5), None);
        assert!(!idle.poll(u64::MAX));
        assert_eq!(idle.timeout_ms(), DEFAULT_IDLE_TIMEOUT_MS);
    }

    #[test]
    fn touch_restarts_the_period() {
        let mut idle = IdleTimer::new(100);
        idle.touch(0);
        assert!(!idle.poll(60));
        idle.touch(60);
        assert!(!idle.poll(100));
        assert_eq!(idle.remaining(100), Some(60));
        assert!(idle.poll(160));
        assert!(!idle.is_armed());
    }

    #[test]
    fn clock_going_backwards_does_not_fire() {
        let mut idle = IdleTimer::new(100);
        idle.touch(1_000);
        assert!(!idle.poll(10));
        assert_eq!(idle.remaining(10), Some(100));
    }

    #[test]
    fn disarm_suppresses_expiry() {
        let mut idle = IdleTimer::new(10);
        idle.touch(0);
        idle.disarm();
        assert!(!idle.poll(1_000));
    }
}

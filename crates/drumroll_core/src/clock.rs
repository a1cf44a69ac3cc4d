//! Clock capability
//!
//! Momentum timing reads wall time through an injected clock so the physics
//! is deterministic under test. Hosts use [`SystemClock`]; tests drive a
//! [`ManualClock`].

use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Source of current time in milliseconds
pub trait Clock: Send + Sync {
    /// Current time in milliseconds, monotonically non-decreasing
    fn now_ms(&self) -> f64;
}

/// Monotonic clock measuring milliseconds since its creation
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Manually advanced clock, shared between the test and the widget
///
/// Cloning yields a handle to the same underlying time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<Mutex<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the absolute time in milliseconds
    pub fn set(&self, ms: f64) {
        *self.now.lock().unwrap() = ms;
    }

    /// Advance the clock by `ms` milliseconds
    pub fn advance(&self, ms: f64) {
        *self.now.lock().unwrap() += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_shares_time_across_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        clock.advance(250.0);
        assert_eq!(handle.now_ms(), 250.0);
        handle.set(1000.0);
        assert_eq!(clock.now_ms(), 1000.0);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}

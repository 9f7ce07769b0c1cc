//! Time sources for the engine
//!
//! The engine never reads the system clock itself. Every operation takes a
//! `Duration` measured from the clock's origin, so the same code runs against
//! wall time in the terminal front-ends and against virtual time in tests.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source
///
/// `now()` must never go backwards.
pub trait Clock {
    /// Time elapsed since this clock's origin
    fn now(&self) -> Duration;
}

/// Wall-clock time measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    #[must_use]
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
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Virtual time that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `delta`
    pub fn advance(&self, delta: Duration) {
        self.now.set(self.now.get() + delta);
    }

    /// Jump to `at`; earlier instants are ignored
    pub fn advance_to(&self, at: Duration) {
        if at > self.now.get() {
            self.now.set(at);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_at_zero() {
        assert_eq!(ManualClock::new().now(), Duration::ZERO);
    }

    #[test]
    fn manual_clock_never_goes_backwards() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(500));
        clock.advance_to(Duration::from_millis(200));
        assert_eq!(clock.now(), Duration::from_millis(500));

        clock.advance_to(Duration::from_millis(900));
        assert_eq!(clock.now(), Duration::from_millis(900));
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}

//! Microsecond time sources for rate-window checks.

use core::cell::Cell;
use std::time::Instant;

/// Wrapping 32-bit microsecond timer.
pub trait Clock {
    /// Current time in microseconds. Wraps roughly every 71 minutes.
    fn now_us(&self) -> u32;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_us(&self) -> u32 {
        (**self).now_us()
    }
}

/// Clock backed by [`Instant`], counting from construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Start a clock at zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_us(&self) -> u32 {
        // truncation implements the 32-bit wrap
        self.origin.elapsed().as_micros() as u32
    }
}

/// Hand-driven clock for replay and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    /// Clock reading `start_us`.
    pub const fn new(start_us: u32) -> Self {
        Self {
            now: Cell::new(start_us),
        }
    }

    /// Jump to `now_us`.
    pub fn set(&self, now_us: u32) {
        self.now.set(now_us);
    }

    /// Move forward by `delta_us`, wrapping.
    pub fn advance(&self, delta_us: u32) {
        self.now.set(self.now.get().wrapping_add(delta_us));
    }
}

impl Clock for ManualClock {
    fn now_us(&self) -> u32 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_wraps() {
        let clock = ManualClock::new(u32::MAX - 1);
        clock.advance(3);
        assert_eq!(clock.now_us(), 1);
    }

    #[test]
    fn test_reference_clock_delegates() {
        let clock = ManualClock::new(42);
        let by_ref = &clock;
        assert_eq!(by_ref.now_us(), 42);
        clock.set(7);
        assert_eq!(by_ref.now_us(), 7);
    }

    #[test]
    fn test_monotonic_clock_starts_near_zero() {
        let clock = MonotonicClock::new();
        assert!(clock.now_us() < 1_000_000);
    }
}

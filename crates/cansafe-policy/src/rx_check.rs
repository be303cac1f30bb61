//! Receive-rate monitoring.
//!
//! A variant publishes the messages it depends on together with their
//! expected frequency. The host feeds every received frame through an
//! [`RxMonitor`] and ticks it periodically; a message that misses more than
//! [`MAX_MISSED_MSGS`] periods in a row is reported as lagging.

use cansafe_can::{CanFrame, MessageDescriptor};
use cansafe_errors::ValidationError;
use heapless::Vec;

/// Periods a monitored message may miss before it is considered lagging.
pub const MAX_MISSED_MSGS: u32 = 10;

/// Largest table an [`RxMonitor`] accepts.
pub const MAX_RX_CHECKS: usize = 16;

/// A monitored message and the rate it is expected at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RxCheck {
    /// Message being monitored.
    pub msg: MessageDescriptor,
    /// Expected rate in Hz.
    pub frequency_hz: u32,
}

impl RxCheck {
    /// Create a check for `msg` at `frequency_hz`.
    pub const fn new(msg: MessageDescriptor, frequency_hz: u32) -> Self {
        Self { msg, frequency_hz }
    }

    /// Longest gap between two arrivals before the message lags.
    pub const fn max_gap_us(&self) -> u32 {
        if self.frequency_hz == 0 {
            return u32::MAX;
        }
        (1_000_000 / self.frequency_hz).saturating_mul(MAX_MISSED_MSGS)
    }
}

#[derive(Debug, Clone, Copy)]
struct RxCheckStatus {
    check: RxCheck,
    last_seen_us: u32,
    seen: bool,
    lagging: bool,
}

/// Tracks arrival times for a table of [`RxCheck`]s.
#[derive(Debug, Clone)]
pub struct RxMonitor {
    checks: Vec<RxCheckStatus, MAX_RX_CHECKS>,
}

impl RxMonitor {
    /// Start monitoring `checks` from `now_us`.
    ///
    /// Messages that never arrive start lagging once their gap has elapsed
    /// from `now_us`.
    ///
    /// # Errors
    ///
    /// Fails when the table has more than [`MAX_RX_CHECKS`] entries or an
    /// entry has a zero frequency.
    pub fn new(checks: &[RxCheck], now_us: u32) -> Result<Self, ValidationError> {
        let mut statuses = Vec::new();
        for check in checks {
            if check.frequency_hz == 0 {
                return Err(ValidationError::out_of_range(
                    "frequency_hz",
                    check.frequency_hz,
                    1,
                    1_000_000,
                ));
            }
            let status = RxCheckStatus {
                check: *check,
                last_seen_us: now_us,
                seen: false,
                lagging: false,
            };
            if statuses.push(status).is_err() {
                return Err(ValidationError::out_of_range(
                    "rx_checks",
                    checks.len(),
                    0,
                    MAX_RX_CHECKS,
                ));
            }
        }
        Ok(Self { checks: statuses })
    }

    /// Record `frame` if it is monitored. Returns `true` when it was.
    pub fn observe(&mut self, frame: &CanFrame, now_us: u32) -> bool {
        let mut matched = false;
        for status in self.checks.iter_mut().filter(|s| s.check.msg.matches(frame)) {
            status.last_seen_us = now_us;
            status.seen = true;
            status.lagging = false;
            matched = true;
        }
        matched
    }

    /// Re-evaluate every check at `now_us`. Returns `true` when any lags.
    pub fn tick(&mut self, now_us: u32) -> bool {
        let mut any = false;
        for status in self.checks.iter_mut() {
            let elapsed = now_us.wrapping_sub(status.last_seen_us);
            status.lagging = elapsed > status.check.max_gap_us();
            any |= status.lagging;
        }
        any
    }

    /// `true` when the last [`tick`](Self::tick) found a lagging message.
    pub fn is_lagging(&self) -> bool {
        self.checks.iter().any(|s| s.lagging)
    }

    /// Checks currently lagging.
    pub fn lagging(&self) -> impl Iterator<Item = &RxCheck> + '_ {
        self.checks.iter().filter(|s| s.lagging).map(|s| &s.check)
    }

    /// `true` once every monitored message has arrived at least once.
    pub fn all_seen(&self) -> bool {
        self.checks.iter().all(|s| s.seen)
    }

    /// Number of monitored messages.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// `true` for an empty table.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THROTTLE: RxCheck = RxCheck::new(MessageDescriptor::new(0x140, 0, 8), 100);
    const CRUISE: RxCheck = RxCheck::new(MessageDescriptor::new(0x144, 0, 8), 20);

    fn frame(addr: u32) -> CanFrame {
        CanFrame::new(0, addr, &[0; 8]).expect("valid frame")
    }

    #[test]
    fn test_max_gap() {
        assert_eq!(THROTTLE.max_gap_us(), 100_000);
        assert_eq!(CRUISE.max_gap_us(), 500_000);
    }

    #[test]
    fn test_unseen_message_lags_after_gap() {
        let mut monitor = RxMonitor::new(&[THROTTLE], 0).expect("valid table");
        assert!(!monitor.tick(100_000));
        assert!(monitor.tick(100_001));
        assert_eq!(monitor.lagging().count(), 1);
        assert!(!monitor.all_seen());
    }

    #[test]
    fn test_arrival_clears_lagging() {
        let mut monitor = RxMonitor::new(&[THROTTLE, CRUISE], 0).expect("valid table");
        assert!(monitor.tick(200_000));
        assert!(monitor.observe(&frame(0x140), 200_000));
        let lagging: std::vec::Vec<u32> = monitor.lagging().map(|c| c.msg.addr).collect();
        assert!(lagging.is_empty());
        assert!(!monitor.tick(250_000));
    }

    #[test]
    fn test_unmonitored_frame_ignored() {
        let mut monitor = RxMonitor::new(&[THROTTLE], 0).expect("valid table");
        assert!(!monitor.observe(&frame(0x371), 10));
    }

    #[test]
    fn test_length_must_match() {
        let mut monitor = RxMonitor::new(&[THROTTLE], 0).expect("valid table");
        let short = CanFrame::new(0, 0x140, &[0; 4]).expect("valid frame");
        assert!(!monitor.observe(&short, 10));
    }

    #[test]
    fn test_timer_wrap() {
        let mut monitor = RxMonitor::new(&[THROTTLE], u32::MAX - 10).expect("valid table");
        assert!(!monitor.tick(50_000));
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let bad = RxCheck::new(MessageDescriptor::new(0x140, 0, 8), 0);
        assert!(RxMonitor::new(&[bad], 0).is_err());
    }

    #[test]
    fn test_capacity_enforced() {
        let table = [THROTTLE; MAX_RX_CHECKS + 1];
        assert!(RxMonitor::new(&table, 0).is_err());
    }
}

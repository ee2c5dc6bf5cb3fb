//! Elapsed-time timers driven by the frame loop.
//!
//! Nothing here reads a clock. Owners feed elapsed time through `advance`, which keeps
//! every timer deterministic under test. Cancelling a timer means dropping it: each
//! timer lives in exactly one `Option` slot of the state that owns it, so replacing or
//! clearing that slot is the only way to restart or cancel.

use std::time::Duration;

/// Shortest period an [`Interval`] will accept.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Fires once after a fixed delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deadline {
    remaining: Duration,
}

impl Deadline {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { remaining: delay }
    }

    /// Advance by `delta`. Returns `true` once the deadline has been reached.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(delta);
        self.is_expired()
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    #[cfg(test)]
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}

/// Fires every `period`, starting one period after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    until_next: Duration,
}

impl Interval {
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        Self {
            period,
            until_next: period,
        }
    }

    /// Advance by `delta` and return how many times the interval fired.
    ///
    /// A large `delta` (a stalled frame) reports every missed fire so owners can
    /// process them one at a time, in order.
    pub fn advance(&mut self, delta: Duration) -> u32 {
        if delta < self.until_next {
            self.until_next -= delta;
            return 0;
        }

        let overshoot = delta - self.until_next;
        let period = self.period.as_nanos();
        let extra = overshoot.as_nanos() / period;
        let into_current = overshoot.as_nanos() % period;
        self.until_next = Duration::from_nanos((period - into_current) as u64);

        u32::try_from(extra.saturating_add(1)).unwrap_or(u32::MAX)
    }

    #[cfg(test)]
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }
}

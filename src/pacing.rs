//! Tick-based pacing for actions.
//!
//! The dispatcher itself never looks at time. Actions that should only do
//! work every so often keep an [`Interval`] and feed it the tick source's
//! current [`Instant`].

use embassy_time::{Duration, Instant};

/// Fires at most once per period
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    period: Duration,
    last: Option<Instant>,
}

impl Interval {
    pub const fn new(period: Duration) -> Self {
        Self { period, last: None }
    }

    /// Returns `true` if a full period has passed since the last hit.
    ///
    /// The first call is always due. A hit records `now` as the new start.
    pub fn is_due(&mut self, now: Instant) -> bool {
        let due = match self.last {
            None => true,
            Some(last) => now.as_millis().saturating_sub(last.as_millis()) >= self.period.as_millis(),
        };
        if due {
            self.last = Some(now);
        }
        due
    }

    /// Forget the last hit, so the next check is due
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub const fn period(&self) -> Duration {
        self.period
    }
}

use std::time::{Duration, Instant};

/// Gates simulation ticks on elapsed real time, independent of frame rate.
///
/// Polled once per frame; fires when strictly more than `period` has passed
/// since the last tick and restarts the count from the polling instant.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    last: Instant,
    period: Duration,
}

impl TickClock {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self { last: now, period }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last) > self.period {
            self.last = now;
            true
        } else {
            false
        }
    }
}

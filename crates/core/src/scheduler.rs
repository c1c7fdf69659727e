//! Fixed-interval tick accumulator.
//!
//! The scheduler does not read a clock. The host feeds it elapsed wall time
//! and gets back how many fixed steps are due, so the same code runs under a
//! real main loop and in tests that just pass numbers.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickScheduler {
    interval_ms: u32,
    accumulator_ms: u32,
}

impl TickScheduler {
    /// Create a scheduler firing every `interval_ms` (at least 1ms).
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulator_ms: 0,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Add `elapsed_ms` and return the number of ticks now due.
    ///
    /// The remainder carries over to the next call.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.accumulator_ms = self.accumulator_ms.saturating_add(elapsed_ms);
        let due = self.accumulator_ms / self.interval_ms;
        self.accumulator_ms %= self.interval_ms;
        due
    }

    /// Milliseconds until the next tick is due.
    pub fn until_next_ms(&self) -> u32 {
        self.interval_ms - self.accumulator_ms
    }

    /// Drop any partial interval; the next tick is a full interval away.
    pub fn reset(&mut self) {
        self.accumulator_ms = 0;
    }
}

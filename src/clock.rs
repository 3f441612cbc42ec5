//! Fixed-step tick accounting for the host loop.
//!
//! The loop wakes at roughly `TICK_MS` intervals but never exactly. `TickClock`
//! takes the measured wall time since the last wake, returns how much of it
//! is due as whole ticks, and carries the rest into the next call, so the
//! game clock tracks real time no matter how late each wake is.

use std::time::Duration;

use crate::types::TICK_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickClock {
    step: Duration,
    carry: Duration,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(TICK_MS)
    }
}

impl TickClock {
    pub fn new(step_ms: u32) -> Self {
        Self {
            step: Duration::from_millis(step_ms.max(1) as u64),
            carry: Duration::ZERO,
        }
    }

    /// Credit `elapsed` wall time. Returns the milliseconds now due, always a
    /// whole number of steps; the remainder waits for the next call.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.carry += elapsed;
        let step_ms = self.step.as_millis() as u64;
        let steps = self.carry.as_millis() as u64 / step_ms;
        self.carry -= self.step * steps as u32;
        (steps * step_ms).min(u32::MAX as u64) as u32
    }

    /// Time left until the next step is due.
    pub fn until_next(&self) -> Duration {
        self.step.saturating_sub(self.carry)
    }

    pub fn carry(&self) -> Duration {
        self.carry
    }
}

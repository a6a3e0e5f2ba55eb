//! Call-counting cadence for selection cycles.

use serde::Serialize;

/// Fires a selection cycle every `period` hook calls.
///
/// The period stays within `[min, max]`. Fixed schedulers have `min == max`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionScheduler {
    calls: u32,
    period: u32,
    initial: u32,
    min: u32,
    max: u32,
}

impl ActionScheduler {
    /// A scheduler whose period never changes.
    pub fn fixed(period: u32) -> Self {
        let period = period.max(1);
        Self {
            calls: 0,
            period,
            initial: period,
            min: period,
            max: period,
        }
    }

    /// An adaptive scheduler starting at `initial`, clamped into `[min, max]`.
    pub fn adaptive(initial: u32, min: u32, max: u32) -> Self {
        let min = min.max(1);
        let max = max.max(min);
        let initial = initial.clamp(min, max);
        Self {
            calls: 0,
            period: initial,
            initial,
            min,
            max,
        }
    }

    /// Count one hook call. Returns true when a selection cycle is due.
    pub fn tick(&mut self) -> bool {
        self.calls = self.calls.saturating_add(1);
        self.calls >= self.period
    }

    pub fn reset_counter(&mut self) {
        self.calls = 0;
    }

    /// Back to the initial period with no calls counted.
    pub fn reset(&mut self) {
        self.calls = 0;
        self.period = self.initial;
    }

    /// `period := min(period × 2, max)`. Returns the new period.
    pub fn grow_multiplicative(&mut self) -> u32 {
        self.period = self.period.saturating_mul(2).min(self.max);
        self.period
    }

    /// `period := max(period / 2, min)`. Returns the new period.
    pub fn shrink_multiplicative(&mut self) -> u32 {
        self.period = (self.period / 2).max(self.min);
        self.period
    }

    /// `period := min(period + 1, max)`. Returns the new period.
    pub fn grow_additive(&mut self) -> u32 {
        self.period = self.period.saturating_add(1).min(self.max);
        self.period
    }

    /// `period := max(period - 1, min)`. Returns the new period.
    pub fn shrink_additive(&mut self) -> u32 {
        self.period = self.period.saturating_sub(1).max(self.min);
        self.period
    }

    pub fn period(&self) -> u32 {
        self.period
    }

    pub fn calls_since_action(&self) -> u32 {
        self.calls
    }

    pub fn bounds(&self) -> (u32, u32) {
        (self.min, self.max)
    }
}

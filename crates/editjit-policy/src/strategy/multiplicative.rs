//! Multiplicative AIMD strategy.
//!
//! After every selection cycle the period doubles if the session stayed put
//! and halves if it moved, within `[min, max]`. A stable hot variable is
//! therefore re-checked less and less often, while churn brings the checks
//! back to the floor quickly.

use editjit_core::config::PolicyConfig;
use editjit_core::constants::{DEFAULT_DECAY_DECREMENT, DEFAULT_PERIOD_MAX, DEFAULT_PERIOD_MIN};
use editjit_core::{EventDispatcher, SessionProvider, TrackedVariable, VariableId};

use super::EditPolicy;
use crate::cycle::PolicyCore;
use crate::report::PolicyReport;
use crate::scheduler::ActionScheduler;

/// Period starts at `min` and moves by ×2 / ÷2 after each cycle.
pub struct MultiplicativePolicy<V: TrackedVariable> {
    core: PolicyCore<V>,
}

impl<V: TrackedVariable> MultiplicativePolicy<V> {
    pub const NAME: &'static str = "mul";

    /// Bounds [2, 64], decrement 10.
    pub fn new(provider: Box<dyn SessionProvider<V>>) -> Self {
        Self::with_bounds(provider, DEFAULT_PERIOD_MIN, DEFAULT_PERIOD_MAX)
    }

    pub fn with_bounds(provider: Box<dyn SessionProvider<V>>, min: u32, max: u32) -> Self {
        Self {
            core: PolicyCore::new(
                Self::NAME,
                provider,
                ActionScheduler::adaptive(min, min, max),
                DEFAULT_DECAY_DECREMENT,
                false,
            ),
        }
    }

    pub fn from_config(config: &PolicyConfig, provider: Box<dyn SessionProvider<V>>) -> Self {
        let min = config.effective_period_min();
        Self {
            core: PolicyCore::new(
                Self::NAME,
                provider,
                ActionScheduler::adaptive(min, min, config.effective_period_max()),
                config.effective_decay_decrement(),
                config.effective_purge_expired(),
            ),
        }
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.core.set_events(events);
        self
    }

    pub fn core(&self) -> &PolicyCore<V> {
        &self.core
    }

    pub fn period(&self) -> u32 {
        self.core.scheduler.period()
    }
}

impl<V: TrackedVariable> EditPolicy<V> for MultiplicativePolicy<V> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn suggest_value(&mut self, variable: &V, value: V::Value) -> bool {
        let old_period = self.core.scheduler.period();
        if let Some(outcome) = self.core.observe(variable) {
            if outcome.changed() {
                self.core.scheduler.shrink_multiplicative();
            } else {
                self.core.scheduler.grow_multiplicative();
            }
            self.core.note_period(old_period);
        }
        self.core.sessions.forward(variable, value)
    }

    fn clear_state(&mut self) {
        self.core.clear_state();
    }

    fn active_variable(&self) -> Option<VariableId> {
        self.core.sessions.active_id()
    }

    fn state_report(&self) -> PolicyReport {
        self.core.report()
    }
}

//! Additive AIMD strategy.

use editjit_core::config::PolicyConfig;
use editjit_core::constants::{DEFAULT_DECAY_DECREMENT, DEFAULT_PERIOD_MAX, DEFAULT_PERIOD_MIN};
use editjit_core::{EventDispatcher, SessionProvider, TrackedVariable, VariableId};

use super::EditPolicy;
use crate::cycle::PolicyCore;
use crate::report::PolicyReport;
use crate::scheduler::ActionScheduler;

/// Period starts at `2 × min`. Every call, not only cycle calls, moves it:
/// +1 when the value was forwarded through the session, -1 otherwise.
pub struct AdditivePolicy<V: TrackedVariable> {
    core: PolicyCore<V>,
}

impl<V: TrackedVariable> AdditivePolicy<V> {
    pub const NAME: &'static str = "add";

    /// Bounds [2, 64], initial period 4, decrement 10.
    pub fn new(provider: Box<dyn SessionProvider<V>>) -> Self {
        Self::with_bounds(provider, DEFAULT_PERIOD_MIN, DEFAULT_PERIOD_MAX)
    }

    pub fn with_bounds(provider: Box<dyn SessionProvider<V>>, min: u32, max: u32) -> Self {
        Self {
            core: PolicyCore::new(
                Self::NAME,
                provider,
                ActionScheduler::adaptive(min.saturating_mul(2), min, max),
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
                ActionScheduler::adaptive(
                    min.saturating_mul(2),
                    min,
                    config.effective_period_max(),
                ),
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

    pub fn core_mut(&mut self) -> &mut PolicyCore<V> {
        &mut self.core
    }

    pub fn period(&self) -> u32 {
        self.core.scheduler.period()
    }
}

impl<V: TrackedVariable> EditPolicy<V> for AdditivePolicy<V> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn suggest_value(&mut self, variable: &V, value: V::Value) -> bool {
        self.core.observe(variable);

        let old_period = self.core.scheduler.period();
        let forwarded = self.core.sessions.forward(variable, value);
        if forwarded {
            self.core.scheduler.grow_additive();
        } else {
            self.core.scheduler.shrink_additive();
        }
        self.core.note_period(old_period);
        forwarded
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

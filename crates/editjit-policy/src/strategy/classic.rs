//! Classic strategy: reselect on a fixed period.

use editjit_core::config::PolicyConfig;
use editjit_core::constants::{DEFAULT_CLASSIC_PERIOD, DEFAULT_DECAY_DECREMENT};
use editjit_core::{EventDispatcher, SessionProvider, TrackedVariable, VariableId};

use super::EditPolicy;
use crate::cycle::PolicyCore;
use crate::report::PolicyReport;
use crate::scheduler::ActionScheduler;

/// Runs a selection cycle every `period` calls and never adapts.
pub struct ClassicPolicy<V: TrackedVariable> {
    core: PolicyCore<V>,
}

impl<V: TrackedVariable> ClassicPolicy<V> {
    pub const NAME: &'static str = "classic";

    /// Period 25, decrement 10.
    pub fn new(provider: Box<dyn SessionProvider<V>>) -> Self {
        Self::with_period(provider, DEFAULT_CLASSIC_PERIOD)
    }

    pub fn with_period(provider: Box<dyn SessionProvider<V>>, period: u32) -> Self {
        Self {
            core: PolicyCore::new(
                Self::NAME,
                provider,
                ActionScheduler::fixed(period),
                DEFAULT_DECAY_DECREMENT,
                false,
            ),
        }
    }

    pub fn from_config(config: &PolicyConfig, provider: Box<dyn SessionProvider<V>>) -> Self {
        Self {
            core: PolicyCore::new(
                Self::NAME,
                provider,
                ActionScheduler::fixed(config.effective_classic_period()),
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
}

impl<V: TrackedVariable> EditPolicy<V> for ClassicPolicy<V> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn suggest_value(&mut self, variable: &V, value: V::Value) -> bool {
        self.core.observe(variable);
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

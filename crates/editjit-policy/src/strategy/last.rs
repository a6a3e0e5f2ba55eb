//! Last strategy: the session follows whichever variable was mutated last.

use editjit_core::{EventDispatcher, SessionProvider, TrackedVariable, VariableId};
use tracing::trace;

use super::EditPolicy;
use crate::report::PolicyReport;
use crate::session::SessionManager;

/// No counting and no batching. Every call retargets the session at its own
/// variable, so alternating mutations pay a close and an open each time.
pub struct LastPolicy<V: TrackedVariable> {
    sessions: SessionManager<V>,
}

impl<V: TrackedVariable> LastPolicy<V> {
    pub const NAME: &'static str = "last";

    pub fn new(provider: Box<dyn SessionProvider<V>>) -> Self {
        Self {
            sessions: SessionManager::new(Self::NAME, provider),
        }
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.sessions.set_events(events);
        self
    }

    pub fn sessions(&self) -> &SessionManager<V> {
        &self.sessions
    }
}

impl<V: TrackedVariable> EditPolicy<V> for LastPolicy<V> {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn suggest_value(&mut self, variable: &V, value: V::Value) -> bool {
        let outcome = self.sessions.switch_to(variable);
        if outcome.is_blocked() {
            trace!(policy = Self::NAME, variable = %variable.id(), "retarget blocked");
            return false;
        }
        self.sessions.forward(variable, value)
    }

    fn clear_state(&mut self) {
        self.sessions.clear_state();
    }

    fn active_variable(&self) -> Option<VariableId> {
        self.sessions.active_id()
    }

    fn state_report(&self) -> PolicyReport {
        PolicyReport {
            active: self.sessions.active_id(),
            ..PolicyReport::empty(Self::NAME)
        }
    }
}

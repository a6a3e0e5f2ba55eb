//! Null strategy.

use editjit_core::{TrackedVariable, VariableId};

use super::EditPolicy;
use crate::report::PolicyReport;

/// Never opens a session and never handles a mutation. Holds no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyPolicy;

impl EmptyPolicy {
    pub const NAME: &'static str = "empty";
}

impl<V: TrackedVariable> EditPolicy<V> for EmptyPolicy {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn suggest_value(&mut self, _variable: &V, _value: V::Value) -> bool {
        false
    }

    fn clear_state(&mut self) {}

    fn active_variable(&self) -> Option<VariableId> {
        None
    }

    fn state_report(&self) -> PolicyReport {
        PolicyReport::empty(Self::NAME)
    }
}

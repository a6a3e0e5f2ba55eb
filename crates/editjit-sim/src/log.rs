//! Shared record of everything a provider and its sessions did.

use std::cell::RefCell;
use std::rc::Rc;

use editjit_core::VariableId;
use serde::Serialize;

pub type SharedLog = Rc<RefCell<SessionLog>>;

/// Ordered history of session activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionLog {
    pub opened: Vec<VariableId>,
    pub closed: Vec<VariableId>,
    pub pushes: Vec<(VariableId, f64)>,
    pub rejected: Vec<VariableId>,
}

impl SessionLog {
    pub fn shared() -> SharedLog {
        Rc::new(RefCell::new(Self::default()))
    }

    pub fn open_count(&self) -> usize {
        self.opened.len()
    }

    pub fn close_count(&self) -> usize {
        self.closed.len()
    }

    pub fn push_count(&self) -> usize {
        self.pushes.len()
    }

    /// Sessions opened and not yet closed.
    pub fn currently_open(&self) -> usize {
        self.opened.len().saturating_sub(self.closed.len())
    }

    pub fn pushes_for(&self, id: VariableId) -> Vec<f64> {
        self.pushes
            .iter()
            .filter(|(v, _)| *v == id)
            .map(|(_, x)| *x)
            .collect()
    }

    pub fn last_opened(&self) -> Option<VariableId> {
        self.opened.last().copied()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

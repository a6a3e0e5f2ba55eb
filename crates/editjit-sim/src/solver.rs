//! Solver stand-in that tracks edit constraints and nothing else.

use std::cell::Cell;
use std::rc::Rc;

use editjit_core::SolverHandle;

/// A solver as far as the mutual-exclusion check is concerned.
#[derive(Debug)]
pub struct SimSolver {
    name: String,
    /// `None` for solvers without edit-constraint support.
    edit_constraints: Cell<Option<usize>>,
}

impl SimSolver {
    pub fn new(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            edit_constraints: Cell::new(Some(0)),
        })
    }

    /// A solver that cannot hold edit constraints, such as a local propagation planner.
    pub fn without_edit_support(name: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            edit_constraints: Cell::new(None),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn supports_edit(&self) -> bool {
        self.edit_constraints.get().is_some()
    }

    pub fn set_edit_constraints(&self, n: usize) {
        if self.supports_edit() {
            self.edit_constraints.set(Some(n));
        }
    }

    pub fn add_edit_constraint(&self) {
        if let Some(n) = self.edit_constraints.get() {
            self.edit_constraints.set(Some(n + 1));
        }
    }

    pub fn remove_edit_constraint(&self) {
        if let Some(n) = self.edit_constraints.get() {
            self.edit_constraints.set(Some(n.saturating_sub(1)));
        }
    }
}

impl SolverHandle for SimSolver {
    fn active_edit_constraints(&self) -> Option<usize> {
        self.edit_constraints.get()
    }
}

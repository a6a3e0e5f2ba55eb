//! Tracked variable backed by a shared `f64` cell.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use editjit_core::{SolverHandle, TrackedVariable, VariableId};

use crate::solver::SimSolver;

/// Handle to one `object.field` slot. Clones share the value cell.
#[derive(Clone)]
pub struct SimVariable {
    id: VariableId,
    object: Rc<str>,
    field: Rc<str>,
    value: Rc<Cell<f64>>,
    solvers: Vec<Rc<dyn SolverHandle>>,
    sim_solvers: Vec<Rc<SimSolver>>,
}

impl SimVariable {
    pub fn new(id: u64, object: &str, field: &str) -> Self {
        Self {
            id: VariableId::new(id),
            object: Rc::from(object),
            field: Rc::from(field),
            value: Rc::new(Cell::new(0.0)),
            solvers: Vec::new(),
            sim_solvers: Vec::new(),
        }
    }

    /// Attach the variable to `solver`.
    pub fn with_solver(mut self, solver: &Rc<SimSolver>) -> Self {
        self.solvers.push(Rc::clone(solver) as Rc<dyn SolverHandle>);
        self.sim_solvers.push(Rc::clone(solver));
        self
    }

    pub fn sim_solvers(&self) -> &[Rc<SimSolver>] {
        &self.sim_solvers
    }

    pub fn get(&self) -> f64 {
        self.value.get()
    }

    /// Direct assignment, the host's normal path when the policy declines.
    pub fn set(&self, value: f64) {
        self.value.set(value);
    }
}

impl TrackedVariable for SimVariable {
    type Value = f64;

    fn id(&self) -> VariableId {
        self.id
    }

    fn label(&self) -> String {
        format!("{}.{}", self.object, self.field)
    }

    fn solvers(&self) -> &[Rc<dyn SolverHandle>] {
        &self.solvers
    }
}

impl fmt::Debug for SimVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimVariable")
            .field("id", &self.id)
            .field("label", &self.label())
            .field("value", &self.value.get())
            .field("solvers", &self.sim_solvers.len())
            .finish()
    }
}

//! A solver plus a variable factory, the setup every scenario starts from.

use std::rc::Rc;

use crate::log::{SessionLog, SharedLog};
use crate::provider::SimSessionProvider;
use crate::solver::SimSolver;
use crate::variable::SimVariable;

/// One solver carrying `constraints` constraints, and the variables on it.
pub struct SimWorld {
    solver: Rc<SimSolver>,
    constraints: usize,
    log: SharedLog,
    next_id: u64,
}

impl SimWorld {
    pub fn new(solver: Rc<SimSolver>, constraints: usize) -> Self {
        Self {
            solver,
            constraints,
            log: SessionLog::shared(),
            next_id: 1,
        }
    }

    /// A world on a solver that supports edit constraints.
    pub fn with_constraints(constraints: usize) -> Self {
        Self::new(SimSolver::new("simplex"), constraints)
    }

    pub fn solver(&self) -> &Rc<SimSolver> {
        &self.solver
    }

    /// Number of constraints a full re-solve has to touch.
    pub fn constraints(&self) -> usize {
        self.constraints
    }

    pub fn log(&self) -> SharedLog {
        Rc::clone(&self.log)
    }

    /// A fresh variable on this world's solver with the next free id.
    pub fn variable(&mut self, object: &str, field: &str) -> SimVariable {
        let id = self.next_id;
        self.next_id += 1;
        SimVariable::new(id, object, field).with_solver(&self.solver)
    }

    /// A provider writing to this world's log and holding edit constraints
    /// on the solver while its sessions are open.
    pub fn provider(&self) -> SimSessionProvider {
        SimSessionProvider::new(self.log()).registering_constraints()
    }
}

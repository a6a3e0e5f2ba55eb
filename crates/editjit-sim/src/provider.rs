//! Session provider that logs instead of talking to a real solver.

use std::collections::BTreeSet;
use std::rc::Rc;

use editjit_core::{EditSession, SessionError, SessionProvider, TrackedVariable, VariableId};
use tracing::trace;

use crate::log::{SessionLog, SharedLog};
use crate::solver::SimSolver;
use crate::variable::SimVariable;

/// Opens [`SimSession`]s and records them in a shared [`SessionLog`].
///
/// With `register_constraints` on, an open session holds one edit constraint
/// on each of its variable's solvers until it is closed, the way a real
/// solver-backed session does.
#[derive(Clone)]
pub struct SimSessionProvider {
    log: SharedLog,
    register_constraints: bool,
    rejected: BTreeSet<VariableId>,
}

impl SimSessionProvider {
    pub fn new(log: SharedLog) -> Self {
        Self {
            log,
            register_constraints: false,
            rejected: BTreeSet::new(),
        }
    }

    /// A provider with its own fresh log.
    pub fn standalone() -> Self {
        Self::new(SessionLog::shared())
    }

    pub fn registering_constraints(mut self) -> Self {
        self.register_constraints = true;
        self
    }

    /// Refuse every open on `id`.
    pub fn reject(mut self, id: VariableId) -> Self {
        self.rejected.insert(id);
        self
    }

    pub fn log(&self) -> SharedLog {
        Rc::clone(&self.log)
    }

    pub fn boxed(self) -> Box<dyn SessionProvider<SimVariable>> {
        Box::new(self)
    }
}

impl SessionProvider<SimVariable> for SimSessionProvider {
    fn open_session(
        &mut self,
        variable: &SimVariable,
    ) -> Result<Box<dyn EditSession<f64>>, SessionError> {
        let id = variable.id();
        if self.rejected.contains(&id) {
            self.log.borrow_mut().rejected.push(id);
            return Err(SessionError::ProviderRejected {
                variable: id,
                reason: "rejected by simulation".to_string(),
            });
        }

        if variable.solvers().is_empty() {
            return Err(SessionError::VariableUnavailable { variable: id });
        }

        let held: Vec<Rc<SimSolver>> = if self.register_constraints {
            variable.sim_solvers().to_vec()
        } else {
            Vec::new()
        };
        for solver in &held {
            solver.add_edit_constraint();
        }

        self.log.borrow_mut().opened.push(id);
        trace!(variable = %id, "sim session opened");
        Ok(Box::new(SimSession {
            variable: variable.clone(),
            log: Rc::clone(&self.log),
            held,
        }))
    }
}

/// An open simulated session. Pushed values land in the variable's cell.
pub struct SimSession {
    variable: SimVariable,
    log: SharedLog,
    held: Vec<Rc<SimSolver>>,
}

impl EditSession<f64> for SimSession {
    fn push(&mut self, values: &[f64]) {
        let Some(&value) = values.first() else {
            return;
        };
        self.variable.set(value);
        self.log.borrow_mut().pushes.push((self.variable.id(), value));
    }

    fn close(self: Box<Self>) {
        for solver in &self.held {
            solver.remove_edit_constraint();
        }
        self.log.borrow_mut().closed.push(self.variable.id());
        trace!(variable = %self.variable.id(), "sim session closed");
    }
}

//! Tracked-variable capability required of the reactive framework.

use std::fmt::Debug;
use std::rc::Rc;

use crate::types::VariableId;

/// A solver instance as seen by the policy.
///
/// Only used for the mutual-exclusion precondition: a variable whose solver
/// already carries interactive edit constraints belongs to someone else.
pub trait SolverHandle {
    /// Number of edit constraints currently registered with the solver.
    ///
    /// `None` when the solver does not support edit constraints at all.
    fn active_edit_constraints(&self) -> Option<usize>;
}

/// A host-object field whose mutations the policy observes.
///
/// Implementations are cheap handles: the policy clones them into its
/// bookkeeping and compares identities through [`TrackedVariable::id`].
pub trait TrackedVariable: Clone {
    /// Type of the values proposed for this variable.
    type Value: Clone + Debug + 'static;

    /// Stable unique identity.
    fn id(&self) -> VariableId;

    /// Human-readable `object.field` label for diagnostics.
    fn label(&self) -> String;

    /// Solvers this variable participates in.
    fn solvers(&self) -> &[Rc<dyn SolverHandle>];

    /// True when any associated solver already holds an active edit constraint.
    fn under_active_edit(&self) -> bool {
        self.solvers()
            .iter()
            .any(|s| s.active_edit_constraints().is_some_and(|n| n > 0))
    }
}

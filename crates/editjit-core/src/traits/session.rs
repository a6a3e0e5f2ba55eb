//! Edit-session provider contract.

use crate::errors::SessionError;
use crate::traits::TrackedVariable;

/// An open interactive edit channel on one variable.
pub trait EditSession<T> {
    /// Push one proposed value tuple into the still-open session.
    fn push(&mut self, values: &[T]);

    /// End the session and release its edit constraints.
    fn close(self: Box<Self>);
}

/// Opens edit sessions against the constraint solver.
pub trait SessionProvider<V: TrackedVariable> {
    /// Open an edit session on `variable`.
    fn open_session(
        &mut self,
        variable: &V,
    ) -> Result<Box<dyn EditSession<V::Value>>, SessionError>;
}

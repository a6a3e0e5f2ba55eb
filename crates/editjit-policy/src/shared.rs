//! Shared handle for hosts that call the hook from inside their own callbacks.

use std::cell::{Cell, RefCell};
use std::marker::PhantomData;
use std::rc::Rc;

use editjit_core::TrackedVariable;
use tracing::debug;

use crate::report::PolicyReport;
use crate::strategy::{AnyPolicy, EditPolicy};

/// Reference-counted policy handle with a reentrancy guard.
///
/// A host that stores the hook inside objects the session provider may touch
/// can end up calling `suggest_value` while a cycle is still running. The
/// nested call is rejected: it returns false, so the host applies the value
/// through its normal path, and the rejection is counted.
pub struct SharedPolicy<V: TrackedVariable, P: EditPolicy<V> = AnyPolicy<V>> {
    inner: Rc<RefCell<P>>,
    rejected: Rc<Cell<u64>>,
    _variable: PhantomData<fn(&V)>,
}

impl<V: TrackedVariable, P: EditPolicy<V>> Clone for SharedPolicy<V, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            rejected: Rc::clone(&self.rejected),
            _variable: PhantomData,
        }
    }
}

impl<V: TrackedVariable, P: EditPolicy<V>> SharedPolicy<V, P> {
    pub fn new(policy: P) -> Self {
        Self {
            inner: Rc::new(RefCell::new(policy)),
            rejected: Rc::new(Cell::new(0)),
            _variable: PhantomData,
        }
    }

    pub fn suggest_value(&self, variable: &V, value: V::Value) -> bool {
        match self.inner.try_borrow_mut() {
            Ok(mut policy) => policy.suggest_value(variable, value),
            Err(_) => {
                self.reject("suggest_value");
                false
            }
        }
    }

    /// Reset the policy. Returns false if it was busy and nothing happened.
    pub fn clear_state(&self) -> bool {
        match self.inner.try_borrow_mut() {
            Ok(mut policy) => {
                policy.clear_state();
                true
            }
            Err(_) => {
                self.reject("clear_state");
                false
            }
        }
    }

    pub fn state_report(&self) -> Option<PolicyReport> {
        self.with(|p| p.state_report())
    }

    /// Number of calls turned away because the policy was already busy.
    pub fn reentrant_rejections(&self) -> u64 {
        self.rejected.get()
    }

    /// Run `f` against the policy. Returns `None` while the policy is busy.
    pub fn with<R>(&self, f: impl FnOnce(&P) -> R) -> Option<R> {
        self.inner.try_borrow().ok().map(|p| f(&p))
    }

    fn reject(&self, op: &'static str) {
        self.rejected.set(self.rejected.get() + 1);
        debug!(op, "policy busy; rejecting reentrant call");
    }
}

//! Owner of the single active edit session of a policy.

use std::rc::Rc;

use editjit_core::events::types::{
    BlockReason, SessionBlockedEvent, SessionClosedEvent, SessionOpenedEvent,
};
use editjit_core::{
    EditSession, EventDispatcher, SessionProvider, SolverHandle, TrackedVariable, VariableId,
};
use tracing::{debug, warn};

/// The currently open session and the variable it edits.
struct ActiveEdit<V: TrackedVariable> {
    variable: V,
    session: Box<dyn EditSession<V::Value>>,
    pushed: u64,
}

/// Result of retargeting the session at a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The session already edits the variable.
    Unchanged,
    /// A session was opened from idle.
    Opened,
    /// The previous session was closed and a new one opened.
    Switched { from: VariableId },
    /// No session could be opened and the previous one stays active.
    /// `released` names a previous session that was closed and could not be
    /// restored after a provider failure.
    Blocked {
        reason: BlockReason,
        released: Option<VariableId>,
    },
}

impl SwitchOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// Opens, switches, and releases the single edit session of a policy.
///
/// At most one session is ever open. A switch closes the old session before
/// opening the new one, so between the two steps the manager is idle. A
/// switch refused by the precondition never gets that far.
pub struct SessionManager<V: TrackedVariable> {
    policy: &'static str,
    provider: Box<dyn SessionProvider<V>>,
    active: Option<ActiveEdit<V>>,
    events: EventDispatcher,
}

impl<V: TrackedVariable> SessionManager<V> {
    pub fn new(policy: &'static str, provider: Box<dyn SessionProvider<V>>) -> Self {
        Self {
            policy,
            provider,
            active: None,
            events: EventDispatcher::new(),
        }
    }

    pub fn set_events(&mut self, events: EventDispatcher) {
        self.events = events;
    }

    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    pub fn active_variable(&self) -> Option<&V> {
        self.active.as_ref().map(|a| &a.variable)
    }

    pub fn active_id(&self) -> Option<VariableId> {
        self.active.as_ref().map(|a| a.variable.id())
    }

    pub fn is_active_on(&self, id: VariableId) -> bool {
        self.active_id() == Some(id)
    }

    /// Open a session on `variable` unless someone else already edits it.
    ///
    /// The precondition is checked before anything is released, so a blocked
    /// call leaves the current session in place. Any other open session is
    /// closed before the provider is asked; if the provider then fails, the
    /// previous session is reopened.
    pub fn create_edit_for(&mut self, variable: &V) -> Result<(), BlockReason> {
        if self.foreign_edit_blocks(variable) {
            warn!(
                policy = self.policy,
                variable = %variable.id(),
                "edit constraint already active; not opening session"
            );
            self.emit_blocked(variable.id(), BlockReason::ForeignEdit);
            return Err(BlockReason::ForeignEdit);
        }

        let previous = self.active.as_ref().map(|a| a.variable.clone());
        self.delete_edit();

        if let Err(reason) = self.open(variable) {
            if let Some(previous) = previous {
                if self.open(&previous).is_err() {
                    warn!(
                        policy = self.policy,
                        variable = %previous.id(),
                        "previous session could not be restored"
                    );
                }
            }
            return Err(reason);
        }
        Ok(())
    }

    /// True when a solver of `variable` carries an edit constraint that the
    /// open session does not account for.
    ///
    /// An open session holds one edit constraint on each solver of its
    /// variable; those are discounted on solvers the two variables share.
    fn foreign_edit_blocks(&self, variable: &V) -> bool {
        let Some(active) = self.active.as_ref() else {
            return variable.under_active_edit();
        };
        let held = active.variable.solvers();
        variable.solvers().iter().any(|solver| {
            let Some(n) = solver.active_edit_constraints() else {
                return false;
            };
            let own = usize::from(held.iter().any(|h| same_solver(h, solver)));
            n > own
        })
    }

    fn open(&mut self, variable: &V) -> Result<(), BlockReason> {
        match self.provider.open_session(variable) {
            Ok(session) => {
                debug!(
                    policy = self.policy,
                    variable = %variable.id(),
                    label = %variable.label(),
                    "edit session opened"
                );
                self.events.emit_session_opened(&SessionOpenedEvent {
                    policy: self.policy,
                    variable: variable.id(),
                    label: variable.label(),
                });
                self.active = Some(ActiveEdit {
                    variable: variable.clone(),
                    session,
                    pushed: 0,
                });
                Ok(())
            }
            Err(e) => {
                warn!(
                    policy = self.policy,
                    variable = %variable.id(),
                    error = %e,
                    "session provider failed; not opening session"
                );
                self.emit_blocked(variable.id(), BlockReason::ProviderFailed);
                Err(BlockReason::ProviderFailed)
            }
        }
    }

    /// Close the active session. Returns false when none was open.
    pub fn delete_edit(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        let id = active.variable.id();
        active.session.close();
        debug!(
            policy = self.policy,
            variable = %id,
            pushed = active.pushed,
            "edit session closed"
        );
        self.events.emit_session_closed(&SessionClosedEvent {
            policy: self.policy,
            variable: id,
            pushed: active.pushed,
        });
        true
    }

    /// Retarget the session at `variable`, opening one if idle.
    pub fn switch_to(&mut self, variable: &V) -> SwitchOutcome {
        let previous = self.active_id();
        if previous == Some(variable.id()) {
            return SwitchOutcome::Unchanged;
        }

        match (self.create_edit_for(variable), previous) {
            (Ok(()), None) => SwitchOutcome::Opened,
            (Ok(()), Some(from)) => SwitchOutcome::Switched { from },
            (Err(reason), previous) => SwitchOutcome::Blocked {
                reason,
                released: previous.filter(|&id| !self.is_active_on(id)),
            },
        }
    }

    /// Push `value` through the session if it edits `variable`.
    /// Returns whether the value was forwarded.
    pub fn forward(&mut self, variable: &V, value: V::Value) -> bool {
        match self.active.as_mut() {
            Some(active) if active.variable.id() == variable.id() => {
                active.session.push(std::slice::from_ref(&value));
                active.pushed += 1;
                true
            }
            _ => false,
        }
    }

    /// Release the session. Bookkeeping owned by the policy is reset separately.
    pub fn clear_state(&mut self) {
        self.delete_edit();
    }

    fn emit_blocked(&self, variable: VariableId, reason: BlockReason) {
        self.events.emit_session_blocked(&SessionBlockedEvent {
            policy: self.policy,
            variable,
            reason,
        });
    }
}

fn same_solver(a: &Rc<dyn SolverHandle>, b: &Rc<dyn SolverHandle>) -> bool {
    std::ptr::eq(Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const ())
}

impl<V: TrackedVariable> Drop for SessionManager<V> {
    fn drop(&mut self) {
        self.delete_edit();
    }
}

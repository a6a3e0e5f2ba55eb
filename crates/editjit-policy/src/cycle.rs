//! The state a frequency-driven policy owns, and its selection cycle.

use editjit_core::events::types::{CycleCompletedEvent, PeriodAdaptedEvent};
use editjit_core::{EventDispatcher, SessionProvider, TrackedVariable, VariableId};
use tracing::{debug, trace};

use crate::frequency::FrequencyTracker;
use crate::report::{PolicyReport, RecordReport};
use crate::scheduler::ActionScheduler;
use crate::session::{SessionManager, SwitchOutcome};

/// What one selection cycle did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Hottest variable at the start of the cycle.
    pub top: VariableId,
    /// Session variable before the cycle.
    pub before: Option<VariableId>,
    /// Session variable after the cycle.
    pub after: Option<VariableId>,
    pub switch: SwitchOutcome,
}

impl CycleOutcome {
    /// True when an existing session was replaced or lost.
    ///
    /// Opening the first session from idle, or failing to, is not a change.
    /// Neither is a refused switch, which keeps the current session.
    pub fn changed(&self) -> bool {
        self.before.is_some() && self.before != self.after
    }

    pub fn blocked(&self) -> bool {
        self.switch.is_blocked()
    }
}

/// Tracker, session manager, and scheduler of one policy instance.
///
/// Owned by the strategy value the caller holds; nothing here is global.
pub struct PolicyCore<V: TrackedVariable> {
    name: &'static str,
    pub(crate) tracker: FrequencyTracker<V>,
    pub(crate) sessions: SessionManager<V>,
    pub(crate) scheduler: ActionScheduler,
    decay_decrement: u64,
    purge_expired: bool,
}

impl<V: TrackedVariable> PolicyCore<V> {
    pub fn new(
        name: &'static str,
        provider: Box<dyn SessionProvider<V>>,
        scheduler: ActionScheduler,
        decay_decrement: u64,
        purge_expired: bool,
    ) -> Self {
        Self {
            name,
            tracker: FrequencyTracker::new(),
            sessions: SessionManager::new(name, provider),
            scheduler,
            decay_decrement,
            purge_expired,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn set_events(&mut self, events: EventDispatcher) {
        self.sessions.set_events(events);
    }

    pub fn tracker(&self) -> &FrequencyTracker<V> {
        &self.tracker
    }

    pub fn scheduler(&self) -> &ActionScheduler {
        &self.scheduler
    }

    pub fn sessions(&self) -> &SessionManager<V> {
        &self.sessions
    }

    /// Direct session access, for seeding a session outside a cycle.
    pub fn sessions_mut(&mut self) -> &mut SessionManager<V> {
        &mut self.sessions
    }

    /// Count the mutation and advance the scheduler. When the cadence fires,
    /// run a selection cycle and restart the count.
    pub(crate) fn observe(&mut self, variable: &V) -> Option<CycleOutcome> {
        self.tracker.record_mutation(variable);
        if !self.scheduler.tick() {
            return None;
        }
        let outcome = self.run_cycle();
        self.scheduler.reset_counter();
        outcome
    }

    /// Move the session to the hottest variable, then decay every count.
    ///
    /// A blocked open ends the cycle before decay. Returns `None` only when
    /// nothing has been recorded yet.
    pub fn run_cycle(&mut self) -> Option<CycleOutcome> {
        let top = self.tracker.select_hottest()?.clone();
        let before = self.sessions.active_id();
        let switch = self.sessions.switch_to(&top);

        if !switch.is_blocked() {
            self.tracker.decay_all(self.decay_decrement);
            if self.purge_expired {
                let purged = self.tracker.purge_expired(self.sessions.active_id());
                if purged > 0 {
                    debug!(policy = self.name, purged, "purged expired frequency records");
                }
            }
        }

        let outcome = CycleOutcome {
            top: top.id(),
            before,
            after: self.sessions.active_id(),
            switch,
        };
        trace!(
            policy = self.name,
            top = %outcome.top,
            changed = outcome.changed(),
            tracked = self.tracker.len(),
            "selection cycle"
        );
        self.sessions.events().emit_cycle_completed(&CycleCompletedEvent {
            policy: self.name,
            top: outcome.top,
            active: outcome.after,
            changed: outcome.changed(),
        });
        Some(outcome)
    }

    /// Log and publish a period change. No-op when the period did not move.
    pub(crate) fn note_period(&self, old_period: u32) {
        let new_period = self.scheduler.period();
        if old_period == new_period {
            return;
        }
        debug!(
            policy = self.name,
            old_period, new_period, "selection period adapted"
        );
        self.sessions.events().emit_period_adapted(&PeriodAdaptedEvent {
            policy: self.name,
            old_period,
            new_period,
        });
    }

    /// Release the session and forget all counts and cadence state.
    pub fn clear_state(&mut self) {
        self.sessions.clear_state();
        self.tracker.clear();
        self.scheduler.reset();
    }

    pub fn report(&self) -> PolicyReport {
        PolicyReport {
            policy: self.name.to_string(),
            active: self.sessions.active_id(),
            period: Some(self.scheduler.period()),
            calls_since_action: Some(self.scheduler.calls_since_action()),
            records: self
                .tracker
                .ranked()
                .into_iter()
                .map(|r| RecordReport {
                    variable: r.variable.id(),
                    label: r.variable.label(),
                    count: r.count,
                    sequence: r.sequence,
                })
                .collect(),
        }
    }
}

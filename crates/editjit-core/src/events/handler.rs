//! EditJitEventHandler trait with no-op defaults.

use super::types::*;

/// Trait for observing policy events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait EditJitEventHandler: Send + Sync {
    // ---- Session Lifecycle ----
    fn on_session_opened(&self, _event: &SessionOpenedEvent) {}
    fn on_session_closed(&self, _event: &SessionClosedEvent) {}
    fn on_session_blocked(&self, _event: &SessionBlockedEvent) {}

    // ---- Selection ----
    fn on_cycle_completed(&self, _event: &CycleCompletedEvent) {}
    fn on_period_adapted(&self, _event: &PeriodAdaptedEvent) {}
}

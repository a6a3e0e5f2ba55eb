//! Synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::EditJitEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// Cloning shares the registered handlers.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EditJitEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn EditJitEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are caught and do not prevent subsequent handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn EditJitEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Session Lifecycle ----
    pub fn emit_session_opened(&self, event: &SessionOpenedEvent) {
        self.emit(|h| h.on_session_opened(event));
    }

    pub fn emit_session_closed(&self, event: &SessionClosedEvent) {
        self.emit(|h| h.on_session_closed(event));
    }

    pub fn emit_session_blocked(&self, event: &SessionBlockedEvent) {
        self.emit(|h| h.on_session_blocked(event));
    }

    // ---- Selection ----
    pub fn emit_cycle_completed(&self, event: &CycleCompletedEvent) {
        self.emit(|h| h.on_cycle_completed(event));
    }

    pub fn emit_period_adapted(&self, event: &PeriodAdaptedEvent) {
        self.emit(|h| h.on_period_adapted(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

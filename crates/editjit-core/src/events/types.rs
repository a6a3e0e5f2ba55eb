//! Event payload types for session lifecycle and selection cycles.

use serde::{Deserialize, Serialize};

use crate::types::VariableId;

/// Payload for `on_session_opened`.
#[derive(Debug, Clone)]
pub struct SessionOpenedEvent {
    pub policy: &'static str,
    pub variable: VariableId,
    pub label: String,
}

/// Payload for `on_session_closed`.
#[derive(Debug, Clone)]
pub struct SessionClosedEvent {
    pub policy: &'static str,
    pub variable: VariableId,
    /// Values pushed through the session while it was open.
    pub pushed: u64,
}

/// Why an edit session could not be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockReason {
    /// A solver already holds an edit constraint on the variable.
    ForeignEdit,
    /// The session provider refused to open a session.
    ProviderFailed,
}

/// Payload for `on_session_blocked`.
#[derive(Debug, Clone)]
pub struct SessionBlockedEvent {
    pub policy: &'static str,
    pub variable: VariableId,
    pub reason: BlockReason,
}

/// Payload for `on_cycle_completed`.
#[derive(Debug, Clone)]
pub struct CycleCompletedEvent {
    pub policy: &'static str,
    /// Hottest variable chosen by the cycle.
    pub top: VariableId,
    /// Active variable after the cycle, if any.
    pub active: Option<VariableId>,
    /// Whether the active variable changed.
    pub changed: bool,
}

/// Payload for `on_period_adapted`.
#[derive(Debug, Clone)]
pub struct PeriodAdaptedEvent {
    pub policy: &'static str,
    pub old_period: u32,
    pub new_period: u32,
}

//! Session provider errors.

use super::error_code::{self, EditJitErrorCode};
use crate::types::VariableId;

/// Errors a session provider may report when asked to open an edit session.
///
/// The policy never propagates these out of the mutation hook. A failed open
/// is logged and treated like a blocked selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session provider rejected edit on {variable}: {reason}")]
    ProviderRejected { variable: VariableId, reason: String },

    #[error("variable {variable} is no longer available for editing")]
    VariableUnavailable { variable: VariableId },
}

impl EditJitErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderRejected { .. } => error_code::SESSION_REJECTED,
            Self::VariableUnavailable { .. } => error_code::VARIABLE_UNAVAILABLE,
        }
    }
}

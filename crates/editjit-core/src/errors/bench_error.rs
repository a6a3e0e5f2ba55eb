//! Workload driver errors.

use super::error_code::{self, EditJitErrorCode};
use super::ConfigError;

/// Errors that can occur while building or running benchmark workloads.
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EditJitErrorCode for BenchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownScenario { .. } => error_code::UNKNOWN_SCENARIO,
            Self::Config(e) => e.error_code(),
        }
    }
}

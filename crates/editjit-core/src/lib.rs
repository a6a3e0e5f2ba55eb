//! # editjit-core
//!
//! Foundation crate for the editjit session policy.
//! Defines the collaborator traits, identifiers, errors, config, events,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod traits;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{EditJitConfig, PolicyConfig, StrategyKind};
pub use errors::{ConfigError, EditJitErrorCode, SessionError};
pub use events::{EditJitEventHandler, EventDispatcher};
pub use traits::{EditSession, SessionProvider, SolverHandle, TrackedVariable};
pub use types::VariableId;

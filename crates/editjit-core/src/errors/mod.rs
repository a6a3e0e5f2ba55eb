//! Error handling for editjit.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The mutation hook itself never fails: blocked sessions and provider
//! failures degrade to "not handled". These errors surface at the edges
//! (configuration loading, collaborator failures, the workload driver).

pub mod bench_error;
pub mod config_error;
pub mod error_code;
pub mod session_error;

pub use bench_error::BenchError;
pub use config_error::ConfigError;
pub use error_code::EditJitErrorCode;
pub use session_error::SessionError;

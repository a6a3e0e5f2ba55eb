//! EditJitErrorCode trait for structured error reporting.

/// Trait for attaching a stable machine-readable code to every error enum.
pub trait EditJitErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SESSION_REJECTED: &str = "SESSION_REJECTED";
pub const VARIABLE_UNAVAILABLE: &str = "VARIABLE_UNAVAILABLE";
pub const UNKNOWN_SCENARIO: &str = "UNKNOWN_SCENARIO";

//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the editjit tracing/logging system.
///
/// Reads the `EDITJIT_LOG` environment variable for per-module log levels.
/// Format: `EDITJIT_LOG=editjit_policy=debug,editjit_bench=info`
///
/// Falls back to `editjit=info` if `EDITJIT_LOG` is not set or is invalid.
/// Calling it more than once is harmless, and it never replaces a global
/// subscriber installed by the host.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .try_init();
    });
}

//! Shared constants for the editjit session policy.

/// Fixed number of hook calls between selection cycles for the classic strategy.
pub const DEFAULT_CLASSIC_PERIOD: u32 = 25;

/// Lower bound of the adaptive selection period.
pub const DEFAULT_PERIOD_MIN: u32 = 2;

/// Upper bound of the adaptive selection period.
pub const DEFAULT_PERIOD_MAX: u32 = 64;

/// Amount subtracted from every frequency count after a selection cycle.
pub const DEFAULT_DECAY_DECREMENT: u64 = 10;

/// Zero-count frequency records are retained unless purging is enabled.
pub const DEFAULT_PURGE_EXPIRED: bool = false;

/// Workload sizes driven by the benchmark matrix.
pub const DEFAULT_BENCH_ITERATIONS: [usize; 2] = [5, 100];

/// Repetitions per strategy in the benchmark matrix.
pub const DEFAULT_BENCH_RUNS: u32 = 3;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "EDITJIT_LOG";

/// Filter used when `EDITJIT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "editjit=info";

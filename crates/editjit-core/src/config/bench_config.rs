//! Workload driver configuration.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Configuration for the benchmark matrix.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BenchConfig {
    /// Workload sizes to run. Default: [5, 100].
    #[serde(default)]
    pub iterations: Vec<usize>,
    /// Repetitions per strategy and size. Default: 3.
    pub runs: Option<u32>,
    /// Scenario names to run. Empty means all.
    #[serde(default)]
    pub scenarios: Vec<String>,
}

impl BenchConfig {
    /// Returns the effective workload sizes.
    pub fn effective_iterations(&self) -> Vec<usize> {
        if self.iterations.is_empty() {
            constants::DEFAULT_BENCH_ITERATIONS.to_vec()
        } else {
            self.iterations.clone()
        }
    }

    /// Returns the effective repetition count, defaulting to 3.
    pub fn effective_runs(&self) -> u32 {
        self.runs.unwrap_or(constants::DEFAULT_BENCH_RUNS)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.effective_runs() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "bench.runs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.iterations.iter().any(|&n| n == 0) {
            return Err(ConfigError::ValidationFailed {
                field: "bench.iterations".to_string(),
                message: "workload sizes must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

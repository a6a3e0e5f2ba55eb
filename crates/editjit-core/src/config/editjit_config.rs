//! Top-level editjit configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BenchConfig, PolicyConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`EDITJIT_*`)
/// 2. Config file passed to [`EditJitConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EditJitConfig {
    pub policy: PolicyConfig,
    pub bench: BenchConfig,
}

impl EditJitConfig {
    /// Load configuration with layered resolution.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = path {
            Self::merge_toml_file(&mut config, path)?;
        }

        Self::apply_env_overrides(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate every sub-config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.policy.validate()?;
        self.bench.validate()
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut EditJitConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: EditJitConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut EditJitConfig, other: &EditJitConfig) {
        // Policy
        if other.policy.strategy.is_some() {
            base.policy.strategy = other.policy.strategy;
        }
        if other.policy.classic_period.is_some() {
            base.policy.classic_period = other.policy.classic_period;
        }
        if other.policy.period_min.is_some() {
            base.policy.period_min = other.policy.period_min;
        }
        if other.policy.period_max.is_some() {
            base.policy.period_max = other.policy.period_max;
        }
        if other.policy.decay_decrement.is_some() {
            base.policy.decay_decrement = other.policy.decay_decrement;
        }
        if other.policy.purge_expired.is_some() {
            base.policy.purge_expired = other.policy.purge_expired;
        }

        // Bench
        if !other.bench.iterations.is_empty() {
            base.bench.iterations = other.bench.iterations.clone();
        }
        if other.bench.runs.is_some() {
            base.bench.runs = other.bench.runs;
        }
        if !other.bench.scenarios.is_empty() {
            base.bench.scenarios = other.bench.scenarios.clone();
        }
    }

    /// Apply `EDITJIT_*` environment variable overrides.
    fn apply_env_overrides(config: &mut EditJitConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("EDITJIT_STRATEGY") {
            config.policy.strategy = Some(val.parse()?);
        }
        if let Ok(val) = std::env::var("EDITJIT_CLASSIC_PERIOD") {
            config.policy.classic_period = Some(parse_env("EDITJIT_CLASSIC_PERIOD", &val)?);
        }
        if let Ok(val) = std::env::var("EDITJIT_DECAY_DECREMENT") {
            config.policy.decay_decrement = Some(parse_env("EDITJIT_DECAY_DECREMENT", &val)?);
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, val: &str) -> Result<T, ConfigError> {
    val.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: name.to_string(),
        message: format!("'{val}' is not a valid number"),
    })
}

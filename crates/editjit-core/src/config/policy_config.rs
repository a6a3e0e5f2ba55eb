//! Policy configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Which adaptation strategy drives session selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Fixed selection period.
    Classic,
    /// Period doubles while stable, halves on change.
    #[default]
    #[serde(rename = "mul", alias = "multiplicative")]
    Multiplicative,
    /// Period grows by one per forwarded call, shrinks by one otherwise.
    #[serde(rename = "add", alias = "additive")]
    Additive,
    /// Session always follows the most recently mutated variable.
    Last,
    /// Never opens a session.
    Empty,
}

impl StrategyKind {
    /// All strategies, in report order.
    pub const ALL: [StrategyKind; 5] = [
        Self::Classic,
        Self::Additive,
        Self::Multiplicative,
        Self::Last,
        Self::Empty,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Multiplicative => "mul",
            Self::Additive => "add",
            Self::Last => "last",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "mul" | "multiplicative" => Ok(Self::Multiplicative),
            "add" | "additive" => Ok(Self::Additive),
            "last" => Ok(Self::Last),
            "empty" | "none" => Ok(Self::Empty),
            other => Err(ConfigError::InvalidValue {
                field: "policy.strategy".to_string(),
                message: format!("unknown strategy '{other}'"),
            }),
        }
    }
}

/// Configuration for the session selection policy.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PolicyConfig {
    /// Strategy to construct. Default: mul.
    pub strategy: Option<StrategyKind>,
    /// Calls between selection cycles for the classic strategy. Default: 25.
    pub classic_period: Option<u32>,
    /// Lower bound of the adaptive period. Default: 2.
    pub period_min: Option<u32>,
    /// Upper bound of the adaptive period. Default: 64.
    pub period_max: Option<u32>,
    /// Count subtracted from every record after a cycle. Default: 10.
    pub decay_decrement: Option<u64>,
    /// Remove zero-count records after decay. Default: false.
    pub purge_expired: Option<bool>,
}

impl PolicyConfig {
    /// Returns the effective strategy, defaulting to multiplicative.
    pub fn effective_strategy(&self) -> StrategyKind {
        self.strategy.unwrap_or_default()
    }

    /// Returns the effective classic period, defaulting to 25.
    pub fn effective_classic_period(&self) -> u32 {
        self.classic_period.unwrap_or(constants::DEFAULT_CLASSIC_PERIOD)
    }

    /// Returns the effective adaptive period floor, defaulting to 2.
    pub fn effective_period_min(&self) -> u32 {
        self.period_min.unwrap_or(constants::DEFAULT_PERIOD_MIN)
    }

    /// Returns the effective adaptive period ceiling, defaulting to 64.
    pub fn effective_period_max(&self) -> u32 {
        self.period_max.unwrap_or(constants::DEFAULT_PERIOD_MAX)
    }

    /// Returns the effective decay decrement, defaulting to 10.
    pub fn effective_decay_decrement(&self) -> u64 {
        self.decay_decrement.unwrap_or(constants::DEFAULT_DECAY_DECREMENT)
    }

    /// Returns whether zero-count records are purged, defaulting to false.
    pub fn effective_purge_expired(&self) -> bool {
        self.purge_expired.unwrap_or(constants::DEFAULT_PURGE_EXPIRED)
    }

    /// Check the effective values for consistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.effective_classic_period() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "policy.classic_period".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.effective_period_min() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "policy.period_min".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if self.effective_period_min() > self.effective_period_max() {
            return Err(ConfigError::ValidationFailed {
                field: "policy.period_max".to_string(),
                message: format!(
                    "must be at least period_min ({})",
                    self.effective_period_min()
                ),
            });
        }
        if self.effective_decay_decrement() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "policy.decay_decrement".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

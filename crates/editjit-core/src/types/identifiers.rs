//! Stable identity for tracked variables.
//!
//! The reactive framework assigns each constrained variable a unique id when it
//! is created. The policy keys all of its bookkeeping on that id and never on
//! the variable value itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identity of a tracked variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VariableId(pub u64);

impl VariableId {
    /// Create a new ID from its raw value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    pub fn inner(self) -> u64 {
        self.0
    }
}

impl From<u64> for VariableId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<VariableId> for u64 {
    fn from(id: VariableId) -> Self {
        id.0
    }
}

impl fmt::Display for VariableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "var#{}", self.0)
    }
}

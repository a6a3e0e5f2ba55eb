//! Diagnostic snapshot of a policy's bookkeeping.

use std::fmt;

use editjit_core::VariableId;
use serde::Serialize;

/// One tracked variable and its current count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordReport {
    pub variable: VariableId,
    pub label: String,
    pub count: u64,
    pub sequence: u64,
}

/// Snapshot returned by `EditPolicy::state_report`.
///
/// Records are listed hottest first. Strategies without a scheduler leave
/// `period` and `calls_since_action` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyReport {
    pub policy: String,
    pub active: Option<VariableId>,
    pub period: Option<u32>,
    pub calls_since_action: Option<u32>,
    pub records: Vec<RecordReport>,
}

impl PolicyReport {
    pub fn empty(policy: &str) -> Self {
        Self {
            policy: policy.to_string(),
            active: None,
            period: None,
            calls_since_action: None,
            records: Vec::new(),
        }
    }
}

impl fmt::Display for PolicyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== {} =====", self.policy)?;
        match self.active {
            Some(id) => writeln!(f, "active session: {id}")?,
            None => writeln!(f, "active session: none")?,
        }
        if let (Some(period), Some(calls)) = (self.period, self.calls_since_action) {
            writeln!(f, "period: {period} (calls since action: {calls})")?;
        }
        if self.records.is_empty() {
            return writeln!(f, "nothing to report");
        }
        for r in &self.records {
            writeln!(f, "{} {} count={}", r.variable, r.label, r.count)?;
        }
        Ok(())
    }
}

//! Solver work accounting.

use serde::Serialize;

/// Work units charged per solver operation, scaled by constraint count.
///
/// A mutation the policy declines triggers a full re-solve. A value pushed
/// through an open edit session costs one unit. Opening a session costs two
/// re-solves and closing one costs a single re-solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostModel {
    pub constraints: u64,
}

impl CostModel {
    pub fn new(constraints: usize) -> Self {
        Self {
            constraints: constraints as u64,
        }
    }

    pub fn unhandled(&self) -> u64 {
        self.constraints
    }

    pub fn handled(&self) -> u64 {
        1
    }

    pub fn open(&self) -> u64 {
        2 * self.constraints
    }

    pub fn close(&self) -> u64 {
        self.constraints
    }

    /// Total for a run with the given operation counts.
    pub fn total(&self, handled: u64, unhandled: u64, opens: usize, closes: usize) -> u64 {
        handled * self.handled()
            + unhandled * self.unhandled()
            + opens as u64 * self.open()
            + closes as u64 * self.close()
    }
}

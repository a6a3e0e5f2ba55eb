//! # editjit-bench
//!
//! Drives every strategy through a fixed set of interaction workloads and
//! compares them against two baselines: no policy at all (every mutation
//! re-solves) and a hand-placed edit session held for the whole run.
//!
//! Costs are counted in deterministic solver work units, so results are
//! comparable across machines. Wall-clock time is recorded alongside.

pub mod cost;
pub mod report;
pub mod runner;
pub mod scenario;

pub use cost::CostModel;
pub use report::{BenchReport, ScenarioResult, StrategyRun, Verdict};
pub use runner::{run_fixed_edit, run_matrix, run_scenario, run_strategy};
pub use scenario::{Field, Scenario, Step};

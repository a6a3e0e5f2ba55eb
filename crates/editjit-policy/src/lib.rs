//! # editjit-policy
//!
//! Decides which single tracked variable holds the exclusive edit session.
//!
//! Every mutation of a tracked variable goes through
//! [`EditPolicy::suggest_value`]. The policy counts mutations per variable,
//! periodically runs a selection cycle that moves the session to the hottest
//! variable and decays all counts, and forwards the value through the session
//! when the mutated variable currently owns it.
//!
//! ```text
//! suggest_value(v, x)
//!   ├─ FrequencyTracker::record_mutation(v)
//!   ├─ ActionScheduler::tick() ──fires──▶ PolicyCore::run_cycle()
//!   │                                      ├─ select_hottest()
//!   │                                      ├─ SessionManager::switch_to(top)
//!   │                                      └─ decay_all(decrement)
//!   └─ SessionManager::forward(v, x) ──▶ handled?
//! ```

pub mod cycle;
pub mod frequency;
pub mod report;
pub mod scheduler;
pub mod session;
pub mod shared;
pub mod strategy;

pub use cycle::{CycleOutcome, PolicyCore};
pub use frequency::{FrequencyRecord, FrequencyTracker};
pub use report::{PolicyReport, RecordReport};
pub use scheduler::ActionScheduler;
pub use session::{SessionManager, SwitchOutcome};
pub use shared::SharedPolicy;
pub use strategy::{
    AdditivePolicy, AnyPolicy, ClassicPolicy, EditPolicy, EmptyPolicy, LastPolicy,
    MultiplicativePolicy,
};

//! # editjit-sim
//!
//! In-memory stand-ins for the reactive framework: a solver that only counts
//! edit constraints, variables holding an `f64`, and a session provider that
//! records every open, push, and close in a shared [`SessionLog`].
//!
//! Used by the policy tests and by the workload driver in `editjit-bench`.

pub mod log;
pub mod provider;
pub mod solver;
pub mod variable;
pub mod world;

pub use log::{SessionLog, SharedLog};
pub use provider::{SimSession, SimSessionProvider};
pub use solver::SimSolver;
pub use variable::SimVariable;
pub use world::SimWorld;

//! Collaborator traits.
//!
//! The policy never sees solver internals. It talks to the reactive framework
//! only through these seams.

pub mod session;
pub mod variable;

pub use session::{EditSession, SessionProvider};
pub use variable::{SolverHandle, TrackedVariable};

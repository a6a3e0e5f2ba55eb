//! Identifier types shared across the workspace.

pub mod identifiers;

pub use identifiers::VariableId;

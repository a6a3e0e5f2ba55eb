//! Configuration system for editjit.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod bench_config;
pub mod editjit_config;
pub mod policy_config;

pub use bench_config::BenchConfig;
pub use editjit_config::EditJitConfig;
pub use policy_config::{PolicyConfig, StrategyKind};

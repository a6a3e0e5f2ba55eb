//! Selection strategies behind one hook contract.

pub mod additive;
pub mod classic;
pub mod empty;
pub mod last;
pub mod multiplicative;

pub use additive::AdditivePolicy;
pub use classic::ClassicPolicy;
pub use empty::EmptyPolicy;
pub use last::LastPolicy;
pub use multiplicative::MultiplicativePolicy;

use editjit_core::config::{PolicyConfig, StrategyKind};
use editjit_core::errors::ConfigError;
use editjit_core::{EventDispatcher, SessionProvider, TrackedVariable, VariableId};
use tracing::info;

use crate::report::PolicyReport;

/// Mutation hook implemented by every strategy.
pub trait EditPolicy<V: TrackedVariable> {
    /// Short strategy name used in logs and reports.
    fn name(&self) -> &'static str;

    /// Observe a proposed value for `variable`.
    ///
    /// Returns true when the value went through the active edit session and
    /// the caller must skip its normal assignment path.
    fn suggest_value(&mut self, variable: &V, value: V::Value) -> bool;

    /// Release the session and reset all bookkeeping.
    fn clear_state(&mut self);

    /// Variable currently holding the edit session.
    fn active_variable(&self) -> Option<VariableId>;

    fn state_report(&self) -> PolicyReport;

    /// Write the state report to the log, one line per tracked variable.
    fn print_state(&self) {
        let report = self.state_report();
        for line in report.to_string().lines() {
            info!(policy = self.name(), "{line}");
        }
    }
}

/// Any of the five strategies, chosen at runtime from configuration.
pub enum AnyPolicy<V: TrackedVariable> {
    Classic(ClassicPolicy<V>),
    Multiplicative(MultiplicativePolicy<V>),
    Additive(AdditivePolicy<V>),
    Last(LastPolicy<V>),
    Empty(EmptyPolicy),
}

impl<V: TrackedVariable> AnyPolicy<V> {
    /// Build the configured strategy. The config is validated first.
    pub fn from_config(
        config: &PolicyConfig,
        provider: Box<dyn SessionProvider<V>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config.effective_strategy(), config, provider))
    }

    /// Build a specific strategy, taking tunables from `config`.
    pub fn build(
        kind: StrategyKind,
        config: &PolicyConfig,
        provider: Box<dyn SessionProvider<V>>,
    ) -> Self {
        match kind {
            StrategyKind::Classic => Self::Classic(ClassicPolicy::from_config(config, provider)),
            StrategyKind::Multiplicative => {
                Self::Multiplicative(MultiplicativePolicy::from_config(config, provider))
            }
            StrategyKind::Additive => {
                Self::Additive(AdditivePolicy::from_config(config, provider))
            }
            StrategyKind::Last => Self::Last(LastPolicy::new(provider)),
            StrategyKind::Empty => Self::Empty(EmptyPolicy),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Classic(_) => StrategyKind::Classic,
            Self::Multiplicative(_) => StrategyKind::Multiplicative,
            Self::Additive(_) => StrategyKind::Additive,
            Self::Last(_) => StrategyKind::Last,
            Self::Empty(_) => StrategyKind::Empty,
        }
    }

    /// Route session and cycle events to `events`. Ignored by the empty strategy.
    pub fn with_events(self, events: EventDispatcher) -> Self {
        match self {
            Self::Classic(p) => Self::Classic(p.with_events(events)),
            Self::Multiplicative(p) => Self::Multiplicative(p.with_events(events)),
            Self::Additive(p) => Self::Additive(p.with_events(events)),
            Self::Last(p) => Self::Last(p.with_events(events)),
            Self::Empty(p) => Self::Empty(p),
        }
    }

    fn as_policy(&self) -> &dyn EditPolicy<V> {
        match self {
            Self::Classic(p) => p,
            Self::Multiplicative(p) => p,
            Self::Additive(p) => p,
            Self::Last(p) => p,
            Self::Empty(p) => p,
        }
    }

    fn as_policy_mut(&mut self) -> &mut dyn EditPolicy<V> {
        match self {
            Self::Classic(p) => p,
            Self::Multiplicative(p) => p,
            Self::Additive(p) => p,
            Self::Last(p) => p,
            Self::Empty(p) => p,
        }
    }
}

impl<V: TrackedVariable> EditPolicy<V> for AnyPolicy<V> {
    fn name(&self) -> &'static str {
        self.as_policy().name()
    }

    fn suggest_value(&mut self, variable: &V, value: V::Value) -> bool {
        self.as_policy_mut().suggest_value(variable, value)
    }

    fn clear_state(&mut self) {
        self.as_policy_mut().clear_state();
    }

    fn active_variable(&self) -> Option<VariableId> {
        self.as_policy().active_variable()
    }

    fn state_report(&self) -> PolicyReport {
        self.as_policy().state_report()
    }
}

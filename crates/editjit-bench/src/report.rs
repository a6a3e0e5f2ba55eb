//! Benchmark results and their table rendering.

use std::fmt::Write as _;

use editjit_core::StrategyKind;
use serde::Serialize;

/// One strategy driven through one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyRun {
    pub strategy: StrategyKind,
    /// Solver work units spent.
    pub cost: u64,
    pub handled: u64,
    pub unhandled: u64,
    pub opens: usize,
    pub closes: usize,
    /// Mean wall-clock time per run.
    pub elapsed_micros: f64,
    /// Steps after which the variable did not hold the assigned value.
    pub mismatches: usize,
}

/// How a strategy compares with the two baselines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Cheaper than the hand-placed edit session.
    Faster,
    /// More expensive than running without a policy.
    Slower,
    /// In between. The percentage is the share of the possible gain still
    /// left on the table: 0 matches the fixed edit, 100 matches no policy.
    Gain(u32),
    /// Exactly as expensive as running without a policy.
    Neutral,
}

impl Verdict {
    fn marker(&self) -> String {
        match self {
            Self::Faster => "   FA".to_string(),
            Self::Slower => "   SL".to_string(),
            Self::Gain(pct) => format!(" ({pct:>2}%)"),
            Self::Neutral => String::new(),
        }
    }
}

/// All strategies plus both baselines for one scenario and iteration count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub iterations: usize,
    pub constraints: usize,
    pub steps: usize,
    /// Cost with one edit session held over the whole run.
    pub fixed_edit: u64,
    /// Cost with the empty strategy.
    pub no_policy: u64,
    pub strategies: Vec<StrategyRun>,
}

impl ScenarioResult {
    pub fn verdict(&self, run: &StrategyRun) -> Verdict {
        let (edit, none, cost) = (self.fixed_edit, self.no_policy, run.cost);
        if cost < edit {
            Verdict::Faster
        } else if none < cost {
            Verdict::Slower
        } else if cost < none {
            let pct = (cost - edit) as f64 / (none - edit) as f64 * 100.0;
            Verdict::Gain(pct.round() as u32)
        } else {
            Verdict::Neutral
        }
    }

    pub fn run_for(&self, strategy: StrategyKind) -> Option<&StrategyRun> {
        self.strategies.iter().find(|r| r.strategy == strategy)
    }
}

/// Every scenario result of a benchmark matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BenchReport {
    pub results: Vec<ScenarioResult>,
}

impl BenchReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Fixed-width table, one row per scenario and iteration count.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "====== editjit benchmark ======");

        let mut names: Vec<&str> = Vec::new();
        for r in &self.results {
            if !names.contains(&r.scenario.as_str()) {
                names.push(&r.scenario);
            }
        }
        let _ = writeln!(out, "scenarios: {}", names.join(", "));

        if let Some(first) = self.results.first() {
            let strategies: Vec<&str> = first
                .strategies
                .iter()
                .map(|r| r.strategy.name())
                .collect();
            let _ = writeln!(
                out,
                "cost units (edit | {} / no-policy):",
                strategies.join(" | ")
            );
        }

        for r in &self.results {
            let label = format!("{}({}):", r.scenario, r.iterations);
            let _ = write!(out, "{label:<30} {:>4} | ", r.fixed_edit);
            let cells: Vec<String> = r
                .strategies
                .iter()
                .map(|run| format!("{:>4}{:<6}", run.cost, r.verdict(run).marker()))
                .collect();
            let _ = writeln!(out, "{} | {:>4}", cells.join(" | "), r.no_policy);
        }

        let _ = writeln!(out, "====== benchmark done ======");
        out
    }
}

//! Runs strategies through scenarios and collects costs.

use std::time::Instant;

use editjit_core::errors::BenchError;
use editjit_core::{EditJitConfig, PolicyConfig, StrategyKind};
use editjit_policy::{AnyPolicy, EditPolicy};
use editjit_sim::SimVariable;
use tracing::{debug, info};

use crate::cost::CostModel;
use crate::report::{BenchReport, ScenarioResult, StrategyRun};
use crate::scenario::{Field, Scenario};

/// Strategies compared against the baselines, in table order.
pub const COMPARED: [StrategyKind; 4] = [
    StrategyKind::Classic,
    StrategyKind::Additive,
    StrategyKind::Multiplicative,
    StrategyKind::Last,
];

fn variable_for<'a>(vars: &'a [SimVariable], field: Field) -> &'a SimVariable {
    match field {
        Field::Y if vars.len() > 1 => &vars[1],
        _ => &vars[0],
    }
}

/// Drive one strategy through `scenario` once and count what it cost.
pub fn run_strategy(
    scenario: Scenario,
    iterations: usize,
    kind: StrategyKind,
    config: &PolicyConfig,
) -> StrategyRun {
    let mut world = scenario.world();
    let vars: Vec<SimVariable> = scenario
        .fields()
        .iter()
        .map(|(object, field)| world.variable(object, field))
        .collect();
    let mut policy = AnyPolicy::build(kind, config, world.provider().boxed());

    let (mut handled, mut unhandled, mut mismatches) = (0u64, 0u64, 0usize);
    let started = Instant::now();
    for step in scenario.steps(iterations) {
        let var = variable_for(&vars, step.field);
        if policy.suggest_value(var, step.value) {
            handled += 1;
        } else {
            var.set(step.value);
            unhandled += 1;
        }
        if var.get() != step.value {
            mismatches += 1;
        }
    }
    policy.clear_state();
    let elapsed_micros = started.elapsed().as_secs_f64() * 1e6;

    let log = world.log();
    let log = log.borrow();
    let model = CostModel::new(world.constraints());
    StrategyRun {
        strategy: kind,
        cost: model.total(handled, unhandled, log.open_count(), log.close_count()),
        handled,
        unhandled,
        opens: log.open_count(),
        closes: log.close_count(),
        elapsed_micros,
        mismatches,
    }
}

/// Cost of one edit session on every scenario variable, held for the whole run.
/// Each iteration pushes one value tuple.
pub fn run_fixed_edit(scenario: Scenario, iterations: usize) -> u64 {
    let model = CostModel::new(scenario.constraints());
    model.open() + iterations as u64 * model.handled() + model.close()
}

fn averaged(
    scenario: Scenario,
    iterations: usize,
    kind: StrategyKind,
    config: &PolicyConfig,
    runs: u32,
) -> StrategyRun {
    let runs = runs.max(1);
    let mut first = run_strategy(scenario, iterations, kind, config);
    let mut total = first.elapsed_micros;
    for _ in 1..runs {
        total += run_strategy(scenario, iterations, kind, config).elapsed_micros;
    }
    first.elapsed_micros = total / f64::from(runs);
    first
}

/// Both baselines and every compared strategy for one scenario.
pub fn run_scenario(
    scenario: Scenario,
    iterations: usize,
    runs: u32,
    config: &PolicyConfig,
) -> ScenarioResult {
    let no_policy = run_strategy(scenario, iterations, StrategyKind::Empty, config).cost;
    let strategies = COMPARED
        .iter()
        .map(|kind| averaged(scenario, iterations, *kind, config, runs))
        .collect::<Vec<_>>();

    let result = ScenarioResult {
        scenario: scenario.name().to_string(),
        iterations,
        constraints: scenario.constraints(),
        steps: scenario.steps(iterations).len(),
        fixed_edit: run_fixed_edit(scenario, iterations),
        no_policy,
        strategies,
    };
    debug!(
        scenario = %scenario,
        iterations,
        fixed_edit = result.fixed_edit,
        no_policy = result.no_policy,
        "scenario finished"
    );
    result
}

/// Run every configured scenario at every configured iteration count.
pub fn run_matrix(config: &EditJitConfig) -> Result<BenchReport, BenchError> {
    config.validate()?;

    let scenarios: Vec<Scenario> = if config.bench.scenarios.is_empty() {
        Scenario::ALL.to_vec()
    } else {
        config
            .bench
            .scenarios
            .iter()
            .map(|s| s.parse::<Scenario>())
            .collect::<Result<Vec<_>, BenchError>>()?
    };
    let iterations = config.bench.effective_iterations();
    let runs = config.bench.effective_runs();

    info!(
        scenarios = scenarios.len(),
        iterations = ?iterations,
        runs,
        "starting benchmark"
    );
    let mut report = BenchReport::default();
    for scenario in scenarios {
        for &n in &iterations {
            report
                .results
                .push(run_scenario(scenario, n, runs, &config.policy));
        }
    }
    info!(results = report.results.len(), "benchmark done");
    Ok(report)
}

//! Tests for scenarios, cost accounting, and the benchmark matrix.

use editjit_core::errors::{BenchError, EditJitErrorCode};
use editjit_core::{EditJitConfig, PolicyConfig, StrategyKind};
use editjit_bench::{
    run_fixed_edit, run_matrix, run_scenario, run_strategy, CostModel, Field, Scenario,
    ScenarioResult, StrategyRun, Verdict,
};

// ---- Scenarios ----

#[test]
fn scenario_names_parse_back() {
    for scenario in Scenario::ALL {
        assert_eq!(scenario.name().parse::<Scenario>().unwrap(), scenario);
        assert_eq!(scenario.to_string(), scenario.name());
    }
    assert_eq!(" DRAG2D ".parse::<Scenario>().unwrap(), Scenario::Drag2d);
}

#[test]
fn unknown_scenario_is_an_error() {
    let err = "resize3d".parse::<Scenario>().unwrap_err();
    assert!(matches!(err, BenchError::UnknownScenario { ref name } if name == "resize3d"));
    assert_eq!(err.error_code(), "UNKNOWN_SCENARIO");
}

#[test]
fn fast_x_moves_y_every_third_step() {
    let steps = Scenario::Drag2dFastX.steps(6);
    assert_eq!(steps.len(), 8);
    let ys: Vec<f64> = steps
        .iter()
        .filter(|s| s.field == Field::Y)
        .map(|s| s.value)
        .collect();
    assert_eq!(ys, vec![100.0, 103.0]);
}

#[test]
fn change_half_switches_axis_midway() {
    let steps = Scenario::Drag2dChangeHalf.steps(10);
    assert_eq!(steps.len(), 10);
    assert!(steps[..5].iter().all(|s| s.field == Field::X));
    assert!(steps[5..].iter().all(|s| s.field == Field::Y));
    assert_eq!(steps[5].value, 100.0);
    assert_eq!(steps[9].value, 104.0);
}

#[test]
fn change_tenth_switches_early() {
    let steps = Scenario::Drag2dChangeTenth.steps(100);
    let xs = steps.iter().filter(|s| s.field == Field::X).count();
    assert_eq!(xs, 10);
}

#[test]
fn freq_change_switches_axis_after_five_steps() {
    let steps = Scenario::Drag2dFreqChange5.steps(20);
    assert!(steps[..5].iter().all(|s| s.field == Field::X));
    assert!(steps[5..].iter().all(|s| s.field == Field::Y));
    assert_eq!(steps[5].value, 100.0);
    assert_eq!(steps[19].value, 114.0);
}

#[test]
fn alternate_switches_axis_every_five() {
    let fields: Vec<Field> = Scenario::Drag2dAlternate5
        .steps(20)
        .iter()
        .map(|s| s.field)
        .collect();
    assert_eq!(&fields[0..5], &[Field::X; 5]);
    assert_eq!(&fields[5..10], &[Field::Y; 5]);
    assert_eq!(&fields[10..15], &[Field::X; 5]);
}

// ---- Costs ----

#[test]
fn cost_model_scales_with_constraints() {
    let model = CostModel::new(6);
    assert_eq!(model.unhandled(), 6);
    assert_eq!(model.handled(), 1);
    assert_eq!(model.open(), 12);
    assert_eq!(model.close(), 6);
    assert_eq!(model.total(10, 2, 1, 1), 10 + 12 + 12 + 6);
}

#[test]
fn fixed_edit_pays_one_open_one_close() {
    assert_eq!(run_fixed_edit(Scenario::Drag, 100), 18 + 100 + 9);
}

#[test]
fn empty_strategy_is_the_no_policy_baseline() {
    let run = run_strategy(Scenario::Drag2d, 10, StrategyKind::Empty, &PolicyConfig::default());
    assert_eq!(run.handled, 0);
    assert_eq!(run.opens, 0);
    assert_eq!(run.unhandled, 20);
    assert_eq!(run.cost, 20 * 6);
    assert_eq!(run.mismatches, 0);
}

#[test]
fn db_add_runs_on_a_planner_without_edit_constraints() {
    let world = Scenario::DbAdd.world();
    assert!(!world.solver().supports_edit());
    assert!(Scenario::Add.world().solver().supports_edit());

    let run = run_strategy(Scenario::DbAdd, 100, StrategyKind::Classic, &PolicyConfig::default());
    assert_eq!(run.opens, 1);
    assert_eq!(run.handled, 76);
    assert_eq!(run.mismatches, 0);
}

#[test]
fn classic_drag_opens_once_and_saves_work() {
    let run = run_strategy(Scenario::Drag, 100, StrategyKind::Classic, &PolicyConfig::default());
    assert_eq!(run.opens, 1);
    assert_eq!(run.closes, 1);
    assert_eq!(run.unhandled, 24);
    assert_eq!(run.handled, 76);
    assert_eq!(run.cost, 24 * 9 + 18 + 76 + 9);
}

#[test]
fn every_strategy_leaves_correct_values() {
    for scenario in Scenario::ALL {
        for kind in StrategyKind::ALL {
            let run = run_strategy(scenario, 50, kind, &PolicyConfig::default());
            assert_eq!(run.mismatches, 0, "{scenario} / {kind}");
            assert_eq!(run.opens, run.closes, "{scenario} / {kind}");
            assert_eq!(run.handled + run.unhandled, scenario.steps(50).len() as u64);
        }
    }
}

#[test]
fn last_thrashes_on_two_axis_drag() {
    let result = run_scenario(Scenario::Drag2d, 100, 1, &PolicyConfig::default());
    let last = result.run_for(StrategyKind::Last).unwrap();
    assert_eq!(last.opens, 200);
    assert_eq!(result.verdict(last), Verdict::Slower);
}

#[test]
fn multiplicative_drag_recovers_most_of_the_gain() {
    let result = run_scenario(Scenario::Drag, 100, 1, &PolicyConfig::default());
    let mul = result.run_for(StrategyKind::Multiplicative).unwrap();
    assert_eq!(mul.cost, 9 + 18 + 99 + 9);
    assert_eq!(result.verdict(mul), Verdict::Gain(1));
}

// ---- Verdicts ----

fn result_with(fixed_edit: u64, no_policy: u64, cost: u64) -> (ScenarioResult, StrategyRun) {
    let run = StrategyRun {
        strategy: StrategyKind::Classic,
        cost,
        handled: 0,
        unhandled: 0,
        opens: 0,
        closes: 0,
        elapsed_micros: 0.0,
        mismatches: 0,
    };
    let result = ScenarioResult {
        scenario: "drag".into(),
        iterations: 5,
        constraints: 9,
        steps: 5,
        fixed_edit,
        no_policy,
        strategies: vec![run.clone()],
    };
    (result, run)
}

#[test]
fn verdict_thresholds() {
    let (r, run) = result_with(100, 200, 90);
    assert_eq!(r.verdict(&run), Verdict::Faster);
    let (r, run) = result_with(100, 200, 250);
    assert_eq!(r.verdict(&run), Verdict::Slower);
    let (r, run) = result_with(100, 200, 125);
    assert_eq!(r.verdict(&run), Verdict::Gain(25));
    let (r, run) = result_with(100, 200, 100);
    assert_eq!(r.verdict(&run), Verdict::Gain(0));
    let (r, run) = result_with(100, 200, 200);
    assert_eq!(r.verdict(&run), Verdict::Neutral);
}

// ---- Matrix ----

#[test]
fn matrix_runs_configured_scenarios_and_sizes() {
    let config = EditJitConfig::from_toml(
        r#"
        [bench]
        iterations = [5, 20]
        runs = 1
        scenarios = ["drag", "add"]
        "#,
    )
    .unwrap();
    let report = run_matrix(&config).unwrap();
    assert_eq!(report.results.len(), 4);
    assert_eq!(report.results[0].scenario, "drag");
    assert_eq!(report.results[1].iterations, 20);
    assert_eq!(report.results[0].strategies.len(), 4);

    let table = report.render();
    assert!(table.starts_with("====== editjit benchmark ======"));
    assert!(table.contains("scenarios: drag, add"));
    assert!(table.contains("classic | add | mul | last"));
    assert!(table.contains("drag(5):"));
    assert!(table.trim_end().ends_with("====== benchmark done ======"));

    let json = report.to_json().unwrap();
    assert!(json.contains("\"fixed_edit\""));
}

#[test]
fn matrix_rejects_unknown_scenario() {
    let mut config = EditJitConfig::default();
    config.bench.scenarios = vec!["drag".into(), "spin".into()];
    assert!(matches!(
        run_matrix(&config),
        Err(BenchError::UnknownScenario { .. })
    ));
}

#[test]
fn matrix_rejects_invalid_config() {
    let mut config = EditJitConfig::default();
    config.bench.runs = Some(0);
    let err = run_matrix(&config).unwrap_err();
    assert!(matches!(err, BenchError::Config(_)));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

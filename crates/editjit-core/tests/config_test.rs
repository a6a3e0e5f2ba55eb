use std::io::Write;
use std::sync::Mutex;

use editjit_core::config::*;
use editjit_core::errors::ConfigError;

/// Serializes tests that read or write `EDITJIT_*` variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = EditJitConfig::from_toml("").unwrap();

    assert_eq!(config.policy.effective_strategy(), StrategyKind::Multiplicative);
    assert_eq!(config.policy.effective_classic_period(), 25);
    assert_eq!(config.policy.effective_period_min(), 2);
    assert_eq!(config.policy.effective_period_max(), 64);
    assert_eq!(config.policy.effective_decay_decrement(), 10);
    assert!(!config.policy.effective_purge_expired());

    assert_eq!(config.bench.effective_iterations(), vec![5, 100]);
    assert_eq!(config.bench.effective_runs(), 3);
    assert!(config.bench.scenarios.is_empty());
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[policy]
strategy = "add"
period_max = 32

[bench]
iterations = [10]
"#;
    let config = EditJitConfig::from_toml(toml).unwrap();
    assert_eq!(config.policy.effective_strategy(), StrategyKind::Additive);
    assert_eq!(config.policy.effective_period_max(), 32);
    // Non-overridden fields keep defaults
    assert_eq!(config.policy.effective_period_min(), 2);
    assert_eq!(config.bench.effective_iterations(), vec![10]);
    assert_eq!(config.bench.effective_runs(), 3);
}

#[test]
fn strategy_accepts_long_aliases() {
    let config = EditJitConfig::from_toml("[policy]\nstrategy = \"multiplicative\"\n").unwrap();
    assert_eq!(config.policy.effective_strategy(), StrategyKind::Multiplicative);

    assert_eq!("additive".parse::<StrategyKind>().unwrap(), StrategyKind::Additive);
    assert_eq!(" Classic ".parse::<StrategyKind>().unwrap(), StrategyKind::Classic);
    assert_eq!("none".parse::<StrategyKind>().unwrap(), StrategyKind::Empty);
}

#[test]
fn unknown_strategy_is_rejected() {
    let err = "fastest".parse::<StrategyKind>().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
    assert!(err.to_string().contains("fastest"));

    assert!(EditJitConfig::from_toml("[policy]\nstrategy = \"fastest\"\n").is_err());
}

#[test]
fn strategy_names_round_trip_through_display() {
    for kind in StrategyKind::ALL {
        assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
    }
}

#[test]
fn config_serde_roundtrip() {
    let mut config = EditJitConfig::default();
    config.policy.strategy = Some(StrategyKind::Last);
    config.policy.decay_decrement = Some(4);
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = EditJitConfig::from_toml(&toml_str).unwrap();
    assert_eq!(roundtripped.policy.effective_strategy(), StrategyKind::Last);
    assert_eq!(roundtripped.policy.effective_decay_decrement(), 4);
}

#[test]
fn validation_rejects_inverted_bounds() {
    let config = EditJitConfig::from_toml("[policy]\nperiod_min = 16\nperiod_max = 8\n").unwrap();
    let err = config.validate().unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "policy.period_max"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn validation_rejects_zero_values() {
    for toml in [
        "[policy]\nclassic_period = 0\n",
        "[policy]\nperiod_min = 0\n",
        "[policy]\ndecay_decrement = 0\n",
        "[bench]\nruns = 0\n",
        "[bench]\niterations = [5, 0]\n",
    ] {
        let config = EditJitConfig::from_toml(toml).unwrap();
        assert!(config.validate().is_err(), "expected rejection for {toml:?}");
    }
}

#[test]
fn load_merges_file_then_env() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[policy]\nstrategy = \"classic\"\nclassic_period = 40\n").unwrap();

    std::env::set_var("EDITJIT_CLASSIC_PERIOD", "12");
    let config = EditJitConfig::load(Some(file.path()));
    std::env::remove_var("EDITJIT_CLASSIC_PERIOD");

    let config = config.unwrap();
    assert_eq!(config.policy.effective_strategy(), StrategyKind::Classic);
    assert_eq!(config.policy.effective_classic_period(), 12);
}

#[test]
fn load_without_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let config = EditJitConfig::load(None).unwrap();
    assert_eq!(config.policy.effective_decay_decrement(), 10);
}

#[test]
fn load_reports_missing_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let err = EditJitConfig::load(Some(std::path::Path::new("/nonexistent/editjit.toml")))
        .unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn load_rejects_bad_env_value() {
    let _lock = ENV_MUTEX.lock().unwrap();
    std::env::set_var("EDITJIT_DECAY_DECREMENT", "lots");
    let result = EditJitConfig::load(None);
    std::env::remove_var("EDITJIT_DECAY_DECREMENT");
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

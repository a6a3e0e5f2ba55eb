//! Property tests for tracker, scheduler, and strategy invariants.

use editjit_core::{PolicyConfig, StrategyKind, TrackedVariable};
use editjit_policy::{
    ActionScheduler, AdditivePolicy, AnyPolicy, EditPolicy, EmptyPolicy, FrequencyTracker,
    MultiplicativePolicy,
};
use editjit_sim::{SimVariable, SimWorld};
use proptest::prelude::*;

fn world_with(n: usize) -> (SimWorld, Vec<SimVariable>) {
    let mut world = SimWorld::with_constraints(4);
    let vars = (0..n).map(|i| world.variable("o", &format!("f{i}"))).collect();
    (world, vars)
}

fn arb_kind() -> impl Strategy<Value = StrategyKind> {
    prop_oneof![
        Just(StrategyKind::Classic),
        Just(StrategyKind::Multiplicative),
        Just(StrategyKind::Additive),
        Just(StrategyKind::Last),
        Just(StrategyKind::Empty),
    ]
}

// ---- At most one session ----

proptest! {
    #[test]
    fn at_most_one_session_open(
        kind in arb_kind(),
        calls in prop::collection::vec(0usize..4, 1..300),
    ) {
        let (world, vars) = world_with(4);
        let config = PolicyConfig {
            strategy: Some(kind),
            classic_period: Some(3),
            ..Default::default()
        };
        let mut policy = AnyPolicy::from_config(&config, world.provider().boxed()).unwrap();

        for (i, idx) in calls.iter().enumerate() {
            let var = &vars[*idx];
            let handled = policy.suggest_value(var, i as f64);
            prop_assert!(world.log().borrow().currently_open() <= 1);
            if handled {
                prop_assert_eq!(policy.active_variable(), Some(var.id()));
                prop_assert_eq!(var.get(), i as f64);
            }
        }
    }
}

// ---- Counts bounded by observed mutations ----

proptest! {
    #[test]
    fn counts_never_exceed_mutations(
        calls in prop::collection::vec(0usize..3, 0..200),
        decrement in 1u64..20,
    ) {
        let (_, vars) = world_with(3);
        let mut tracker = FrequencyTracker::new();
        let mut seen = [0u64; 3];
        for (i, idx) in calls.iter().enumerate() {
            tracker.record_mutation(&vars[*idx]);
            seen[*idx] += 1;
            if i % 7 == 6 {
                tracker.decay_all(decrement);
            }
        }
        for (idx, var) in vars.iter().enumerate() {
            if let Some(count) = tracker.count_of(var.id()) {
                prop_assert!(count <= seen[idx]);
            } else {
                prop_assert_eq!(seen[idx], 0);
            }
        }
    }
}

// ---- Deterministic tie-break ----

proptest! {
    #[test]
    fn tie_break_prefers_first_seen(order in Just(vec![0usize, 1, 2, 3]).prop_shuffle()) {
        let (_, vars) = world_with(4);
        let mut tracker = FrequencyTracker::new();
        for idx in &order {
            tracker.record_mutation(&vars[*idx]);
        }
        let hottest = tracker.select_hottest().map(|v| v.id());
        prop_assert_eq!(hottest, Some(vars[order[0]].id()));
    }

    #[test]
    fn identical_streams_rank_identically(calls in prop::collection::vec(0usize..5, 0..100)) {
        let (_, vars) = world_with(5);
        let mut a = FrequencyTracker::new();
        let mut b = FrequencyTracker::new();
        for idx in &calls {
            a.record_mutation(&vars[*idx]);
            b.record_mutation(&vars[*idx]);
        }
        let ra: Vec<_> = a.ranked().iter().map(|r| (r.variable.id(), r.count)).collect();
        let rb: Vec<_> = b.ranked().iter().map(|r| (r.variable.id(), r.count)).collect();
        prop_assert_eq!(ra, rb);
    }
}

// ---- Period within bounds ----

proptest! {
    #[test]
    fn scheduler_period_stays_in_bounds(
        min in 1u32..10,
        span in 0u32..60,
        ops in prop::collection::vec(0u8..4, 0..200),
    ) {
        let max = min + span;
        let mut s = ActionScheduler::adaptive(min * 2, min, max);
        for op in ops {
            match op {
                0 => { s.grow_multiplicative(); }
                1 => { s.shrink_multiplicative(); }
                2 => { s.grow_additive(); }
                _ => { s.shrink_additive(); }
            }
            prop_assert!(s.period() >= min && s.period() <= max);
        }
    }

    #[test]
    fn adaptive_policies_keep_period_in_bounds(calls in prop::collection::vec(0usize..3, 0..300)) {
        let (world, vars) = world_with(3);
        let mut mul = MultiplicativePolicy::new(world.provider().boxed());
        let mut add = AdditivePolicy::new(world.provider().boxed());
        for (i, idx) in calls.iter().enumerate() {
            mul.suggest_value(&vars[*idx], i as f64);
            add.suggest_value(&vars[*idx], i as f64);
            prop_assert!((2..=64).contains(&mul.period()));
            prop_assert!((2..=64).contains(&add.period()));
        }
    }
}

// ---- Empty is inert ----

proptest! {
    #[test]
    fn empty_policy_is_inert(calls in prop::collection::vec(0usize..3, 0..100)) {
        let (world, vars) = world_with(3);
        let mut policy = EmptyPolicy;
        for (i, idx) in calls.iter().enumerate() {
            prop_assert!(!policy.suggest_value(&vars[*idx], i as f64));
        }
        prop_assert_eq!(world.log().borrow().open_count(), 0);
        prop_assert_eq!(EditPolicy::<SimVariable>::active_variable(&policy), None);
        prop_assert_eq!(policy, EmptyPolicy);
    }
}

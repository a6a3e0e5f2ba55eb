//! Tests for the simulated collaborators.

use editjit_core::{
    EditSession, SessionError, SessionProvider, SolverHandle, TrackedVariable, VariableId,
};
use editjit_sim::{SessionLog, SimSessionProvider, SimSolver, SimVariable, SimWorld};

#[test]
fn solver_counts_edit_constraints() {
    let solver = SimSolver::new("cassowary");
    assert_eq!(solver.active_edit_constraints(), Some(0));
    solver.add_edit_constraint();
    solver.add_edit_constraint();
    assert_eq!(solver.active_edit_constraints(), Some(2));
    solver.remove_edit_constraint();
    solver.remove_edit_constraint();
    solver.remove_edit_constraint();
    assert_eq!(solver.active_edit_constraints(), Some(0));
}

#[test]
fn solver_without_edit_support_reports_none() {
    let planner = SimSolver::without_edit_support("deltablue");
    planner.add_edit_constraint();
    planner.set_edit_constraints(3);
    assert_eq!(planner.active_edit_constraints(), None);
    assert!(!planner.supports_edit());
}

#[test]
fn variable_reports_foreign_edit_through_its_solvers() {
    let solver = SimSolver::new("s");
    let v = SimVariable::new(1, "o", "x").with_solver(&solver);
    assert!(!v.under_active_edit());
    solver.set_edit_constraints(1);
    assert!(v.under_active_edit());
}

#[test]
fn variable_without_edit_capable_solver_is_never_under_edit() {
    let planner = SimSolver::without_edit_support("p");
    let v = SimVariable::new(1, "o", "x").with_solver(&planner);
    assert!(!v.under_active_edit());
}

#[test]
fn variable_label_and_clone_share_value() {
    let v = SimVariable::new(7, "mouse", "location_y");
    assert_eq!(v.label(), "mouse.location_y");
    assert_eq!(v.id(), VariableId(7));
    let w = v.clone();
    w.set(3.5);
    assert_eq!(v.get(), 3.5);
}

#[test]
fn provider_logs_open_push_close() {
    let mut world = SimWorld::with_constraints(3);
    let v = world.variable("o", "x");
    let mut provider = world.provider();

    let mut session = provider.open_session(&v).unwrap();
    assert_eq!(world.solver().active_edit_constraints(), Some(1));
    session.push(&[4.0]);
    session.push(&[5.0]);
    assert_eq!(v.get(), 5.0);
    session.close();
    assert_eq!(world.solver().active_edit_constraints(), Some(0));

    let log = world.log();
    let log = log.borrow();
    assert_eq!(log.opened, vec![v.id()]);
    assert_eq!(log.closed, vec![v.id()]);
    assert_eq!(log.pushes_for(v.id()), vec![4.0, 5.0]);
    assert_eq!(log.currently_open(), 0);
}

#[test]
fn provider_without_registration_leaves_solver_alone() {
    let solver = SimSolver::new("s");
    let v = SimVariable::new(1, "o", "x").with_solver(&solver);
    let mut provider = SimSessionProvider::standalone();
    let session = provider.open_session(&v).unwrap();
    assert_eq!(solver.active_edit_constraints(), Some(0));
    session.close();
    assert_eq!(provider.log().borrow().close_count(), 1);
}

#[test]
fn provider_rejects_configured_variables() {
    let v = SimVariable::new(2, "o", "y");
    let mut provider = SimSessionProvider::standalone().reject(VariableId(2));
    let err = provider.open_session(&v).err().unwrap();
    assert!(matches!(
        err,
        SessionError::ProviderRejected { variable, .. } if variable == VariableId(2)
    ));
    let log = provider.log();
    assert_eq!(log.borrow().rejected, vec![VariableId(2)]);
    assert_eq!(log.borrow().open_count(), 0);
}

#[test]
fn provider_refuses_variables_without_solvers() {
    let v = SimVariable::new(3, "o", "z");
    let mut provider = SimSessionProvider::standalone();
    let err = provider.open_session(&v).err().unwrap();
    assert_eq!(err, SessionError::VariableUnavailable { variable: VariableId(3) });
}

#[test]
fn world_hands_out_sequential_ids() {
    let mut world = SimWorld::with_constraints(1);
    let a = world.variable("o", "x");
    let b = world.variable("o", "y");
    assert_eq!(a.id(), VariableId(1));
    assert_eq!(b.id(), VariableId(2));
    assert_eq!(world.constraints(), 1);
}

#[test]
fn log_clear_resets_history() {
    let mut log = SessionLog::default();
    log.opened.push(VariableId(1));
    log.pushes.push((VariableId(1), 1.0));
    log.clear();
    assert_eq!(log, SessionLog::default());
}

use futures::executor::block_on;

use super::*;
use crate::util::token_store::MemoryTokens;

fn run(gate: &mut RouteGate, tokens: &MemoryTokens) -> (GateState, Vec<String>) {
    let mut redirects = Vec::new();
    let state = block_on(check_access(gate, tokens, |to| redirects.push(to.to_owned())));
    (state, redirects)
}

#[test]
fn new_gate_is_unknown() {
    let gate = RouteGate::new(Role::Employer);
    assert_eq!(gate.state(), GateState::Unknown);
    assert_eq!(gate.path(), None);
}

#[test]
fn missing_token_redirects_exactly_once() {
    let mut gate = RouteGate::new(Role::JobSeeker);
    gate.begin("/dashboard/jobseeker");
    let (state, redirects) = run(&mut gate, &MemoryTokens::new());
    assert_eq!(state, GateState::Unauthorized);
    assert_eq!(redirects, vec!["/".to_owned()]);
}

#[test]
fn present_token_authorizes_without_redirect() {
    let mut gate = RouteGate::new(Role::Employer);
    gate.begin("/dashboard/employer");
    let (state, redirects) = run(&mut gate, &MemoryTokens::with_token(Role::Employer, "emp"));
    assert_eq!(state, GateState::Authorized);
    assert!(redirects.is_empty());
}

#[test]
fn admin_gate_redirects_to_admin_login() {
    let mut gate = RouteGate::new(Role::Admin);
    gate.begin("/admin/users");
    let (_, redirects) = run(&mut gate, &MemoryTokens::with_token(Role::Employer, "emp"));
    assert_eq!(redirects, vec!["/admin-login".to_owned()]);
}

#[test]
fn other_role_token_does_not_authorize() {
    let mut gate = RouteGate::new(Role::Employer);
    gate.begin("/dashboard/employer");
    let (state, _) = run(&mut gate, &MemoryTokens::with_token(Role::JobSeeker, "js"));
    assert_eq!(state, GateState::Unauthorized);
}

#[test]
fn settled_gate_ignores_repeat_resolution() {
    let mut gate = RouteGate::new(Role::JobSeeker);
    gate.begin("/dashboard/jobseeker");
    assert_eq!(gate.resolve(None), Some("/"));
    assert_eq!(gate.resolve(None), None);
    assert_eq!(gate.resolve(Some("late")), None);
    assert_eq!(gate.state(), GateState::Unauthorized);
}

#[test]
fn blank_token_counts_as_missing() {
    let mut gate = RouteGate::new(Role::JobSeeker);
    gate.begin("/dashboard/jobseeker");
    assert_eq!(gate.resolve(Some("  ")), Some("/"));
}

#[test]
fn navigation_rechecks_and_sees_revoked_token() {
    let tokens = MemoryTokens::with_token(Role::Employer, "emp");
    let mut gate = RouteGate::new(Role::Employer);

    gate.begin("/dashboard/employer");
    assert_eq!(run(&mut gate, &tokens).0, GateState::Authorized);

    block_on(tokens.remove(Role::Employer));
    assert_eq!(gate.state(), GateState::Authorized);

    gate.begin("/dashboard/employer/jobs");
    assert_eq!(gate.state(), GateState::Unknown);
    assert_eq!(gate.path(), Some("/dashboard/employer/jobs"));
    let (state, redirects) = run(&mut gate, &tokens);
    assert_eq!(state, GateState::Unauthorized);
    assert_eq!(redirects.len(), 1);
}

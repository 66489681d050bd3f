use futures::executor::block_on;

use super::*;
use crate::net::mock::MockTransport;
use crate::util::token_store::MemoryTokens;

fn job(id: &str, title: &str) -> Job {
    serde_json::from_value(serde_json::json!({ "id": id, "title": title })).unwrap()
}

// =============================================================
// Panel state
// =============================================================

#[test]
fn application_state_defaults_closed() {
    let state = ApplicationState::default();
    assert!(!state.is_panel_open());
    assert!(state.selected_job().is_none());
}

#[test]
fn open_sets_job_and_panel() {
    let mut state = ApplicationState::default();
    state.open_application_panel(job("1", "Engineer"));
    assert!(state.is_panel_open());
    assert_eq!(state.selected_job().map(|j| j.id.as_str()), Some("1"));
}

#[test]
fn open_then_close_clears_both() {
    let mut state = ApplicationState::default();
    state.open_application_panel(job("1", "Engineer"));
    state.close_application_panel();
    assert!(!state.is_panel_open());
    assert!(state.selected_job().is_none());
}

#[test]
fn close_when_closed_is_noop() {
    let mut state = ApplicationState::default();
    state.close_application_panel();
    assert_eq!(state, ApplicationState::default());
    state.close_application_panel();
    assert_eq!(state, ApplicationState::default());
}

#[test]
fn reopening_replaces_selected_job() {
    let mut state = ApplicationState::default();
    state.open_application_panel(job("1", "Engineer"));
    state.open_application_panel(job("2", "Designer"));
    assert_eq!(state.selected_job().map(|j| j.title.as_str()), Some("Designer"));
    assert!(state.is_panel_open());
}

// =============================================================
// submit_application
// =============================================================

#[test]
fn submit_without_job_seeker_token_is_auth_error() {
    let api = MockTransport::default().client();
    let tokens = MemoryTokens::with_token(Role::Employer, "emp");
    let err = block_on(submit_application(&api, &tokens, "1", "hi")).unwrap_err();
    assert!(err.is_auth());
    assert!(api.transport().sent().is_empty());
}

#[test]
fn submit_uses_job_seeker_token() {
    let api = MockTransport::default().reply(201, r#"{"message": "Applied"}"#).client();
    let tokens = MemoryTokens::with_token(Role::JobSeeker, "js");
    let message = block_on(submit_application(&api, &tokens, "1", "hi")).unwrap();
    assert_eq!(message.as_deref(), Some("Applied"));
    assert_eq!(api.transport().sent()[0].token.as_deref(), Some("js"));
}

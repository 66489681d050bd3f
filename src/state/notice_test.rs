use super::*;

#[test]
fn notice_state_defaults_empty() {
    assert!(NoticeState::default().current().is_none());
}

#[test]
fn error_notice_uses_user_message() {
    let mut state = NoticeState::default();
    state.error(&ClientError::Transport { status: 500 });
    let notice = state.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, crate::error::SOMETHING_WENT_WRONG);
}

#[test]
fn newer_notice_replaces_older() {
    let mut state = NoticeState::default();
    let first = state.success("Saved");
    let second = state.success("Sent");
    assert_ne!(first, second);
    assert_eq!(state.current().map(|n| n.message.as_str()), Some("Sent"));
}

#[test]
fn dismiss_ignores_stale_id() {
    let mut state = NoticeState::default();
    let first = state.success("Saved");
    let second = state.success("Sent");
    state.dismiss(first);
    assert_eq!(state.current().map(|n| n.id), Some(second));
    state.dismiss(second);
    assert!(state.current().is_none());
}

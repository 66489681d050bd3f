use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_token_keys_are_distinct() {
    assert_eq!(Role::JobSeeker.token_key(), "JOBSEEKER_TOKEN");
    assert_eq!(Role::Employer.token_key(), "EMPLOYER_TOKEN");
    assert_eq!(Role::Admin.token_key(), "ADMIN_TOKEN");
}

#[test]
fn role_redirects_follow_section_policy() {
    assert_eq!(Role::JobSeeker.unauthorized_redirect(), "/");
    assert_eq!(Role::Employer.unauthorized_redirect(), "/");
    assert_eq!(Role::Admin.unauthorized_redirect(), "/admin-login");
}

#[test]
fn role_deserializes_from_api_names() {
    let roles: Vec<Role> = serde_json::from_str(r#"["jobseeker", "job_seeker", "employer", "admin"]"#).unwrap();
    assert_eq!(roles, vec![Role::JobSeeker, Role::JobSeeker, Role::Employer, Role::Admin]);
}

// =============================================================
// SessionUser / Job
// =============================================================

#[test]
fn session_user_accepts_numeric_id() {
    let user: SessionUser =
        serde_json::from_str(r#"{"id": 42, "email": "a@b.com", "name": "A", "role": "employer"}"#).unwrap();
    assert_eq!(user.id, "42");
    assert_eq!(user.role, Role::Employer);
}

#[test]
fn session_user_rejects_missing_id() {
    let result = serde_json::from_str::<SessionUser>(r#"{"id": null, "email": "a@b.com", "name": "A", "role": "admin"}"#);
    assert!(result.is_err());
}

#[test]
fn job_keeps_unknown_fields() {
    let job: Job =
        serde_json::from_str(r#"{"id": "j1", "title": "Rust Engineer", "salary": "NPR 200k", "remote": true}"#).unwrap();
    assert_eq!(job.title, "Rust Engineer");
    assert_eq!(job.company, None);
    assert_eq!(job.extra.get("remote"), Some(&serde_json::Value::Bool(true)));
}

#[test]
fn auth_payload_defaults_two_factor_flag() {
    let payload: AuthPayload = serde_json::from_str(r#"{"token": "t"}"#).unwrap();
    assert!(!payload.two_factor_required);
    assert_eq!(payload.token.as_deref(), Some("t"));
    assert!(payload.user.is_none());
}

// =============================================================
// ValidationErrors
// =============================================================

#[test]
fn validation_errors_preserve_server_order() {
    let errors: ValidationErrors =
        serde_json::from_str(r#"{"password": ["Too short."], "email": ["Taken.", "Invalid."]}"#).unwrap();
    assert_eq!(errors.first(), Some(("password", "Too short.")));
    assert_eq!(errors.field("email").map(<[String]>::len), Some(2));
    assert_eq!(errors.len(), 2);
}

#[test]
fn validation_errors_accept_single_string_messages() {
    let errors: ValidationErrors = serde_json::from_str(r#"{"email": "Required."}"#).unwrap();
    assert_eq!(errors.first_message(), Some("Required."));
}

#[test]
fn validation_errors_empty_when_no_messages() {
    let errors: ValidationErrors = serde_json::from_str(r#"{"email": []}"#).unwrap();
    assert!(errors.is_empty());
    assert_eq!(errors.first(), None);
}

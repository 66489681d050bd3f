use super::*;

fn validation(fields: &[(&str, &[&str])]) -> ValidationErrors {
    ValidationErrors::new(
        fields
            .iter()
            .map(|(f, msgs)| ((*f).to_owned(), msgs.iter().map(|m| (*m).to_owned()).collect()))
            .collect(),
    )
}

#[test]
fn auth_error_surfaces_message_verbatim() {
    let err = ClientError::Auth("Invalid credentials".to_owned());
    assert_eq!(err.user_message(), "Invalid credentials");
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(err.is_auth());
}

#[test]
fn validation_error_uses_first_field_message() {
    let err = ClientError::Validation(validation(&[
        ("email", &["The email has already been taken."]),
        ("password", &["Too short."]),
    ]));
    assert_eq!(err.user_message(), "The email has already been taken.");
    assert_eq!(err.field_message(), Some(("email", "The email has already been taken.")));
    assert!(!err.is_auth());
}

#[test]
fn validation_error_skips_fields_without_messages() {
    let err = ClientError::Validation(validation(&[("name", &[]), ("email", &["Required."])]));
    assert_eq!(err.field_message(), Some(("email", "Required.")));
}

#[test]
fn transport_and_decode_errors_show_generic_message() {
    assert_eq!(ClientError::Transport { status: 500 }.user_message(), SOMETHING_WENT_WRONG);
    assert_eq!(ClientError::Decode("bad".to_owned()).user_message(), SOMETHING_WENT_WRONG);
    assert_eq!(ClientError::Transport { status: 502 }.to_string(), "request failed with status 502");
}

#[test]
fn network_error_is_distinct_from_auth() {
    let err = ClientError::Network("connection refused".to_owned());
    assert!(!err.is_auth());
    assert!(err.user_message().contains("Unable to reach the server"));
    assert_eq!(err.field_message(), None);
}

#[test]
fn serde_errors_convert_to_decode() {
    let err: ClientError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
    assert!(matches!(err, ClientError::Decode(_)));
}

//! Client-side error taxonomy for REST calls and form submissions.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is recoverable by the user retrying. Components catch these
//! at the form boundary and turn them into inline field messages or a toast
//! (`state::notice`); nothing propagates to a page-level boundary.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::ValidationErrors;

/// Message shown when credentials are rejected without a server message.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Generic message for transport failures without a structured body.
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Bad credentials, expired token, or any 401/403.
    #[error("{0}")]
    Auth(String),
    /// Per-field messages from the API.
    #[error("validation failed: {}", .0.first_message().unwrap_or("invalid input"))]
    Validation(ValidationErrors),
    /// Non-2xx reply without a structured body.
    #[error("request failed with status {status}")]
    Transport { status: u16 },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx body did not match the declared response type.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text suitable for a toast notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(message) => message.clone(),
            Self::Validation(errors) => errors.first_message().unwrap_or(SOMETHING_WENT_WRONG).to_owned(),
            Self::Network(_) => "Unable to reach the server. Check your connection.".to_owned(),
            Self::Transport { .. } | Self::Decode(_) => SOMETHING_WENT_WRONG.to_owned(),
        }
    }

    /// First message for the first failing field, for inline form display.
    pub fn field_message(&self) -> Option<(&str, &str)> {
        match self {
            Self::Validation(errors) => errors.first(),
            _ => None,
        }
    }

    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

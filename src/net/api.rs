//! Typed endpoints over the Applymandu REST API.
//!
//! Role-scoped endpoints live under `/api/{role}/...`; public job listings
//! under `/api/jobs`. Each function decodes into its declared DTO and returns
//! a classified [`ClientError`] on failure.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::http::{ApiClient, Method, Transport};
use super::types::{
    ApplicationRequest, AuthPayload, Job, LoginRequest, MessagePayload, RegisterRequest, Role, SessionUser,
    TwoFactorRequest,
};
use crate::error::{ClientError, INVALID_CREDENTIALS};

const INVALID_CODE: &str = "Invalid verification code";

fn role_endpoint(role: Role, action: &str) -> String {
    format!("/api/{}/{action}", role.api_prefix())
}

fn apply_endpoint(job_id: &str) -> String {
    format!("/api/jobseeker/jobs/{job_id}/apply")
}

/// `POST /api/{role}/login`.
///
/// # Errors
///
/// [`ClientError::Auth`] for rejected credentials, [`ClientError::Validation`]
/// for malformed input, [`ClientError::Network`] when the server is
/// unreachable.
pub async fn login<T: Transport>(
    api: &ApiClient<T>,
    role: Role,
    email: &str,
    password: &str,
) -> Result<AuthPayload, ClientError> {
    let request = api
        .request(Method::Post, &role_endpoint(role, "login"))
        .json(&LoginRequest { email, password })?;
    api.send::<AuthPayload>(&request).await?.into_credential_result(INVALID_CREDENTIALS)
}

/// `POST /api/{role}/register`.
///
/// # Errors
///
/// [`ClientError::Validation`] for field errors (taken email, weak password),
/// or any transport/network failure.
pub async fn register<T: Transport>(
    api: &ApiClient<T>,
    role: Role,
    form: &RegisterRequest<'_>,
) -> Result<AuthPayload, ClientError> {
    let request = api.request(Method::Post, &role_endpoint(role, "register")).json(form)?;
    api.fetch::<AuthPayload>(&request).await
}

/// `POST /api/{role}/verify-2fa`.
///
/// # Errors
///
/// [`ClientError::Auth`] for a wrong or expired code.
pub async fn verify_two_factor<T: Transport>(
    api: &ApiClient<T>,
    role: Role,
    email: &str,
    code: &str,
) -> Result<AuthPayload, ClientError> {
    let request = api
        .request(Method::Post, &role_endpoint(role, "verify-2fa"))
        .json(&TwoFactorRequest { email, code })?;
    api.send::<AuthPayload>(&request).await?.into_credential_result(INVALID_CODE)
}

/// `POST /api/{role}/forgot-password`. Returns the server confirmation.
///
/// # Errors
///
/// [`ClientError::Validation`] for an unknown or malformed email.
pub async fn forgot_password<T: Transport>(
    api: &ApiClient<T>,
    role: Role,
    email: &str,
) -> Result<Option<String>, ClientError> {
    let request = api
        .request(Method::Post, &role_endpoint(role, "forgot-password"))
        .json(&serde_json::json!({ "email": email }))?;
    let body = api.fetch::<Option<MessagePayload>>(&request).await?;
    Ok(body.and_then(|b| b.message))
}

/// `POST /api/{role}/logout` with the bearer token.
///
/// # Errors
///
/// Any transport/network failure; callers treat logout as best-effort.
pub async fn logout<T: Transport>(api: &ApiClient<T>, role: Role, token: &str) -> Result<(), ClientError> {
    let request = api.request(Method::Post, &role_endpoint(role, "logout")).bearer(Some(token));
    api.fetch::<Option<serde_json::Value>>(&request).await.map(|_| ())
}

/// `GET /api/{role}/me`: the user owning `token`.
///
/// # Errors
///
/// [`ClientError::Auth`] when the token is no longer valid.
pub async fn current_user<T: Transport>(api: &ApiClient<T>, role: Role, token: &str) -> Result<SessionUser, ClientError> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum MeBody {
        Wrapped { user: SessionUser },
        Bare(SessionUser),
    }

    let request = api.request(Method::Get, &role_endpoint(role, "me")).bearer(Some(token));
    let body = api.fetch::<MeBody>(&request).await?;
    Ok(match body {
        MeBody::Wrapped { user } | MeBody::Bare(user) => user,
    })
}

/// `GET /api/jobs`: public listings.
///
/// # Errors
///
/// Any transport/network/decode failure.
pub async fn list_jobs<T: Transport>(api: &ApiClient<T>) -> Result<Vec<Job>, ClientError> {
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum JobsBody {
        Paged { data: Vec<Job> },
        Bare(Vec<Job>),
    }

    let request = api.request(Method::Get, "/api/jobs");
    Ok(match api.fetch::<JobsBody>(&request).await? {
        JobsBody::Paged { data } | JobsBody::Bare(data) => data,
    })
}

/// `POST /api/jobseeker/jobs/{id}/apply`.
///
/// # Errors
///
/// [`ClientError::Auth`] without a valid job seeker token,
/// [`ClientError::Validation`] for field errors.
pub async fn apply_to_job<T: Transport>(
    api: &ApiClient<T>,
    token: &str,
    job_id: &str,
    cover_letter: &str,
) -> Result<Option<String>, ClientError> {
    let request = api
        .request(Method::Post, &apply_endpoint(job_id))
        .bearer(Some(token))
        .json(&ApplicationRequest { cover_letter })?;
    let body = api.fetch::<Option<MessagePayload>>(&request).await?;
    Ok(body.and_then(|b| b.message))
}

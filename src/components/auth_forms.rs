//! Input validation shared by the auth modals and the admin login page.
//!
//! Checks here only catch what the user can fix before a round trip; the
//! API remains the authority and its field errors are shown the same way.

#[cfg(test)]
#[path = "auth_forms_test.rs"]
mod auth_forms_test;

use crate::error::ClientError;
use crate::net::types::{RegisterRequest, Role};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const TWO_FACTOR_CODE_LEN: usize = 6;

/// Trimmed registration fields that passed local checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterFields {
    pub fn as_request(&self) -> RegisterRequest<'_> {
        RegisterRequest {
            name: &self.name,
            email: &self.email,
            password: &self.password,
            password_confirmation: &self.password_confirmation,
        }
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.'),
        None => false,
    }
}

/// Trim and require a plausible email address.
///
/// # Errors
///
/// Returns the message to show next to the email field.
pub fn validate_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(email.to_owned())
}

/// # Errors
///
/// Returns the message to show in the login form.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    let email = validate_email(email)?;
    Ok((email, password.to_owned()))
}

/// # Errors
///
/// Returns the message to show in the register form.
pub fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    confirmation: &str,
) -> Result<RegisterFields, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = validate_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirmation {
        return Err("Passwords do not match.");
    }
    Ok(RegisterFields {
        name: name.to_owned(),
        email,
        password: password.to_owned(),
        password_confirmation: confirmation.to_owned(),
    })
}

/// Normalize a verification code as typed (spaces dropped).
pub fn normalize_code_input(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// # Errors
///
/// Returns the message to show in the two-factor form.
pub fn validate_two_factor_code(raw: &str) -> Result<String, &'static str> {
    let code = normalize_code_input(raw);
    if code.len() != TWO_FACTOR_CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the 6-digit code.");
    }
    Ok(code)
}

/// Map a role `<select>` value to a role. Unknown values fall back to job seeker.
pub fn parse_role_choice(value: &str) -> Role {
    match value {
        "employer" => Role::Employer,
        "admin" => Role::Admin,
        _ => Role::JobSeeker,
    }
}

/// Text for the inline error slot under a form.
pub fn inline_error(err: &ClientError) -> String {
    match err.field_message() {
        Some((_, message)) => message.to_owned(),
        None => err.user_message(),
    }
}

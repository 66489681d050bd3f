//! Auth-session state for the current browser tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Single source of truth for who is logged in and which auth modal is
//! showing. Provided once at the app root as `RwSignal<AuthState>`; consumers
//! mutate it only through the methods below.
//!
//! The async operations (`login`, `register`, `logout`, ...) talk to the API
//! and the token store, then hand an outcome back to the caller, which
//! applies it with `finish_login` or `clear_session`. No state is held across
//! an await, so a signal update never races a pending request.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::error::ClientError;
use crate::net::api;
use crate::net::http::{ApiClient, Transport};
use crate::net::types::{AuthPayload, RegisterRequest, Role, SessionUser};
use crate::util::token_store::TokenStore;

/// Which auth modal is visible. One slot, so at most one is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveModal {
    #[default]
    None,
    Login,
    Register,
    ForgotPassword,
    TwoFactor,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    user: Option<SessionUser>,
    modal: ActiveModal,
    /// Login awaiting a second factor.
    two_factor: Option<PendingTwoFactor>,
    pending: bool,
}

/// Email and role of a password login that still needs a second factor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTwoFactor {
    pub email: String,
    pub role: Role,
}

/// Result of a password or two-factor login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(SessionUser),
    TwoFactorRequired(PendingTwoFactor),
}

impl AuthState {
    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn modal(&self) -> ActiveModal {
        self.modal
    }

    pub fn two_factor(&self) -> Option<&PendingTwoFactor> {
        self.two_factor.as_ref()
    }

    pub fn two_factor_email(&self) -> Option<&str> {
        self.two_factor.as_ref().map(|p| p.email.as_str())
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    pub fn is_job_seeker(&self) -> bool {
        self.role() == Some(Role::JobSeeker)
    }

    pub fn is_employer(&self) -> bool {
        self.role() == Some(Role::Employer)
    }

    pub fn is_admin(&self) -> bool {
        self.role() == Some(Role::Admin)
    }

    pub fn is_login_open(&self) -> bool {
        self.modal == ActiveModal::Login
    }

    pub fn is_register_open(&self) -> bool {
        self.modal == ActiveModal::Register
    }

    pub fn is_forgot_password_open(&self) -> bool {
        self.modal == ActiveModal::ForgotPassword
    }

    pub fn is_two_factor_open(&self) -> bool {
        self.modal == ActiveModal::TwoFactor
    }

    pub fn open_login_modal(&mut self) {
        self.modal = ActiveModal::Login;
    }

    pub fn open_register_modal(&mut self) {
        self.modal = ActiveModal::Register;
    }

    pub fn open_forgot_password_modal(&mut self) {
        self.modal = ActiveModal::ForgotPassword;
    }

    pub fn open_two_factor_modal(&mut self, pending: PendingTwoFactor) {
        self.two_factor = Some(pending);
        self.modal = ActiveModal::TwoFactor;
    }

    pub fn close_login_modal(&mut self) {
        self.close_if(ActiveModal::Login);
    }

    pub fn close_register_modal(&mut self) {
        self.close_if(ActiveModal::Register);
    }

    pub fn close_forgot_password_modal(&mut self) {
        self.close_if(ActiveModal::ForgotPassword);
    }

    pub fn close_two_factor_modal(&mut self) {
        if self.modal == ActiveModal::TwoFactor {
            self.two_factor = None;
        }
        self.close_if(ActiveModal::TwoFactor);
    }

    fn close_if(&mut self, which: ActiveModal) {
        if self.modal == which {
            self.modal = ActiveModal::None;
        }
    }

    /// Mark a request in flight. Returns `false` if one already is, so the
    /// caller drops the duplicate submission.
    pub fn begin_request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn end_request(&mut self) {
        self.pending = false;
    }

    /// Apply a finished login, registration or two-factor verification.
    ///
    /// On success the user is stored and the auth modal closes; a second
    /// factor requirement switches to the two-factor modal instead. On failure
    /// only the in-flight flag is cleared.
    ///
    /// # Errors
    ///
    /// Returns the failure unchanged so the caller can render it.
    pub fn finish_login(&mut self, result: Result<LoginOutcome, ClientError>) -> Result<(), ClientError> {
        self.pending = false;
        match result? {
            LoginOutcome::Authenticated(user) => {
                self.user = Some(user);
                self.two_factor = None;
                self.modal = ActiveModal::None;
            }
            LoginOutcome::TwoFactorRequired(pending) => self.open_two_factor_modal(pending),
        }
        Ok(())
    }

    /// Restore the user read back from a persisted token.
    pub fn restore(&mut self, user: SessionUser) {
        self.user = Some(user);
    }

    /// Drop the session user. Token removal is done by [`logout`].
    pub fn clear_session(&mut self) {
        self.user = None;
        self.two_factor = None;
        self.pending = false;
    }
}

/// Persist the token and turn the payload into an outcome.
async fn settle<S: TokenStore>(tokens: &S, role: Role, email: &str, payload: AuthPayload) -> Result<LoginOutcome, ClientError> {
    if payload.two_factor_required {
        return Ok(LoginOutcome::TwoFactorRequired(PendingTwoFactor { email: email.to_owned(), role }));
    }
    let (Some(token), Some(user)) = (payload.token, payload.user) else {
        return Err(ClientError::Decode("login response missing token or user".to_owned()));
    };
    if user.role != role {
        leptos::logging::warn!("login for {role:?} returned a {:?} account", user.role);
        return Err(ClientError::Auth(format!("This account is not a {} account", role.label())));
    }
    tokens.write(role, &token).await;
    Ok(LoginOutcome::Authenticated(user))
}

/// Password login for `role`. Persists the token on success.
///
/// # Errors
///
/// See [`api::login`]. A reply for a different role is an auth failure.
pub async fn login<T: Transport, S: TokenStore>(
    api: &ApiClient<T>,
    tokens: &S,
    role: Role,
    email: &str,
    password: &str,
) -> Result<LoginOutcome, ClientError> {
    let payload = api::login(api, role, email, password).await?;
    settle(tokens, role, email, payload).await
}

/// Register and sign in. Persists the token on success.
///
/// # Errors
///
/// See [`api::register`].
pub async fn register<T: Transport, S: TokenStore>(
    api: &ApiClient<T>,
    tokens: &S,
    role: Role,
    form: &RegisterRequest<'_>,
) -> Result<LoginOutcome, ClientError> {
    let payload = api::register(api, role, form).await?;
    settle(tokens, role, form.email, payload).await
}

/// Second factor for a pending login. Persists the token on success.
///
/// # Errors
///
/// See [`api::verify_two_factor`].
pub async fn verify_two_factor<T: Transport, S: TokenStore>(
    api: &ApiClient<T>,
    tokens: &S,
    role: Role,
    email: &str,
    code: &str,
) -> Result<LoginOutcome, ClientError> {
    let payload = api::verify_two_factor(api, role, email, code).await?;
    match settle(tokens, role, email, payload).await? {
        LoginOutcome::TwoFactorRequired(_) => Err(ClientError::Auth("Verification was not accepted".to_owned())),
        authenticated => Ok(authenticated),
    }
}

/// Revoke the server session (best-effort) and delete the role token.
///
/// Does not navigate; the caller picks where to go next.
pub async fn logout<T: Transport, S: TokenStore>(api: &ApiClient<T>, tokens: &S, role: Role) {
    if let Some(token) = tokens.read(role).await {
        if let Err(e) = api::logout(api, role, &token).await {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
    tokens.remove(role).await;
}

/// Sign out of every role that has a persisted token.
///
/// A tab holds one session at a time, but tokens for other roles can linger
/// from earlier logins; the header's log-out clears them all.
pub async fn logout_all<T: Transport, S: TokenStore>(api: &ApiClient<T>, tokens: &S) {
    for role in Role::ALL {
        logout(api, tokens, role).await;
    }
}

/// Look up the user for a persisted token, if any.
///
/// A rejected token is deleted so gates stop treating it as valid. Other
/// failures keep the token and report no user.
pub async fn restore_session<T: Transport, S: TokenStore>(
    api: &ApiClient<T>,
    tokens: &S,
    role: Role,
) -> Option<SessionUser> {
    let token = tokens.read(role).await?;
    match api::current_user(api, role, &token).await {
        Ok(user) => Some(user),
        Err(e) if e.is_auth() => {
            leptos::logging::log!("dropping expired {} token", role.token_key());
            tokens.remove(role).await;
            None
        }
        Err(e) => {
            leptos::logging::warn!("session restore failed: {e}");
            None
        }
    }
}

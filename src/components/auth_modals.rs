//! Login, register, forgot-password and two-factor modals.
//!
//! All four read the shared `AuthState`; visibility comes from its single
//! modal slot, so opening one hides the rest. Submissions are refused while
//! another auth request is in flight.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_forms::{
    parse_role_choice, validate_email, validate_login_input, validate_register_input, validate_two_factor_code,
};
use crate::config::ClientConfig;
use crate::net::types::Role;
use crate::state::auth::{AuthState, PendingTwoFactor};
use crate::state::notice::NoticeState;
use crate::util::liveness::Liveness;

#[cfg(feature = "hydrate")]
use crate::{
    components::auth_forms::inline_error,
    error::ClientError,
    net::http::ApiClient,
    state::auth::LoginOutcome,
    util::token_store::BrowserTokens,
};

/// Apply a login-like result to the root-owned auth and notice state.
///
/// Runs whether or not the submitting view is still mounted; only view-local
/// signals and navigation are gated on liveness. Returns `true` once signed in.
#[cfg(feature = "hydrate")]
pub(crate) fn settle_login(
    auth: RwSignal<AuthState>,
    notices: RwSignal<NoticeState>,
    result: Result<LoginOutcome, ClientError>,
) -> Result<bool, ClientError> {
    match auth.try_update(move |s| s.finish_login(result)) {
        Some(Ok(())) => Ok(auth.with_untracked(AuthState::is_authenticated)),
        Some(Err(e)) => {
            notices.update(|n| {
                n.error(&e);
            });
            Err(e)
        }
        None => Ok(false),
    }
}

/// Reflect a settled login in the submitting form.
#[cfg(feature = "hydrate")]
fn show_settled(field_error: RwSignal<Option<String>>, settled: &Result<bool, ClientError>) -> bool {
    match settled {
        Ok(signed_in) => {
            field_error.set(None);
            *signed_in
        }
        Err(e) => {
            field_error.set(Some(inline_error(e)));
            false
        }
    }
}

fn mount_liveness() -> Liveness {
    let alive = Liveness::new();
    let cleanup = alive.clone();
    on_cleanup(move || cleanup.kill());
    alive
}

#[component]
fn RoleSelect(role: RwSignal<Role>) -> impl IntoView {
    view! {
        <select
            class="auth-form__role"
            on:change=move |ev| role.set(parse_role_choice(&event_target_value(&ev)))
        >
            <option value="jobseeker" selected=move || role.get() == Role::JobSeeker>"Job Seeker"</option>
            <option value="employer" selected=move || role.get() == Role::Employer>"Employer"</option>
        </select>
    }
}

#[component]
pub fn LoginModal() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let alive = mount_liveness();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::JobSeeker);
    let field_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                field_error.set(Some(message.to_owned()));
                return;
            }
        };
        if !auth.try_update(AuthState::begin_request).unwrap_or(false) {
            return;
        }
        field_error.set(None);
        let role_value = role.get();

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = ApiClient::browser(&config);
                let result =
                    crate::state::auth::login(&api, &BrowserTokens, role_value, &email_value, &password_value).await;
                let settled = settle_login(auth, notices, result);
                alive.run_if_alive(|| {
                    if show_settled(field_error, &settled) {
                        password.set(String::new());
                        navigate(role_value.dashboard_path(), NavigateOptions::default());
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, role_value, &alive, &config, &navigate, notices);
            auth.update(AuthState::end_request);
        }
    };

    view! {
        <div class="modal-backdrop" hidden=move || !auth.get().is_login_open()>
            <div class="modal" role="dialog" aria-label="Log in">
                <button class="modal__close" on:click=move |_| auth.update(AuthState::close_login_modal)>
                    "×"
                </button>
                <h2>"Log in"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <RoleSelect role=role/>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <p class="form-error">{move || field_error.get()}</p>
                    <button type="submit" disabled=move || auth.get().is_pending()>
                        {move || if auth.get().is_pending() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <button class="link" on:click=move |_| auth.update(AuthState::open_forgot_password_modal)>
                    "Forgot password?"
                </button>
                <button class="link" on:click=move |_| auth.update(AuthState::open_register_modal)>
                    "Create an account"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterModal() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let alive = mount_liveness();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let role = RwSignal::new(Role::JobSeeker);
    let field_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let fields = match validate_register_input(&name.get(), &email.get(), &password.get(), &confirmation.get()) {
            Ok(fields) => fields,
            Err(message) => {
                field_error.set(Some(message.to_owned()));
                return;
            }
        };
        if !auth.try_update(AuthState::begin_request).unwrap_or(false) {
            return;
        }
        field_error.set(None);
        let role_value = role.get();

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = ApiClient::browser(&config);
                let result = crate::state::auth::register(&api, &BrowserTokens, role_value, &fields.as_request()).await;
                let settled = settle_login(auth, notices, result);
                if matches!(settled, Ok(true)) {
                    notices.update(|n| {
                        n.success("Welcome to Applymandu!");
                    });
                }
                alive.run_if_alive(|| {
                    if show_settled(field_error, &settled) {
                        navigate(role_value.dashboard_path(), NavigateOptions::default());
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (fields, role_value, &alive, &config, &navigate, notices);
            auth.update(AuthState::end_request);
        }
    };

    view! {
        <div class="modal-backdrop" hidden=move || !auth.get().is_register_open()>
            <div class="modal" role="dialog" aria-label="Create account">
                <button class="modal__close" on:click=move |_| auth.update(AuthState::close_register_modal)>
                    "×"
                </button>
                <h2>"Create account"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <RoleSelect role=role/>
                    <input
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirmation.get()
                        on:input=move |ev| confirmation.set(event_target_value(&ev))
                    />
                    <p class="form-error">{move || field_error.get()}</p>
                    <button type="submit" disabled=move || auth.get().is_pending()>"Sign up"</button>
                </form>
                <button class="link" on:click=move |_| auth.update(AuthState::open_login_modal)>
                    "Already have an account? Log in"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn ForgotPasswordModal() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ClientConfig>();
    let alive = mount_liveness();

    let email = RwSignal::new(String::new());
    let role = RwSignal::new(Role::JobSeeker);
    let field_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email_value = match validate_email(&email.get()) {
            Ok(value) => value,
            Err(message) => {
                field_error.set(Some(message.to_owned()));
                return;
            }
        };
        if !auth.try_update(AuthState::begin_request).unwrap_or(false) {
            return;
        }
        field_error.set(None);
        let role_value = role.get();

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let api = ApiClient::browser(&config);
                let result = crate::net::api::forgot_password(&api, role_value, &email_value).await;
                auth.update(AuthState::end_request);
                match result {
                    Ok(message) => {
                        notices.update(|n| {
                            n.success(message.unwrap_or_else(|| "Check your inbox for a reset link.".to_owned()));
                        });
                        auth.update(AuthState::close_forgot_password_modal);
                    }
                    Err(e) => {
                        notices.update(|n| {
                            n.error(&e);
                        });
                        alive.run_if_alive(|| field_error.set(Some(inline_error(&e))));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, role_value, &alive, &config, notices);
            auth.update(AuthState::end_request);
        }
    };

    view! {
        <div class="modal-backdrop" hidden=move || !auth.get().is_forgot_password_open()>
            <div class="modal" role="dialog" aria-label="Reset password">
                <button class="modal__close" on:click=move |_| auth.update(AuthState::close_forgot_password_modal)>
                    "×"
                </button>
                <h2>"Reset password"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <RoleSelect role=role/>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <p class="form-error">{move || field_error.get()}</p>
                    <button type="submit" disabled=move || auth.get().is_pending()>"Send reset link"</button>
                </form>
                <button class="link" on:click=move |_| auth.update(AuthState::open_login_modal)>
                    "Back to log in"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn TwoFactorModal() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();
    let alive = mount_liveness();

    let code = RwSignal::new(String::new());
    let field_error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let code_value = match validate_two_factor_code(&code.get()) {
            Ok(value) => value,
            Err(message) => {
                field_error.set(Some(message.to_owned()));
                return;
            }
        };
        let Some(PendingTwoFactor { email: email_value, role: role_value }) = auth.with_untracked(|s| s.two_factor().cloned())
        else {
            auth.update(AuthState::open_login_modal);
            return;
        };
        if !auth.try_update(AuthState::begin_request).unwrap_or(false) {
            return;
        }
        field_error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let alive = alive.clone();
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = ApiClient::browser(&config);
                let result =
                    crate::state::auth::verify_two_factor(&api, &BrowserTokens, role_value, &email_value, &code_value)
                        .await;
                let settled = settle_login(auth, notices, result);
                alive.run_if_alive(|| {
                    if show_settled(field_error, &settled) {
                        code.set(String::new());
                        navigate(role_value.dashboard_path(), NavigateOptions::default());
                    }
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, code_value, role_value, &alive, &config, &navigate, notices);
            auth.update(AuthState::end_request);
        }
    };

    view! {
        <div class="modal-backdrop" hidden=move || !auth.get().is_two_factor_open()>
            <div class="modal" role="dialog" aria-label="Two-factor verification">
                <button class="modal__close" on:click=move |_| auth.update(AuthState::close_two_factor_modal)>
                    "×"
                </button>
                <h2>"Verify it's you"</h2>
                <p>
                    "Enter the code sent to "
                    <strong>{move || auth.get().two_factor_email().unwrap_or_default().to_owned()}</strong>
                </p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <p class="form-error">{move || field_error.get()}</p>
                    <button type="submit" disabled=move || auth.get().is_pending()>"Verify"</button>
                </form>
            </div>
        </div>
    }
}

/// All auth modals, mounted once at the app root.
#[component]
pub fn AuthModals() -> impl IntoView {
    view! {
        <LoginModal/>
        <RegisterModal/>
        <ForgotPasswordModal/>
        <TwoFactorModal/>
    }
}

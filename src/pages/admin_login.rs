//! Admin console sign-in page.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::auth_forms::validate_login_input;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let alive = crate::util::liveness::Liveness::new();
    let cleanup = alive.clone();
    on_cleanup(move || cleanup.kill());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(Some(message.to_owned()));
                return;
            }
        };
        if !auth.try_update(AuthState::begin_request).unwrap_or(false) {
            return;
        }
        info.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::Role;

            let alive = alive.clone();
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::http::ApiClient::browser(&config);
                let tokens = crate::util::token_store::BrowserTokens;
                let result = crate::state::auth::login(&api, &tokens, Role::Admin, &email_value, &password_value).await;
                let settled = crate::components::auth_modals::settle_login(auth, notices, result);
                alive.run_if_alive(|| match settled {
                    Ok(true) => navigate(Role::Admin.dashboard_path(), NavigateOptions::default()),
                    Ok(false) => info.set(None),
                    Err(e) => info.set(Some(crate::components::auth_forms::inline_error(&e))),
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, &alive, &config, &navigate, notices);
            auth.update(AuthState::end_request);
        }
    };

    view! {
        <main class="admin-login">
            <div class="login-card">
                <h1>"Admin console"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="admin@applymandu.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <p class="form-error">{move || info.get()}</p>
                    <button type="submit" disabled=move || auth.get().is_pending()>"Sign in"</button>
                </form>
            </div>
        </main>
    }
}

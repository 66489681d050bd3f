//! Top navigation with auth entry points.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        if !auth.with_untracked(AuthState::is_authenticated) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::http::ApiClient::browser(&config);
                crate::state::auth::logout_all(&api, &crate::util::token_store::BrowserTokens).await;
                auth.update(AuthState::clear_session);
                notices.update(|n| {
                    n.success("You have been logged out.");
                });
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, notices);
            auth.update(AuthState::clear_session);
            navigate("/", NavigateOptions::default());
        }
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"Applymandu"</a>
            <nav class="site-header__nav">
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=move || {
                        view! {
                            <button on:click=move |_| auth.update(AuthState::open_login_modal)>"Log in"</button>
                            <button on:click=move |_| auth.update(AuthState::open_register_modal)>"Sign up"</button>
                        }
                    }
                >
                    <a href=move || auth.get().role().map(|r| r.dashboard_path()).unwrap_or("/")>"Dashboard"</a>
                    <span class="site-header__user">
                        {move || auth.get().user().map(|u| u.name.clone()).unwrap_or_default()}
                    </span>
                </Show>
                <button hidden=move || !auth.get().is_authenticated() on:click=on_logout>"Log out"</button>
            </nav>
        </header>
    }
}

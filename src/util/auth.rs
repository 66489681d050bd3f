//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role layouts apply identical gate behavior through `install_role_gate`, and
//! the app root restores persisted sessions once on mount.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_location;

use crate::config::ClientConfig;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::gate::GateState;
use crate::util::liveness::Liveness;

/// Re-run the `role` gate on every pathname change, mirroring the result into
/// `gate` and redirecting denied visitors.
pub fn install_role_gate<F>(role: Role, gate: RwSignal<GateState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let location = use_location();
    let alive = Liveness::new();
    let cleanup = alive.clone();
    on_cleanup(move || cleanup.kill());

    Effect::new(move || {
        let path = location.pathname.get();
        gate.set(GateState::Unknown);

        #[cfg(feature = "hydrate")]
        {
            use crate::state::gate::{RouteGate, check_access};
            use crate::util::token_store::BrowserTokens;

            let alive = alive.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut machine = RouteGate::new(role);
                machine.begin(&path);
                let redirect_alive = alive.clone();
                let state = check_access(&mut machine, &BrowserTokens, move |to| {
                    if redirect_alive.is_alive() {
                        navigate(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                })
                .await;
                alive.run_if_alive(|| gate.set(state));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, &alive, &navigate, role);
        }
    });
}

/// Repopulate the session user from the first role whose persisted token the
/// server still accepts. One session per tab; log-out clears the rest.
pub fn restore_sessions(auth: RwSignal<AuthState>, config: ClientConfig) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::http::ApiClient;
        use crate::util::token_store::BrowserTokens;

        let api = ApiClient::browser(&config);
        for role in Role::ALL {
            if let Some(user) = crate::state::auth::restore_session(&api, &BrowserTokens, role).await {
                auth.update(|s| s.restore(user));
                break;
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, config);
    }
}

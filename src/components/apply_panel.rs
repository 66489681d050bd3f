//! Side panel for applying to the selected job.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::application::ApplicationState;
use crate::state::auth::AuthState;
use crate::state::notice::NoticeState;
use crate::util::liveness::Liveness;

#[component]
pub fn ApplyPanel() -> impl IntoView {
    let application = expect_context::<RwSignal<ApplicationState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let config = expect_context::<ClientConfig>();

    let alive = Liveness::new();
    let cleanup = alive.clone();
    on_cleanup(move || cleanup.kill());

    let cover_letter = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let close = move |_: leptos::ev::MouseEvent| {
        cover_letter.set(String::new());
        application.update(ApplicationState::close_application_panel);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if !auth.with_untracked(AuthState::is_job_seeker) {
            auth.update(AuthState::open_login_modal);
            return;
        }
        let Some(job_id) = application.with_untracked(|s| s.selected_job().map(|j| j.id.clone())) else {
            return;
        };
        let letter = cover_letter.get_untracked();
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::http::ApiClient;
            use crate::state::application::submit_application;
            use crate::util::token_store::BrowserTokens;

            let alive = alive.clone();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let api = ApiClient::browser(&config);
                let result = submit_application(&api, &BrowserTokens, &job_id, &letter).await;
                if !alive.is_alive() {
                    return;
                }
                submitting.set(false);
                match result {
                    Ok(message) => {
                        notices.update(|n| {
                            n.success(message.unwrap_or_else(|| "Application sent.".to_owned()));
                        });
                        cover_letter.set(String::new());
                        application.update(ApplicationState::close_application_panel);
                    }
                    Err(e) => notices.update(|n| {
                        n.error(&e);
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (job_id, letter, &alive, &config, notices);
            submitting.set(false);
        }
    };

    view! {
        <aside class=move || {
            if application.get().is_panel_open() { "apply-panel apply-panel--open" } else { "apply-panel" }
        }>
            <header class="apply-panel__header">
                <h2>
                    {move || application.get().selected_job().map(|j| j.title.clone()).unwrap_or_default()}
                </h2>
                <p class="apply-panel__company">
                    {move || application.get().selected_job().and_then(|j| j.company.clone())}
                </p>
                <button class="modal__close" on:click=close>"×"</button>
            </header>
            <form class="apply-panel__form" on:submit=on_submit>
                <textarea
                    placeholder="Why are you a good fit?"
                    prop:value=move || cover_letter.get()
                    on:input=move |ev| cover_letter.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Sending..." } else { "Submit application" }}
                </button>
            </form>
        </aside>
    }
}

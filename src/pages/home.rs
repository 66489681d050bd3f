//! Public landing page listing open jobs.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::Job;
use crate::state::application::ApplicationState;
use crate::state::auth::AuthState;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let application = expect_context::<RwSignal<ApplicationState>>();
    let config = expect_context::<ClientConfig>();

    let jobs = RwSignal::new(Vec::<Job>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    {
        let alive = crate::util::liveness::Liveness::new();
        let cleanup = alive.clone();
        on_cleanup(move || cleanup.kill());
        leptos::task::spawn_local(async move {
            let api = crate::net::http::ApiClient::browser(&config);
            let result = crate::net::api::list_jobs(&api).await;
            alive.run_if_alive(|| {
                loading.set(false);
                match result {
                    Ok(list) => jobs.set(list),
                    Err(e) => {
                        leptos::logging::warn!("job list failed: {e}");
                        load_error.set(Some(e.user_message()));
                    }
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
    }

    let apply = move |job: Job| {
        if auth.with_untracked(AuthState::is_job_seeker) {
            application.update(|s| s.open_application_panel(job));
        } else {
            auth.update(AuthState::open_login_modal);
        }
    };

    view! {
        <main class="home">
            <h1>"Find your next job"</h1>
            <Show when=move || loading.get()>
                <p class="home__loading">"Loading jobs..."</p>
            </Show>
            <p class="form-error">{move || load_error.get()}</p>
            <ul class="job-list">
                <For each=move || jobs.get() key=|job| job.id.clone() let:job>
                    {
                        let title = job.title.clone();
                        let company = job.company.clone().unwrap_or_default();
                        let location = job.location.clone().unwrap_or_default();
                        view! {
                            <li class="job-card">
                                <h3>{title}</h3>
                                <p>{company}" · "{location}</p>
                                <button on:click=move |_| apply(job.clone())>"Apply"</button>
                            </li>
                        }
                    }
                </For>
            </ul>
        </main>
    }
}

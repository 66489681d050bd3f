//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::apply_panel::ApplyPanel;
use crate::components::auth_modals::AuthModals;
use crate::components::notice_toast::NoticeToast;
use crate::components::role_layout::{AdminLayout, EmployerLayout, JobSeekerLayout};
use crate::components::site_header::SiteHeader;
use crate::config::ClientConfig;
use crate::pages::{
    admin_login::AdminLoginPage,
    dashboard::{AdminDashboard, AdminUsers, EmployerDashboard, EmployerJobs, JobSeekerApplications, JobSeekerDashboard},
    home::HomePage,
};
use crate::state::{application::ApplicationState, auth::AuthState, notice::NoticeState};
use crate::util::auth::restore_sessions;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth, application and notice contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env().unwrap_or_else(|e| {
        leptos::logging::warn!("{e}; falling back to default API URL");
        ClientConfig::default()
    });

    let auth = RwSignal::new(AuthState::default());
    let application = RwSignal::new(ApplicationState::default());
    let notices = RwSignal::new(NoticeState::default());

    provide_context(config.clone());
    provide_context(auth);
    provide_context(application);
    provide_context(notices);

    restore_sessions(auth, config);

    view! {
        <Stylesheet id="leptos" href="/pkg/applymandu.css"/>
        <Title text="Applymandu"/>

        <Router>
            <SiteHeader/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("admin-login") view=AdminLoginPage/>
                <ParentRoute path=(StaticSegment("dashboard"), StaticSegment("jobseeker")) view=JobSeekerLayout>
                    <Route path=StaticSegment("") view=JobSeekerDashboard/>
                    <Route path=StaticSegment("applications") view=JobSeekerApplications/>
                </ParentRoute>
                <ParentRoute path=(StaticSegment("dashboard"), StaticSegment("employer")) view=EmployerLayout>
                    <Route path=StaticSegment("") view=EmployerDashboard/>
                    <Route path=StaticSegment("jobs") view=EmployerJobs/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                    <Route path=StaticSegment("") view=AdminDashboard/>
                    <Route path=StaticSegment("users") view=AdminUsers/>
                </ParentRoute>
            </Routes>
            <AuthModals/>
            <ApplyPanel/>
            <NoticeToast/>
        </Router>
    }
}

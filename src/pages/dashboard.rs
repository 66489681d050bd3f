//! Pages of the role-protected sections.
//!
//! These render inside a `RoleLayout`, so they only mount for visitors whose
//! role token is present. Moving between them re-runs the section gate.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// `(label, path)` of every page in a role's section, landing page first.
pub fn section_links(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::JobSeeker => &[("Overview", "/dashboard/jobseeker"), ("Applications", "/dashboard/jobseeker/applications")],
        Role::Employer => &[("Overview", "/dashboard/employer"), ("Job postings", "/dashboard/employer/jobs")],
        Role::Admin => &[("Overview", "/admin"), ("Users", "/admin/users")],
    }
}

#[component]
fn DashboardShell(role: Role, children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let greeting = move || match auth.get().user() {
        Some(user) => format!("Welcome back, {}", user.name),
        None => format!("{} dashboard", role.label()),
    };

    view! {
        <main class="dashboard">
            <nav class="dashboard__nav">
                {section_links(role)
                    .iter()
                    .map(|(label, href)| view! { <a href=*href>{*label}</a> })
                    .collect_view()}
            </nav>
            <h1>{greeting}</h1>
            {children()}
        </main>
    }
}

#[component]
pub fn JobSeekerDashboard() -> impl IntoView {
    view! {
        <DashboardShell role=Role::JobSeeker>
            <p>"Track your applications and saved jobs."</p>
            <a href="/">"Browse jobs"</a>
        </DashboardShell>
    }
}

#[component]
pub fn EmployerDashboard() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Employer>
            <p>"Post jobs and review applicants."</p>
        </DashboardShell>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Admin>
            <p>"Manage users and content."</p>
        </DashboardShell>
    }
}

#[component]
pub fn JobSeekerApplications() -> impl IntoView {
    view! {
        <DashboardShell role=Role::JobSeeker>
            <h2>"Applications"</h2>
            <p>"Jobs you have applied to appear here."</p>
        </DashboardShell>
    }
}

#[component]
pub fn EmployerJobs() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Employer>
            <h2>"Job postings"</h2>
            <p>"Your open and closed postings appear here."</p>
        </DashboardShell>
    }
}

#[component]
pub fn AdminUsers() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Admin>
            <h2>"Users"</h2>
            <p>"Job seeker and employer accounts appear here."</p>
        </DashboardShell>
    }
}

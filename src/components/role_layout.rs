//! Layout gates for the role-protected sections.
//!
//! Each section mounts one gate at its layout route; nested pages render
//! through the `Outlet` only once the gate has authorized the visit.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::gate::GateState;
use crate::util::auth::install_role_gate;

#[component]
pub fn RoleLayout(role: Role) -> impl IntoView {
    let gate = RwSignal::new(GateState::Unknown);
    install_role_gate(role, gate, use_navigate());

    view! {
        <Show
            when=move || gate.get() == GateState::Authorized
            fallback=|| view! { <div class="gate-pending">"Checking access..."</div> }
        >
            <Outlet/>
        </Show>
    }
}

#[component]
pub fn JobSeekerLayout() -> impl IntoView {
    view! { <RoleLayout role=Role::JobSeeker/> }
}

#[component]
pub fn EmployerLayout() -> impl IntoView {
    view! { <RoleLayout role=Role::Employer/> }
}

#[component]
pub fn AdminLayout() -> impl IntoView {
    view! { <RoleLayout role=Role::Admin/> }
}

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read/write the shared auth, application and notice state from
//! Leptos context providers.

pub mod apply_panel;
pub mod auth_forms;
pub mod auth_modals;
pub mod notice_toast;
pub mod role_layout;
pub mod site_header;

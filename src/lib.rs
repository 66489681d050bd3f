//! # applymandu
//!
//! Leptos + WASM front end for the Applymandu job board.
//!
//! This crate contains the auth and application contexts, the role route
//! gates, per-role token storage, a typed wrapper over the REST API, and the
//! pages and modals that mount them.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

//! Per-role bearer token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens live outside process memory so they survive reloads. Reads are
//! async unconditionally so route gates treat `localStorage` and a remote
//! session backend the same way.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::net::types::Role;

/// Async key/value slots for role tokens.
#[allow(async_fn_in_trait)]
pub trait TokenStore {
    async fn read(&self, role: Role) -> Option<String>;
    async fn write(&self, role: Role, token: &str);
    async fn remove(&self, role: Role);
}

/// Tokens in `window.localStorage`, keyed by [`Role::token_key`].
///
/// Browser-only. Outside hydrate builds every read is empty and writes no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokens;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokens {
    async fn read(&self, role: Role) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = local_storage()?.get_item(role.token_key()).ok().flatten()?;
            normalize_token(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = role;
            None
        }
    }

    async fn write(&self, role: Role, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                leptos::logging::warn!("localStorage unavailable; {} not persisted", role.token_key());
                return;
            };
            if storage.set_item(role.token_key(), token).is_err() {
                leptos::logging::warn!("failed to persist {}", role.token_key());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (role, token);
        }
    }

    async fn remove(&self, role: Role) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(role.token_key());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = role;
        }
    }
}

/// In-process token slots, used for SSR and tests.
#[derive(Debug, Default)]
pub struct MemoryTokens {
    slots: RefCell<HashMap<Role, String>>,
}

impl MemoryTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(role: Role, token: &str) -> Self {
        let store = Self::new();
        store.slots.borrow_mut().insert(role, token.to_owned());
        store
    }

    /// Synchronous peek, for assertions.
    pub fn get(&self, role: Role) -> Option<String> {
        self.slots.borrow().get(&role).cloned()
    }
}

impl TokenStore for MemoryTokens {
    async fn read(&self, role: Role) -> Option<String> {
        self.slots.borrow().get(&role).and_then(|raw| normalize_token(raw))
    }

    async fn write(&self, role: Role, token: &str) {
        self.slots.borrow_mut().insert(role, token.to_owned());
    }

    async fn remove(&self, role: Role) {
        self.slots.borrow_mut().remove(&role);
    }
}

/// A stored token counts only when it is non-blank.
pub fn normalize_token(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

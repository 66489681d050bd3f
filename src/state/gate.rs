//! Route gate state machine for role-protected sections.
//!
//! DESIGN
//! ======
//! One gate per role prefix, checked at the layout level, so each role's
//! policy has exactly one implementation. Every navigation inside the section
//! re-enters `Unknown` and re-reads the token; revoking a token therefore
//! takes effect on the next navigation, not instantly.
//!
//! ```text
//!            begin(path)
//!   * ────────────────────► Unknown
//!                            │   │
//!              token present │   │ token missing
//!                            ▼   ▼
//!                   Authorized   Unauthorized ──► redirect (once)
//! ```

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::net::types::Role;
use crate::util::token_store::TokenStore;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    /// Token not read yet.
    #[default]
    Unknown,
    Authorized,
    Unauthorized,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteGate {
    role: Role,
    state: GateState,
    path: Option<String>,
}

impl RouteGate {
    pub fn new(role: Role) -> Self {
        Self { role, state: GateState::Unknown, path: None }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Path of the navigation currently being checked.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Start a check for a navigation to `path`.
    pub fn begin(&mut self, path: &str) {
        self.path = Some(path.to_owned());
        self.state = GateState::Unknown;
    }

    /// Settle the pending check with the token read from storage.
    ///
    /// Returns the redirect target when this call moved the gate into
    /// `Unauthorized`. A gate that is already settled ignores the call.
    pub fn resolve(&mut self, token: Option<&str>) -> Option<&'static str> {
        if self.state != GateState::Unknown {
            return None;
        }
        if token.is_some_and(|t| !t.trim().is_empty()) {
            self.state = GateState::Authorized;
            None
        } else {
            self.state = GateState::Unauthorized;
            Some(self.role.unauthorized_redirect())
        }
    }
}

/// Read the role token and settle `gate`, redirecting through `navigate` when
/// access is denied.
pub async fn check_access<S, N>(gate: &mut RouteGate, tokens: &S, mut navigate: N) -> GateState
where
    S: TokenStore,
    N: FnMut(&str),
{
    let token = tokens.read(gate.role()).await;
    if let Some(target) = gate.resolve(token.as_deref()) {
        leptos::logging::log!(
            "{} gate denied {}; redirecting to {target}",
            gate.role().label(),
            gate.path().unwrap_or("")
        );
        navigate(target);
    }
    gate.state()
}

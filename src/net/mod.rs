//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` normalizes every reply, `api` exposes typed endpoints, and `types`
//! defines the wire schema.

pub mod api;
pub mod http;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;

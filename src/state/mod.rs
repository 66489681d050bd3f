//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `application`, `gate`, `notice`) so
//! components depend on small focused models. Each is plain data, held in an
//! `RwSignal` provided from the app root.

pub mod application;
pub mod auth;
pub mod gate;
pub mod notice;

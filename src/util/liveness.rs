//! Mount-liveness flag for async work started by a component.
//!
//! A component spawns a request, then unmounts before it resolves; the result
//! must be dropped instead of written into state nobody renders. The flag is
//! flipped from `on_cleanup` and checked before applying results.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the owner as gone. Every clone observes it.
    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while the owner is still mounted.
    pub fn run_if_alive<R>(&self, apply: impl FnOnce() -> R) -> Option<R> {
        self.is_alive().then(apply)
    }
}

//! Mounted-view flag for async callbacks.
//!
//! Requests are never aborted on navigation. A view creates a `Liveness` when
//! it mounts; its `on_cleanup` hook clears the flag, and every async callback
//! checks `is_alive()` before touching view signals.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::on_cleanup;

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    /// Flag tied to the current reactive owner.
    #[must_use]
    pub fn new() -> Self {
        let flag = Arc::new(AtomicBool::new(true));
        let cleanup = flag.clone();
        on_cleanup(move || cleanup.store(false, Ordering::Relaxed));
        Self(flag)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

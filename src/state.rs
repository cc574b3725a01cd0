//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the table and object-storage backends behind trait objects; in
//! production both point at the same `SupabaseClient`.

use std::sync::Arc;

use crate::supabase::{DataService, ObjectStore, SupabaseClient};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<dyn DataService>,
    pub images: Arc<dyn ObjectStore>,
}

impl AppState {
    #[must_use]
    pub fn new(data: Arc<dyn DataService>, images: Arc<dyn ObjectStore>) -> Self {
        Self { data, images }
    }

    /// State backed by one Supabase project for both tables and storage.
    #[must_use]
    pub fn from_supabase(client: SupabaseClient) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client)
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

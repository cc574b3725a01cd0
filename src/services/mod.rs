//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service functions own validation and logging so route handlers stay
//! focused on request/response translation. Each function performs at most
//! one backend round trip.

pub mod campaign;
pub mod image;
pub mod injectable;
pub mod whitelist;

use records::{Uuid, ValidationError};

use crate::supabase::BackendError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },
    #[error("invalid upload: {0}")]
    InvalidUpload(String),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

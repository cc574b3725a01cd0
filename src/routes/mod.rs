//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the console's JSON API and stitches it together with
//! Leptos SSR rendering under a single Axum router. The browser only ever
//! talks to these routes; backend credentials never leave the server.

pub mod campaigns;
pub mod domains;
pub mod images;
pub mod injectables;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{delete, get, patch, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use records::ErrorBody;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::ServiceError;
use crate::state::AppState;
use crate::supabase::config::env_parse_u64;

const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Upload size cap from `MAX_UPLOAD_BYTES` (default 10 MiB).
pub fn max_upload_bytes() -> usize {
    usize::try_from(env_parse_u64("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)).unwrap_or(usize::MAX)
}

// =============================================================================
// ERRORS
// =============================================================================

/// Error response: a status plus `{ "error": message }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = service_error_to_status(&err);
        let message = match &err {
            ServiceError::Backend(backend) => {
                tracing::error!(error = %backend, "backend call failed");
                backend.reason()
            }
            other => other.to_string(),
        };
        Self { status, message }
    }
}

pub(crate) fn service_error_to_status(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Invalid(_) | ServiceError::InvalidUpload(_) => StatusCode::BAD_REQUEST,
        ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
        ServiceError::Backend(_) => StatusCode::BAD_GATEWAY,
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// JSON API routes used by the hydrated client.
pub fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/campaigns", get(campaigns::list_campaigns).post(campaigns::create_campaign))
        .route(
            "/api/campaigns/{id}",
            get(campaigns::get_campaign).delete(campaigns::delete_campaign),
        )
        .route(
            "/api/campaigns/{id}/injectables",
            get(injectables::list_injectables).post(injectables::create_injectable),
        )
        .route(
            "/api/injectables/{id}",
            patch(injectables::update_injectable).delete(injectables::delete_injectable),
        )
        .route(
            "/api/campaigns/{id}/domains",
            get(domains::list_domains).post(domains::add_domain),
        )
        .route("/api/domains/{id}", delete(domains::delete_domain))
        .route(
            "/api/campaigns/{id}/images",
            post(images::upload_image).layer(DefaultBodyLimit::max(max_upload_bytes())),
        )
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes + Leptos SSR pages + static site assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section / `LEPTOS_*` env vars).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, JS, and CSS bundles produced by cargo-leptos.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .merge(leptos_router))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

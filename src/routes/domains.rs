//! Whitelist domain routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::{DomainBody, Uuid, WhitelistDomain};

use super::ApiError;
use crate::services::whitelist;
use crate::state::AppState;

/// `GET /api/campaigns/:id/domains` — a campaign's whitelist.
pub async fn list_domains(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<Vec<WhitelistDomain>>, ApiError> {
    Ok(Json(whitelist::list_domains(state.data.as_ref(), campaign_id).await?))
}

/// `POST /api/campaigns/:id/domains` — whitelist a domain.
pub async fn add_domain(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
    Json(body): Json<DomainBody>,
) -> Result<(StatusCode, Json<WhitelistDomain>), ApiError> {
    let row = whitelist::add_domain(state.data.as_ref(), campaign_id, &body.domain).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `DELETE /api/domains/:id` — remove a whitelist row.
pub async fn delete_domain(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    whitelist::delete_domain(state.data.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "domains_test.rs"]
mod tests;

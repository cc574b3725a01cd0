//! Injectable routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::{Injectable, InjectableFields, Uuid};

use super::ApiError;
use crate::services::injectable;
use crate::state::AppState;

/// `GET /api/campaigns/:id/injectables` — a campaign's overrides, oldest first.
pub async fn list_injectables(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
) -> Result<Json<Vec<Injectable>>, ApiError> {
    Ok(Json(injectable::list_injectables(state.data.as_ref(), campaign_id).await?))
}

/// `POST /api/campaigns/:id/injectables` — add an override.
pub async fn create_injectable(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
    Json(body): Json<InjectableFields>,
) -> Result<(StatusCode, Json<Injectable>), ApiError> {
    let row = injectable::create_injectable(state.data.as_ref(), campaign_id, body).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `PATCH /api/injectables/:id` — overwrite key, type, and value.
pub async fn update_injectable(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<InjectableFields>,
) -> Result<Json<Injectable>, ApiError> {
    Ok(Json(injectable::update_injectable(state.data.as_ref(), id, body).await?))
}

/// `DELETE /api/injectables/:id` — delete an override.
pub async fn delete_injectable(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    injectable::delete_injectable(state.data.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "injectables_test.rs"]
mod tests;

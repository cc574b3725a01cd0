//! Campaign routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::{Campaign, NewCampaign, Uuid};

use super::ApiError;
use crate::services::campaign;
use crate::state::AppState;

/// `GET /api/campaigns` — all campaigns, newest first.
pub async fn list_campaigns(State(state): State<AppState>) -> Result<Json<Vec<Campaign>>, ApiError> {
    Ok(Json(campaign::list_campaigns(state.data.as_ref()).await?))
}

/// `POST /api/campaigns` — create a campaign.
pub async fn create_campaign(
    State(state): State<AppState>,
    Json(body): Json<NewCampaign>,
) -> Result<(StatusCode, Json<Campaign>), ApiError> {
    let row = campaign::create_campaign(state.data.as_ref(), &body.name).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/campaigns/:id` — fetch one campaign.
pub async fn get_campaign(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Campaign>, ApiError> {
    Ok(Json(campaign::get_campaign(state.data.as_ref(), id).await?))
}

/// `DELETE /api/campaigns/:id` — delete a campaign.
pub async fn delete_campaign(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, ApiError> {
    campaign::delete_campaign(state.data.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "campaigns_test.rs"]
mod tests;

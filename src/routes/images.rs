//! Image upload route.
//!
//! The browser posts the raw file bytes with the original file name in the
//! query string; the `Content-Type` header is forwarded to storage.

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use axum::response::Json;
use records::{UploadedImage, Uuid};
use serde::Deserialize;

use super::ApiError;
use crate::services::image;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UploadQuery {
    pub filename: String,
}

/// `POST /api/campaigns/:id/images?filename=<name>` — store an image and
/// return its public URL.
pub async fn upload_image(
    State(state): State<AppState>,
    Path(campaign_id): Path<Uuid>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadedImage>, ApiError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let uploaded =
        image::upload_image(state.images.as_ref(), campaign_id, &query.filename, content_type, body.to_vec()).await?;
    Ok(Json(uploaded))
}

#[cfg(test)]
#[path = "images_test.rs"]
mod tests;

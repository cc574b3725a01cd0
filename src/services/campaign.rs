//! Campaign service: list, fetch, create, delete.

use records::{Campaign, NewCampaign, Uuid};
use tracing::info;

use super::ServiceError;
use crate::supabase::DataService;

/// All campaigns, newest first.
///
/// # Errors
///
/// Returns a backend error if the select fails.
pub async fn list_campaigns(data: &dyn DataService) -> Result<Vec<Campaign>, ServiceError> {
    Ok(data.list_campaigns().await?)
}

/// Fetch one campaign.
///
/// # Errors
///
/// Returns [`ServiceError::NotFound`] if no campaign has `id`.
pub async fn get_campaign(data: &dyn DataService, id: Uuid) -> Result<Campaign, ServiceError> {
    data.get_campaign(id)
        .await?
        .ok_or(ServiceError::NotFound { entity: "campaign", id })
}

/// Create a campaign from a user-entered name. The name is trimmed.
///
/// # Errors
///
/// Returns a validation error for blank names, or a backend error if the
/// insert fails.
pub async fn create_campaign(data: &dyn DataService, name: &str) -> Result<Campaign, ServiceError> {
    let payload = NewCampaign::new(name)?;
    let row = data.insert_campaign(&payload).await?;
    info!(campaign_id = %row.id, name = %row.name, "campaign created");
    Ok(row)
}

/// Delete a campaign by id.
///
/// # Errors
///
/// Returns a backend error if the delete fails.
pub async fn delete_campaign(data: &dyn DataService, id: Uuid) -> Result<(), ServiceError> {
    data.delete_campaign(id).await?;
    info!(campaign_id = %id, "campaign deleted");
    Ok(())
}

#[cfg(test)]
#[path = "campaign_test.rs"]
mod tests;

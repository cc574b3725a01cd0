//! Injectable service: per-campaign key/value overrides.
//!
//! Create and update both run the shared key validator, so a row written
//! through the console always has a well-formed key.

use records::{Injectable, InjectableFields, NewInjectable, Uuid};
use tracing::info;

use super::ServiceError;
use crate::supabase::DataService;

/// Injectables of a campaign, oldest first.
///
/// # Errors
///
/// Returns a backend error if the select fails.
pub async fn list_injectables(data: &dyn DataService, campaign_id: Uuid) -> Result<Vec<Injectable>, ServiceError> {
    Ok(data.list_injectables(campaign_id).await?)
}

/// Add an injectable to a campaign.
///
/// # Errors
///
/// Returns a validation error for a malformed key or empty value, or a
/// backend error if the insert fails.
pub async fn create_injectable(
    data: &dyn DataService,
    campaign_id: Uuid,
    fields: InjectableFields,
) -> Result<Injectable, ServiceError> {
    let payload = NewInjectable::new(campaign_id, fields)?;
    let row = data.insert_injectable(&payload).await?;
    info!(%campaign_id, injectable_id = %row.id, key = %row.key, kind = row.kind.as_str(), "injectable created");
    Ok(row)
}

/// Overwrite key, type, and value of an existing injectable.
///
/// # Errors
///
/// Returns a validation error, [`ServiceError::NotFound`] if the row does
/// not exist, or a backend error if the update fails.
pub async fn update_injectable(
    data: &dyn DataService,
    id: Uuid,
    fields: InjectableFields,
) -> Result<Injectable, ServiceError> {
    fields.validate()?;
    let row = data
        .update_injectable(id, &fields)
        .await?
        .ok_or(ServiceError::NotFound { entity: "injectable", id })?;
    info!(injectable_id = %id, key = %row.key, kind = row.kind.as_str(), "injectable updated");
    Ok(row)
}

/// Delete an injectable by id.
///
/// # Errors
///
/// Returns a backend error if the delete fails.
pub async fn delete_injectable(data: &dyn DataService, id: Uuid) -> Result<(), ServiceError> {
    data.delete_injectable(id).await?;
    info!(injectable_id = %id, "injectable deleted");
    Ok(())
}

#[cfg(test)]
#[path = "injectable_test.rs"]
mod tests;

//! Whitelist domain service. Any non-blank string is accepted as a domain.

use records::{NewWhitelistDomain, Uuid, WhitelistDomain};
use tracing::info;

use super::ServiceError;
use crate::supabase::DataService;

/// Whitelisted domains of a campaign.
///
/// # Errors
///
/// Returns a backend error if the select fails.
pub async fn list_domains(data: &dyn DataService, campaign_id: Uuid) -> Result<Vec<WhitelistDomain>, ServiceError> {
    Ok(data.list_domains(campaign_id).await?)
}

/// Add a domain (trimmed) to a campaign's whitelist.
///
/// # Errors
///
/// Returns a validation error for blank input or a backend error if the
/// insert fails.
pub async fn add_domain(data: &dyn DataService, campaign_id: Uuid, domain: &str) -> Result<WhitelistDomain, ServiceError> {
    let payload = NewWhitelistDomain::new(campaign_id, domain)?;
    let row = data.insert_domain(&payload).await?;
    info!(%campaign_id, domain = %row.domain, "whitelist domain added");
    Ok(row)
}

/// Remove a whitelist row by id.
///
/// # Errors
///
/// Returns a backend error if the delete fails.
pub async fn delete_domain(data: &dyn DataService, id: Uuid) -> Result<(), ServiceError> {
    data.delete_domain(id).await?;
    info!(domain_id = %id, "whitelist domain deleted");
    Ok(())
}

#[cfg(test)]
#[path = "whitelist_test.rs"]
mod tests;

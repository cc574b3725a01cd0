//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, String>`. On a non-OK status the message is
//! taken from the server's `{ "error": ... }` body when present, so upload
//! failures can show the storage backend's own reason.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{Campaign, Injectable, InjectableFields, Uuid, WhitelistDomain};
#[cfg(feature = "hydrate")]
use records::{DomainBody, ErrorBody, NewCampaign, UploadedImage};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(not(feature = "hydrate"))]
const SERVER_UNAVAILABLE: &str = "not available on server";

#[cfg(any(test, feature = "hydrate"))]
const CAMPAIGNS_ENDPOINT: &str = "/api/campaigns";

#[cfg(any(test, feature = "hydrate"))]
fn campaign_endpoint(id: Uuid) -> String {
    format!("/api/campaigns/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn injectables_endpoint(campaign_id: Uuid) -> String {
    format!("/api/campaigns/{campaign_id}/injectables")
}

#[cfg(any(test, feature = "hydrate"))]
fn injectable_endpoint(id: Uuid) -> String {
    format!("/api/injectables/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn domains_endpoint(campaign_id: Uuid) -> String {
    format!("/api/campaigns/{campaign_id}/domains")
}

#[cfg(any(test, feature = "hydrate"))]
fn domain_endpoint(id: Uuid) -> String {
    format!("/api/domains/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn images_endpoint(campaign_id: Uuid) -> String {
    format!("/api/campaigns/{campaign_id}/images")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Prefer the server's error text, falling back to the bare status.
#[cfg(any(test, feature = "hydrate"))]
fn error_message(status: u16, body: Option<String>) -> String {
    body.filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| request_failed_message(status))
}

#[cfg(feature = "hydrate")]
async fn read_error(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    let body = resp.json::<ErrorBody>().await.ok().map(|b| b.error);
    error_message(status, body)
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, String> {
    if !resp.ok() {
        return Err(read_error(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
async fn expect_ok(resp: gloo_net::http::Response) -> Result<(), String> {
    if resp.ok() { Ok(()) } else { Err(read_error(resp).await) }
}

// =============================================================================
// CAMPAIGNS
// =============================================================================

/// Fetch all campaigns, newest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn fetch_campaigns() -> Result<Vec<Campaign>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CAMPAIGNS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Fetch one campaign by id.
///
/// # Errors
///
/// Returns an error string if the request fails or the campaign is missing.
pub async fn fetch_campaign(id: Uuid) -> Result<Campaign, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&campaign_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Create a campaign via `POST /api/campaigns`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn create_campaign(name: &str) -> Result<Campaign, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = NewCampaign { name: name.to_owned() };
        let resp = gloo_net::http::Request::post(CAMPAIGNS_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Delete a campaign.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn delete_campaign(id: Uuid) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&campaign_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

// =============================================================================
// INJECTABLES
// =============================================================================

/// Fetch a campaign's injectables, oldest first.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn fetch_injectables(campaign_id: Uuid) -> Result<Vec<Injectable>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&injectables_endpoint(campaign_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign_id;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Add an injectable to a campaign.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn create_injectable(campaign_id: Uuid, fields: &InjectableFields) -> Result<Injectable, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&injectables_endpoint(campaign_id))
            .json(fields)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (campaign_id, fields);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Replace an injectable's key, type, and value.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn update_injectable(id: Uuid, fields: &InjectableFields) -> Result<Injectable, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::patch(&injectable_endpoint(id))
            .json(fields)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, fields);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Delete an injectable.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn delete_injectable(id: Uuid) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&injectable_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

// =============================================================================
// WHITELIST
// =============================================================================

/// Fetch a campaign's whitelist domains.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn fetch_domains(campaign_id: Uuid) -> Result<Vec<WhitelistDomain>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&domains_endpoint(campaign_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = campaign_id;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Whitelist a domain for a campaign.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn add_domain(campaign_id: Uuid, domain: &str) -> Result<WhitelistDomain, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = DomainBody { domain: domain.to_owned() };
        let resp = gloo_net::http::Request::post(&domains_endpoint(campaign_id))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (campaign_id, domain);
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

/// Remove a whitelist row.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn delete_domain(id: Uuid) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&domain_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        expect_ok(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SERVER_UNAVAILABLE.to_owned())
    }
}

// =============================================================================
// IMAGES
// =============================================================================

/// Upload an image file for a campaign and return its public URL.
///
/// # Errors
///
/// Returns the server's error text (which carries the storage backend's
/// reason) or a transport error string.
#[cfg(feature = "hydrate")]
pub async fn upload_image(campaign_id: Uuid, file: web_sys::File) -> Result<String, String> {
    let content_type = file.type_();
    let mut builder = gloo_net::http::Request::post(&images_endpoint(campaign_id))
        .query([("filename", file.name())]);
    if !content_type.is_empty() {
        builder = builder.header("content-type", &content_type);
    }
    let resp = builder
        .body(file)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let uploaded: UploadedImage = read_json(resp).await?;
    Ok(uploaded.url)
}

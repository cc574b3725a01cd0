//! Backend-neutral service traits and errors.
//!
//! Route and service code depends on these traits only, so the hosted
//! backend can be swapped for an in-memory store in tests.

use records::{
    Campaign, Injectable, InjectableFields, NewCampaign, NewInjectable, NewWhitelistDomain, Uuid, WhitelistDomain,
};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the hosted backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// A required environment variable is not set.
    #[error("missing config: env var {var} not set")]
    MissingVar { var: String },

    /// The HTTP request could not be sent or its body could not be read.
    #[error("backend request failed: {0}")]
    ApiRequest(String),

    /// The backend answered with a non-success HTTP status.
    #[error("backend response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The backend response body could not be deserialized.
    #[error("backend response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl BackendError {
    /// Human-readable reason suitable for showing to an operator.
    ///
    /// For error responses the backend's own `message` (or `error`) field is
    /// preferred over the raw body.
    #[must_use]
    pub fn reason(&self) -> String {
        match self {
            Self::ApiResponse { status, body } => {
                response_message(body).unwrap_or_else(|| format!("status {status}"))
            }
            other => other.to_string(),
        }
    }
}

/// Pull `message` (or `error`) out of a JSON error body. Falls back to the
/// trimmed body text when it is not JSON.
pub(crate) fn response_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Ok(value) = serde_json::from_str::<serde_json::Value>(trimmed) else {
        return Some(trimmed.to_owned());
    };
    ["message", "error"]
        .iter()
        .find_map(|field| value.get(*field).and_then(serde_json::Value::as_str))
        .map(str::to_owned)
        .or_else(|| Some(trimmed.to_owned()))
}

// =============================================================================
// TRAITS
// =============================================================================

/// Table operations against `campaigns`, `injectables`, and `whitelist_domains`.
///
/// Every method is exactly one backend round trip.
#[async_trait::async_trait]
pub trait DataService: Send + Sync {
    /// All campaigns, newest first.
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, BackendError>;

    async fn get_campaign(&self, id: Uuid) -> Result<Option<Campaign>, BackendError>;

    async fn insert_campaign(&self, row: &NewCampaign) -> Result<Campaign, BackendError>;

    async fn delete_campaign(&self, id: Uuid) -> Result<(), BackendError>;

    /// Injectables of one campaign, oldest first.
    async fn list_injectables(&self, campaign_id: Uuid) -> Result<Vec<Injectable>, BackendError>;

    async fn insert_injectable(&self, row: &NewInjectable) -> Result<Injectable, BackendError>;

    /// Overwrite key/type/value of one row. `None` when no row has that id.
    async fn update_injectable(
        &self,
        id: Uuid,
        fields: &InjectableFields,
    ) -> Result<Option<Injectable>, BackendError>;

    async fn delete_injectable(&self, id: Uuid) -> Result<(), BackendError>;

    async fn list_domains(&self, campaign_id: Uuid) -> Result<Vec<WhitelistDomain>, BackendError>;

    async fn insert_domain(&self, row: &NewWhitelistDomain) -> Result<WhitelistDomain, BackendError>;

    async fn delete_domain(&self, id: Uuid) -> Result<(), BackendError>;
}

/// Object storage for uploaded images.
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `bytes` at `path`, replacing any existing object.
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: Option<&str>) -> Result<(), BackendError>;

    /// Publicly retrievable URL for the object at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be assembled.
    fn public_url(&self, path: &str) -> Result<String, BackendError>;
}

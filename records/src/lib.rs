//! Shared record model for the campaign console.
//!
//! This crate owns the row shapes used by both the service and the browser
//! client: campaigns, injectables, and whitelist domains, plus the insert and
//! update payloads sent over the console API. Column names match the hosted
//! tables (`campaigns`, `injectables`, `whitelist_domains`) so rows pass
//! through the service without remapping.
//!
//! VALIDATION
//! ==========
//! Key-format validation lives here so the add form, the edit form, and the
//! service all apply the same predicate.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub use uuid::Uuid;

/// Pattern an injectable key must match in full.
pub const KEY_PATTERN: &str = r"^[A-Za-z0-9_-]+$";

static KEY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(KEY_PATTERN).expect("valid key regex"));

/// Returns `true` when `key` is non-empty and consists only of ASCII letters,
/// digits, `-`, and `_`.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    KEY_RE.is_match(key)
}

// =============================================================================
// ERRORS
// =============================================================================

/// Rejection reasons for console payloads.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("campaign name must not be blank")]
    BlankName,
    #[error("invalid injectable key: {0:?}")]
    InvalidKey(String),
    #[error("injectable value must not be empty")]
    EmptyValue,
    #[error("domain must not be blank")]
    BlankDomain,
}

// =============================================================================
// INJECTABLE KIND
// =============================================================================

/// What an injectable's `value` holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InjectableKind {
    /// Literal text.
    Text,
    /// Public URL of an uploaded image.
    Image,
}

impl InjectableKind {
    pub const ALL: [Self; 2] = [Self::Text, Self::Image];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }

    /// Parse the wire name (`"text"` / `"image"`).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "text" => Some(Self::Text),
            "image" => Some(Self::Image),
            _ => None,
        }
    }
}

// =============================================================================
// ROWS
// =============================================================================

/// A row of the `campaigns` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: Uuid,
    pub name: String,
    pub created_at: String,
}

/// A row of the `injectables` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Injectable {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: InjectableKind,
    pub value: String,
    pub created_at: String,
}

/// A row of the `whitelist_domains` table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistDomain {
    pub id: Uuid,
    pub campaign_id: Uuid,
    pub domain: String,
}

// =============================================================================
// PAYLOADS
// =============================================================================

/// Insert payload for `campaigns`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCampaign {
    pub name: String,
}

impl NewCampaign {
    /// Build a payload from user input, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankName`] if nothing remains after trimming.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(Self { name: name.to_owned() })
    }
}

/// Key, type, and value of an injectable as submitted by the add and edit
/// forms. Used as the body of both create and update calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InjectableFields {
    pub key: String,
    #[serde(rename = "type")]
    pub kind: InjectableKind,
    pub value: String,
}

impl InjectableFields {
    /// Check the key format and that a value is present.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidKey`] or [`ValidationError::EmptyValue`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_valid_key(&self.key) {
            return Err(ValidationError::InvalidKey(self.key.clone()));
        }
        if self.value.is_empty() {
            return Err(ValidationError::EmptyValue);
        }
        Ok(())
    }
}

/// Insert payload for `injectables`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInjectable {
    pub campaign_id: Uuid,
    pub key: String,
    #[serde(rename = "type")]
    pub kind: InjectableKind,
    pub value: String,
}

impl NewInjectable {
    /// Attach validated form fields to a campaign.
    ///
    /// # Errors
    ///
    /// Propagates [`InjectableFields::validate`] failures.
    pub fn new(campaign_id: Uuid, fields: InjectableFields) -> Result<Self, ValidationError> {
        fields.validate()?;
        Ok(Self { campaign_id, key: fields.key, kind: fields.kind, value: fields.value })
    }
}

/// Insert payload for `whitelist_domains`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWhitelistDomain {
    pub campaign_id: Uuid,
    pub domain: String,
}

impl NewWhitelistDomain {
    /// Build a payload, trimming the domain. Any non-blank string is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BlankDomain`] if nothing remains after trimming.
    pub fn new(campaign_id: Uuid, domain: &str) -> Result<Self, ValidationError> {
        let domain = domain.trim();
        if domain.is_empty() {
            return Err(ValidationError::BlankDomain);
        }
        Ok(Self { campaign_id, domain: domain.to_owned() })
    }
}

/// Body of `POST /api/campaigns/{id}/domains`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainBody {
    pub domain: String,
}

/// Response of an image upload: the public URL of the stored object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

/// Error body returned by the console API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;

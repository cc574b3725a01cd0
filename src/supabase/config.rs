//! Backend connection settings parsed from environment variables.

use super::types::BackendError;

pub const DEFAULT_IMAGES_BUCKET: &str = "images";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackendTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project base URL without a trailing slash.
    pub url: String,
    pub api_key: String,
    pub images_bucket: String,
    pub timeouts: BackendTimeouts,
}

impl SupabaseConfig {
    /// Build typed backend config from environment variables.
    ///
    /// Required:
    /// - `SUPABASE_URL`: project base URL (`https://<ref>.supabase.co`)
    /// - `SUPABASE_KEY`: API key sent as `apikey` and bearer token
    ///
    /// Optional:
    /// - `SUPABASE_IMAGES_BUCKET`: default `images`
    /// - `SUPABASE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `SUPABASE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or the URL is not
    /// an absolute `http(s)` URL.
    pub fn from_env() -> Result<Self, BackendError> {
        let url = required("SUPABASE_URL")?;
        let url = parse_base_url(&url)?;
        let api_key = required("SUPABASE_KEY")?;
        let images_bucket = std::env::var("SUPABASE_IMAGES_BUCKET")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGES_BUCKET.to_owned());
        let timeouts = BackendTimeouts {
            request_secs: env_parse_u64("SUPABASE_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("SUPABASE_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { url, api_key, images_bucket, timeouts })
    }
}

fn required(var: &str) -> Result<String, BackendError> {
    std::env::var(var)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| BackendError::MissingVar { var: var.to_owned() })
}

fn parse_base_url(raw: &str) -> Result<String, BackendError> {
    let parsed =
        reqwest::Url::parse(raw).map_err(|e| BackendError::ConfigParse(format!("invalid SUPABASE_URL '{raw}': {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(BackendError::ConfigParse(format!("SUPABASE_URL must be http(s), got '{raw}'")));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

pub(crate) fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

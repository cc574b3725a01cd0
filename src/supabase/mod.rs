//! Supabase adapter: PostgREST tables plus object storage.
//!
//! DESIGN
//! ======
//! The console does not own any persistence. `SupabaseClient` turns each
//! `DataService` / `ObjectStore` call into exactly one HTTP request against
//! the hosted project and deserializes the rows it returns. There is no
//! caching and no retry; failures surface as `BackendError` and are reported
//! by the caller.
//!
//! Inserts and updates ask for `Prefer: return=representation` so the created
//! or updated row comes back in the same round trip.

pub mod config;
#[cfg(test)]
pub mod memory;
pub mod query;
pub mod storage;
pub mod types;

use std::time::Duration;

use records::{
    Campaign, Injectable, InjectableFields, NewCampaign, NewInjectable, NewWhitelistDomain, Uuid, WhitelistDomain,
};
use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use config::SupabaseConfig;
use query::{Order, TableQuery};
pub use types::{BackendError, DataService, ObjectStore};

const CAMPAIGNS: &str = "campaigns";
const INJECTABLES: &str = "injectables";
const WHITELIST_DOMAINS: &str = "whitelist_domains";

/// HTTP client for one Supabase project.
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    bucket: String,
}

impl SupabaseClient {
    /// Build a client from environment variables. See [`SupabaseConfig::from_env`].
    ///
    /// # Errors
    ///
    /// Returns an error if required variables are missing or the HTTP client fails.
    pub fn from_env() -> Result<Self, BackendError> {
        Self::new(SupabaseConfig::from_env()?)
    }

    /// Build a client from a parsed config.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: SupabaseConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.url, api_key: config.api_key, bucket: config.images_bucket })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn select<T: DeserializeOwned>(&self, query: &TableQuery) -> Result<Vec<T>, BackendError> {
        let builder = self
            .http
            .get(self.rest_url(query.table()))
            .query(&query.pairs());
        let text = self.send(builder).await?;
        parse_rows(&text)
    }

    async fn insert<B: Serialize + Sync, T: DeserializeOwned>(&self, table: &str, row: &B) -> Result<T, BackendError> {
        let builder = self
            .http
            .post(self.rest_url(table))
            .header("Prefer", "return=representation")
            .json(&[row]);
        let text = self.send(builder).await?;
        parse_rows::<T>(&text)?
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::ApiParse(format!("insert into {table} returned no rows")))
    }

    async fn update<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        query: &TableQuery,
        body: &B,
    ) -> Result<Option<T>, BackendError> {
        let builder = self
            .http
            .patch(self.rest_url(query.table()))
            .query(&query.pairs())
            .header("Prefer", "return=representation")
            .json(body);
        let text = self.send(builder).await?;
        Ok(parse_rows::<T>(&text)?.into_iter().next())
    }

    async fn delete(&self, query: &TableQuery) -> Result<(), BackendError> {
        let builder = self
            .http
            .delete(self.rest_url(query.table()))
            .query(&query.pairs());
        self.send(builder).await.map(|_| ())
    }

    async fn send(&self, builder: RequestBuilder) -> Result<String, BackendError> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(|e| BackendError::ApiRequest(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| BackendError::ApiRequest(e.to_string()))?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %text, "backend returned error status");
            return Err(BackendError::ApiResponse { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

/// Parse a PostgREST array response. An empty body counts as no rows.
fn parse_rows<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, BackendError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).map_err(|e| BackendError::ApiParse(e.to_string()))
}

#[async_trait::async_trait]
impl DataService for SupabaseClient {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, BackendError> {
        self.select(&TableQuery::select(CAMPAIGNS).order("created_at", Order::Desc))
            .await
    }

    async fn get_campaign(&self, id: Uuid) -> Result<Option<Campaign>, BackendError> {
        let rows: Vec<Campaign> = self
            .select(&TableQuery::select(CAMPAIGNS).eq("id", id).limit(1))
            .await?;
        Ok(rows.into_iter().next())
    }

    async fn insert_campaign(&self, row: &NewCampaign) -> Result<Campaign, BackendError> {
        self.insert(CAMPAIGNS, row).await
    }

    async fn delete_campaign(&self, id: Uuid) -> Result<(), BackendError> {
        self.delete(&TableQuery::on(CAMPAIGNS).eq("id", id)).await
    }

    async fn list_injectables(&self, campaign_id: Uuid) -> Result<Vec<Injectable>, BackendError> {
        self.select(
            &TableQuery::select(INJECTABLES)
                .eq("campaign_id", campaign_id)
                .order("created_at", Order::Asc),
        )
        .await
    }

    async fn insert_injectable(&self, row: &NewInjectable) -> Result<Injectable, BackendError> {
        self.insert(INJECTABLES, row).await
    }

    async fn update_injectable(
        &self,
        id: Uuid,
        fields: &InjectableFields,
    ) -> Result<Option<Injectable>, BackendError> {
        self.update(&TableQuery::on(INJECTABLES).eq("id", id), fields)
            .await
    }

    async fn delete_injectable(&self, id: Uuid) -> Result<(), BackendError> {
        self.delete(&TableQuery::on(INJECTABLES).eq("id", id)).await
    }

    async fn list_domains(&self, campaign_id: Uuid) -> Result<Vec<WhitelistDomain>, BackendError> {
        self.select(&TableQuery::select(WHITELIST_DOMAINS).eq("campaign_id", campaign_id))
            .await
    }

    async fn insert_domain(&self, row: &NewWhitelistDomain) -> Result<WhitelistDomain, BackendError> {
        self.insert(WHITELIST_DOMAINS, row).await
    }

    async fn delete_domain(&self, id: Uuid) -> Result<(), BackendError> {
        self.delete(&TableQuery::on(WHITELIST_DOMAINS).eq("id", id))
            .await
    }
}

#[async_trait::async_trait]
impl ObjectStore for SupabaseClient {
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: Option<&str>) -> Result<(), BackendError> {
        let url = storage::upload_url(&self.base_url, &self.bucket, path)?;
        let builder = self
            .http
            .post(url)
            .header("x-upsert", "true")
            .header(
                reqwest::header::CONTENT_TYPE,
                content_type.unwrap_or("application/octet-stream"),
            )
            .body(bytes);
        self.send(builder).await.map(|_| ())
    }

    fn public_url(&self, path: &str) -> Result<String, BackendError> {
        storage::public_url(&self.base_url, &self.bucket, path).map(String::from)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

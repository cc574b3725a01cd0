//! In-memory backend used by service and route tests.
//!
//! Rows get sequential `created_at` stamps so ordering is deterministic.
//! `fail_writes` / `fail_uploads` switch the matching operations to return an
//! `ApiResponse` error without touching stored rows.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use records::{
    Campaign, Injectable, InjectableFields, NewCampaign, NewInjectable, NewWhitelistDomain, Uuid, WhitelistDomain,
};

use super::types::{BackendError, DataService, ObjectStore};

#[derive(Default)]
struct Tables {
    campaigns: Vec<Campaign>,
    injectables: Vec<Injectable>,
    domains: Vec<WhitelistDomain>,
}

#[derive(Default)]
pub struct MemoryBackend {
    tables: Mutex<Tables>,
    objects: Mutex<Vec<(String, Vec<u8>, Option<String>)>>,
    clock: AtomicU64,
    pub fail_writes: AtomicBool,
    pub fail_uploads: AtomicBool,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(&self) -> String {
        let tick = self.clock.fetch_add(1, Ordering::Relaxed);
        format!("2025-01-01T00:00:00.{tick:06}+00:00")
    }

    fn check_write(&self) -> Result<(), BackendError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(BackendError::ApiResponse { status: 500, body: r#"{"message":"write rejected"}"#.into() });
        }
        Ok(())
    }

    /// Paths of stored objects in upload order.
    pub fn object_paths(&self) -> Vec<String> {
        self.objects
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _, _)| path.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl DataService for MemoryBackend {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, BackendError> {
        let mut rows = self.tables.lock().unwrap().campaigns.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn get_campaign(&self, id: Uuid) -> Result<Option<Campaign>, BackendError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .campaigns
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn insert_campaign(&self, row: &NewCampaign) -> Result<Campaign, BackendError> {
        self.check_write()?;
        let campaign = Campaign { id: Uuid::new_v4(), name: row.name.clone(), created_at: self.stamp() };
        self.tables.lock().unwrap().campaigns.push(campaign.clone());
        Ok(campaign)
    }

    async fn delete_campaign(&self, id: Uuid) -> Result<(), BackendError> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        tables.campaigns.retain(|c| c.id != id);
        tables.injectables.retain(|i| i.campaign_id != id);
        tables.domains.retain(|d| d.campaign_id != id);
        Ok(())
    }

    async fn list_injectables(&self, campaign_id: Uuid) -> Result<Vec<Injectable>, BackendError> {
        let mut rows: Vec<Injectable> = self
            .tables
            .lock()
            .unwrap()
            .injectables
            .iter()
            .filter(|i| i.campaign_id == campaign_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(rows)
    }

    async fn insert_injectable(&self, row: &NewInjectable) -> Result<Injectable, BackendError> {
        self.check_write()?;
        let injectable = Injectable {
            id: Uuid::new_v4(),
            campaign_id: row.campaign_id,
            key: row.key.clone(),
            kind: row.kind,
            value: row.value.clone(),
            created_at: self.stamp(),
        };
        self.tables.lock().unwrap().injectables.push(injectable.clone());
        Ok(injectable)
    }

    async fn update_injectable(
        &self,
        id: Uuid,
        fields: &InjectableFields,
    ) -> Result<Option<Injectable>, BackendError> {
        self.check_write()?;
        let mut tables = self.tables.lock().unwrap();
        let Some(row) = tables.injectables.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        row.key.clone_from(&fields.key);
        row.kind = fields.kind;
        row.value.clone_from(&fields.value);
        Ok(Some(row.clone()))
    }

    async fn delete_injectable(&self, id: Uuid) -> Result<(), BackendError> {
        self.check_write()?;
        self.tables.lock().unwrap().injectables.retain(|i| i.id != id);
        Ok(())
    }

    async fn list_domains(&self, campaign_id: Uuid) -> Result<Vec<WhitelistDomain>, BackendError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .domains
            .iter()
            .filter(|d| d.campaign_id == campaign_id)
            .cloned()
            .collect())
    }

    async fn insert_domain(&self, row: &NewWhitelistDomain) -> Result<WhitelistDomain, BackendError> {
        self.check_write()?;
        let domain = WhitelistDomain { id: Uuid::new_v4(), campaign_id: row.campaign_id, domain: row.domain.clone() };
        self.tables.lock().unwrap().domains.push(domain.clone());
        Ok(domain)
    }

    async fn delete_domain(&self, id: Uuid) -> Result<(), BackendError> {
        self.check_write()?;
        self.tables.lock().unwrap().domains.retain(|d| d.id != id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl ObjectStore for MemoryBackend {
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: Option<&str>) -> Result<(), BackendError> {
        if self.fail_uploads.load(Ordering::Relaxed) {
            return Err(BackendError::ApiResponse {
                status: 400,
                body: r#"{"statusCode":"400","error":"InvalidRequest","message":"mime type not supported"}"#.into(),
            });
        }
        let mut objects = self.objects.lock().unwrap();
        objects.retain(|(existing, _, _)| existing != path);
        objects.push((path.to_owned(), bytes, content_type.map(str::to_owned)));
        Ok(())
    }

    fn public_url(&self, path: &str) -> Result<String, BackendError> {
        super::storage::public_url("https://memory.test", "images", path).map(String::from)
    }
}

use std::sync::atomic::Ordering;

use super::*;
use crate::supabase::memory::MemoryBackend;
use records::ValidationError;

#[tokio::test]
async fn add_then_delete_empties_panel() {
    let data = MemoryBackend::new();
    let campaign = Uuid::from_u128(0xC1);

    let row = add_domain(&data, campaign, "example.com").await.unwrap();
    let rows = list_domains(&data, campaign).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].domain, "example.com");

    delete_domain(&data, row.id).await.unwrap();
    assert!(list_domains(&data, campaign).await.unwrap().is_empty());
}

#[tokio::test]
async fn add_trims_input_and_skips_format_checks() {
    let data = MemoryBackend::new();
    let campaign = Uuid::from_u128(0xC1);
    let row = add_domain(&data, campaign, "  *.shop.example  ").await.unwrap();
    assert_eq!(row.domain, "*.shop.example");
}

#[tokio::test]
async fn blank_domain_is_rejected() {
    let data = MemoryBackend::new();
    let err = add_domain(&data, Uuid::from_u128(1), "  ").await.unwrap_err();
    assert!(matches!(err, ServiceError::Invalid(ValidationError::BlankDomain)));
}

#[tokio::test]
async fn failed_insert_persists_nothing() {
    let data = MemoryBackend::new();
    let campaign = Uuid::from_u128(0xC1);
    data.fail_writes.store(true, Ordering::Relaxed);

    assert!(add_domain(&data, campaign, "example.com").await.is_err());
    assert!(list_domains(&data, campaign).await.unwrap().is_empty());
}

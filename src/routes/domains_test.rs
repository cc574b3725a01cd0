use std::sync::atomic::Ordering;

use super::*;
use crate::state::test_helpers::test_app_state;

fn body(domain: &str) -> Json<DomainBody> {
    Json(DomainBody { domain: domain.to_owned() })
}

#[tokio::test]
async fn add_trims_and_lists_domain() {
    let (state, _backend) = test_app_state();
    let campaign_id = Uuid::from_u128(0xC1);

    let (status, Json(row)) = add_domain(State(state.clone()), Path(campaign_id), body("  example.com ")).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(row.domain, "example.com");

    let Json(rows) = list_domains(State(state), Path(campaign_id)).await.unwrap();
    assert_eq!(rows, vec![row]);
}

#[tokio::test]
async fn domains_are_scoped_to_their_campaign() {
    let (state, _backend) = test_app_state();
    add_domain(State(state.clone()), Path(Uuid::from_u128(1)), body("a.test")).await.unwrap();
    add_domain(State(state.clone()), Path(Uuid::from_u128(2)), body("b.test")).await.unwrap();

    let Json(rows) = list_domains(State(state), Path(Uuid::from_u128(2))).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].domain, "b.test");
}

#[tokio::test]
async fn blank_domain_is_bad_request() {
    let (state, _backend) = test_app_state();
    let err = add_domain(State(state), Path(Uuid::from_u128(1)), body("   ")).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn rejected_insert_is_bad_gateway() {
    let (state, backend) = test_app_state();
    backend.fail_writes.store(true, Ordering::Relaxed);
    let err = add_domain(State(state), Path(Uuid::from_u128(1)), body("example.com")).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn delete_removes_row() {
    let (state, _backend) = test_app_state();
    let campaign_id = Uuid::from_u128(0xC1);
    let (_, Json(row)) = add_domain(State(state.clone()), Path(campaign_id), body("example.com")).await.unwrap();

    let status = delete_domain(State(state.clone()), Path(row.id)).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);

    let Json(rows) = list_domains(State(state), Path(campaign_id)).await.unwrap();
    assert!(rows.is_empty());
}

use std::sync::atomic::Ordering;

use super::*;
use crate::state::test_helpers::test_app_state;

fn name(raw: &str) -> Json<NewCampaign> {
    Json(NewCampaign { name: raw.to_owned() })
}

#[tokio::test]
async fn create_returns_created_row() {
    let (state, _backend) = test_app_state();
    let (status, Json(row)) = create_campaign(State(state.clone()), name("Spring Promo")).await.unwrap();
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(row.name, "Spring Promo");

    let Json(rows) = list_campaigns(State(state)).await.unwrap();
    assert_eq!(rows, vec![row]);
}

#[tokio::test]
async fn create_blank_name_is_bad_request() {
    let (state, _backend) = test_app_state();
    let err = create_campaign(State(state), name("   ")).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_backend_failure_is_bad_gateway() {
    let (state, backend) = test_app_state();
    backend.fail_writes.store(true, Ordering::Relaxed);
    let err = create_campaign(State(state), name("Spring Promo")).await.unwrap_err();
    assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    assert_eq!(err.message, "write rejected");
}

#[tokio::test]
async fn get_and_delete_round_trip() {
    let (state, _backend) = test_app_state();
    let (_, Json(row)) = create_campaign(State(state.clone()), name("Spring Promo")).await.unwrap();

    let Json(fetched) = get_campaign(State(state.clone()), Path(row.id)).await.unwrap();
    assert_eq!(fetched.id, row.id);

    let status = delete_campaign(State(state.clone()), Path(row.id)).await.unwrap();
    assert_eq!(status, StatusCode::NO_CONTENT);

    let err = get_campaign(State(state), Path(row.id)).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

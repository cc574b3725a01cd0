use super::*;
use super::config::BackendTimeouts;
use super::types::response_message;

fn test_client() -> SupabaseClient {
    SupabaseClient::new(SupabaseConfig {
        url: "https://demo.supabase.co".into(),
        api_key: "anon".into(),
        images_bucket: "images".into(),
        timeouts: BackendTimeouts { request_secs: 5, connect_secs: 1 },
    })
    .unwrap()
}

#[test]
fn rest_url_joins_table() {
    let client = test_client();
    assert_eq!(client.rest_url("campaigns"), "https://demo.supabase.co/rest/v1/campaigns");
    assert_eq!(client.bucket(), "images");
    assert_eq!(client.base_url(), "https://demo.supabase.co");
}

#[test]
fn public_url_points_at_public_bucket() {
    let client = test_client();
    let url = client.public_url("c1/1700_banner.png").unwrap();
    assert_eq!(url, "https://demo.supabase.co/storage/v1/object/public/images/c1/1700_banner.png");
}

#[test]
fn parse_rows_reads_campaign_array() {
    let text = r#"[{"id":"00000000-0000-0000-0000-000000000001","name":"Spring Promo","created_at":"2025-03-01T10:00:00+00:00"}]"#;
    let rows: Vec<Campaign> = parse_rows(text).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Spring Promo");
}

#[test]
fn parse_rows_treats_empty_body_as_no_rows() {
    let rows: Vec<Campaign> = parse_rows("  ").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn parse_rows_rejects_unknown_injectable_type() {
    let text = r#"[{"id":"00000000-0000-0000-0000-000000000001","campaign_id":"00000000-0000-0000-0000-000000000002","key":"k","type":"video","value":"v","created_at":"t"}]"#;
    let err = parse_rows::<Injectable>(text).unwrap_err();
    assert!(matches!(err, BackendError::ApiParse(_)));
}

#[test]
fn response_message_prefers_message_field() {
    let body = r#"{"statusCode":"413","error":"Payload too large","message":"The object exceeded the maximum allowed size"}"#;
    assert_eq!(response_message(body).as_deref(), Some("The object exceeded the maximum allowed size"));
}

#[test]
fn response_message_falls_back_to_error_then_raw_text() {
    assert_eq!(response_message(r#"{"error":"Bucket not found"}"#).as_deref(), Some("Bucket not found"));
    assert_eq!(response_message("gateway timeout").as_deref(), Some("gateway timeout"));
    assert_eq!(response_message(""), None);
}

#[test]
fn reason_uses_backend_message_or_status() {
    let err = BackendError::ApiResponse { status: 400, body: r#"{"message":"mime type not allowed"}"#.into() };
    assert_eq!(err.reason(), "mime type not allowed");

    let err = BackendError::ApiResponse { status: 503, body: String::new() };
    assert_eq!(err.reason(), "status 503");

    let err = BackendError::ApiRequest("connection refused".into());
    assert_eq!(err.reason(), "backend request failed: connection refused");
}

use super::*;

const BASE: &str = "https://demo.supabase.co";

#[test]
fn upload_url_targets_bucket_and_path() {
    let url = upload_url(BASE, "images", "c1/1700000000000_banner.png").unwrap();
    assert_eq!(url.as_str(), "https://demo.supabase.co/storage/v1/object/images/c1/1700000000000_banner.png");
}

#[test]
fn public_url_uses_public_prefix() {
    let url = public_url(BASE, "images", "c1/1_banner.png").unwrap();
    assert_eq!(url.as_str(), "https://demo.supabase.co/storage/v1/object/public/images/c1/1_banner.png");
}

#[test]
fn segments_are_percent_encoded() {
    let url = public_url(BASE, "images", "c1/1_summer sale#2.png").unwrap();
    assert_eq!(url.as_str(), "https://demo.supabase.co/storage/v1/object/public/images/c1/1_summer%20sale%232.png");
}

#[test]
fn base_with_path_prefix_is_preserved() {
    let url = upload_url("http://localhost:8000/supabase", "images", "a/b.png").unwrap();
    assert_eq!(url.as_str(), "http://localhost:8000/supabase/storage/v1/object/images/a/b.png");
}

#[test]
fn invalid_base_is_a_config_error() {
    assert!(matches!(upload_url("::nope::", "images", "a.png"), Err(BackendError::ConfigParse(_))));
}

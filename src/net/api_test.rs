use crate::config::AppConfig;

use super::*;

fn client(base: &str) -> ApiClient {
    ApiClient::new(&AppConfig {
        api_base: base.to_owned(),
    })
}

// =============================================================
// Endpoint construction
// =============================================================

#[test]
fn endpoint_joins_base_and_path() {
    assert_eq!(client("/api").endpoint("current_crew"), "/api/current_crew");
}

#[test]
fn endpoint_trims_trailing_slash_from_base() {
    assert_eq!(client("/api/").endpoint("profit"), "/api/profit");
}

#[test]
fn endpoint_supports_absolute_bases() {
    assert_eq!(
        client("https://assist.example/api").endpoint("search/ships/Caterpillar"),
        "https://assist.example/api/search/ships/Caterpillar"
    );
}

// =============================================================
// Error display
// =============================================================

#[test]
fn status_error_names_path_and_code() {
    let err = ApiError::Status {
        path: "discord".to_owned(),
        status: 502,
    };
    assert_eq!(err.to_string(), "server returned 502 for /discord");
}

#[test]
fn payload_error_wraps_serde_json() {
    let inner = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err = ApiError::from(inner);
    assert!(err.to_string().starts_with("invalid box payload:"));
}

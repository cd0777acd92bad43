use super::*;
use crate::error::Error;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;
use std::time::Duration;

fn test_client() -> HttpClient {
    HttpClient::new(ClientConfig::new("https://api.example.test", "k1")).unwrap()
}

#[test]
fn test_client_creation() {
    let client = HttpClient::new(ClientConfig::new("https://api.example.test", "k1"));
    assert!(client.is_ok());
}

#[test]
fn test_client_creation_rejects_invalid_base_url() {
    let result = HttpClient::new(ClientConfig::new("not a url", "k1"));
    assert!(matches!(result, Err(Error::InvalidRequest(_))));
}

#[test]
fn test_config_defaults() {
    let config = ClientConfig::new("https://api.example.test", "k1");
    assert_eq!(config.timeout, Duration::from_millis(30_000));
    assert!(config.default_headers.is_empty());
    assert!(config.user_agent.starts_with("paywise-rs/"));
}

#[test]
fn test_config_validate() {
    assert!(ClientConfig::new("https://api.example.test", "k1")
        .validate()
        .is_ok());
    assert!(ClientConfig::new("", "k1").validate().is_err());
    assert!(ClientConfig::new("https://api.example.test", "")
        .validate()
        .is_err());
    assert!(ClientConfig::new("https://api.example.test", "k1")
        .with_timeout(Duration::ZERO)
        .validate()
        .is_err());
}

#[test]
fn test_build_url_plain_path() {
    let client = test_client();
    let url = client.build_url("/v1/claims/", None).unwrap();
    assert_eq!(url.as_str(), "https://api.example.test/v1/claims/");
}

#[test]
fn test_build_url_appends_present_params_in_insertion_order() {
    let client = test_client();
    let params = QueryParams::new()
        .with("b", 2)
        .with("a", 1)
        .with("flag", true);
    let url = client.build_url("/v1/claims/", Some(&params)).unwrap();
    assert_eq!(url.query(), Some("b=2&a=1&flag=true"));
}

#[test]
fn test_build_url_drops_absent_params_entirely() {
    let client = test_client();
    let params = QueryParams::new()
        .with("limit", 10)
        .with_opt("offset", None::<u32>)
        .with_opt("status", Some("open"));
    let url = client.build_url("/v1/claims/", Some(&params)).unwrap();
    let query = url.query().unwrap();
    assert_eq!(query, "limit=10&status=open");
    assert!(!query.contains("offset"));
}

#[test]
fn test_build_url_all_params_absent_leaves_no_query() {
    let client = test_client();
    let params = QueryParams::new()
        .with_opt("a", None::<u32>)
        .with_opt("b", None::<String>);
    let url = client.build_url("/v1/claims/", Some(&params)).unwrap();
    assert_eq!(url.query(), None);
    assert_eq!(url.as_str(), "https://api.example.test/v1/claims/");
}

#[test]
fn test_build_url_encodes_values() {
    let client = test_client();
    let params = QueryParams::new().with("q", "a b&c");
    let url = client.build_url("/v1/claims/", Some(&params)).unwrap();
    assert_eq!(url.query(), Some("q=a+b%26c"));
}

#[test]
fn test_default_headers_contain_json_content_type_and_bearer_auth() {
    let client = test_client();
    let headers = super::headers::build_headers(client.config(), None, true).unwrap();
    assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer k1");
    assert!(headers.get(AUTHORIZATION).unwrap().is_sensitive());
}

#[test]
fn test_configured_headers_override_builtins() {
    let config = ClientConfig::new("https://api.example.test", "k1")
        .with_header("X-Partner-Id", "p-42")
        .with_header("Content-Type", "application/vnd.paywise+json");
    let headers = super::headers::build_headers(&config, None, true).unwrap();
    assert_eq!(headers.get("X-Partner-Id").unwrap(), "p-42");
    assert_eq!(
        headers.get(CONTENT_TYPE).unwrap(),
        "application/vnd.paywise+json"
    );
}

#[test]
fn test_per_call_headers_override_everything() {
    let config =
        ClientConfig::new("https://api.example.test", "k1").with_header("X-Partner-Id", "p-42");
    let mut extra = HeaderMap::new();
    extra.insert(AUTHORIZATION, HeaderValue::from_static("Bearer other"));
    extra.insert("X-Partner-Id", HeaderValue::from_static("p-99"));
    let headers = super::headers::build_headers(&config, Some(&extra), true).unwrap();
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer other");
    assert_eq!(headers.get("X-Partner-Id").unwrap(), "p-99");
}

#[test]
fn test_no_json_content_type_for_multipart_payloads() {
    let client = test_client();
    let headers = super::headers::build_headers(client.config(), None, false).unwrap();
    assert!(headers.get(CONTENT_TYPE).is_none());
    assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer k1");
}

#[test]
fn test_invalid_default_header_is_rejected() {
    let config =
        ClientConfig::new("https://api.example.test", "k1").with_header("bad name", "value");
    let result = super::headers::build_headers(&config, None, true);
    assert!(matches!(result, Err(Error::InvalidRequest(_))));
}

#[test]
fn test_request_body_json() {
    let body = RequestBody::json(&serde_json::json!({"a": 1})).unwrap();
    match body {
        RequestBody::Json(value) => assert_eq!(value["a"], 1),
        other => panic!("expected JSON body, got {other:?}"),
    }
}

#[test]
fn test_normalize_error_prefers_message_field() {
    let err = super::response::normalize_error(
        StatusCode::NOT_FOUND,
        "Not Found",
        serde_json::json!({"message": "not found", "code": "NOT_FOUND"}),
    );
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.code(), Some("NOT_FOUND"));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_normalize_error_uses_text_body_verbatim() {
    let err = super::response::normalize_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        serde_json::Value::String("upstream exploded".to_string()),
    );
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.code(), None);
    assert!(err.to_string().contains("upstream exploded"));
}

#[test]
fn test_normalize_error_falls_back_to_status_text() {
    let err = super::response::normalize_error(
        StatusCode::BAD_GATEWAY,
        "Bad Gateway",
        serde_json::json!({"unexpected": true}),
    );
    assert!(err.to_string().contains("Bad Gateway"));
    // Non-string code fields are ignored.
    let err = super::response::normalize_error(
        StatusCode::BAD_REQUEST,
        "Bad Request",
        serde_json::json!({"message": "nope", "code": 42}),
    );
    assert_eq!(err.code(), None);
}

#[test]
fn test_normalize_error_keeps_full_body_as_details() {
    let body = serde_json::json!({"message": "nope", "fields": ["a", "b"]});
    let err = super::response::normalize_error(StatusCode::BAD_REQUEST, "Bad Request", body.clone());
    assert_eq!(err.details(), Some(&body));
}

#[test]
fn test_api_response_json_typed_decode() {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Listing {
        count: u64,
        results: Vec<String>,
    }

    let response = ApiResponse {
        data: serde_json::json!({"count": 2, "results": ["a", "b"]}),
        status: 200,
        status_text: "OK".to_string(),
        headers: std::collections::HashMap::new(),
    };
    let listing: Listing = response.json().unwrap();
    assert_eq!(listing.count, 2);
    assert_eq!(listing.results, vec!["a", "b"]);
}

#[test]
fn test_api_response_json_mismatch_is_parse_error() {
    let response = ApiResponse {
        data: serde_json::json!({"count": "two"}),
        status: 200,
        status_text: "OK".to_string(),
        headers: std::collections::HashMap::new(),
    };
    let result: crate::error::Result<std::collections::HashMap<String, u64>> = response.json();
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_query_params_len_and_is_empty() {
    let mut params = QueryParams::new();
    assert!(params.is_empty());
    params.push("a", 1);
    params.push_opt("b", None::<u32>);
    assert_eq!(params.len(), 2);
    assert!(!params.is_empty());
}

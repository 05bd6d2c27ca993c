use ibc_client::error::AppError;
use ibc_client::model::responses::HttpErrorRecord;
use serde_json::json;
use std::collections::BTreeMap;
use std::error::Error;

fn record(status_code: u16) -> HttpErrorRecord {
    HttpErrorRecord {
        status_code,
        url: "https://ibgw:5000/v1/api/iserver/account/orders".to_string(),
        response_body: json!({"error": "boom"}),
        request_headers: BTreeMap::new(),
        request_method: "GET".to_string(),
    }
}

#[test]
fn test_app_error_display_http() {
    let error = AppError::from(record(503));
    assert_eq!(
        error.to_string(),
        "http error 503 for https://ibgw:5000/v1/api/iserver/account/orders"
    );
    assert_eq!(error.status_code(), Some(503));
    assert_eq!(error.record().unwrap().response_body, json!({"error": "boom"}));
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("unknown field".to_string());
    assert_eq!(error.to_string(), "invalid input: unknown field");
    assert_eq!(error.status_code(), None);
    assert!(error.record().is_none());
}

#[test]
fn test_app_error_display_queue_closed() {
    assert_eq!(AppError::QueueClosed.to_string(), "task queue closed");
}

// reqwest::Error cannot be built directly; the conversion is covered by the
// integration tests against an unreachable gateway.

#[test]
fn test_app_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{oops}").unwrap_err();
    let app_error: AppError = serde_error.into();
    assert!(matches!(app_error, AppError::Json(_)));
    assert!(app_error.to_string().starts_with("json error:"));
    assert!(app_error.source().is_some());
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing .env");
    let app_error: AppError = io_error.into();
    assert_eq!(app_error.to_string(), "io error: missing .env");
    assert!(app_error.source().is_some());
}

use ibc_client::model::responses::{HttpErrorRecord, decode_error_body, success_envelope};
use serde_json::{Value, json};
use std::collections::BTreeMap;

#[test]
fn test_success_envelope() {
    assert_eq!(
        success_envelope(204),
        json!({"message": "response successful", "status_code": 204})
    );
}

#[test]
fn test_decode_error_body() {
    assert_eq!(decode_error_body(""), json!(""));
    assert_eq!(decode_error_body(r#"{"error":"bad"}"#), json!({"error": "bad"}));
    assert_eq!(
        decode_error_body("Service Unavailable"),
        json!({"content": "Service Unavailable"})
    );
}

#[test]
fn test_error_record_serializes_as_json() {
    let mut headers = BTreeMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    let record = HttpErrorRecord {
        status_code: 404,
        url: "https://ibgw:5000/v1/api/portfolio/U1/meta".to_string(),
        response_body: json!({"error": "not found"}),
        request_headers: headers,
        request_method: "GET".to_string(),
    };

    let parsed: Value = serde_json::from_str(&record.to_string()).unwrap();
    assert_eq!(parsed["status_code"], json!(404));
    assert_eq!(parsed["request_headers"]["content-type"], json!("application/json"));

    let back: HttpErrorRecord = serde_json::from_value(parsed).unwrap();
    assert_eq!(back, record);
}

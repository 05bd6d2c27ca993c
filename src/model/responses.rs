/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::SUCCESS_MESSAGE;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Diagnostic record attached to a failed gateway call
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct HttpErrorRecord {
    /// HTTP status returned by the gateway
    pub status_code: u16,
    /// Final URL of the request, query string included
    pub url: String,
    /// Decoded body, `{"content": <text>}` when it was not JSON, `""` when empty
    pub response_body: Value,
    /// Headers that were sent with the request
    pub request_headers: BTreeMap<String, String>,
    /// Verb of the request
    pub request_method: String,
}

/// Envelope returned for a successful response without a body
pub fn success_envelope(status_code: u16) -> Value {
    json!({
        "message": SUCCESS_MESSAGE,
        "status_code": status_code,
    })
}

/// Decodes the body of a failed response without ever failing itself
pub fn decode_error_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::String(String::new());
    }
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "content": text }))
}

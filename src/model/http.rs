/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Request executor for the Client Portal gateway
//!
//! Every endpoint task ends up here: [`HttpClient::send`] turns a
//! [`RequestDescriptor`] into one HTTP call against the configured REST root and
//! classifies the response. Classification, in order:
//!
//! 1. success with a body: the decoded JSON
//! 2. success without a body: `{"message": "response successful", "status_code": n}`
//! 3. failure on the brokerage accounts listing: the decoded body, as a value
//! 4. any other failure: [`AppError::Http`] with the full [`HttpErrorRecord`]

use crate::application::config::GatewayConfig;
use crate::constants::{ACCOUNTS_ENDPOINT, CONTENT_TYPE_JSON, USER_AGENTS};
use crate::error::AppError;
use crate::model::request::RequestDescriptor;
use crate::model::responses::{HttpErrorRecord, decode_error_body, success_envelope};
use async_trait::async_trait;
use rand::seq::IndexedRandom;
use reqwest::header::{CONTENT_TYPE, HeaderMap, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{error, info};

/// Anything able to run a [`RequestDescriptor`] and produce the response envelope
///
/// [`HttpClient`] is the production implementation; tests and embedders may
/// provide their own.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    /// Executes one request
    async fn send(&self, request: &RequestDescriptor) -> Result<Value, AppError>;
}

/// Outcome of classifying a gateway response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseClass {
    /// Value to hand back to the caller
    Value(Value),
    /// Failure, with the decoded body for the error record
    Failure(Value),
}

/// Classifies a gateway response
///
/// # Errors
/// Returns [`AppError::Json`] when a successful response carries a body that is
/// not JSON.
pub fn classify_response(
    path: &str,
    status: StatusCode,
    body: &str,
) -> Result<ResponseClass, AppError> {
    if status.is_success() {
        if body.is_empty() {
            return Ok(ResponseClass::Value(success_envelope(status.as_u16())));
        }
        return Ok(ResponseClass::Value(serde_json::from_str(body)?));
    }

    let decoded = decode_error_body(body);
    if path == ACCOUNTS_ENDPOINT {
        return Ok(ResponseClass::Value(decoded));
    }
    Ok(ResponseClass::Failure(decoded))
}

/// Picks a browser user agent for the next request
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}

/// HTTP client bound to one gateway
///
/// Certificate verification follows `GatewayConfig::accept_invalid_certs`. The
/// gateway runs locally with a self-signed certificate, so the default config
/// trusts it without verification; point the client at a verified host by
/// turning the flag off.
pub struct HttpClient {
    http_client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a new client for the given gateway
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the TLS backend cannot be initialised.
    pub fn new(config: &GatewayConfig) -> Result<Self, AppError> {
        let mut builder =
            Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http_client: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// REST root all paths are appended to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for an endpoint path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl RequestExecutor for HttpClient {
    async fn send(&self, request: &RequestDescriptor) -> Result<Value, AppError> {
        let url = self.url_for(&request.path);

        let payload = match &request.body {
            Some(body) => body.to_string(),
            None => "None".to_string(),
        };
        info!("------------------------");
        info!("JSON Payload: {}", payload);
        info!("Request Method: {}", request.method);

        let mut builder = self
            .http_client
            .request(request.method.into(), &url)
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(USER_AGENT, random_user_agent());

        let pairs = request.query_pairs();
        if !pairs.is_empty() {
            builder = builder.query(&pairs);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let outgoing = builder.build()?;
        let request_headers = header_map(outgoing.headers());
        let request_method = outgoing.method().to_string();

        let response = self.http_client.execute(outgoing).await?;
        let status = response.status();
        let response_url = response.url().to_string();
        let text = response.text().await?;

        info!("URL: {}", response_url);
        info!("Response Status Code: {}", status.as_u16());
        info!("Response Content: {}", text);

        match classify_response(&request.path, status, &text)? {
            ResponseClass::Value(value) => Ok(value),
            ResponseClass::Failure(response_body) => {
                let record = HttpErrorRecord {
                    status_code: status.as_u16(),
                    url: response_url,
                    response_body,
                    request_headers,
                    request_method,
                };
                error!(
                    "{}",
                    serde_json::to_string_pretty(&record).unwrap_or_else(|_| record.to_string())
                );
                Err(record.into())
            }
        }
    }
}

fn header_map(headers: &HeaderMap) -> BTreeMap<String, String> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

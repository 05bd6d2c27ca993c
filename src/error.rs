/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types for the Client Portal client
//!
//! Every fallible operation in the crate returns [`AppError`]. Non-2xx gateway
//! responses are reported through a single kind, [`AppError::Http`], which carries
//! the full [`HttpErrorRecord`] for diagnosis.

use crate::model::responses::HttpErrorRecord;
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The gateway answered with a non-success status
    Http(Box<HttpErrorRecord>),
    /// The request never produced a response (connection, TLS, timeout)
    Network(reqwest::Error),
    /// A body could not be decoded or a payload could not be encoded
    Json(serde_json::Error),
    /// Local I/O failure
    Io(std::io::Error),
    /// A caller supplied a value the client cannot translate into a request
    InvalidInput(String),
    /// The task queue is shut down or a worker went away before replying
    QueueClosed,
}

impl AppError {
    /// Returns the HTTP status code when the error originates from a gateway response
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Http(record) => Some(record.status_code),
            AppError::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the error record for HTTP failures
    #[must_use]
    pub fn record(&self) -> Option<&HttpErrorRecord> {
        match self {
            AppError::Http(record) => Some(&**record),
            _ => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http(record) => write!(
                f,
                "http error {} for {}",
                record.status_code, record.url
            ),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::QueueClosed => write!(f, "task queue closed"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<HttpErrorRecord> for AppError {
    fn from(record: HttpErrorRecord) -> Self {
        AppError::Http(Box::new(record))
    }
}

/// Convenience alias used across the crate
pub type IbcResult<T> = Result<T, AppError>;

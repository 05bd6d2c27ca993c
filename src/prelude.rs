/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Prelude
//!
//! Commonly used types, traits and task constructors in one import.
//!
//! ## Usage
//!
//! ```rust
//! use ibc_client::prelude::*;
//!
//! let config = Config::new();
//! let task = tasks::portfolio::account_summary("U1234567");
//! assert!(task.is_chained());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Client Portal client
pub use crate::config::{Config, GatewayConfig, TaskQueueConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, IbcResult};

// ============================================================================
// CLIENT, TASKS AND QUEUE
// ============================================================================

/// Client facade
pub use crate::application::client::Client;

/// Task command objects
pub use crate::application::task::{Executable, Task, TaskPlan};

/// Two-stage pipelines
pub use crate::application::chain::Chain;

/// Worker pool
pub use crate::application::queue::{TaskHandle, TaskOutcome, TaskQueue};

/// Endpoint task constructors, grouped by API section
pub use crate::application::tasks;

// ============================================================================
// TRANSPORT AND HTTP CLIENT
// ============================================================================

/// Request executor trait and its reqwest implementation
pub use crate::model::http::{HttpClient, RequestExecutor};

/// Request descriptor
pub use crate::model::request::{HttpMethod, RequestDescriptor};

/// Error record of failed calls
pub use crate::model::responses::HttpErrorRecord;

// ============================================================================
// REQUEST MODELS
// ============================================================================

/// Typed parameters and payloads
pub use crate::model::requests::{
    BracketOrderRequest, MarketHistoryRequest, OrderRequest, PositionsRequest, ReplyMessage,
    ScannerDefinition, ScannerFilter, SnapshotRequest, TransactionsRequest,
};

// ============================================================================
// FIELD CODES AND ENUMS
// ============================================================================

/// Field code tables and parameter vocabularies
pub use crate::presentation::{
    ApiValue, BarType, FieldSelector, Frequency, MarketDataField, OrderType, Selector, Side,
    SortDirection, SortField, TimeInForce,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

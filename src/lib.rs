/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # ibc-client
//!
//! Async client for the Interactive Brokers Client Portal Web API.
//!
//! Every REST endpoint is exposed as a constructor returning a [`Task`]. A task
//! is plain data describing the call (or, for most portfolio endpoints, the
//! portfolio accounts listing followed by the call). Tasks can be run inline
//! through [`Client::run`] or submitted to the client's worker pool with
//! [`Client::submit`], which returns a handle to await.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ibc_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let mut client = Client::new(Config::new())?;
//!
//!     let accounts = client.run(&tasks::accounts::accounts()).await?;
//!     info!("accounts: {}", accounts);
//!
//!     let snapshot = SnapshotRequest::new(["265598"])
//!         .with_field(MarketDataField::LastPrice)
//!         .with_field(MarketDataField::BidPrice);
//!     let handle = client.submit(tasks::market_data::snapshot(&snapshot)).await?;
//!     info!("snapshot: {}", handle.wait().await?);
//!
//!     client.shutdown().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! [`Config::new`] reads a `.env` file and the `IBC_*` environment variables;
//! see [`application::config`] for the full list.
//!
//! [`Task`]: application::task::Task
//! [`Client::run`]: application::client::Client::run
//! [`Client::submit`]: application::client::Client::submit
//! [`Config::new`]: application::config::Config::new

/// Tasks, chains, queue, client and configuration
pub mod application;

/// Gateway defaults, endpoint paths and user agents
pub mod constants;

/// Error types
pub mod error;

/// Request descriptors, executor and response records
pub mod model;

/// Field code tables and parameter enums
pub mod presentation;

/// Commonly used imports
pub mod prelude;

/// Environment, id and logging helpers
pub mod utils;

pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

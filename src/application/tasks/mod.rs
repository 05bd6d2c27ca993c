//! Endpoint tasks
//!
//! One constructor per Client Portal endpoint. Constructors are pure: they only
//! translate their arguments into a [`Task`](crate::application::task::Task),
//! nothing is sent until the task is run or submitted.

/// Brokerage accounts
pub mod accounts;
/// Alerts
pub mod alert;
/// Contract lookup and search
pub mod contract;
/// Customer entity
pub mod customer;
/// News and fundamentals
pub mod data;
/// Market data snapshots and history
pub mod market_data;
/// Orders
pub mod orders;
/// Profit and loss
pub mod pnl;
/// Portfolio accounts, positions and allocation
pub mod portfolio;
/// Portfolio analyst
pub mod portfolio_analysis;
/// Market scanners
pub mod scanner;
/// Executions
pub mod trades;

use crate::error::AppError;
use serde::Serialize;
use serde_json::Value;

/// Serializes a caller supplied payload into a request body
pub(crate) fn to_body<T: Serialize + ?Sized>(payload: &T) -> Result<Value, AppError> {
    Ok(serde_json::to_value(payload)?)
}

use crate::constants::{
    DEFAULT_GATEWAY_URL, DEFAULT_QUEUE_CAPACITY, DEFAULT_QUEUE_NAME, DEFAULT_QUEUE_WORKERS,
};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the Client Portal client
pub struct Config {
    /// Gateway connection settings
    pub gateway: GatewayConfig,
    /// Task queue settings
    pub task_queue: TaskQueueConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the gateway REST API
pub struct GatewayConfig {
    /// REST root, e.g. `https://localhost:5000/v1`
    pub base_url: String,
    /// Request timeout in seconds; no timeout when unset
    pub timeout_secs: Option<u64>,
    /// Skip TLS certificate verification. The gateway serves a self-signed
    /// certificate, so this is on unless explicitly disabled.
    pub accept_invalid_certs: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the in-process task queue
pub struct TaskQueueConfig {
    /// Queue name, attached to worker logs
    pub name: String,
    /// Number of workers pulling from the queue
    pub workers: usize,
    /// Jobs buffered before `submit` waits for room
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads `.env` if present, then reads:
    ///
    /// * `IBC_GATEWAY_URL` (default `https://ibgw:5000/v1`)
    /// * `IBC_GATEWAY_TIMEOUT_SECS` (unset by default)
    /// * `IBC_ACCEPT_INVALID_CERTS` (default `true`)
    /// * `IBC_QUEUE_NAME` (default `ibc`)
    /// * `IBC_QUEUE_WORKERS` (default `4`)
    /// * `IBC_QUEUE_CAPACITY` (default `64`)
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Config {
            gateway: GatewayConfig {
                base_url: get_env_or_default("IBC_GATEWAY_URL", String::from(DEFAULT_GATEWAY_URL)),
                timeout_secs: get_env_or_none("IBC_GATEWAY_TIMEOUT_SECS"),
                accept_invalid_certs: get_env_flag("IBC_ACCEPT_INVALID_CERTS", true),
            },
            task_queue: TaskQueueConfig {
                name: get_env_or_default("IBC_QUEUE_NAME", String::from(DEFAULT_QUEUE_NAME)),
                workers: get_env_or_default("IBC_QUEUE_WORKERS", DEFAULT_QUEUE_WORKERS).max(1),
                capacity: get_env_or_default("IBC_QUEUE_CAPACITY", DEFAULT_QUEUE_CAPACITY).max(1),
            },
        }
    }

    /// Creates a configuration from the environment, pointed at another REST root
    pub fn with_base_url(base_url: &str) -> Self {
        let mut config = Self::new();
        config.gateway.base_url = base_url.to_string();
        config
    }
}

// Common utilities for integration tests

use ibc_client::prelude::*;

/// Configuration pointing at a mock gateway
pub fn test_config(base_url: &str) -> Config {
    setup_logger();
    Config {
        gateway: GatewayConfig {
            base_url: base_url.to_string(),
            timeout_secs: Some(5),
            accept_invalid_certs: false,
        },
        task_queue: TaskQueueConfig {
            name: "integration".to_string(),
            workers: 2,
            capacity: 16,
        },
    }
}

/// Executor talking to a mock gateway
pub fn test_executor(base_url: &str) -> HttpClient {
    HttpClient::new(&test_config(base_url).gateway).expect("Failed to build HTTP client")
}

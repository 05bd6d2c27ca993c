/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client facade
//!
//! Owns the request executor and the task queue. Tasks built by the
//! [`tasks`](crate::application::tasks) constructors can be run inline or
//! submitted to the queue.
//!
//! # Example
//! ```ignore
//! use ibc_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//!
//! // Inline
//! let accounts = client.run(&tasks::accounts::accounts()).await?;
//!
//! // Through the queue
//! let handle = client.submit(tasks::portfolio::account_summary("U1234567")).await?;
//! let summary = handle.wait().await?;
//! ```

use crate::application::config::Config;
use crate::application::queue::{TaskHandle, TaskQueue};
use crate::application::task::{Executable, Task};
use crate::error::AppError;
use crate::model::http::{HttpClient, RequestExecutor};
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Client for the Client Portal gateway
pub struct Client {
    config: Arc<Config>,
    executor: Arc<dyn RequestExecutor>,
    queue: TaskQueue,
}

impl Client {
    /// Creates a client talking to the configured gateway and starts its queue
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// Returns [`AppError::Network`] if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let executor: Arc<dyn RequestExecutor> = Arc::new(HttpClient::new(&config.gateway)?);
        info!("Client Portal client for {}", config.gateway.base_url);
        Ok(Self::with_executor(config, executor))
    }

    /// Creates a client on top of a custom executor
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_executor(config: Config, executor: Arc<dyn RequestExecutor>) -> Self {
        let queue = TaskQueue::start(&config.task_queue, executor.clone());
        Self {
            config: Arc::new(config),
            executor,
            queue,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Task queue backing [`submit`](Self::submit)
    pub fn queue(&self) -> &TaskQueue {
        &self.queue
    }

    /// Runs a task on the current task and returns its result
    pub async fn run(&self, task: &Task) -> Result<Value, AppError> {
        task.execute(self.executor.as_ref()).await
    }

    /// Submits a task to the queue
    pub async fn submit(&self, task: Task) -> Result<TaskHandle, AppError> {
        self.queue.submit(task).await
    }

    /// Drains and stops the queue
    pub async fn shutdown(&mut self) {
        self.queue.shutdown().await;
    }
}

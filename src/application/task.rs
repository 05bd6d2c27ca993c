/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Executable endpoint tasks
//!
//! A [`Task`] is the command object produced by every endpoint constructor in
//! [`tasks`](crate::application::tasks). It is plain data: it can be inspected,
//! cloned, executed inline through [`Executable::execute`] or handed to the
//! [`TaskQueue`](crate::application::queue::TaskQueue).

use crate::application::chain::Chain;
use crate::error::AppError;
use crate::model::http::RequestExecutor;
use crate::model::request::RequestDescriptor;
use async_trait::async_trait;
use serde_json::Value;

/// Work that can be run against a [`RequestExecutor`]
#[async_trait]
pub trait Executable: Send + Sync {
    /// Runs the work and returns the final response envelope
    async fn execute(&self, executor: &dyn RequestExecutor) -> Result<Value, AppError>;
}

#[async_trait]
impl Executable for RequestDescriptor {
    async fn execute(&self, executor: &dyn RequestExecutor) -> Result<Value, AppError> {
        executor.send(self).await
    }
}

/// How a task reaches the gateway
#[derive(Debug, Clone, PartialEq)]
pub enum TaskPlan {
    /// One request
    Single(RequestDescriptor),
    /// Prerequisite request followed by the real one
    Chained(Chain),
}

/// A named, schedulable endpoint call
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    name: &'static str,
    plan: TaskPlan,
}

impl Task {
    /// Task issuing a single request
    pub fn single(name: &'static str, request: RequestDescriptor) -> Self {
        Self {
            name,
            plan: TaskPlan::Single(request),
        }
    }

    /// Task issuing the portfolio accounts listing first, then `request`
    pub fn chained(name: &'static str, request: RequestDescriptor) -> Self {
        Self {
            name,
            plan: TaskPlan::Chained(Chain::after_portfolio_accounts(request)),
        }
    }

    /// Scheduling name, `<module>.<function>`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Execution plan
    pub fn plan(&self) -> &TaskPlan {
        &self.plan
    }

    /// Whether a prerequisite request runs first
    pub fn is_chained(&self) -> bool {
        matches!(self.plan, TaskPlan::Chained(_))
    }

    /// The request whose response is the task result
    pub fn request(&self) -> &RequestDescriptor {
        match &self.plan {
            TaskPlan::Single(request) => request,
            TaskPlan::Chained(chain) => chain.request(),
        }
    }

    /// Every request the task issues, in order
    pub fn requests(&self) -> Vec<&RequestDescriptor> {
        match &self.plan {
            TaskPlan::Single(request) => vec![request],
            TaskPlan::Chained(chain) => vec![chain.prerequisite(), chain.request()],
        }
    }
}

#[async_trait]
impl Executable for Task {
    async fn execute(&self, executor: &dyn RequestExecutor) -> Result<Value, AppError> {
        match &self.plan {
            TaskPlan::Single(request) => request.execute(executor).await,
            TaskPlan::Chained(chain) => chain.execute(executor).await,
        }
    }
}

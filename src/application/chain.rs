/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Two-stage request pipelines
//!
//! The gateway refuses most `/portfolio` calls until the portfolio accounts
//! listing has been requested in the session. A [`Chain`] issues that listing
//! first and the real request second. Both requests are fixed when the chain is
//! built; the first response is only awaited, never inspected.

use crate::application::task::Executable;
use crate::constants::PORTFOLIO_ACCOUNTS_ENDPOINT;
use crate::error::AppError;
use crate::model::http::RequestExecutor;
use crate::model::request::RequestDescriptor;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// Prerequisite request followed by the request that produces the result
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    prerequisite: RequestDescriptor,
    request: RequestDescriptor,
}

impl Chain {
    /// Creates a chain from two requests
    pub fn new(prerequisite: RequestDescriptor, request: RequestDescriptor) -> Self {
        Self {
            prerequisite,
            request,
        }
    }

    /// Creates a chain gated on `GET /api/portfolio/accounts`
    pub fn after_portfolio_accounts(request: RequestDescriptor) -> Self {
        Self::new(RequestDescriptor::get(PORTFOLIO_ACCOUNTS_ENDPOINT), request)
    }

    /// First stage
    pub fn prerequisite(&self) -> &RequestDescriptor {
        &self.prerequisite
    }

    /// Second stage
    pub fn request(&self) -> &RequestDescriptor {
        &self.request
    }
}

#[async_trait]
impl Executable for Chain {
    /// Runs the prerequisite to completion, then the request.
    ///
    /// A failing prerequisite ends the chain with its error; the second
    /// request is not sent.
    async fn execute(&self, executor: &dyn RequestExecutor) -> Result<Value, AppError> {
        debug!(
            "Chain stage 1: {} {}",
            self.prerequisite.method, self.prerequisite.path
        );
        executor.send(&self.prerequisite).await?;

        debug!("Chain stage 2: {} {}", self.request.method, self.request.path);
        executor.send(&self.request).await
    }
}

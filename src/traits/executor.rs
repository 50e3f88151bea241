// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::Graph;
use crate::engine::ExecutionResult;
use crate::errors::EngineError;

#[async_trait]
pub trait GraphExecutor: Send + Sync {
    /// Run every node of a validated graph exactly once.
    ///
    /// Execution is all-or-nothing: the first error aborts the run and no
    /// partial result is returned.
    async fn execute(&self, graph: &Graph) -> Result<ExecutionResult, EngineError>;
}

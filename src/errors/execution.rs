// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::UnitError;

/// A unit failed while the graph was running.
#[derive(Error, Debug)]
#[error("Node '{node_id}' failed: {cause}")]
pub struct ExecutionError {
    pub node_id: String,
    #[source]
    pub cause: UnitError,
}

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Malformed request: missing collections, duplicate ids, dangling edges.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required top-level collection is absent from the request.
    #[error("Invalid pipeline format: '{field}' is required")]
    MissingField { field: &'static str },

    /// The request is present but cannot be read as a pipeline.
    #[error("Invalid pipeline format: {reason}")]
    Malformed { reason: String },

    /// Two nodes share an id.
    #[error("Duplicate node id: '{node_id}'")]
    DuplicateNodeId { node_id: String },

    /// An edge endpoint names a node that does not exist.
    #[error("Edge '{from}' -> '{to}' references unknown node '{missing}'")]
    UnknownNode {
        from: String,
        to: String,
        missing: String,
    },
}

/// No topological order exists for the graph.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Cycle detected in DAG: ordered {ordered} of {total} nodes, unresolved: {}", .unresolved.join(", "))]
pub struct CycleError {
    pub ordered: usize,
    pub total: usize,
    /// Nodes left with a non-zero in-degree, in listing order.
    pub unresolved: Vec<String>,
}

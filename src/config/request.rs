// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::Deserialize;

use crate::config::consts::{EDGES_FIELD, NODES_FIELD};
use crate::errors::ValidationError;

/// Pipeline request as received at the transport boundary.
///
/// Both collections are optional at the parsing layer so that their absence
/// is reported as a [`ValidationError`] rather than a generic parse error.
///
/// # Example
/// ```json
/// {
///   "nodes": [
///     {"id": "in", "type": "input", "module": "plain_text", "params": {"text": "hello"}},
///     {"id": "upper", "type": "unit", "module": "text_case", "params": {"mode": "upper"},
///      "evaluators": ["runtime_logger"]}
///   ],
///   "edges": [{"from": "in", "to": "upper"}]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PipelineRequest {
    pub nodes: Option<Vec<NodeSpec>>,
    pub edges: Option<Vec<EdgeSpec>>,
}

/// Node record as it appears on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct NodeSpec {
    pub id: String,
    #[serde(rename = "type", alias = "category")]
    pub category: String,
    #[serde(rename = "module", alias = "implementation")]
    pub implementation: String,
    #[serde(default)]
    pub params: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default, alias = "decorators")]
    pub evaluators: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
}

impl PipelineRequest {
    /// Read a request out of an arbitrary JSON value.
    pub fn from_json(value: serde_json::Value) -> Result<Self, ValidationError> {
        if !value.is_object() {
            return Err(ValidationError::Malformed {
                reason: "request must be an object".to_string(),
            });
        }
        serde_json::from_value(value).map_err(|e| ValidationError::Malformed {
            reason: e.to_string(),
        })
    }

    /// Split into node and edge lists, failing if either is absent.
    pub fn into_parts(self) -> Result<(Vec<NodeSpec>, Vec<EdgeSpec>), ValidationError> {
        let nodes = self.nodes.ok_or(ValidationError::MissingField { field: NODES_FIELD })?;
        let edges = self.edges.ok_or(ValidationError::MissingField { field: EDGES_FIELD })?;
        Ok((nodes, edges))
    }
}

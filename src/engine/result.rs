// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::errors::EngineError;
use crate::value::Value;

/// Outputs of one run, keyed by node id. Entries are written once and never
/// replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionResult(HashMap<String, Value>);

impl ExecutionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node's output. Writing the same node twice is an engine bug.
    pub fn record(&mut self, node_id: impl Into<String>, value: Value) -> Result<(), EngineError> {
        let node_id = node_id.into();
        if self.0.contains_key(&node_id) {
            return Err(EngineError::Internal {
                message: format!("result for node '{}' recorded twice", node_id),
            });
        }
        self.0.insert(node_id, value);
        Ok(())
    }

    pub fn get(&self, node_id: &str) -> Option<&Value> {
        self.0.get(node_id)
    }

    pub fn contains(&self, node_id: &str) -> bool {
        self.0.contains_key(node_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> HashMap<String, Value> {
        self.0
    }
}

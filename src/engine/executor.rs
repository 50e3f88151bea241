// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sequential graph executor.
//!
//! A run has two phases:
//!
//! 1. **Plan**: compute the topological order, then resolve and decorate the
//!    unit behind every node. A cycle or an unresolvable node fails here,
//!    before any unit is invoked.
//! 2. **Invoke**: walk the order, building each node's input from the outputs
//!    already recorded for its predecessors, and record the node's output.
//!
//! # Input shapes
//!
//! ```text
//! no predecessors      -> {}                         (unit reads its params)
//! one predecessor  P   -> output(P)                  (passed through unboxed)
//! predecessors P1, P2  -> {P1: output(P1), P2: output(P2)}
//! ```
//!
//! The first failing node ends the run. Nothing downstream of it executes and
//! the partial result is dropped.
//!
//! # Example
//! ```rust
//! use std::sync::Arc;
//! use pipegraph::config::{Edge, Graph, Node};
//! use pipegraph::engine::SequentialExecutor;
//! use pipegraph::registry::UnitRegistry;
//! use pipegraph::traits::GraphExecutor;
//! use pipegraph::value::Value;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = Graph::build(
//!     vec![
//!         Node::new("a", "input", "echo").with_param("text", "hello"),
//!         Node::new("b", "input", "echo").with_param("text", "world"),
//!         Node::new("c", "sink", "join"),
//!     ],
//!     vec![Edge::new("a", "c"), Edge::new("b", "c")],
//! )?;
//!
//! let executor = SequentialExecutor::new(Arc::new(UnitRegistry::with_builtins()));
//! let result = executor.execute(&graph).await?;
//!
//! assert_eq!(result.get("c").and_then(|c| c.get("a")), Some(&Value::from("hello")));
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use tracing::Instrument;

use crate::config::{Graph, Node};
use crate::engine::decorate::decorate;
use crate::engine::result::ExecutionResult;
use crate::engine::scheduler::{levels, order};
use crate::errors::{EngineError, ExecutionError};
use crate::observability::messages::{engine::*, StructuredLog};
use crate::registry::UnitRegistry;
use crate::traits::{GraphExecutor, Unit};
use crate::value::{Map, Value};

const EXECUTOR_NAME: &str = "sequential";

/// Runs one node at a time in topological order.
#[derive(Debug, Clone)]
pub struct SequentialExecutor {
    registry: Arc<UnitRegistry>,
}

/// A node paired with its ready-to-invoke (possibly decorated) unit.
struct PlannedNode<'g> {
    node: &'g Node,
    unit: Arc<dyn Unit>,
}

impl SequentialExecutor {
    pub fn new(registry: Arc<UnitRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &UnitRegistry {
        &self.registry
    }

    fn plan<'g>(&self, graph: &'g Graph) -> Result<Vec<PlannedNode<'g>>, EngineError> {
        let order = order(graph)?;

        let mut planned = Vec::with_capacity(order.len());
        for node_id in &order {
            let node = graph.node(node_id).ok_or_else(|| EngineError::Internal {
                message: format!("scheduled node '{}' is not in the graph", node_id),
            })?;
            let base = self.registry.resolve(&node.category, &node.implementation)?;
            let unit = decorate(&self.registry, base, node.decorators.as_slice())?;
            planned.push(PlannedNode { node, unit });
        }

        PlanBuilt {
            node_count: planned.len(),
            level_count: levels(graph)?.len(),
        }
        .log();

        Ok(planned)
    }

    async fn run(&self, graph: &Graph) -> Result<ExecutionResult, EngineError> {
        let planned = self.plan(graph)?;
        let mut result = ExecutionResult::new();

        for PlannedNode { node, unit } in planned {
            let predecessors = graph.predecessors(&node.id);
            let started = NodeStarted {
                node_id: &node.id,
                category: &node.category,
                implementation: &node.implementation,
                predecessor_count: predecessors.len(),
            };
            started.log();

            let input = merge_inputs(&node.id, predecessors, &result)?;
            let start = Instant::now();
            let output = unit
                .invoke(input, &node.params)
                .instrument(started.span("node_execution"))
                .await
                .map_err(|cause| ExecutionError {
                    node_id: node.id.clone(),
                    cause,
                })?;

            NodeCompleted {
                node_id: &node.id,
                duration: start.elapsed(),
            }
            .log();

            result.record(node.id.clone(), output)?;
        }

        Ok(result)
    }
}

/// Build a node's input from its predecessors' recorded outputs.
fn merge_inputs(
    node_id: &str,
    predecessors: &[String],
    result: &ExecutionResult,
) -> Result<Value, EngineError> {
    let output_of = |predecessor: &String| {
        result
            .get(predecessor)
            .cloned()
            .ok_or_else(|| EngineError::Internal {
                message: format!(
                    "node '{}' scheduled before its predecessor '{}'",
                    node_id, predecessor
                ),
            })
    };

    match predecessors {
        [] => Ok(Value::empty_map()),
        [only] => output_of(only),
        many => {
            let mut merged = Map::new();
            for predecessor in many {
                merged.insert(predecessor.clone(), output_of(predecessor)?);
            }
            Ok(Value::Map(merged))
        }
    }
}

#[async_trait]
impl GraphExecutor for SequentialExecutor {
    async fn execute(&self, graph: &Graph) -> Result<ExecutionResult, EngineError> {
        let started = ExecutionStarted {
            executor: EXECUTOR_NAME,
            node_count: graph.len(),
            edge_count: graph.edges().len(),
        };
        started.log();

        let start = Instant::now();
        match self.run(graph).instrument(started.span("graph_execution")).await {
            Ok(result) => {
                ExecutionCompleted {
                    executor: EXECUTOR_NAME,
                    node_count: result.len(),
                    duration: start.elapsed(),
                }
                .log();
                Ok(result)
            }
            Err(error) => {
                ExecutionFailed {
                    executor: EXECUTOR_NAME,
                    error: &error,
                }
                .log();
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::map_of;

    fn recorded(entries: &[(&str, Value)]) -> ExecutionResult {
        let mut result = ExecutionResult::new();
        for (id, value) in entries {
            result.record(*id, value.clone()).unwrap();
        }
        result
    }

    #[test]
    fn test_merge_inputs_shapes() {
        let result = recorded(&[("p1", Value::from("one")), ("p2", Value::Int(2))]);

        struct TestCase {
            name: &'static str,
            predecessors: Vec<String>,
            expected: Value,
        }

        let test_cases = vec![
            TestCase {
                name: "source node gets an empty map",
                predecessors: vec![],
                expected: Value::empty_map(),
            },
            TestCase {
                name: "single predecessor is unboxed",
                predecessors: vec!["p1".into()],
                expected: Value::from("one"),
            },
            TestCase {
                name: "fan-in is keyed by predecessor id",
                predecessors: vec!["p1".into(), "p2".into()],
                expected: map_of([("p1", Value::from("one")), ("p2", Value::Int(2))]),
            },
        ];

        for test_case in test_cases {
            let input = merge_inputs("n", &test_case.predecessors, &result).unwrap();
            assert_eq!(input, test_case.expected, "Test case '{}'", test_case.name);
        }
    }

    #[test]
    fn test_merge_inputs_missing_predecessor() {
        let result = ExecutionResult::new();
        let error = merge_inputs("n", &["ghost".to_string()], &result).unwrap_err();
        assert!(matches!(error, EngineError::Internal { .. }));
    }
}

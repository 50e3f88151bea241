// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Transport boundary: a request document in, a uniform envelope out.
//!
//! Every failure kind (validation, cycle, resolution, execution) collapses
//! into the same `{"status": "error", "message": ...}` shape; only the
//! message tells them apart.

use std::sync::Arc;

use serde::Serialize;

use crate::config::{build_graph, PipelineRequest};
use crate::engine::SequentialExecutor;
use crate::errors::EngineError;
use crate::registry::UnitRegistry;
use crate::traits::GraphExecutor;
use crate::value::serialize_result;

/// Response envelope returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PipelineResponse {
    Success { result: serde_json::Value },
    Error { message: String },
}

impl PipelineResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineResponse::Success { .. })
    }
}

impl From<Result<serde_json::Value, EngineError>> for PipelineResponse {
    fn from(outcome: Result<serde_json::Value, EngineError>) -> Self {
        match outcome {
            Ok(result) => PipelineResponse::Success { result },
            Err(error) => PipelineResponse::Error {
                message: error.to_string(),
            },
        }
    }
}

/// Validate, execute and serialize one request.
pub async fn execute_request(
    registry: Arc<UnitRegistry>,
    request: serde_json::Value,
) -> Result<serde_json::Value, EngineError> {
    let graph = build_graph(PipelineRequest::from_json(request)?)?;
    let result = SequentialExecutor::new(registry).execute(&graph).await?;
    Ok(serialize_result(&result))
}

/// Run one request and wrap the outcome in the response envelope.
pub async fn run_pipeline(
    registry: Arc<UnitRegistry>,
    request: serde_json::Value,
) -> PipelineResponse {
    execute_request(registry, request).await.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry() -> Arc<UnitRegistry> {
        Arc::new(UnitRegistry::with_builtins())
    }

    #[tokio::test]
    async fn test_success_envelope() {
        let request = json!({
            "nodes": [
                {"id": "in", "type": "input", "module": "plain_text", "params": {"text": "Hello There"}},
                {"id": "upper", "type": "unit", "module": "text_case", "params": {"mode": "upper"},
                 "evaluators": ["runtime_logger", "resource_logger"]},
                {"id": "stats", "type": "unit", "module": "token_counter"},
                {"id": "out", "type": "output", "module": "json_output", "params": {"pretty": false}}
            ],
            "edges": [
                {"from": "in", "to": "upper"},
                {"from": "in", "to": "stats"},
                {"from": "upper", "to": "out"},
                {"from": "stats", "to": "out"}
            ]
        });

        let response = run_pipeline(registry(), request).await;
        assert!(response.is_success(), "{:?}", response);

        let envelope = serde_json::to_value(&response).unwrap();
        assert_eq!(envelope["status"], "success");
        assert_eq!(envelope["result"]["upper"], "HELLO THERE");
        assert_eq!(envelope["result"]["stats"]["word_count"], 2);
        assert_eq!(
            envelope["result"]["out"],
            r#"{"stats":{"char_count":11,"line_count":1,"word_count":2},"upper":"HELLO THERE"}"#
        );
    }

    #[tokio::test]
    async fn test_bundled_pipeline() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("pipelines");
        let settings = crate::config::load_settings(dir.join("pipegraph.yaml")).unwrap();
        let request = crate::config::load_request(dir.join("support-ticket.json")).unwrap();

        let registry = Arc::new(UnitRegistry::from_settings(&settings).unwrap());
        let response = run_pipeline(registry, request).await;

        let result = match response {
            PipelineResponse::Success { result } => result,
            other => panic!("expected success, got {:?}", other),
        };
        assert_eq!(
            result["headline"],
            "My Parcel Arrived Late and the Box Was Damaged"
        );
        assert_eq!(result["stats"]["word_count"], 9);
        assert_eq!(result["words"]["the"], 1);
        assert!(result["report"].as_str().unwrap().contains("\"headline\""));
    }

    #[tokio::test]
    async fn test_every_failure_kind_uses_one_envelope() {
        struct TestCase {
            name: &'static str,
            request: serde_json::Value,
            message_prefix: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "not an object",
                request: json!([1, 2, 3]),
                message_prefix: "Invalid pipeline format",
            },
            TestCase {
                name: "missing edges",
                request: json!({"nodes": []}),
                message_prefix: "Invalid pipeline format: 'edges' is required",
            },
            TestCase {
                name: "dangling edge",
                request: json!({
                    "nodes": [{"id": "a", "type": "input", "module": "echo"}],
                    "edges": [{"from": "a", "to": "b"}]
                }),
                message_prefix: "Edge 'a' -> 'b' references unknown node 'b'",
            },
            TestCase {
                name: "cycle",
                request: json!({
                    "nodes": [
                        {"id": "x", "type": "sink", "module": "join"},
                        {"id": "y", "type": "sink", "module": "join"}
                    ],
                    "edges": [{"from": "x", "to": "y"}, {"from": "y", "to": "x"}]
                }),
                message_prefix: "Cycle detected in DAG",
            },
            TestCase {
                name: "unknown category",
                request: json!({
                    "nodes": [{"id": "a", "type": "widget", "module": "echo"}],
                    "edges": []
                }),
                message_prefix: "Unknown module type: 'widget'",
            },
            TestCase {
                name: "unregistered implementation",
                request: json!({
                    "nodes": [{"id": "a", "type": "model", "module": "gpt"}],
                    "edges": []
                }),
                message_prefix: "Module load failed: units::model::gpt",
            },
            TestCase {
                name: "unit failure",
                request: json!({
                    "nodes": [{"id": "a", "type": "bridge", "module": "from_zero_shot"}],
                    "edges": []
                }),
                message_prefix: "Node 'a' failed",
            },
        ];

        for test_case in test_cases {
            let response = run_pipeline(registry(), test_case.request).await;
            match &response {
                PipelineResponse::Error { message } => assert!(
                    message.starts_with(test_case.message_prefix),
                    "Test case '{}': got '{}'",
                    test_case.name,
                    message
                ),
                other => panic!("Test case '{}': expected error, got {:?}", test_case.name, other),
            }

            let envelope = serde_json::to_value(&response).unwrap();
            assert_eq!(envelope["status"], "error", "Test case '{}'", test_case.name);
            assert!(envelope.get("result").is_none());
        }
    }
}

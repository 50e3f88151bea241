// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::config::request::{EdgeSpec, NodeSpec, PipelineRequest};
use crate::errors::ValidationError;
use crate::value::{Params, Value};

/// A graph vertex: which unit to run and how to configure it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    /// Raw category string; parsed when the unit is resolved.
    pub category: String,
    pub implementation: String,
    pub params: Params,
    /// Observer names, first listed sits closest to the unit.
    pub decorators: Vec<String>,
}

impl Node {
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        implementation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            implementation: implementation.into(),
            params: Params::new(),
            decorators: Vec::new(),
        }
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_decorators<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.decorators = names.into_iter().map(Into::into).collect();
        self
    }
}

impl From<NodeSpec> for Node {
    fn from(spec: NodeSpec) -> Self {
        Self {
            id: spec.id,
            category: spec.category,
            implementation: spec.implementation,
            params: spec
                .params
                .unwrap_or_default()
                .into_iter()
                .map(|(k, v)| (k, Value::from(v)))
                .collect(),
            decorators: spec.evaluators.unwrap_or_default(),
        }
    }
}

/// A directed dependency from one node's output to another's input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl From<EdgeSpec> for Edge {
    fn from(spec: EdgeSpec) -> Self {
        Self {
            from: spec.from,
            to: spec.to,
        }
    }
}

/// Validated, immutable graph: every edge endpoint exists and ids are unique.
///
/// Acyclicity is not checked here; the scheduler reports cycles when it
/// fails to order every node.
#[derive(Debug, Clone)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
    /// node -> distinct predecessors, first-seen edge order
    predecessors: HashMap<String, Vec<String>>,
    /// node -> successors, one entry per edge
    successors: HashMap<String, Vec<String>>,
    /// node -> number of edges ending at it
    in_degree: HashMap<String, usize>,
}

impl Graph {
    /// Validate and index a node/edge listing.
    pub fn build(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, ValidationError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), position).is_some() {
                return Err(ValidationError::DuplicateNodeId {
                    node_id: node.id.clone(),
                });
            }
        }

        let mut predecessors: HashMap<String, Vec<String>> = HashMap::new();
        let mut successors: HashMap<String, Vec<String>> = HashMap::new();
        let mut in_degree: HashMap<String, usize> = HashMap::new();

        for edge in &edges {
            for endpoint in [&edge.from, &edge.to] {
                if !index.contains_key(endpoint) {
                    return Err(ValidationError::UnknownNode {
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }

            successors
                .entry(edge.from.clone())
                .or_default()
                .push(edge.to.clone());

            *in_degree.entry(edge.to.clone()).or_default() += 1;

            let preds = predecessors.entry(edge.to.clone()).or_default();
            if !preds.contains(&edge.from) {
                preds.push(edge.from.clone());
            }
        }

        Ok(Self {
            nodes,
            index,
            edges,
            predecessors,
            successors,
            in_degree,
        })
    }

    /// Nodes in their listed order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&position| &self.nodes[position])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Distinct predecessors of `id` in first-seen edge order.
    pub fn predecessors(&self, id: &str) -> &[String] {
        self.predecessors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Successors of `id`, once per edge, in edge order.
    pub fn successors(&self, id: &str) -> &[String] {
        self.successors.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of edges ending at `id`.
    pub fn in_degree(&self, id: &str) -> usize {
        self.in_degree.get(id).copied().unwrap_or(0)
    }
}

/// Build a graph from a request, failing when either collection is absent
/// or any edge references an unknown node.
pub fn build_graph(request: PipelineRequest) -> Result<Graph, ValidationError> {
    let (nodes, edges) = request.into_parts()?;
    Graph::build(
        nodes.into_iter().map(Node::from).collect(),
        edges.into_iter().map(Edge::from).collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(id: &str) -> Node {
        Node::new(id, "unit", "reverse_text")
    }

    #[test]
    fn test_build_indexes_edges() {
        let graph = Graph::build(
            vec![node("a"), node("b"), node("c")],
            vec![Edge::new("a", "c"), Edge::new("b", "c"), Edge::new("a", "b")],
        )
        .unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.predecessors("c"), ["a", "b"]);
        assert!(graph.predecessors("a").is_empty());
        assert_eq!(graph.successors("a"), ["c", "b"]);
        assert_eq!(graph.node("b").map(|n| n.id.as_str()), Some("b"));
        assert!(graph.node("z").is_none());
    }

    #[test]
    fn test_duplicate_edges_collapse_in_predecessors() {
        let graph = Graph::build(
            vec![node("a"), node("b")],
            vec![Edge::new("a", "b"), Edge::new("a", "b")],
        )
        .unwrap();

        assert_eq!(graph.predecessors("b"), ["a"]);
        assert_eq!(graph.successors("a"), ["b", "b"]);
        assert_eq!(graph.in_degree("b"), 2);
    }

    #[test]
    fn test_validation_errors() {
        struct TestCase {
            name: &'static str,
            nodes: Vec<Node>,
            edges: Vec<Edge>,
            expected: ValidationError,
        }

        let test_cases = vec![
            TestCase {
                name: "dangling target",
                nodes: vec![node("a")],
                edges: vec![Edge::new("a", "ghost")],
                expected: ValidationError::UnknownNode {
                    from: "a".into(),
                    to: "ghost".into(),
                    missing: "ghost".into(),
                },
            },
            TestCase {
                name: "dangling source",
                nodes: vec![node("a")],
                edges: vec![Edge::new("ghost", "a")],
                expected: ValidationError::UnknownNode {
                    from: "ghost".into(),
                    to: "a".into(),
                    missing: "ghost".into(),
                },
            },
            TestCase {
                name: "duplicate id",
                nodes: vec![node("a"), node("a")],
                edges: vec![],
                expected: ValidationError::DuplicateNodeId {
                    node_id: "a".into(),
                },
            },
        ];

        for test_case in test_cases {
            let result = Graph::build(test_case.nodes, test_case.edges);
            assert_eq!(
                result.unwrap_err(),
                test_case.expected,
                "Test case '{}'",
                test_case.name
            );
        }
    }

    #[test]
    fn test_build_graph_from_request() {
        let request = PipelineRequest::from_json(json!({
            "nodes": [
                {"id": "a", "type": "input", "module": "echo", "params": {"text": "A", "n": 2}},
                {"id": "b", "type": "sink", "module": "join", "evaluators": ["runtime_logger"]}
            ],
            "edges": [{"from": "a", "to": "b"}]
        }))
        .unwrap();

        let graph = build_graph(request).unwrap();
        let a = graph.node("a").unwrap();
        assert_eq!(a.params.get("text"), Some(&Value::from("A")));
        assert_eq!(a.params.get("n"), Some(&Value::Int(2)));
        assert_eq!(graph.node("b").unwrap().decorators, vec!["runtime_logger"]);
    }

    #[test]
    fn test_build_graph_requires_both_collections() {
        let request = PipelineRequest::from_json(json!({"nodes": []})).unwrap();
        assert_eq!(
            build_graph(request).unwrap_err(),
            ValidationError::MissingField { field: "edges" }
        );
    }
}

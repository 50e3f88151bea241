// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Topological ordering of a validated [`Graph`].
//!
//! Both functions run Kahn's algorithm. The ready-queue is a FIFO seeded with
//! zero in-degree nodes in listing order; successors become ready in the order
//! their edges were declared. Identical listings therefore always produce
//! identical orders.

use std::collections::{HashMap, VecDeque};

use crate::config::Graph;
use crate::errors::CycleError;
use crate::observability::messages::{engine::CycleDetected, StructuredLog};

fn in_degrees(graph: &Graph) -> HashMap<&str, usize> {
    graph
        .nodes()
        .iter()
        .map(|node| (node.id.as_str(), graph.in_degree(&node.id)))
        .collect()
}

fn cycle_error(graph: &Graph, ordered: usize, in_degree: &HashMap<&str, usize>) -> CycleError {
    let unresolved: Vec<String> = graph
        .nodes()
        .iter()
        .filter(|node| in_degree.get(node.id.as_str()).copied().unwrap_or(0) > 0)
        .map(|node| node.id.clone())
        .collect();

    CycleDetected {
        ordered,
        total: graph.len(),
        unresolved: &unresolved,
    }
    .log();

    CycleError {
        ordered,
        total: graph.len(),
        unresolved,
    }
}

/// A total order of node ids in which every edge's `from` precedes its `to`.
pub fn order(graph: &Graph) -> Result<Vec<String>, CycleError> {
    let mut in_degree = in_degrees(graph);
    let mut queue: VecDeque<&str> = graph
        .nodes()
        .iter()
        .map(|node| node.id.as_str())
        .filter(|id| in_degree[id] == 0)
        .collect();

    let mut ordered = Vec::with_capacity(graph.len());
    while let Some(current) = queue.pop_front() {
        ordered.push(current.to_string());
        for successor in graph.successors(current) {
            if let Some(remaining) = in_degree.get_mut(successor.as_str()) {
                *remaining -= 1;
                if *remaining == 0 {
                    queue.push_back(successor.as_str());
                }
            }
        }
    }

    if ordered.len() < graph.len() {
        return Err(cycle_error(graph, ordered.len(), &in_degree));
    }

    Ok(ordered)
}

/// Groups of nodes with no ordering constraint among them.
///
/// Level 0 holds every source node; a node sits one level after the last of
/// its predecessors to become ready. Flattening the levels gives the same
/// order as [`order`].
pub fn levels(graph: &Graph) -> Result<Vec<Vec<String>>, CycleError> {
    let mut in_degree = in_degrees(graph);
    let mut current: Vec<&str> = graph
        .nodes()
        .iter()
        .map(|node| node.id.as_str())
        .filter(|id| in_degree[id] == 0)
        .collect();

    let mut levels = Vec::new();
    let mut processed = 0;
    while !current.is_empty() {
        let mut next = Vec::new();
        for &id in &current {
            for successor in graph.successors(id) {
                if let Some(remaining) = in_degree.get_mut(successor.as_str()) {
                    *remaining -= 1;
                    if *remaining == 0 {
                        next.push(successor.as_str());
                    }
                }
            }
        }
        processed += current.len();
        levels.push(current.iter().map(|id| id.to_string()).collect());
        current = next;
    }

    if processed < graph.len() {
        return Err(cycle_error(graph, processed, &in_degree));
    }

    Ok(levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Edge, Node};

    fn graph(ids: &[&str], edges: &[(&str, &str)]) -> Graph {
        Graph::build(
            ids.iter().map(|id| Node::new(*id, "unit", "reverse_text")).collect(),
            edges.iter().map(|(from, to)| Edge::new(*from, *to)).collect(),
        )
        .unwrap()
    }

    fn respects_edges(graph: &Graph, order: &[String]) -> bool {
        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, id)| (id.as_str(), i))
            .collect();
        graph
            .edges()
            .iter()
            .all(|edge| position[edge.from.as_str()] < position[edge.to.as_str()])
    }

    #[test]
    fn test_order() {
        struct TestCase {
            name: &'static str,
            ids: Vec<&'static str>,
            edges: Vec<(&'static str, &'static str)>,
            expected: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "empty graph",
                ids: vec![],
                edges: vec![],
                expected: vec![],
            },
            TestCase {
                name: "independent nodes keep listing order",
                ids: vec!["c", "a", "b"],
                edges: vec![],
                expected: vec!["c", "a", "b"],
            },
            TestCase {
                name: "linear chain listed backwards",
                ids: vec!["c", "b", "a"],
                edges: vec![("a", "b"), ("b", "c")],
                expected: vec!["a", "b", "c"],
            },
            TestCase {
                name: "diamond",
                ids: vec!["a", "b", "c", "d"],
                edges: vec![("a", "c"), ("a", "b"), ("b", "d"), ("c", "d")],
                expected: vec!["a", "c", "b", "d"],
            },
            TestCase {
                name: "fan-in join",
                ids: vec!["a", "b", "c"],
                edges: vec![("a", "c"), ("b", "c")],
                expected: vec!["a", "b", "c"],
            },
            TestCase {
                name: "duplicate edge",
                ids: vec!["a", "b"],
                edges: vec![("a", "b"), ("a", "b")],
                expected: vec!["a", "b"],
            },
        ];

        for test_case in test_cases {
            let graph = graph(&test_case.ids, &test_case.edges);
            let order = order(&graph).unwrap();
            assert_eq!(order, test_case.expected, "Test case '{}'", test_case.name);
            assert!(respects_edges(&graph, &order), "Test case '{}'", test_case.name);
        }
    }

    #[test]
    fn test_order_is_deterministic() {
        let graph = graph(
            &["e", "d", "c", "b", "a"],
            &[("a", "c"), ("b", "c"), ("c", "d"), ("c", "e"), ("a", "e")],
        );
        let first = order(&graph).unwrap();
        for _ in 0..10 {
            assert_eq!(order(&graph).unwrap(), first);
        }
    }

    #[test]
    fn test_cycles() {
        struct TestCase {
            name: &'static str,
            ids: Vec<&'static str>,
            edges: Vec<(&'static str, &'static str)>,
            ordered: usize,
            unresolved: Vec<&'static str>,
        }

        let test_cases = vec![
            TestCase {
                name: "two-node cycle",
                ids: vec!["x", "y"],
                edges: vec![("x", "y"), ("y", "x")],
                ordered: 0,
                unresolved: vec!["x", "y"],
            },
            TestCase {
                name: "self loop",
                ids: vec!["a"],
                edges: vec![("a", "a")],
                ordered: 0,
                unresolved: vec!["a"],
            },
            TestCase {
                name: "cycle behind a source",
                ids: vec!["s", "x", "y", "z"],
                edges: vec![("s", "x"), ("x", "y"), ("y", "x"), ("y", "z")],
                ordered: 1,
                unresolved: vec!["x", "y", "z"],
            },
        ];

        for test_case in test_cases {
            let graph = graph(&test_case.ids, &test_case.edges);
            let expected = CycleError {
                ordered: test_case.ordered,
                total: test_case.ids.len(),
                unresolved: test_case.unresolved.iter().map(|s| s.to_string()).collect(),
            };
            assert_eq!(order(&graph).unwrap_err(), expected, "Test case '{}'", test_case.name);
            assert_eq!(levels(&graph).unwrap_err(), expected, "Test case '{}'", test_case.name);
        }
    }

    #[test]
    fn test_cycle_message() {
        let error = order(&graph(&["x", "y"], &[("x", "y"), ("y", "x")])).unwrap_err();
        assert!(error.to_string().starts_with("Cycle detected in DAG"));
    }

    #[test]
    fn test_levels() {
        let graph = graph(
            &["a", "b", "c", "d", "e"],
            &[("a", "c"), ("b", "c"), ("c", "d"), ("a", "e")],
        );

        let levels = levels(&graph).unwrap();
        assert_eq!(
            levels,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["e".to_string(), "c".to_string()],
                vec!["d".to_string()],
            ]
        );

        let flattened: Vec<String> = levels.into_iter().flatten().collect();
        assert!(respects_edges(&graph, &flattened));
        assert_eq!(flattened.len(), graph.len());
    }

    #[test]
    fn test_long_chain_orders_in_linear_time() {
        let ids: Vec<String> = (0..50_000).map(|i| format!("n{}", i)).collect();
        let graph = Graph::build(
            ids.iter().map(|id| Node::new(id.as_str(), "unit", "reverse_text")).collect(),
            ids.windows(2)
                .map(|pair| Edge::new(pair[0].as_str(), pair[1].as_str()))
                .collect(),
        )
        .unwrap();

        let started = std::time::Instant::now();
        let ordered = order(&graph).unwrap();
        let levels = levels(&graph).unwrap();
        let elapsed = started.elapsed();

        assert_eq!(ordered, ids);
        assert_eq!(levels.len(), ids.len());
        assert!(
            elapsed < std::time::Duration::from_secs(5),
            "ordering a {}-node chain took {:?}",
            ids.len(),
            elapsed
        );
    }
}

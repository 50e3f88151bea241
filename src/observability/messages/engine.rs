// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for graph execution lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Run lifecycle (start, completion, failure)
//! * Planning (topological order, level computation, cycle detection)
//! * Per-node execution

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Execution of a graph started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use pipegraph::observability::messages::engine::ExecutionStarted;
///
/// let msg = ExecutionStarted {
///     executor: "sequential",
///     node_count: 5,
///     edge_count: 4,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct ExecutionStarted<'a> {
    pub executor: &'a str,
    pub node_count: usize,
    pub edge_count: usize,
}

impl Display for ExecutionStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting graph execution with {} executor: {} nodes, {} edges",
            self.executor, self.node_count, self.edge_count
        )
    }
}

impl StructuredLog for ExecutionStarted<'_> {
    fn log(&self) {
        tracing::info!(
            executor = self.executor,
            node_count = self.node_count,
            edge_count = self.edge_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "execution",
            span_name = name,
            executor = self.executor,
            node_count = self.node_count,
            edge_count = self.edge_count,
        )
    }
}

/// Execution completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ExecutionCompleted<'a> {
    pub executor: &'a str,
    pub node_count: usize,
    pub duration: Duration,
}

impl Display for ExecutionCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Graph execution completed with {} executor: {} nodes in {:?}",
            self.executor, self.node_count, self.duration
        )
    }
}

impl StructuredLog for ExecutionCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            executor = self.executor,
            node_count = self.node_count,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "execution_completed",
            span_name = name,
            executor = self.executor,
            node_count = self.node_count,
            duration = ?self.duration,
        )
    }
}

/// Execution failed with error.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct ExecutionFailed<'a> {
    pub executor: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ExecutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Graph execution failed with {} executor: {}",
            self.executor, self.error
        )
    }
}

impl StructuredLog for ExecutionFailed<'_> {
    fn log(&self) {
        tracing::error!(
            executor = self.executor,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "execution_failed",
            span_name = name,
            executor = self.executor,
            error = %self.error,
        )
    }
}

/// Every node resolved and decorated; the run is about to invoke units.
///
/// # Log Level
/// `debug!` - Planning detail
///
/// # Example
/// ```
/// use pipegraph::observability::messages::engine::PlanBuilt;
///
/// let msg = PlanBuilt {
///     node_count: 7,
///     level_count: 3,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct PlanBuilt {
    pub node_count: usize,
    pub level_count: usize,
}

impl Display for PlanBuilt {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Planned {} nodes across {} levels",
            self.node_count, self.level_count
        )
    }
}

impl StructuredLog for PlanBuilt {
    fn log(&self) {
        tracing::debug!(
            node_count = self.node_count,
            level_count = self.level_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "plan",
            span_name = name,
            node_count = self.node_count,
            level_count = self.level_count,
        )
    }
}

/// No topological order exists.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct CycleDetected<'a> {
    pub ordered: usize,
    pub total: usize,
    pub unresolved: &'a [String],
}

impl Display for CycleDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Topological sort failed: ordered {} of {} nodes, cycle through [{}]",
            self.ordered,
            self.total,
            self.unresolved.join(", ")
        )
    }
}

impl StructuredLog for CycleDetected<'_> {
    fn log(&self) {
        tracing::error!(
            ordered = self.ordered,
            total = self.total,
            unresolved = %self.unresolved.join(", "),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "cycle_detected",
            span_name = name,
            ordered = self.ordered,
            total = self.total,
        )
    }
}

/// A node is about to be invoked.
///
/// # Log Level
/// `debug!` - Per-node detail
pub struct NodeStarted<'a> {
    pub node_id: &'a str,
    pub category: &'a str,
    pub implementation: &'a str,
    pub predecessor_count: usize,
}

impl Display for NodeStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node '{}' ({}::{}) started with {} predecessors",
            self.node_id, self.category, self.implementation, self.predecessor_count
        )
    }
}

impl StructuredLog for NodeStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            node_id = self.node_id,
            category = self.category,
            implementation = self.implementation,
            predecessor_count = self.predecessor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "node",
            span_name = name,
            node_id = self.node_id,
            category = self.category,
            implementation = self.implementation,
        )
    }
}

/// A node finished and its output was recorded.
///
/// # Log Level
/// `debug!` - Per-node detail
pub struct NodeCompleted<'a> {
    pub node_id: &'a str,
    pub duration: Duration,
}

impl Display for NodeCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node '{}' completed in {:?}", self.node_id, self.duration)
    }
}

impl StructuredLog for NodeCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            node_id = self.node_id,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "node_completed",
            span_name = name,
            node_id = self.node_id,
            duration = ?self.duration,
        )
    }
}

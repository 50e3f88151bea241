// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic and operational log lines are declared once as message types
//! in [`messages`] rather than as format strings at each call site. Every
//! message implements `Display` for the human-readable line and
//! [`messages::StructuredLog`] to emit it with structured fields at its
//! designated level.
//!
//! # Usage
//!
//! ```rust
//! use pipegraph::observability::messages::engine::NodeStarted;
//! use pipegraph::observability::messages::StructuredLog;
//!
//! NodeStarted {
//!     node_id: "summarize",
//!     category: "model",
//!     implementation: "text_task",
//!     predecessor_count: 1,
//! }
//! .log();
//! ```

pub mod messages;

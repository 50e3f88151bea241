// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `engine` - run lifecycle, planning and per-node events
//! * `registry` - unit resolution and cache events
//! * `unit` - events emitted by built-in units and observers

use tracing::Span;

pub mod engine;
pub mod registry;
pub mod unit;

/// Emit a message as a structured event, or open a span carrying its fields.
pub trait StructuredLog {
    /// Log at the message's designated level with structured fields.
    fn log(&self);

    /// Create a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}

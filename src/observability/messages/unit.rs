// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types emitted by built-in units and observers.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use tracing::Span;

/// Wall-clock time of one invocation, reported by `runtime_logger`.
///
/// # Log Level
/// `info!` - Requested explicitly by the pipeline author
///
/// # Example
/// ```
/// use pipegraph::observability::messages::unit::UnitRuntime;
/// use std::time::Duration;
///
/// let msg = UnitRuntime {
///     unit: "text_task",
///     duration: Duration::from_millis(231),
/// };
///
/// assert_eq!(msg.to_string(), "runtime_logger: text_task took 0.2310 seconds");
/// ```
pub struct UnitRuntime<'a> {
    pub unit: &'a str,
    pub duration: Duration,
}

impl Display for UnitRuntime<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "runtime_logger: {} took {:.4} seconds",
            self.unit,
            self.duration.as_secs_f64()
        )
    }
}

impl StructuredLog for UnitRuntime<'_> {
    fn log(&self) {
        tracing::info!(
            unit = self.unit,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "unit_runtime",
            span_name = name,
            unit = self.unit,
            duration = ?self.duration,
        )
    }
}

/// Input/output footprint of one invocation, reported by `resource_logger`.
///
/// # Log Level
/// `info!` - Requested explicitly by the pipeline author
pub struct UnitResources<'a> {
    pub unit: &'a str,
    pub input_bytes: usize,
    pub input_tokens: usize,
    pub output_bytes: usize,
    pub output_tokens: usize,
}

impl Display for UnitResources<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "resource_logger: {} input={} bytes/{} tokens, output={} bytes/{} tokens",
            self.unit, self.input_bytes, self.input_tokens, self.output_bytes, self.output_tokens
        )
    }
}

impl StructuredLog for UnitResources<'_> {
    fn log(&self) {
        tracing::info!(
            unit = self.unit,
            input_bytes = self.input_bytes,
            input_tokens = self.input_tokens,
            output_bytes = self.output_bytes,
            output_tokens = self.output_tokens,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "unit_resources",
            span_name = name,
            unit = self.unit,
            input_bytes = self.input_bytes,
            output_bytes = self.output_bytes,
        )
    }
}

/// A unit rejected its input or failed internally.
///
/// # Log Level
/// `warn!` - The failure propagates and ends the run
pub struct UnitFailed<'a> {
    pub unit: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for UnitFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Unit '{}' failed: {}", self.unit, self.error)
    }
}

impl StructuredLog for UnitFailed<'_> {
    fn log(&self) {
        tracing::warn!(unit = self.unit, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "unit_failed",
            span_name = name,
            unit = self.unit,
            error = %self.error,
        )
    }
}

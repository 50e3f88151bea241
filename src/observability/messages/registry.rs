// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for unit resolution events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A `(category, name)` pair was instantiated from its factory.
///
/// # Log Level
/// `debug!` - Resolution detail
///
/// # Example
/// ```
/// use pipegraph::observability::messages::registry::UnitResolved;
///
/// let msg = UnitResolved {
///     category: "input",
///     name: "summarization_input",
///     locator: "units::input::plain_text",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct UnitResolved<'a> {
    pub category: &'a str,
    pub name: &'a str,
    pub locator: &'a str,
}

impl Display for UnitResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved {}/{} via '{}'",
            self.category, self.name, self.locator
        )
    }
}

impl StructuredLog for UnitResolved<'_> {
    fn log(&self) {
        tracing::debug!(
            category = self.category,
            name = self.name,
            locator = self.locator,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "unit_resolved",
            span_name = name,
            category = self.category,
            name = self.name,
            locator = self.locator,
        )
    }
}

/// A resolution was served from the cache.
///
/// # Log Level
/// `trace!` - High-volume detail
pub struct ResolutionCacheHit<'a> {
    pub category: &'a str,
    pub name: &'a str,
}

impl Display for ResolutionCacheHit<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Resolution cache hit for {}/{}", self.category, self.name)
    }
}

impl StructuredLog for ResolutionCacheHit<'_> {
    fn log(&self) {
        tracing::trace!(category = self.category, name = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "resolution_cache_hit",
            span_name = name,
            category = self.category,
            name = self.name,
        )
    }
}

/// A lookup failed.
///
/// # Log Level
/// `warn!` - The run will abort, but the cause is usually the request
pub struct ResolutionFailed<'a> {
    pub category: &'a str,
    pub name: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for ResolutionFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to resolve {}/{}: {}",
            self.category, self.name, self.error
        )?;
        if let Some(source) = self.error.source() {
            write!(f, " ({})", source)?;
        }
        Ok(())
    }
}

impl StructuredLog for ResolutionFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            category = self.category,
            name = self.name,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "resolution_failed",
            span_name = name,
            category = self.category,
            name = self.name,
        )
    }
}

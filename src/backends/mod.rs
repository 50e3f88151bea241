// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Unit implementations.
//!
//! # Local
//! In-process units and observers registered by
//! [`local::register_builtins`]: input adapters, text transforms, the
//! `text_task` dispatcher, bridges, the JSON output and the `join` sink.
//!
//! # Stub (test-only)
//! Recording, failing and counting units and observers used by the engine and
//! registry tests. Not available in non-test builds.
//!
//! # Example
//! ```rust
//! use pipegraph::registry::UnitRegistry;
//!
//! let registry = UnitRegistry::with_builtins();
//! let unit = registry.resolve("input", "summarization_input")?;
//! assert_eq!(unit.name(), "plain_text");
//! # Ok::<(), pipegraph::errors::ResolutionError>(())
//! ```

pub mod local;
#[cfg(test)]
pub mod stub;

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Error taxonomy for graph execution.
//!
//! Four kinds propagate unchanged from their origin to the transport
//! boundary: [`ValidationError`], [`CycleError`], [`ResolutionError`] and
//! [`ExecutionError`]. [`EngineError`] is the umbrella the executor returns.

mod engine;
mod execution;
mod resolution;
mod unit;
mod validation;

pub use engine::EngineError;
pub use execution::ExecutionError;
pub use resolution::{LookupFailure, ResolutionError};
pub use unit::UnitError;
pub use validation::{CycleError, ValidationError};

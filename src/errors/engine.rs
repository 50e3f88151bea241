// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

use super::{CycleError, ExecutionError, ResolutionError, ValidationError};

/// Any error that ends a run. Each kind keeps its origin's message.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// Engine bookkeeping inconsistency.
    #[error("Internal error: {message}")]
    Internal { message: String },
}

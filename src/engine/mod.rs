// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod decorate;
pub mod executor;
pub mod result;
pub mod scheduler;

pub use decorate::{decorate, ObservedUnit};
pub use executor::SequentialExecutor;
pub use result::ExecutionResult;
pub use scheduler::{levels, order};

// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod bridge;
pub mod input;
pub mod model;
pub mod output;
pub mod sink;
pub mod transform;

pub use bridge::*;
pub use input::*;
pub use model::*;
pub use output::*;
pub use sink::*;
pub use transform::*;

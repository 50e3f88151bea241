// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod executor;
pub mod observer;
pub mod unit;

pub use executor::GraphExecutor;
pub use observer::Observer;
pub use unit::Unit;

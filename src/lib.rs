// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // built-in units and observers
pub mod config;     // requests, graph model, settings
pub mod engine;     // scheduler + executor
pub mod errors;     // error handling
pub mod observability;
pub mod registry;   // (category, name) -> unit resolution
pub mod runner;     // transport boundary
pub mod traits;     // unified abstractions
pub mod value;      // tagged values + serializer

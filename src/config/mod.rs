// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod graph;
mod loader;
mod request;

pub mod consts;

pub use graph::{build_graph, Edge, Graph, Node};
pub use loader::{load_request, load_settings, EngineSettings, LoadError};
pub use request::{EdgeSpec, NodeSpec, PipelineRequest};

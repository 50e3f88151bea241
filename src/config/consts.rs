/// Default tracing filter when neither settings nor `RUST_LOG` provide one
pub const DEFAULT_LOG_FILTER: &str = "info";
/// Top-level request field holding the node list
pub const NODES_FIELD: &str = "nodes";
/// Top-level request field holding the edge list
pub const EDGES_FIELD: &str = "edges";

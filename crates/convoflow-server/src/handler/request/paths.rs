//! Path parameter types for HTTP handlers.

use serde::{Deserialize, Serialize};

/// Path parameters for workflow operations.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkflowPathParams {
    /// Unique identifier of the workflow.
    pub workflow_id: i32,
}

/// Path parameters for node operations.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodePathParams {
    /// Unique identifier of the node.
    pub node_id: i32,
}

/// Path parameters for edge operations.
#[must_use]
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EdgePathParams {
    /// Unique identifier of the edge.
    pub edge_id: i32,
}

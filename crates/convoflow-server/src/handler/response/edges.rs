//! Edge response types.

use convoflow_postgres::model;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Edge response.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    /// ID of the edge.
    pub id: i32,
    /// ID of the owning workflow.
    pub workflow_id: i32,
    /// Edge name, `yes` or `no` on condition branches.
    pub name: Option<String>,
    /// Source node.
    pub start_node_id: i32,
    /// Target node.
    pub end_node_id: i32,
    /// Timestamp when the edge was created.
    pub created_at: Timestamp,
}

impl Edge {
    pub fn from_model(edge: model::Edge) -> Self {
        Self {
            id: edge.id,
            workflow_id: edge.workflow_id,
            name: edge.name,
            start_node_id: edge.start_node_id,
            end_node_id: edge.end_node_id,
            created_at: edge.created_at.into(),
        }
    }
}

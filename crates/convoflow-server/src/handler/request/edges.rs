//! Edge request types.

use convoflow_postgres::model::NewEdge;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request payload for creating an edge.
///
/// Edges leaving a condition node must be named `yes` or `no` to be
/// followed during execution.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEdge {
    /// Optional edge name.
    #[validate(length(max = 64))]
    pub name: Option<String>,
    /// Source node.
    pub start_node_id: i32,
    /// Target node.
    pub end_node_id: i32,
    /// Owning workflow.
    pub workflow_id: i32,
}

impl CreateEdge {
    #[inline]
    pub fn into_model(self) -> NewEdge {
        NewEdge {
            workflow_id: self.workflow_id,
            name: self.name,
            start_node_id: self.start_node_id,
            end_node_id: self.end_node_id,
        }
    }
}

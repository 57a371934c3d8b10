//! Workflow response types.

use convoflow_postgres::model;
use convoflow_runtime::graph::NodeId;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Workflow response.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workflow {
    /// ID of the workflow.
    pub id: i32,
    /// Name of the workflow.
    pub name: String,
    /// Timestamp when the workflow was created.
    pub created_at: Timestamp,
    /// Timestamp when the workflow was last updated.
    pub updated_at: Timestamp,
}

impl Workflow {
    pub fn from_model(workflow: model::Workflow) -> Self {
        Self {
            id: workflow.id,
            name: workflow.name,
            created_at: workflow.created_at.into(),
            updated_at: workflow.updated_at.into(),
        }
    }
}

/// Response for listing workflows.
pub type Workflows = Vec<Workflow>;

/// Realized path of an executed workflow, as ordered node ids.
pub type ExecutionPath = Vec<NodeId>;

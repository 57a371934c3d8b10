//! Workflow store backed by PostgreSQL.

use convoflow_postgres::model;
use convoflow_postgres::query::{EdgeRepository, NodeRepository, WorkflowRepository};
use convoflow_postgres::types as db;
use convoflow_postgres::{PgConn, PgConnection};

use super::WorkflowStore;
use crate::TRACING_TARGET_STORE;
use crate::error::StoreError;
use crate::graph::{Edge, MessageStatus, Node, NodeKind, NodeType, Workflow, WorkflowId};

impl WorkflowStore for PgConnection {
    async fn get_workflow(&mut self, workflow_id: WorkflowId) -> Result<Workflow, StoreError> {
        load_workflow(self, workflow_id).await
    }
}

impl WorkflowStore for PgConn {
    async fn get_workflow(&mut self, workflow_id: WorkflowId) -> Result<Workflow, StoreError> {
        load_workflow(self, workflow_id).await
    }
}

async fn load_workflow(
    conn: &mut PgConnection,
    workflow_id: WorkflowId,
) -> Result<Workflow, StoreError> {
    let row = conn
        .find_workflow_by_id(workflow_id.get())
        .await
        .map_err(StoreError::backend)?
        .ok_or(StoreError::NotFound(workflow_id))?;

    let node_rows = conn
        .list_workflow_nodes(workflow_id.get())
        .await
        .map_err(StoreError::backend)?;
    let edge_rows = conn
        .list_workflow_edges(workflow_id.get())
        .await
        .map_err(StoreError::backend)?;

    tracing::debug!(
        target: TRACING_TARGET_STORE,
        workflow_id = %workflow_id,
        nodes = node_rows.len(),
        edges = edge_rows.len(),
        "Workflow loaded"
    );

    let mut workflow = Workflow::new(row.id, row.name);
    workflow.nodes = node_rows
        .into_iter()
        .map(Node::try_from)
        .collect::<Result<_, _>>()?;
    workflow.edges = edge_rows.into_iter().map(Edge::from).collect();
    Ok(workflow)
}

impl TryFrom<model::Node> for Node {
    type Error = StoreError;

    fn try_from(row: model::Node) -> Result<Self, Self::Error> {
        let corrupt = |field: &str| {
            StoreError::Corrupt(format!(
                "{} node {} has no {field}",
                row.node_type, row.id
            ))
        };

        let kind = match row.node_type {
            db::NodeType::Start => NodeKind::Start,
            db::NodeType::End => NodeKind::End,
            db::NodeType::Message => {
                let text = row.text.ok_or_else(|| corrupt("text"))?;
                let status = row.status.ok_or_else(|| corrupt("status"))?;
                NodeKind::message(text, status.into())
            }
            db::NodeType::Condition => {
                let condition = row.condition.ok_or_else(|| corrupt("condition"))?;
                NodeKind::condition(condition.into())
            }
        };

        Ok(Node::new(row.id, kind))
    }
}

impl From<model::Edge> for Edge {
    fn from(row: model::Edge) -> Self {
        Self {
            id: row.id.into(),
            name: row.name,
            from: row.start_node_id.into(),
            to: row.end_node_id.into(),
        }
    }
}

impl From<db::MessageStatus> for MessageStatus {
    fn from(status: db::MessageStatus) -> Self {
        match status {
            db::MessageStatus::Open => Self::Open,
            db::MessageStatus::Pending => Self::Pending,
            db::MessageStatus::Sent => Self::Sent,
        }
    }
}

impl From<MessageStatus> for db::MessageStatus {
    fn from(status: MessageStatus) -> Self {
        match status {
            MessageStatus::Open => Self::Open,
            MessageStatus::Pending => Self::Pending,
            MessageStatus::Sent => Self::Sent,
        }
    }
}

impl From<db::NodeType> for NodeType {
    fn from(node_type: db::NodeType) -> Self {
        match node_type {
            db::NodeType::Start => Self::Start,
            db::NodeType::Message => Self::Message,
            db::NodeType::Condition => Self::Condition,
            db::NodeType::End => Self::End,
        }
    }
}

impl From<NodeType> for db::NodeType {
    fn from(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Start => Self::Start,
            NodeType::Message => Self::Message,
            NodeType::Condition => Self::Condition,
            NodeType::End => Self::End,
        }
    }
}

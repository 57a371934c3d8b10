//! Node response types.

use convoflow_postgres::model;
use convoflow_runtime::graph::{MessageStatus, NodeType};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Node response.
///
/// Payload fields are only present for the node type that owns them.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// ID of the node.
    pub id: i32,
    /// ID of the owning workflow.
    pub workflow_id: i32,
    /// Node type.
    pub node_type: NodeType,
    /// Message text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Message delivery status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    /// Expected status of a condition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<MessageStatus>,
    /// Timestamp when the node was created.
    pub created_at: Timestamp,
    /// Timestamp when the node was last updated.
    pub updated_at: Timestamp,
}

impl Node {
    pub fn from_model(node: model::Node) -> Self {
        Self {
            id: node.id,
            workflow_id: node.workflow_id,
            node_type: node.node_type.into(),
            text: node.text,
            status: node.status.map(Into::into),
            condition: node.condition.map(Into::into),
            created_at: node.created_at.into(),
            updated_at: node.updated_at.into(),
        }
    }
}

/// Response for listing nodes.
pub type Nodes = Vec<Node>;

#[cfg(test)]
mod tests {
    use convoflow_postgres::types as db;

    use super::*;

    #[test]
    fn test_condition_node_omits_message_fields() -> anyhow::Result<()> {
        let epoch = jiff_diesel::Timestamp::from(Timestamp::UNIX_EPOCH);
        let node = Node::from_model(model::Node {
            id: 4,
            workflow_id: 1,
            node_type: db::NodeType::Condition,
            text: None,
            status: None,
            condition: Some(db::MessageStatus::Sent),
            created_at: epoch,
            updated_at: epoch,
        });

        let json = serde_json::to_value(&node)?;
        assert_eq!(json["node_type"], "condition");
        assert_eq!(json["condition"], "sent");
        assert!(json.get("text").is_none());
        assert!(json.get("status").is_none());
        Ok(())
    }
}

//! Node request types.
//!
//! Start and end nodes are created through [`CreateNode`]; message and
//! condition nodes have dedicated payloads because they carry data.

use convoflow_postgres::model::{NewNode, UpdateNode};
use convoflow_runtime::graph::{
    ConditionNodeUpdate, MessageNodeUpdate, MessageStatus, NodeKind, NodeType,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validations::marker_node_type;

/// Maximum length of message text.
const MAX_TEXT_LENGTH: u64 = 4096;

/// Request payload for creating a start or end node.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateNode {
    /// Node type, `start` or `end`.
    #[validate(custom(function = "marker_node_type"))]
    pub node_type: NodeType,
    /// Owning workflow.
    pub workflow_id: i32,
}

impl CreateNode {
    #[inline]
    pub fn into_model(self) -> NewNode {
        NewNode::marker(self.workflow_id, self.node_type.into())
    }
}

/// Request payload for creating a message node.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMessageNode {
    /// Message text. May be empty.
    #[validate(length(max = MAX_TEXT_LENGTH))]
    pub text: String,
    /// Initial delivery status.
    #[serde(default = "default_status")]
    pub status: MessageStatus,
    /// Owning workflow.
    pub workflow_id: i32,
}

fn default_status() -> MessageStatus {
    MessageStatus::Open
}

impl CreateMessageNode {
    #[inline]
    pub fn into_model(self) -> NewNode {
        NewNode::message(self.workflow_id, self.text, self.status.into())
    }
}

/// Request payload for creating a condition node.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateConditionNode {
    /// Status the last message must have for the `yes` branch.
    pub condition: MessageStatus,
    /// Owning workflow.
    pub workflow_id: i32,
}

impl CreateConditionNode {
    #[inline]
    pub fn into_model(self) -> NewNode {
        NewNode::condition(self.workflow_id, self.condition.into())
    }
}

/// Request payload for updating a message node.
#[must_use]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateMessageNode {
    /// New text.
    #[validate(length(max = MAX_TEXT_LENGTH))]
    pub text: Option<String>,
    /// New delivery status.
    pub status: Option<MessageStatus>,
}

impl From<UpdateMessageNode> for MessageNodeUpdate {
    fn from(request: UpdateMessageNode) -> Self {
        Self {
            text: request.text,
            status: request.status,
        }
    }
}

/// Request payload for updating a condition node.
#[must_use]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateConditionNode {
    /// New expected status.
    pub condition: Option<MessageStatus>,
}

impl From<UpdateConditionNode> for ConditionNodeUpdate {
    fn from(request: UpdateConditionNode) -> Self {
        Self {
            condition: request.condition,
        }
    }
}

/// Builds the changeset persisting an updated node payload.
pub fn node_changeset(kind: &NodeKind) -> UpdateNode {
    match kind {
        NodeKind::Message { text, status } => UpdateNode {
            text: Some(text.clone()),
            status: Some((*status).into()),
            condition: None,
        },
        NodeKind::Condition { condition } => UpdateNode {
            condition: Some((*condition).into()),
            ..Default::default()
        },
        NodeKind::Start | NodeKind::End => UpdateNode::default(),
    }
}

//! Node types of a conversation workflow.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::id::NodeId;

/// Delivery status of a message node.
///
/// Condition nodes compare the status of the most recently visited message
/// against an expected value of this same type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MessageStatus {
    /// The message has not been sent yet.
    Open,
    /// The message is queued for delivery.
    Pending,
    /// The message has been delivered.
    Sent,
}

/// Discriminant of a [`NodeKind`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumIter, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NodeType {
    /// Entry point of the workflow.
    Start,
    /// Emits a message.
    Message,
    /// Branches on the status of the last message.
    Condition,
    /// Terminal node.
    End,
}

/// Payload carried by a node, tagged by its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node_type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Entry point of the workflow.
    Start,
    /// Message with its current delivery status.
    Message {
        /// Message text. May be empty.
        text: String,
        /// Current delivery status.
        status: MessageStatus,
    },
    /// Branch on the last message status.
    Condition {
        /// Status the last message must have for the `yes` branch to be taken.
        condition: MessageStatus,
    },
    /// Terminal node.
    End,
}

impl NodeKind {
    /// Creates a message payload.
    pub fn message(text: impl Into<String>, status: MessageStatus) -> Self {
        Self::Message {
            text: text.into(),
            status,
        }
    }

    /// Creates a condition payload.
    pub fn condition(condition: MessageStatus) -> Self {
        Self::Condition { condition }
    }

    /// Returns the type discriminant.
    pub const fn node_type(&self) -> NodeType {
        match self {
            Self::Start => NodeType::Start,
            Self::Message { .. } => NodeType::Message,
            Self::Condition { .. } => NodeType::Condition,
            Self::End => NodeType::End,
        }
    }

    /// Returns the delivery status if this is a message.
    pub const fn status(&self) -> Option<MessageStatus> {
        match self {
            Self::Message { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the expected status if this is a condition.
    pub const fn expected_status(&self) -> Option<MessageStatus> {
        match self {
            Self::Condition { condition } => Some(*condition),
            _ => None,
        }
    }
}

/// A node of a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Node identifier.
    pub id: NodeId,
    /// Type and payload.
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    /// Creates a node.
    pub fn new(id: impl Into<NodeId>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Creates a start node.
    pub fn start(id: impl Into<NodeId>) -> Self {
        Self::new(id, NodeKind::Start)
    }

    /// Creates an end node.
    pub fn end(id: impl Into<NodeId>) -> Self {
        Self::new(id, NodeKind::End)
    }

    /// Creates a message node.
    pub fn message(id: impl Into<NodeId>, text: impl Into<String>, status: MessageStatus) -> Self {
        Self::new(id, NodeKind::message(text, status))
    }

    /// Creates a condition node.
    pub fn condition(id: impl Into<NodeId>, condition: MessageStatus) -> Self {
        Self::new(id, NodeKind::condition(condition))
    }

    /// Returns the type discriminant.
    #[inline]
    pub const fn node_type(&self) -> NodeType {
        self.kind.node_type()
    }

    /// Returns whether this is the start node.
    #[inline]
    pub const fn is_start(&self) -> bool {
        matches!(self.kind, NodeKind::Start)
    }

    /// Returns whether this is the end node.
    #[inline]
    pub const fn is_end(&self) -> bool {
        matches!(self.kind, NodeKind::End)
    }

    /// Returns whether this node carries a message.
    #[inline]
    pub const fn is_message(&self) -> bool {
        matches!(self.kind, NodeKind::Message { .. })
    }

    /// Returns whether this node branches on a status.
    #[inline]
    pub const fn is_condition(&self) -> bool {
        matches!(self.kind, NodeKind::Condition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_predicates() {
        assert!(Node::start(1).is_start());
        assert!(Node::end(2).is_end());
        assert!(Node::message(3, "Hi", MessageStatus::Open).is_message());
        assert!(Node::condition(4, MessageStatus::Sent).is_condition());
        assert!(!Node::start(1).is_end());
    }

    #[test]
    fn test_node_type_strings() {
        assert_eq!(NodeType::Condition.to_string(), "condition");
        assert_eq!("end".parse::<NodeType>().unwrap(), NodeType::End);
        assert_eq!("sent".parse::<MessageStatus>().unwrap(), MessageStatus::Sent);
        assert!("Sent".parse::<MessageStatus>().is_err());
    }

    #[test]
    fn test_node_serde_shape() {
        let node = Node::message(2, "hello", MessageStatus::Open);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 2,
                "node_type": "message",
                "text": "hello",
                "status": "open",
            })
        );

        let parsed: Node =
            serde_json::from_value(serde_json::json!({"id": 3, "node_type": "condition", "condition": "sent"}))
                .unwrap();
        assert_eq!(parsed.kind.expected_status(), Some(MessageStatus::Sent));
        assert!(parsed.is_condition());
    }

    #[test]
    fn test_payload_accessors() {
        assert_eq!(Node::start(1).kind.status(), None);
        assert_eq!(
            Node::message(2, "", MessageStatus::Pending).kind.status(),
            Some(MessageStatus::Pending)
        );
        assert_eq!(Node::end(3).node_type(), NodeType::End);
    }
}

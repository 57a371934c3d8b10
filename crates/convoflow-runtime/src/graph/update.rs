//! Partial updates for message and condition nodes.
//!
//! Each node type has its own update struct with one optional field per
//! mutable attribute. `Some` always assigns (an empty text included) and
//! `None` leaves the attribute untouched.

use serde::{Deserialize, Serialize};

use super::node::{MessageStatus, Node, NodeKind, NodeType};
use crate::error::UpdateError;

/// Partial update of a message node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageNodeUpdate {
    /// New text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// New delivery status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
}

impl MessageNodeUpdate {
    /// Returns whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.status.is_none()
    }
}

/// Partial update of a condition node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionNodeUpdate {
    /// New expected status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<MessageStatus>,
}

impl ConditionNodeUpdate {
    /// Returns whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.condition.is_none()
    }
}

/// Update targeting one node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeUpdate {
    Message(MessageNodeUpdate),
    Condition(ConditionNodeUpdate),
}

impl NodeUpdate {
    /// Returns the node type this update applies to.
    pub const fn target_type(&self) -> NodeType {
        match self {
            Self::Message(_) => NodeType::Message,
            Self::Condition(_) => NodeType::Condition,
        }
    }

    /// Applies the update to `node` in place.
    ///
    /// Fails without touching the node when its type differs from
    /// [`Self::target_type`].
    pub fn apply(self, node: &mut Node) -> Result<(), UpdateError> {
        match (self, &mut node.kind) {
            (Self::Message(update), NodeKind::Message { text, status }) => {
                if let Some(new_text) = update.text {
                    *text = new_text;
                }
                if let Some(new_status) = update.status {
                    *status = new_status;
                }
                Ok(())
            }
            (Self::Condition(update), NodeKind::Condition { condition }) => {
                if let Some(new_condition) = update.condition {
                    *condition = new_condition;
                }
                Ok(())
            }
            (update, kind) => Err(UpdateError::TypeMismatch {
                node_id: node.id,
                expected: update.target_type(),
                actual: kind.node_type(),
            }),
        }
    }
}

impl From<MessageNodeUpdate> for NodeUpdate {
    fn from(update: MessageNodeUpdate) -> Self {
        Self::Message(update)
    }
}

impl From<ConditionNodeUpdate> for NodeUpdate {
    fn from(update: ConditionNodeUpdate) -> Self {
        Self::Condition(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_update_assigns_empty_text() {
        let mut node = Node::message(2, "hello", MessageStatus::Open);
        let update = MessageNodeUpdate {
            text: Some(String::new()),
            status: None,
        };

        NodeUpdate::from(update).apply(&mut node).unwrap();
        assert_eq!(node.kind, NodeKind::message("", MessageStatus::Open));
    }

    #[test]
    fn test_message_update_partial() {
        let mut node = Node::message(2, "hello", MessageStatus::Open);
        let update = MessageNodeUpdate {
            text: None,
            status: Some(MessageStatus::Sent),
        };

        NodeUpdate::from(update).apply(&mut node).unwrap();
        assert_eq!(node.kind, NodeKind::message("hello", MessageStatus::Sent));
    }

    #[test]
    fn test_condition_update() {
        let mut node = Node::condition(3, MessageStatus::Sent);
        let update = ConditionNodeUpdate {
            condition: Some(MessageStatus::Pending),
        };

        NodeUpdate::from(update).apply(&mut node).unwrap();
        assert_eq!(node.kind.expected_status(), Some(MessageStatus::Pending));
        assert!(ConditionNodeUpdate::default().is_empty());
    }

    #[test]
    fn test_update_type_mismatch() {
        let mut node = Node::condition(3, MessageStatus::Sent);
        let before = node.clone();
        let update = MessageNodeUpdate {
            text: Some("x".into()),
            status: None,
        };

        let err = NodeUpdate::from(update).apply(&mut node).unwrap_err();
        assert!(matches!(
            err,
            UpdateError::TypeMismatch {
                expected: NodeType::Message,
                actual: NodeType::Condition,
                ..
            }
        ));
        assert_eq!(node, before);
    }
}

//! Node model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::nodes;
use crate::types::{MessageStatus, NodeType};

/// Node model storing every node type in a single table.
///
/// Payload columns are only populated for the node type that owns them:
/// `text` and `status` for messages, `condition` for conditions.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = nodes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Node {
    /// Unique node identifier.
    pub id: i32,
    /// Reference to the owning workflow.
    pub workflow_id: i32,
    /// Node type.
    pub node_type: NodeType,
    /// Message text.
    pub text: Option<String>,
    /// Message delivery status.
    pub status: Option<MessageStatus>,
    /// Expected status of a condition.
    pub condition: Option<MessageStatus>,
    /// Timestamp when the node was created.
    pub created_at: Timestamp,
    /// Timestamp when the node was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new node.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = nodes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewNode {
    /// Workflow ID (required).
    pub workflow_id: i32,
    /// Node type.
    pub node_type: NodeType,
    /// Message text.
    pub text: Option<String>,
    /// Message delivery status.
    pub status: Option<MessageStatus>,
    /// Expected status of a condition.
    pub condition: Option<MessageStatus>,
}

/// Data for updating a node.
///
/// Only the columns of the node's own type should be set; the check
/// constraints reject the rest.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = nodes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateNode {
    /// Message text.
    pub text: Option<String>,
    /// Message delivery status.
    pub status: Option<MessageStatus>,
    /// Expected status of a condition.
    pub condition: Option<MessageStatus>,
}

impl NewNode {
    /// Creates a payload-less node (start or end).
    pub fn marker(workflow_id: i32, node_type: NodeType) -> Self {
        Self {
            workflow_id,
            node_type,
            text: None,
            status: None,
            condition: None,
        }
    }

    /// Creates a message node.
    pub fn message(workflow_id: i32, text: impl Into<String>, status: MessageStatus) -> Self {
        Self {
            text: Some(text.into()),
            status: Some(status),
            ..Self::marker(workflow_id, NodeType::Message)
        }
    }

    /// Creates a condition node.
    pub fn condition(workflow_id: i32, condition: MessageStatus) -> Self {
        Self {
            condition: Some(condition),
            ..Self::marker(workflow_id, NodeType::Condition)
        }
    }
}

impl UpdateNode {
    /// Returns whether the changeset is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.status.is_none() && self.condition.is_none()
    }
}

impl Node {
    /// Returns whether the node is a start node.
    #[inline]
    pub fn is_start(&self) -> bool {
        self.node_type == NodeType::Start
    }

    /// Returns whether the node is an end node.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.node_type == NodeType::End
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_payloads() {
        let node = NewNode::message(1, "hello", MessageStatus::Pending);
        assert_eq!(node.node_type, NodeType::Message);
        assert_eq!(node.text.as_deref(), Some("hello"));
        assert_eq!(node.condition, None);

        let node = NewNode::condition(1, MessageStatus::Sent);
        assert_eq!(node.node_type, NodeType::Condition);
        assert_eq!(node.text, None);
        assert_eq!(node.condition, Some(MessageStatus::Sent));

        let node = NewNode::marker(1, NodeType::End);
        assert!(node.node_type.is_marker());
    }

    #[test]
    fn test_update_node_is_empty() {
        assert!(UpdateNode::default().is_empty());
        let update = UpdateNode {
            text: Some(String::new()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}

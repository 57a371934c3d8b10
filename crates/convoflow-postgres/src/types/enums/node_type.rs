//! Node type enumeration stored in the `nodes.node_type` column.

use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Defines the role of a node within a workflow.
///
/// This enumeration corresponds to the `NODE_TYPE` PostgreSQL enum. The payload
/// columns a row may carry depend on this value and are enforced by check
/// constraints.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::NodeType"]
pub enum NodeType {
    /// Workflow entry point
    #[db_rename = "start"]
    #[serde(rename = "start")]
    #[strum(serialize = "start")]
    Start,

    /// Message with text and delivery status
    #[db_rename = "message"]
    #[serde(rename = "message")]
    #[strum(serialize = "message")]
    Message,

    /// Branch on the last message status
    #[db_rename = "condition"]
    #[serde(rename = "condition")]
    #[strum(serialize = "condition")]
    Condition,

    /// Workflow terminal node
    #[db_rename = "end"]
    #[serde(rename = "end")]
    #[strum(serialize = "end")]
    End,
}

impl NodeType {
    /// Returns whether nodes of this type carry no payload.
    #[inline]
    pub fn is_marker(self) -> bool {
        matches!(self, NodeType::Start | NodeType::End)
    }
}

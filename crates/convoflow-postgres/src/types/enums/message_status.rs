//! Message status enumeration shared by message and condition nodes.

use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Delivery status of a message.
///
/// This enumeration corresponds to the `MESSAGE_STATUS` PostgreSQL enum and is
/// stored both as the status of a message node and as the expected status of a
/// condition node.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
#[derive(Serialize, Deserialize, DbEnum, Display, EnumIter, EnumString)]
#[ExistingTypePath = "crate::schema::sql_types::MessageStatus"]
pub enum MessageStatus {
    /// Message not sent yet
    #[db_rename = "open"]
    #[serde(rename = "open")]
    #[strum(serialize = "open")]
    #[default]
    Open,

    /// Message queued for delivery
    #[db_rename = "pending"]
    #[serde(rename = "pending")]
    #[strum(serialize = "pending")]
    Pending,

    /// Message delivered
    #[db_rename = "sent"]
    #[serde(rename = "sent")]
    #[strum(serialize = "sent")]
    Sent,
}

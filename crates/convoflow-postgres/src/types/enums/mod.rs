//! Database enumerations mapped to PostgreSQL enum types.

mod message_status;
mod node_type;

pub use message_status::MessageStatus;
pub use node_type::NodeType;

//! Custom `validator` rules shared by request types.

use convoflow_runtime::graph::NodeType;
use validator::ValidationError;

pub(crate) fn validation_error(code: &'static str, message: &str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.to_string().into());
    error
}

/// Rejects strings made of whitespace only.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(validation_error("blank", "must not be blank"));
    }

    Ok(())
}

/// Accepts only the payload-less node types.
pub(crate) fn marker_node_type(node_type: &NodeType) -> Result<(), ValidationError> {
    match node_type {
        NodeType::Start | NodeType::End => Ok(()),
        NodeType::Message | NodeType::Condition => Err(validation_error(
            "node_type",
            "must be 'start' or 'end'; use /message_nodes or /condition_nodes",
        )),
    }
}

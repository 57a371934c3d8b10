//! Constraint violation to HTTP error conversion, one impl per table.

use convoflow_postgres::types::{EdgeConstraints, NodeConstraints, WorkflowConstraints};

use crate::handler::{Error, ErrorKind};

impl From<WorkflowConstraints> for Error<'static> {
    fn from(c: WorkflowConstraints) -> Self {
        let error = match c {
            WorkflowConstraints::NameNotBlank => {
                ErrorKind::BadRequest.with_message("Workflow name cannot be blank")
            }
            WorkflowConstraints::NameLength => {
                ErrorKind::BadRequest.with_message("Workflow name is too long")
            }
            WorkflowConstraints::UpdatedAfterCreated => ErrorKind::InternalServerError.into_error(),
        };

        error.with_resource("workflow")
    }
}

impl From<NodeConstraints> for Error<'static> {
    fn from(c: NodeConstraints) -> Self {
        let error = match c {
            NodeConstraints::MessagePayload => {
                ErrorKind::BadRequest.with_message("Message nodes require text and a status")
            }
            NodeConstraints::ConditionPayload => {
                ErrorKind::BadRequest.with_message("Condition nodes require an expected status")
            }
            NodeConstraints::PayloadMatchesType => ErrorKind::BadRequest
                .with_message("Node payload does not match its node type"),
            NodeConstraints::TextLength => {
                ErrorKind::BadRequest.with_message("Message text is too long")
            }
            NodeConstraints::SingleStart => {
                ErrorKind::Conflict.with_message("Workflow already has a start node")
            }
            NodeConstraints::SingleEnd => {
                ErrorKind::Conflict.with_message("Workflow already has an end node")
            }
            NodeConstraints::WorkflowReference => {
                ErrorKind::NotFound.with_message("Workflow not found")
            }
            NodeConstraints::UpdatedAfterCreated => ErrorKind::InternalServerError.into_error(),
        };

        error.with_resource("node")
    }
}

impl From<EdgeConstraints> for Error<'static> {
    fn from(c: EdgeConstraints) -> Self {
        let error = match c {
            EdgeConstraints::NameLength => {
                ErrorKind::BadRequest.with_message("Edge name is too long")
            }
            EdgeConstraints::WorkflowReference => {
                ErrorKind::NotFound.with_message("Workflow not found")
            }
            EdgeConstraints::StartNodeReference => {
                ErrorKind::NotFound.with_message("Start node not found")
            }
            EdgeConstraints::EndNodeReference => {
                ErrorKind::NotFound.with_message("End node not found")
            }
        };

        error.with_resource("edge")
    }
}

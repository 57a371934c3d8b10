//! Workflow engine error to HTTP error conversion.

use convoflow_runtime::{StoreError, WorkflowError};

use crate::TRACING_TARGET_HANDLER;
use crate::handler::{Error, ErrorKind};

impl From<WorkflowError> for Error<'static> {
    fn from(error: WorkflowError) -> Self {
        match error {
            WorkflowError::Structure(_) | WorkflowError::Execution(_) => ErrorKind::BadRequest
                .with_detail(error.to_string())
                .with_resource("workflow"),
            WorkflowError::Update(_) => ErrorKind::BadRequest
                .with_detail(error.to_string())
                .with_resource("node"),
            WorkflowError::Storage(StoreError::NotFound(workflow_id)) => ErrorKind::NotFound
                .with_message(format!("Workflow not found: {workflow_id}"))
                .with_resource("workflow"),
            WorkflowError::Storage(store_error) => {
                tracing::error!(
                    target: TRACING_TARGET_HANDLER,
                    error = %store_error,
                    "Failed to load workflow"
                );
                ErrorKind::InternalServerError.with_context(store_error.to_string())
            }
        }
    }
}

impl From<StoreError> for Error<'static> {
    #[inline]
    fn from(error: StoreError) -> Self {
        WorkflowError::from(error).into()
    }
}

#[cfg(test)]
mod tests {
    use convoflow_runtime::graph::{EdgeId, WorkflowId};
    use convoflow_runtime::{EdgeViolation, ExecutionError, StructuralError};

    use super::*;

    #[test]
    fn test_rule_message_is_preserved() {
        let error: Error = WorkflowError::from(StructuralError::EdgeRejected {
            edge_id: EdgeId::new(9),
            violation: EdgeViolation::ConditionFanOut,
        })
        .into();

        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(
            error.detail(),
            Some("condition node can only have 2 outgoing edges.")
        );
        assert_eq!(error.message(), None);
    }

    #[test]
    fn test_execution_error_is_bad_request() {
        let error: Error = WorkflowError::from(ExecutionError::MissingStartNode).into();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
    }

    #[test]
    fn test_store_errors() {
        let error: Error = StoreError::NotFound(WorkflowId::new(3)).into();
        assert_eq!(error.kind(), ErrorKind::NotFound);

        let error: Error = StoreError::backend("connection reset").into();
        assert_eq!(error.kind(), ErrorKind::InternalServerError);
        assert_eq!(error.context(), Some("storage backend error: connection reset"));
    }
}

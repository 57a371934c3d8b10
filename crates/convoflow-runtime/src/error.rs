//! Workflow error types.

use thiserror::Error;

use crate::graph::{EdgeId, EdgeLabel, NodeId, NodeType, WorkflowId};

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Boxed error used by storage backends.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during workflow operations.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The workflow graph violates a structural rule.
    #[error(transparent)]
    Structure(#[from] StructuralError),

    /// The workflow could not be walked to completion.
    #[error(transparent)]
    Execution(#[from] ExecutionError),

    /// A node update could not be applied.
    #[error(transparent)]
    Update(#[from] UpdateError),

    /// The workflow could not be loaded.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl WorkflowError {
    /// Returns whether the caller can fix the error by editing the workflow.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Structure(_) | Self::Execution(_) | Self::Update(_) => true,
            Self::Storage(error) => error.is_not_found(),
        }
    }
}

/// Rejection of a single edge by the edge validator.
///
/// The display strings are part of the public contract and are returned to
/// HTTP clients verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeViolation {
    #[error("start node can only have one outgoing edge.")]
    StartFanOut,
    #[error("start node can't have incoming edge.")]
    StartIncoming,
    #[error("message node can only have one outgoing edge.")]
    MessageFanOut,
    #[error("condition node can only have 2 outgoing edges.")]
    ConditionFanOut,
    #[error("end node cannot have outgoing edge.")]
    EndOutgoing,
}

/// Structural errors raised while building a workflow graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// Two nodes share the same identifier.
    #[error("node {0} is defined more than once")]
    DuplicateNode(NodeId),

    /// The workflow has more than one start node.
    #[error("workflow can only have one start node.")]
    MultipleStartNodes,

    /// The workflow has more than one end node.
    #[error("workflow can only have one end node.")]
    MultipleEndNodes,

    /// An edge references a node outside the workflow.
    #[error("edge {edge_id} references node {node_id} which is not part of the workflow")]
    UnknownNode {
        /// Offending edge.
        edge_id: EdgeId,
        /// Missing endpoint.
        node_id: NodeId,
    },

    /// An edge was rejected by the edge validator.
    #[error("{violation}")]
    EdgeRejected {
        /// Offending edge.
        edge_id: EdgeId,
        /// Rule that rejected it.
        violation: EdgeViolation,
    },
}

/// Errors raised while resolving the realized path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("workflow has no start node.")]
    MissingStartNode,

    #[error("workflow has no end node.")]
    MissingEndNode,

    /// A start or message node has no outgoing edge.
    #[error("{node_type} node {node_id} has no outgoing edge.")]
    NoSuccessor { node_id: NodeId, node_type: NodeType },

    /// A start or message node has more than one outgoing edge.
    #[error("{node_type} node {node_id} has {count} outgoing edges, expected one.")]
    AmbiguousSuccessor {
        node_id: NodeId,
        node_type: NodeType,
        count: usize,
    },

    /// A condition was reached before any message.
    #[error("condition node {node_id} is not preceded by a message node.")]
    NoPriorMessage { node_id: NodeId },

    /// A condition has no outgoing edge with the selected label.
    #[error("condition node {node_id} has no '{label}' edge.")]
    MissingBranch { node_id: NodeId, label: EdgeLabel },

    /// The walk reached a node that is not part of the graph.
    #[error("node {node_id} is not part of the workflow graph.")]
    UnknownNode { node_id: NodeId },

    /// The walk returned to a node it already visited.
    #[error("cycle detected at node {node_id}.")]
    CycleDetected { node_id: NodeId },
}

/// Errors raised while applying a node update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    /// The update targets another node type.
    #[error("node {node_id} is a {actual} node, not a {expected} node")]
    TypeMismatch {
        node_id: NodeId,
        expected: NodeType,
        actual: NodeType,
    },
}

/// Errors raised by a [`WorkflowStore`](crate::store::WorkflowStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// No workflow has the requested identifier.
    #[error("workflow {0} not found")]
    NotFound(WorkflowId),

    /// The stored data cannot be represented as a workflow.
    #[error("corrupt workflow data: {0}")]
    Corrupt(String),

    /// The backend failed.
    #[error("storage backend error: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    /// Wraps a backend error.
    pub fn backend(error: impl Into<BoxError>) -> Self {
        Self::Backend(error.into())
    }

    /// Returns whether the workflow does not exist.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_violation_messages() {
        let error = WorkflowError::from(StructuralError::EdgeRejected {
            edge_id: EdgeId::new(1),
            violation: EdgeViolation::EndOutgoing,
        });
        assert_eq!(error.to_string(), "end node cannot have outgoing edge.");
        assert!(error.is_client_error());
    }

    #[test]
    fn test_storage_classification() {
        let not_found = WorkflowError::from(StoreError::NotFound(WorkflowId::new(4)));
        assert!(not_found.is_client_error());
        assert_eq!(not_found.to_string(), "workflow 4 not found");

        let backend = WorkflowError::from(StoreError::backend("connection reset"));
        assert!(!backend.is_client_error());
    }
}

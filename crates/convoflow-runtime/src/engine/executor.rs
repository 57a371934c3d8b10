//! Workflow execution entry points.

use crate::TRACING_TARGET_ENGINE;
use crate::error::WorkflowResult;
use crate::graph::{NodeId, Workflow, WorkflowGraph, WorkflowId};
use crate::store::WorkflowStore;

use super::resolve_path;

/// Builds and validates the graph of `workflow`, then resolves its path.
///
/// Nothing is returned unless both steps succeed.
pub fn execute(workflow: &Workflow) -> WorkflowResult<Vec<NodeId>> {
    let graph = WorkflowGraph::build(workflow)?;
    let path = resolve_path(&graph)?;

    tracing::debug!(
        target: TRACING_TARGET_ENGINE,
        workflow_id = %workflow.id,
        steps = path.len(),
        "Workflow path resolved"
    );

    Ok(path)
}

/// Loads a workflow from `store` and executes it.
#[tracing::instrument(skip(store), target = TRACING_TARGET_ENGINE)]
pub async fn execute_stored<S>(store: &mut S, workflow_id: WorkflowId) -> WorkflowResult<Vec<NodeId>>
where
    S: WorkflowStore,
{
    let workflow = store.get_workflow(workflow_id).await?;
    execute(&workflow).inspect_err(|error| {
        tracing::info!(
            target: TRACING_TARGET_ENGINE,
            workflow_id = %workflow_id,
            %error,
            "Workflow execution rejected"
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkflowError;
    use crate::graph::{Edge, MessageStatus, Node};
    use crate::store::MemoryStore;

    fn linear() -> Workflow {
        Workflow::new(5, "linear")
            .with_node(Node::start(1))
            .with_node(Node::message(2, "hello", MessageStatus::Open))
            .with_node(Node::end(3))
            .with_edge(Edge::new(1, 1, 2))
            .with_edge(Edge::new(2, 2, 3))
    }

    #[tokio::test]
    async fn test_execute_stored() -> anyhow::Result<()> {
        let mut store = MemoryStore::new();
        store.insert(linear());

        let path = execute_stored(&mut store, WorkflowId::new(5)).await?;
        assert_eq!(path, vec![NodeId::new(1), NodeId::new(2), NodeId::new(3)]);
        Ok(())
    }

    #[tokio::test]
    async fn test_execute_stored_not_found() -> anyhow::Result<()> {
        let mut store = MemoryStore::new();
        let error = execute_stored(&mut store, WorkflowId::new(5))
            .await
            .unwrap_err();
        assert!(matches!(error, WorkflowError::Storage(e) if e.is_not_found()));
        Ok(())
    }

    #[test]
    fn test_execute_rejects_invalid_structure() {
        let workflow = linear().with_edge(Edge::new(3, 3, 2));
        let error = execute(&workflow).unwrap_err();
        assert!(matches!(error, WorkflowError::Structure(_)));
    }
}

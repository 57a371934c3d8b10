//! In-memory workflow store.

use std::collections::HashMap;

use super::WorkflowStore;
use crate::error::StoreError;
use crate::graph::{Workflow, WorkflowId};

/// Workflow store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    workflows: HashMap<WorkflowId, Workflow>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a workflow, returning the previous one.
    pub fn insert(&mut self, workflow: Workflow) -> Option<Workflow> {
        self.workflows.insert(workflow.id, workflow)
    }

    /// Removes a workflow.
    pub fn remove(&mut self, workflow_id: WorkflowId) -> Option<Workflow> {
        self.workflows.remove(&workflow_id)
    }

    /// Returns the number of stored workflows.
    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    /// Returns whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

impl FromIterator<Workflow> for MemoryStore {
    fn from_iter<I: IntoIterator<Item = Workflow>>(iter: I) -> Self {
        let workflows = iter
            .into_iter()
            .map(|workflow| (workflow.id, workflow))
            .collect();
        Self { workflows }
    }
}

impl WorkflowStore for MemoryStore {
    async fn get_workflow(&mut self, workflow_id: WorkflowId) -> Result<Workflow, StoreError> {
        self.workflows
            .get(&workflow_id)
            .cloned()
            .ok_or(StoreError::NotFound(workflow_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store_roundtrip() -> anyhow::Result<()> {
        let mut store: MemoryStore = [Workflow::new(1, "a"), Workflow::new(2, "b")]
            .into_iter()
            .collect();
        assert_eq!(store.len(), 2);

        let workflow = store.get_workflow(WorkflowId::new(2)).await?;
        assert_eq!(workflow.name, "b");

        store.remove(WorkflowId::new(2));
        let missing = store.get_workflow(WorkflowId::new(2)).await;
        assert!(matches!(missing, Err(StoreError::NotFound(id)) if id.get() == 2));
        Ok(())
    }
}

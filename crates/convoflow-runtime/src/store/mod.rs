//! Storage seam for loading workflows.
//!
//! The executor never reaches for a global session: every call receives the
//! store it reads from. [`MemoryStore`] backs tests and embedders; the
//! Postgres connection implements the trait in [`postgres`].

mod memory;
mod postgres;

use std::future::Future;

pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::graph::{Workflow, WorkflowId};

/// Source of workflow snapshots.
pub trait WorkflowStore {
    /// Loads a workflow with all of its nodes and edges.
    ///
    /// Nodes and edges are returned in insertion order.
    fn get_workflow(
        &mut self,
        workflow_id: WorkflowId,
    ) -> impl Future<Output = Result<Workflow, StoreError>> + Send;
}

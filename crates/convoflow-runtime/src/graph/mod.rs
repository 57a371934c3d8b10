//! Workflow graph structures and node types.
//!
//! This module provides the graph representation for workflows:
//! - [`Workflow`]: Unvalidated snapshot of nodes and edges, as stored
//! - [`WorkflowGraph`]: Validated directed graph built from a workflow
//! - [`Node`] and [`NodeKind`]: Start, message, condition and end nodes
//! - [`Edge`] and [`EdgeLabel`]: Connections and their branch labels
//! - [`NodeUpdate`]: Typed partial updates for message and condition nodes

#[allow(clippy::module_inception)]
mod graph;
mod id;
mod edge;
mod node;
mod update;
mod workflow;

pub use edge::{Edge, EdgeData, EdgeLabel};
pub use graph::WorkflowGraph;
pub use id::{EdgeId, NodeId, WorkflowId};
pub use node::{MessageStatus, Node, NodeKind, NodeType};
pub use update::{ConditionNodeUpdate, MessageNodeUpdate, NodeUpdate};
pub use workflow::Workflow;

//! Workflow aggregate: a named set of nodes and edges.

use serde::{Deserialize, Serialize};

use super::edge::Edge;
use super::id::{NodeId, WorkflowId};
use super::node::Node;

/// A workflow as loaded from storage.
///
/// This is an unvalidated snapshot. Structural rules are only enforced when a
/// [`WorkflowGraph`](super::WorkflowGraph) is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    /// Workflow identifier.
    pub id: WorkflowId,
    /// Human-readable name.
    pub name: String,
    /// Nodes in storage order.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Edges in storage order. Insertion order matters for validation.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Workflow {
    /// Creates an empty workflow.
    pub fn new(id: impl Into<WorkflowId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Appends a node.
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Appends an edge.
    pub fn with_edge(mut self, edge: Edge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Returns the node with the given id.
    pub fn find_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Returns a mutable reference to the node with the given id.
    pub fn find_node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    /// Returns all start nodes.
    pub fn start_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.is_start())
    }

    /// Returns all end nodes.
    pub fn end_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|node| node.is_end())
    }
}

//! Workflow graph runtime representation.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use super::edge::{Edge, EdgeData, EdgeLabel};
use super::id::{NodeId, WorkflowId};
use super::node::{NodeKind, NodeType};
use super::workflow::Workflow;
use crate::TRACING_TARGET_GRAPH;
use crate::engine::validate_edge;
use crate::error::{StructuralError, WorkflowResult};

/// A validated workflow graph.
///
/// Internally uses petgraph's `DiGraph`. Every edge in the graph has passed
/// the edge validator against the graph as it stood before its insertion.
#[derive(Debug, Clone, Default)]
pub struct WorkflowGraph {
    /// The underlying directed graph.
    graph: DiGraph<NodeKind, EdgeData>,
    /// Mapping from NodeId to petgraph's NodeIndex.
    node_indices: HashMap<NodeId, NodeIndex>,
    /// Reverse mapping from NodeIndex to NodeId.
    index_to_id: HashMap<NodeIndex, NodeId>,
    /// Workflow this graph was built from.
    workflow_id: Option<WorkflowId>,
}

impl WorkflowGraph {
    /// Creates a new empty workflow graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a workflow snapshot.
    ///
    /// Nodes are added first. Edges are then validated and inserted one by
    /// one in their stored order; the first rejected edge aborts the build.
    pub fn build(workflow: &Workflow) -> WorkflowResult<Self> {
        let mut graph = Self {
            workflow_id: Some(workflow.id),
            ..Self::default()
        };

        let mut has_start = false;
        let mut has_end = false;
        for node in &workflow.nodes {
            match node.node_type() {
                NodeType::Start if has_start => {
                    return Err(StructuralError::MultipleStartNodes.into());
                }
                NodeType::End if has_end => {
                    return Err(StructuralError::MultipleEndNodes.into());
                }
                NodeType::Start => has_start = true,
                NodeType::End => has_end = true,
                _ => {}
            }

            graph.add_node_with_id(node.id, node.kind.clone())?;
        }

        for edge in &workflow.edges {
            graph.add_edge(edge)?;
        }

        tracing::debug!(
            target: TRACING_TARGET_GRAPH,
            workflow_id = %workflow.id,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "Workflow graph built"
        );

        Ok(graph)
    }

    /// Returns the workflow this graph was built from.
    pub fn workflow_id(&self) -> Option<WorkflowId> {
        self.workflow_id
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns whether the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Adds a node with a specific ID.
    pub fn add_node_with_id(&mut self, id: NodeId, kind: NodeKind) -> WorkflowResult<()> {
        if self.node_indices.contains_key(&id) {
            return Err(StructuralError::DuplicateNode(id).into());
        }

        let index = self.graph.add_node(kind);
        self.node_indices.insert(id, index);
        self.index_to_id.insert(index, id);
        Ok(())
    }

    /// Validates and inserts an edge.
    ///
    /// Both endpoints must already be nodes of this graph. On rejection the
    /// graph is left unchanged.
    pub fn add_edge(&mut self, edge: &Edge) -> WorkflowResult<()> {
        let unknown = |node_id| StructuralError::UnknownNode {
            edge_id: edge.id,
            node_id,
        };

        let from_index = *self
            .node_indices
            .get(&edge.from)
            .ok_or_else(|| unknown(edge.from))?;
        let to_index = *self
            .node_indices
            .get(&edge.to)
            .ok_or_else(|| unknown(edge.to))?;

        let source = self.graph[from_index].node_type();
        let target = self.graph[to_index].node_type();
        let successors = self
            .graph
            .edges_directed(from_index, Direction::Outgoing)
            .count();

        validate_edge(source, target, successors).map_err(|violation| {
            tracing::debug!(
                target: TRACING_TARGET_GRAPH,
                edge_id = %edge.id,
                from = %edge.from,
                to = %edge.to,
                %violation,
                "Edge rejected"
            );
            StructuralError::EdgeRejected {
                edge_id: edge.id,
                violation,
            }
        })?;

        self.graph.add_edge(from_index, to_index, EdgeData::from(edge));
        Ok(())
    }

    /// Returns a reference to a node's payload.
    pub fn get_node(&self, id: NodeId) -> Option<&NodeKind> {
        let index = self.node_indices.get(&id)?;
        self.graph.node_weight(*index)
    }

    /// Returns whether a node exists.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node_indices.contains_key(&id)
    }

    /// Returns an iterator over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NodeKind)> {
        self.graph.node_indices().filter_map(|index| {
            let id = self.index_to_id.get(&index)?;
            let kind = self.graph.node_weight(index)?;
            Some((*id, kind))
        })
    }

    /// Returns the outgoing edges of a node as `(target, data)` pairs.
    ///
    /// Unknown nodes have no outgoing edges.
    pub fn outgoing_edges(&self, id: NodeId) -> Vec<(NodeId, &EdgeData)> {
        let Some(index) = self.node_indices.get(&id) else {
            return Vec::new();
        };

        let mut edges: Vec<_> = self
            .graph
            .edges_directed(*index, Direction::Outgoing)
            .filter_map(|edge_ref| {
                let to = *self.index_to_id.get(&edge_ref.target())?;
                Some((edge_ref.id(), to, edge_ref.weight()))
            })
            .collect();

        // petgraph yields outgoing edges newest first.
        edges.sort_by_key(|(edge_index, ..)| *edge_index);
        edges.into_iter().map(|(_, to, data)| (to, data)).collect()
    }

    /// Returns the successors of a node in edge insertion order.
    pub fn successors(&self, id: NodeId) -> Vec<NodeId> {
        self.outgoing_edges(id)
            .into_iter()
            .map(|(to, _)| to)
            .collect()
    }

    /// Returns the number of outgoing edges of a node.
    pub fn successor_count(&self, id: NodeId) -> usize {
        self.node_indices
            .get(&id)
            .map(|index| self.graph.edges_directed(*index, Direction::Outgoing).count())
            .unwrap_or_default()
    }

    /// Returns the target of the outgoing edge carrying `label`.
    pub fn branch_target(&self, id: NodeId, label: EdgeLabel) -> Option<NodeId> {
        self.outgoing_edges(id)
            .into_iter()
            .find(|(_, data)| data.label() == label)
            .map(|(to, _)| to)
    }

    /// Returns the start node, if any.
    pub fn start_node(&self) -> Option<NodeId> {
        self.find_by_type(NodeType::Start)
    }

    /// Returns the end node, if any.
    pub fn end_node(&self) -> Option<NodeId> {
        self.find_by_type(NodeType::End)
    }

    fn find_by_type(&self, node_type: NodeType) -> Option<NodeId> {
        self.nodes()
            .find(|(_, kind)| kind.node_type() == node_type)
            .map(|(id, _)| id)
    }

    /// Returns a reference to the underlying petgraph.
    pub fn inner(&self) -> &DiGraph<NodeKind, EdgeData> {
        &self.graph
    }
}

impl TryFrom<&Workflow> for WorkflowGraph {
    type Error = crate::WorkflowError;

    fn try_from(workflow: &Workflow) -> Result<Self, Self::Error> {
        Self::build(workflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkflowError;
    use crate::error::EdgeViolation;
    use crate::graph::{MessageStatus, Node};

    fn linear() -> Workflow {
        Workflow::new(1, "linear")
            .with_node(Node::start(1))
            .with_node(Node::message(2, "hi", MessageStatus::Open))
            .with_node(Node::end(3))
            .with_edge(Edge::new(1, 1, 2))
            .with_edge(Edge::new(2, 2, 3))
    }

    fn rejection(result: WorkflowResult<WorkflowGraph>) -> EdgeViolation {
        match result {
            Err(WorkflowError::Structure(StructuralError::EdgeRejected { violation, .. })) => {
                violation
            }
            other => panic!("expected edge rejection, got {other:?}"),
        }
    }

    #[test]
    fn test_build_linear() {
        let graph = WorkflowGraph::build(&linear()).unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.start_node(), Some(NodeId::new(1)));
        assert_eq!(graph.end_node(), Some(NodeId::new(3)));
        assert_eq!(graph.successors(NodeId::new(1)), vec![NodeId::new(2)]);
        assert_eq!(graph.workflow_id(), Some(WorkflowId::new(1)));
    }

    #[test]
    fn test_second_start_edge_rejected() {
        let workflow = linear().with_edge(Edge::new(3, 1, 3));
        assert_eq!(
            rejection(WorkflowGraph::build(&workflow)),
            EdgeViolation::StartFanOut
        );
    }

    #[test]
    fn test_edge_into_start_rejected() {
        let workflow = Workflow::new(1, "loop")
            .with_node(Node::start(1))
            .with_node(Node::message(2, "hi", MessageStatus::Open))
            .with_edge(Edge::new(1, 2, 1));
        assert_eq!(
            rejection(WorkflowGraph::build(&workflow)),
            EdgeViolation::StartIncoming
        );
    }

    #[test]
    fn test_end_to_message_rejected() {
        let workflow = linear().with_edge(Edge::new(3, 3, 2));
        let error = WorkflowGraph::build(&workflow).unwrap_err();
        assert_eq!(error.to_string(), "end node cannot have outgoing edge.");
    }

    #[test]
    fn test_third_condition_edge_rejected() {
        let workflow = Workflow::new(1, "fanout")
            .with_node(Node::start(1))
            .with_node(Node::condition(2, MessageStatus::Sent))
            .with_node(Node::message(3, "a", MessageStatus::Open))
            .with_node(Node::message(4, "b", MessageStatus::Open))
            .with_node(Node::message(5, "c", MessageStatus::Open))
            .with_edge(Edge::new(1, 1, 2))
            .with_edge(Edge::new(2, 2, 3).with_name("yes"))
            .with_edge(Edge::new(3, 2, 4).with_name("no"))
            .with_edge(Edge::new(4, 2, 5));
        assert_eq!(
            rejection(WorkflowGraph::build(&workflow)),
            EdgeViolation::ConditionFanOut
        );
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let workflow = linear().with_edge(Edge::new(3, 2, 99));
        let error = WorkflowGraph::build(&workflow).unwrap_err();
        assert!(matches!(
            error,
            WorkflowError::Structure(StructuralError::UnknownNode { node_id, .. })
                if node_id == NodeId::new(99)
        ));
    }

    #[test]
    fn test_duplicate_nodes_rejected() {
        let workflow = linear().with_node(Node::message(2, "dup", MessageStatus::Sent));
        assert!(matches!(
            WorkflowGraph::build(&workflow),
            Err(WorkflowError::Structure(StructuralError::DuplicateNode(_)))
        ));

        let workflow = linear().with_node(Node::start(10));
        assert!(matches!(
            WorkflowGraph::build(&workflow),
            Err(WorkflowError::Structure(StructuralError::MultipleStartNodes))
        ));

        let workflow = linear().with_node(Node::end(11));
        assert!(matches!(
            WorkflowGraph::build(&workflow),
            Err(WorkflowError::Structure(StructuralError::MultipleEndNodes))
        ));
    }

    #[test]
    fn test_failed_add_edge_leaves_graph_unchanged() {
        let mut graph = WorkflowGraph::build(&linear()).unwrap();
        assert!(graph.add_edge(&Edge::new(9, 1, 3)).is_err());
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.successor_count(NodeId::new(1)), 1);
    }

    #[test]
    fn test_branch_target() {
        let workflow = Workflow::new(1, "branch")
            .with_node(Node::condition(1, MessageStatus::Sent))
            .with_node(Node::end(2))
            .with_node(Node::message(3, "x", MessageStatus::Open))
            .with_edge(Edge::new(1, 1, 2).with_name("no"))
            .with_edge(Edge::new(2, 1, 3).with_name("yes"));
        let graph = WorkflowGraph::build(&workflow).unwrap();

        let id = NodeId::new(1);
        assert_eq!(graph.branch_target(id, EdgeLabel::Yes), Some(NodeId::new(3)));
        assert_eq!(graph.branch_target(id, EdgeLabel::No), Some(NodeId::new(2)));
        assert_eq!(graph.successors(id), vec![NodeId::new(2), NodeId::new(3)]);
    }
}

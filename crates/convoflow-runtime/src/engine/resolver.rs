//! Realized path resolution.
//!
//! The resolver walks a validated [`WorkflowGraph`] from its start node to its
//! end node. Message nodes record their status; condition nodes compare the
//! most recent status with their expected one and follow the `yes` or `no`
//! edge accordingly.

use std::collections::HashSet;

use crate::TRACING_TARGET_ENGINE;
use crate::error::{ExecutionError, WorkflowResult};
use crate::graph::{EdgeLabel, MessageStatus, NodeId, NodeKind, WorkflowGraph};

/// Resolves the single path taken through `graph`.
///
/// The returned sequence starts with the start node, ends with the end node
/// and contains every visited node exactly once.
pub fn resolve_path(graph: &WorkflowGraph) -> WorkflowResult<Vec<NodeId>> {
    let mut start = None;
    let mut end = None;
    for (id, kind) in graph.nodes() {
        match kind {
            NodeKind::Start if start.is_none() => start = Some(id),
            NodeKind::End if end.is_none() => end = Some(id),
            _ => {}
        }
    }

    let start = start.ok_or(ExecutionError::MissingStartNode)?;
    if end.is_none() {
        return Err(ExecutionError::MissingEndNode.into());
    }

    let mut path = Vec::with_capacity(graph.node_count());
    let mut visited = HashSet::with_capacity(graph.node_count());
    let mut last_status: Option<MessageStatus> = None;
    let mut current = start;

    loop {
        if !visited.insert(current) {
            return Err(ExecutionError::CycleDetected { node_id: current }.into());
        }
        path.push(current);

        let kind = graph
            .get_node(current)
            .ok_or(ExecutionError::UnknownNode { node_id: current })?;

        current = match kind {
            NodeKind::End => break,
            NodeKind::Start => single_successor(graph, current, kind)?,
            NodeKind::Message { status, .. } => {
                last_status = Some(*status);
                single_successor(graph, current, kind)?
            }
            NodeKind::Condition { condition } => {
                let status =
                    last_status.ok_or(ExecutionError::NoPriorMessage { node_id: current })?;
                let label = EdgeLabel::for_outcome(status == *condition);

                tracing::trace!(
                    target: TRACING_TARGET_ENGINE,
                    node_id = %current,
                    expected = %condition,
                    actual = %status,
                    %label,
                    "Condition evaluated"
                );

                graph
                    .branch_target(current, label)
                    .ok_or(ExecutionError::MissingBranch {
                        node_id: current,
                        label,
                    })?
            }
        };
    }

    Ok(path)
}

fn single_successor(
    graph: &WorkflowGraph,
    node_id: NodeId,
    kind: &NodeKind,
) -> Result<NodeId, ExecutionError> {
    match graph.successors(node_id).as_slice() {
        [next] => Ok(*next),
        [] => Err(ExecutionError::NoSuccessor {
            node_id,
            node_type: kind.node_type(),
        }),
        many => Err(ExecutionError::AmbiguousSuccessor {
            node_id,
            node_type: kind.node_type(),
            count: many.len(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorkflowError;
    use crate::graph::{Edge, Node, NodeType, Workflow};

    fn ids(raw: &[i32]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId::new).collect()
    }

    fn resolve(workflow: &Workflow) -> WorkflowResult<Vec<NodeId>> {
        resolve_path(&WorkflowGraph::build(workflow)?)
    }

    fn branching(message_status: MessageStatus) -> Workflow {
        Workflow::new(1, "branching")
            .with_node(Node::start(1))
            .with_node(Node::message(2, "ping", message_status))
            .with_node(Node::condition(3, MessageStatus::Sent))
            .with_node(Node::message(4, "delivered", MessageStatus::Open))
            .with_node(Node::message(5, "retry", MessageStatus::Open))
            .with_node(Node::end(6))
            .with_edge(Edge::new(1, 1, 2))
            .with_edge(Edge::new(2, 2, 3))
            .with_edge(Edge::new(3, 3, 4).with_name("yes"))
            .with_edge(Edge::new(4, 3, 5).with_name("no"))
            .with_edge(Edge::new(5, 4, 6))
            .with_edge(Edge::new(6, 5, 6))
    }

    #[test]
    fn test_linear_path() {
        let workflow = Workflow::new(1, "linear")
            .with_node(Node::start(10))
            .with_node(Node::message(20, "hello", MessageStatus::Open))
            .with_node(Node::end(30))
            .with_edge(Edge::new(1, 10, 20))
            .with_edge(Edge::new(2, 20, 30));

        assert_eq!(resolve(&workflow).unwrap(), ids(&[10, 20, 30]));
    }

    #[test]
    fn test_condition_follows_yes_and_no() {
        assert_eq!(
            resolve(&branching(MessageStatus::Sent)).unwrap(),
            ids(&[1, 2, 3, 4, 6])
        );
        assert_eq!(
            resolve(&branching(MessageStatus::Open)).unwrap(),
            ids(&[1, 2, 3, 5, 6])
        );
        assert_eq!(
            resolve(&branching(MessageStatus::Pending)).unwrap(),
            ids(&[1, 2, 3, 5, 6])
        );
    }

    #[test]
    fn test_resolution_is_repeatable() {
        let graph = WorkflowGraph::build(&branching(MessageStatus::Open)).unwrap();
        let first = resolve_path(&graph).unwrap();
        let second = resolve_path(&graph).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_start_or_end() {
        let no_start = Workflow::new(1, "no start")
            .with_node(Node::message(1, "x", MessageStatus::Open))
            .with_node(Node::end(2))
            .with_edge(Edge::new(1, 1, 2));
        assert!(matches!(
            resolve(&no_start),
            Err(WorkflowError::Execution(ExecutionError::MissingStartNode))
        ));

        let no_end = Workflow::new(1, "no end")
            .with_node(Node::start(1))
            .with_node(Node::message(2, "x", MessageStatus::Open))
            .with_edge(Edge::new(1, 1, 2));
        assert!(matches!(
            resolve(&no_end),
            Err(WorkflowError::Execution(ExecutionError::MissingEndNode))
        ));
    }

    #[test]
    fn test_condition_before_any_message() {
        let workflow = Workflow::new(1, "eager condition")
            .with_node(Node::start(1))
            .with_node(Node::condition(2, MessageStatus::Sent))
            .with_node(Node::end(3))
            .with_edge(Edge::new(1, 1, 2))
            .with_edge(Edge::new(2, 2, 3).with_name("yes"))
            .with_edge(Edge::new(3, 2, 3).with_name("no"));
        assert!(matches!(
            resolve(&workflow),
            Err(WorkflowError::Execution(ExecutionError::NoPriorMessage { node_id }))
                if node_id == NodeId::new(2)
        ));
    }

    #[test]
    fn test_missing_branch_label() {
        let workflow = Workflow::new(1, "unlabelled")
            .with_node(Node::start(1))
            .with_node(Node::message(2, "x", MessageStatus::Sent))
            .with_node(Node::condition(3, MessageStatus::Sent))
            .with_node(Node::end(4))
            .with_edge(Edge::new(1, 1, 2))
            .with_edge(Edge::new(2, 2, 3))
            .with_edge(Edge::new(3, 3, 4).with_name("YES"));
        assert!(matches!(
            resolve(&workflow),
            Err(WorkflowError::Execution(ExecutionError::MissingBranch {
                label: EdgeLabel::Yes,
                ..
            }))
        ));
    }

    #[test]
    fn test_dead_end_message() {
        let workflow = Workflow::new(1, "dead end")
            .with_node(Node::start(1))
            .with_node(Node::message(2, "x", MessageStatus::Sent))
            .with_node(Node::end(3))
            .with_edge(Edge::new(1, 1, 2));
        assert!(matches!(
            resolve(&workflow),
            Err(WorkflowError::Execution(ExecutionError::NoSuccessor {
                node_type: NodeType::Message,
                ..
            }))
        ));
    }

    #[test]
    fn test_cycle_detected() {
        // message -> condition -> (no) back to message
        let workflow = Workflow::new(1, "loop")
            .with_node(Node::start(1))
            .with_node(Node::message(2, "x", MessageStatus::Open))
            .with_node(Node::condition(3, MessageStatus::Sent))
            .with_node(Node::end(4))
            .with_edge(Edge::new(1, 1, 2))
            .with_edge(Edge::new(2, 2, 3))
            .with_edge(Edge::new(3, 3, 4).with_name("yes"))
            .with_edge(Edge::new(4, 3, 2).with_name("no"));
        assert!(matches!(
            resolve(&workflow),
            Err(WorkflowError::Execution(ExecutionError::CycleDetected { node_id }))
                if node_id == NodeId::new(2)
        ));
    }
}

//! End-to-end path resolution over complete workflows.

use convoflow_runtime::graph::MessageNodeUpdate;
use convoflow_runtime::prelude::*;
use convoflow_runtime::{EdgeViolation, StructuralError};

fn ids(path: Vec<NodeId>) -> Vec<i32> {
    path.into_iter().map(NodeId::get).collect()
}

/// One condition whose expected status differs from the last message.
fn single_branch_workflow() -> Workflow {
    Workflow::new(1, "single branch")
        .with_node(Node::start(1))
        .with_node(Node::message(2, "first message", MessageStatus::Open))
        .with_node(Node::condition(3, MessageStatus::Sent))
        .with_node(Node::message(4, "sent path", MessageStatus::Open))
        .with_node(Node::message(5, "fallback path", MessageStatus::Open))
        .with_node(Node::message(6, "follow up", MessageStatus::Open))
        .with_node(Node::end(7))
        .with_edge(Edge::new(1, 1, 2))
        .with_edge(Edge::new(2, 2, 3))
        .with_edge(Edge::new(3, 3, 4).with_name("yes"))
        .with_edge(Edge::new(4, 3, 5).with_name("no"))
        .with_edge(Edge::new(5, 4, 6))
        .with_edge(Edge::new(6, 6, 7))
        .with_edge(Edge::new(7, 5, 7))
}

/// Two chained conditions; the second compares against the same message.
fn nested_branch_workflow() -> Workflow {
    Workflow::new(2, "nested branch")
        .with_node(Node::start(1))
        .with_node(Node::message(2, "first message", MessageStatus::Open))
        .with_node(Node::condition(3, MessageStatus::Sent))
        .with_node(Node::message(4, "sent path", MessageStatus::Open))
        .with_node(Node::condition(5, MessageStatus::Open))
        .with_node(Node::message(6, "open path", MessageStatus::Open))
        .with_node(Node::message(7, "other path", MessageStatus::Open))
        .with_node(Node::end(8))
        .with_edge(Edge::new(1, 1, 2))
        .with_edge(Edge::new(2, 2, 3))
        .with_edge(Edge::new(3, 3, 4).with_name("yes"))
        .with_edge(Edge::new(4, 3, 5).with_name("no"))
        .with_edge(Edge::new(5, 5, 6).with_name("yes"))
        .with_edge(Edge::new(6, 5, 7).with_name("no"))
        .with_edge(Edge::new(7, 7, 8))
        .with_edge(Edge::new(8, 6, 8))
        .with_edge(Edge::new(9, 4, 8))
}

#[test]
fn test_single_branch_takes_no_edge() -> anyhow::Result<()> {
    let path = execute(&single_branch_workflow())?;
    assert_eq!(ids(path), [1, 2, 3, 5, 7]);
    Ok(())
}

#[test]
fn test_nested_branch_takes_no_then_yes() -> anyhow::Result<()> {
    let path = execute(&nested_branch_workflow())?;
    assert_eq!(ids(path), [1, 2, 3, 5, 6, 8]);
    Ok(())
}

#[test]
fn test_updated_status_flips_branch() -> anyhow::Result<()> {
    let mut workflow = single_branch_workflow();
    let message = workflow
        .find_node_mut(NodeId::new(2))
        .ok_or_else(|| anyhow::anyhow!("missing message node"))?;
    NodeUpdate::from(MessageNodeUpdate {
        text: None,
        status: Some(MessageStatus::Sent),
    })
    .apply(message)?;

    let path = execute(&workflow)?;
    assert_eq!(ids(path), [1, 2, 3, 4, 6, 7]);
    Ok(())
}

#[test]
fn test_rejected_edge_carries_violation_message() {
    let workflow = single_branch_workflow().with_edge(Edge::new(10, 2, 5));
    let error = execute(&workflow).unwrap_err();

    assert!(matches!(
        error,
        WorkflowError::Structure(StructuralError::EdgeRejected {
            violation: EdgeViolation::MessageFanOut,
            ..
        })
    ));
    assert_eq!(
        error.to_string(),
        "message node can only have one outgoing edge."
    );
}

#[tokio::test]
async fn test_execute_from_memory_store() -> anyhow::Result<()> {
    let mut store: MemoryStore = [single_branch_workflow(), nested_branch_workflow()]
        .into_iter()
        .collect();

    let first = execute_stored(&mut store, WorkflowId::new(1)).await?;
    let second = execute_stored(&mut store, WorkflowId::new(2)).await?;
    assert_eq!(ids(first), [1, 2, 3, 5, 7]);
    assert_eq!(ids(second), [1, 2, 3, 5, 6, 8]);

    let missing = execute_stored(&mut store, WorkflowId::new(3)).await;
    assert!(matches!(missing, Err(WorkflowError::Storage(ref e)) if e.is_not_found()));
    Ok(())
}

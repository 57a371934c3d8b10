//! Edge handlers.
//!
//! New edges are checked against the workflow they join before they are
//! stored: both endpoints must belong to that workflow, and the graph with
//! the edge appended must still satisfy every edge rule.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use convoflow_postgres::query::{EdgeRepository, NodeRepository};
use convoflow_postgres::PgConn;
use convoflow_runtime::graph::{Edge as GraphEdge, EdgeId, Workflow, WorkflowGraph, WorkflowId};
use convoflow_runtime::store::WorkflowStore;

use super::nodes::node_not_found;
use crate::extract::{Json, Path, PgPool, ValidateJson};
use crate::handler::request::{CreateEdge, EdgePathParams};
use crate::handler::response::Edge;
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for edge operations.
const TRACING_TARGET: &str = "convoflow_server::handler::edges";

/// Placeholder id for an edge that has not been stored yet.
const PROSPECTIVE_EDGE_ID: EdgeId = EdgeId::new(0);

fn edge_not_found(edge_id: i32) -> Error<'static> {
    ErrorKind::NotFound
        .with_message(format!("Edge not found: {edge_id}"))
        .with_resource("edge")
}

/// Rejects the edge unless both endpoints exist in the requested workflow.
async fn ensure_same_workflow(conn: &mut PgConn, request: &CreateEdge) -> Result<()> {
    for node_id in [request.start_node_id, request.end_node_id] {
        let Some(node) = conn.find_node_by_id(node_id).await? else {
            return Err(node_not_found(node_id));
        };

        if node.workflow_id != request.workflow_id {
            return Err(ErrorKind::BadRequest
                .with_message(format!(
                    "Node {node_id} does not belong to workflow {}",
                    request.workflow_id
                ))
                .with_resource("edge"));
        }
    }

    Ok(())
}

/// Loads the workflow and checks the requested edge against it.
async fn validate_prospective_edge(conn: &mut PgConn, request: &CreateEdge) -> Result<()> {
    let workflow = conn
        .get_workflow(WorkflowId::new(request.workflow_id))
        .await?;

    check_prospective_edge(workflow, request)
}

/// Builds the workflow graph with the requested edge appended.
fn check_prospective_edge(mut workflow: Workflow, request: &CreateEdge) -> Result<()> {
    let mut edge = GraphEdge::new(
        PROSPECTIVE_EDGE_ID,
        request.start_node_id,
        request.end_node_id,
    );
    if let Some(name) = &request.name {
        edge = edge.with_name(name.as_str());
    }
    workflow.edges.push(edge);

    WorkflowGraph::build(&workflow).map_err(|error| {
        tracing::info!(
            target: TRACING_TARGET,
            %error,
            "Edge rejected"
        );
        Error::from(error).with_resource("edge")
    })?;

    Ok(())
}

/// Creates an edge between two nodes of the same workflow.
#[tracing::instrument(
    skip_all,
    fields(
        workflow_id = request.workflow_id,
        start_node_id = request.start_node_id,
        end_node_id = request.end_node_id,
    )
)]
async fn create_edge(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateEdge>,
) -> Result<(StatusCode, Json<Edge>)> {
    ensure_same_workflow(&mut conn, &request).await?;
    validate_prospective_edge(&mut conn, &request).await?;

    let edge = conn.create_edge(request.into_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        edge_id = edge.id,
        "Edge created",
    );

    Ok((StatusCode::CREATED, Json(Edge::from_model(edge))))
}

#[tracing::instrument(skip_all, fields(edge_id = path_params.edge_id))]
async fn read_edge(
    Path(path_params): Path<EdgePathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Edge>)> {
    let Some(edge) = conn.find_edge_by_id(path_params.edge_id).await? else {
        return Err(edge_not_found(path_params.edge_id));
    };

    Ok((StatusCode::OK, Json(Edge::from_model(edge))))
}

/// Deletes an edge and responds with it.
#[tracing::instrument(skip_all, fields(edge_id = path_params.edge_id))]
async fn delete_edge(
    Path(path_params): Path<EdgePathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Edge>)> {
    let Some(edge) = conn.find_edge_by_id(path_params.edge_id).await? else {
        return Err(edge_not_found(path_params.edge_id));
    };

    if !conn.delete_edge(path_params.edge_id).await? {
        return Err(edge_not_found(path_params.edge_id));
    }

    tracing::info!(target: TRACING_TARGET, "Edge deleted");

    Ok((StatusCode::OK, Json(Edge::from_model(edge))))
}

/// Returns a [`Router`] with all edge routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/edges", post(create_edge))
        .route("/edges/{edge_id}", get(read_edge).delete(delete_edge))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use convoflow_runtime::graph::{MessageStatus, Node};

    use super::*;
    use crate::handler::test::create_test_server;

    fn request(start_node_id: i32, end_node_id: i32, name: Option<&str>) -> CreateEdge {
        CreateEdge {
            name: name.map(str::to_owned),
            start_node_id,
            end_node_id,
            workflow_id: 1,
        }
    }

    /// start(1) -> message(2), with end(3) and condition(4) unconnected.
    fn workflow() -> Workflow {
        Workflow::new(1, "greeting")
            .with_node(Node::start(1))
            .with_node(Node::message(2, "Hello", MessageStatus::Open))
            .with_node(Node::end(3))
            .with_node(Node::condition(4, MessageStatus::Sent))
            .with_edge(GraphEdge::new(1, 1, 2))
    }

    #[test]
    fn test_valid_edge_is_accepted() {
        assert!(check_prospective_edge(workflow(), &request(2, 3, None)).is_ok());
        assert!(check_prospective_edge(workflow(), &request(4, 3, Some("yes"))).is_ok());
    }

    #[test]
    fn test_second_message_edge_is_rejected() {
        let workflow = workflow().with_edge(GraphEdge::new(2, 2, 4));

        let error = check_prospective_edge(workflow, &request(2, 3, None)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(
            error.detail(),
            Some("message node can only have one outgoing edge.")
        );
        assert_eq!(error.resource(), Some("edge"));
    }

    #[test]
    fn test_incoming_start_edge_is_rejected() {
        let error = check_prospective_edge(workflow(), &request(4, 1, Some("no"))).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.detail(), Some("start node can't have incoming edge."));
    }

    #[test]
    fn test_endpoint_outside_workflow_is_rejected() {
        let error = check_prospective_edge(workflow(), &request(2, 99, None)).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert!(error.detail().is_some_and(|detail| detail.contains("99")));
    }

    #[tokio::test]
    async fn test_non_numeric_edge_id_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/edges/yes").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }
}

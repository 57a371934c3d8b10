//! Start and end node handlers, plus read and delete for every node type.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use convoflow_postgres::query::NodeRepository;

use crate::extract::{Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{CreateNode, NodePathParams, Pagination};
use crate::handler::response::{Node, Nodes};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for node operations.
const TRACING_TARGET: &str = "convoflow_server::handler::nodes";

pub(super) fn node_not_found(node_id: i32) -> Error<'static> {
    ErrorKind::NotFound
        .with_message(format!("Node not found: {node_id}"))
        .with_resource("node")
}

/// Creates a start or end node.
///
/// A workflow holds at most one of each; a second one answers `409`.
#[tracing::instrument(skip_all)]
async fn create_node(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateNode>,
) -> Result<(StatusCode, Json<Node>)> {
    let node = conn.create_node(request.into_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        node_id = node.id,
        workflow_id = node.workflow_id,
        node_type = %node.node_type,
        "Node created",
    );

    Ok((StatusCode::CREATED, Json(Node::from_model(node))))
}

#[tracing::instrument(skip_all)]
async fn list_nodes(
    Query(pagination): Query<Pagination>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Nodes>)> {
    let nodes: Nodes = conn
        .list_nodes(pagination.into())
        .await?
        .into_iter()
        .map(Node::from_model)
        .collect();

    Ok((StatusCode::OK, Json(nodes)))
}

#[tracing::instrument(skip_all, fields(node_id = path_params.node_id))]
async fn read_node(
    Path(path_params): Path<NodePathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Node>)> {
    let Some(node) = conn.find_node_by_id(path_params.node_id).await? else {
        return Err(node_not_found(path_params.node_id));
    };

    Ok((StatusCode::OK, Json(Node::from_model(node))))
}

/// Deletes a node and every edge touching it.
///
/// Responds with the deleted node.
#[tracing::instrument(skip_all, fields(node_id = path_params.node_id))]
async fn delete_node(
    Path(path_params): Path<NodePathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Node>)> {
    let Some(node) = conn.find_node_by_id(path_params.node_id).await? else {
        return Err(node_not_found(path_params.node_id));
    };

    if !conn.delete_node(path_params.node_id).await? {
        return Err(node_not_found(path_params.node_id));
    }

    tracing::info!(target: TRACING_TARGET, "Node deleted");

    Ok((StatusCode::OK, Json(Node::from_model(node))))
}

/// Returns a [`Router`] with all generic node routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/nodes", get(list_nodes).post(create_node))
        .route("/nodes/{node_id}", get(read_node).delete(delete_node))
}

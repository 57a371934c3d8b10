//! Message node handlers.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{post, put};
use convoflow_postgres::query::NodeRepository;
use convoflow_runtime::WorkflowError;
use convoflow_runtime::graph::{MessageNodeUpdate, Node as GraphNode, NodeUpdate};

use super::nodes::node_not_found;
use crate::extract::{Json, Path, PgPool, ValidateJson};
use crate::handler::request::{CreateMessageNode, NodePathParams, UpdateMessageNode, node_changeset};
use crate::handler::response::Node;
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for message node operations.
const TRACING_TARGET: &str = "convoflow_server::handler::message_nodes";

/// Creates a message node. The status defaults to `open`.
#[tracing::instrument(skip_all)]
async fn create_message_node(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateMessageNode>,
) -> Result<(StatusCode, Json<Node>)> {
    let node = conn.create_node(request.into_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        node_id = node.id,
        workflow_id = node.workflow_id,
        "Message node created",
    );

    Ok((StatusCode::CREATED, Json(Node::from_model(node))))
}

/// Updates the text and status of a message node.
///
/// Targeting a node of another type answers `400`.
#[tracing::instrument(skip_all, fields(node_id = path_params.node_id))]
async fn update_message_node(
    Path(path_params): Path<NodePathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<UpdateMessageNode>,
) -> Result<(StatusCode, Json<Node>)> {
    let Some(row) = conn.find_node_by_id(path_params.node_id).await? else {
        return Err(node_not_found(path_params.node_id));
    };

    let mut node = GraphNode::try_from(row)?;
    NodeUpdate::from(MessageNodeUpdate::from(request))
        .apply(&mut node)
        .map_err(WorkflowError::from)?;

    let updated = conn
        .update_node(path_params.node_id, node_changeset(&node.kind))
        .await?
        .ok_or_else(|| node_not_found(path_params.node_id))?;

    tracing::info!(target: TRACING_TARGET, "Message node updated");

    Ok((StatusCode::OK, Json(Node::from_model(updated))))
}

/// Returns a [`Router`] with all message node routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/message_nodes", post(create_message_node))
        .route("/message_nodes/{node_id}", put(update_message_node))
}

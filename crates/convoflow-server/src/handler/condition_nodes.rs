//! Condition node handlers.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{post, put};
use convoflow_postgres::query::NodeRepository;
use convoflow_runtime::WorkflowError;
use convoflow_runtime::graph::{ConditionNodeUpdate, Node as GraphNode, NodeUpdate};

use super::nodes::node_not_found;
use crate::extract::{Json, Path, PgPool, ValidateJson};
use crate::handler::request::{
    CreateConditionNode, NodePathParams, UpdateConditionNode, node_changeset,
};
use crate::handler::response::Node;
use crate::handler::Result;
use crate::service::ServiceState;

/// Tracing target for condition node operations.
const TRACING_TARGET: &str = "convoflow_server::handler::condition_nodes";

#[tracing::instrument(skip_all)]
async fn create_condition_node(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateConditionNode>,
) -> Result<(StatusCode, Json<Node>)> {
    let node = conn.create_node(request.into_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        node_id = node.id,
        workflow_id = node.workflow_id,
        "Condition node created",
    );

    Ok((StatusCode::CREATED, Json(Node::from_model(node))))
}

/// Changes the status a condition expects.
#[tracing::instrument(skip_all, fields(node_id = path_params.node_id))]
async fn update_condition_node(
    Path(path_params): Path<NodePathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<UpdateConditionNode>,
) -> Result<(StatusCode, Json<Node>)> {
    let Some(row) = conn.find_node_by_id(path_params.node_id).await? else {
        return Err(node_not_found(path_params.node_id));
    };

    let mut node = GraphNode::try_from(row)?;
    NodeUpdate::from(ConditionNodeUpdate::from(request))
        .apply(&mut node)
        .map_err(WorkflowError::from)?;

    let updated = conn
        .update_node(path_params.node_id, node_changeset(&node.kind))
        .await?
        .ok_or_else(|| node_not_found(path_params.node_id))?;

    tracing::info!(target: TRACING_TARGET, "Condition node updated");

    Ok((StatusCode::OK, Json(Node::from_model(updated))))
}

/// Returns a [`Router`] with all condition node routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/condition_nodes", post(create_condition_node))
        .route("/condition_nodes/{node_id}", put(update_condition_node))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn test_post_to_node_id_is_not_allowed() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.post("/condition_nodes/4").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
        Ok(())
    }
}

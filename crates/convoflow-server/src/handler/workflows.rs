//! Workflow handlers: CRUD and execution.

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use convoflow_postgres::query::WorkflowRepository;
use convoflow_runtime::engine::execute_stored;
use convoflow_runtime::graph::WorkflowId;

use crate::extract::{Json, Path, PgPool, Query, ValidateJson};
use crate::handler::request::{CreateWorkflow, Pagination, UpdateWorkflow, WorkflowPathParams};
use crate::handler::response::{ExecutionPath, Workflow, Workflows};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for workflow operations.
const TRACING_TARGET: &str = "convoflow_server::handler::workflows";

fn workflow_not_found(workflow_id: i32) -> Error<'static> {
    ErrorKind::NotFound
        .with_message(format!("Workflow not found: {workflow_id}"))
        .with_resource("workflow")
}

/// Creates a new, empty workflow.
#[tracing::instrument(skip_all)]
async fn create_workflow(
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<CreateWorkflow>,
) -> Result<(StatusCode, Json<Workflow>)> {
    let workflow = conn.create_workflow(request.into_model()).await?;

    tracing::info!(
        target: TRACING_TARGET,
        workflow_id = workflow.id,
        "Workflow created",
    );

    Ok((StatusCode::CREATED, Json(Workflow::from_model(workflow))))
}

/// Lists workflows ordered by id.
#[tracing::instrument(skip_all)]
async fn list_workflows(
    Query(pagination): Query<Pagination>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Workflows>)> {
    let workflows: Workflows = conn
        .list_workflows(pagination.into())
        .await?
        .into_iter()
        .map(Workflow::from_model)
        .collect();

    tracing::debug!(
        target: TRACING_TARGET,
        workflow_count = workflows.len(),
        "Workflows listed",
    );

    Ok((StatusCode::OK, Json(workflows)))
}

#[tracing::instrument(skip_all, fields(workflow_id = path_params.workflow_id))]
async fn read_workflow(
    Path(path_params): Path<WorkflowPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Workflow>)> {
    let Some(workflow) = conn.find_workflow_by_id(path_params.workflow_id).await? else {
        return Err(workflow_not_found(path_params.workflow_id));
    };

    Ok((StatusCode::OK, Json(Workflow::from_model(workflow))))
}

/// Renames a workflow.
#[tracing::instrument(skip_all, fields(workflow_id = path_params.workflow_id))]
async fn update_workflow(
    Path(path_params): Path<WorkflowPathParams>,
    PgPool(mut conn): PgPool,
    ValidateJson(request): ValidateJson<UpdateWorkflow>,
) -> Result<(StatusCode, Json<Workflow>)> {
    let workflow = conn
        .update_workflow(path_params.workflow_id, request.into_model())
        .await?
        .ok_or_else(|| workflow_not_found(path_params.workflow_id))?;

    tracing::info!(target: TRACING_TARGET, "Workflow updated");

    Ok((StatusCode::OK, Json(Workflow::from_model(workflow))))
}

/// Deletes a workflow together with its nodes and edges.
///
/// Responds with the deleted workflow.
#[tracing::instrument(skip_all, fields(workflow_id = path_params.workflow_id))]
async fn delete_workflow(
    Path(path_params): Path<WorkflowPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<Workflow>)> {
    let Some(workflow) = conn.find_workflow_by_id(path_params.workflow_id).await? else {
        return Err(workflow_not_found(path_params.workflow_id));
    };

    if !conn.delete_workflow(path_params.workflow_id).await? {
        return Err(workflow_not_found(path_params.workflow_id));
    }

    tracing::info!(target: TRACING_TARGET, "Workflow deleted");

    Ok((StatusCode::OK, Json(Workflow::from_model(workflow))))
}

/// Builds the workflow graph and returns the realized path.
///
/// Structural violations and unresolvable paths answer `400` with the rule
/// that failed.
#[tracing::instrument(skip_all, fields(workflow_id = path_params.workflow_id))]
async fn execute_workflow(
    Path(path_params): Path<WorkflowPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<ExecutionPath>)> {
    let workflow_id = WorkflowId::new(path_params.workflow_id);
    let path = execute_stored(&mut conn, workflow_id).await?;

    tracing::info!(
        target: TRACING_TARGET,
        steps = path.len(),
        "Workflow executed",
    );

    Ok((StatusCode::OK, Json(path)))
}

/// Returns a [`Router`] with all workflow routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/workflows", get(list_workflows).post(create_workflow))
        .route(
            "/workflows/{workflow_id}",
            get(read_workflow)
                .put(update_workflow)
                .delete(delete_workflow),
        )
        .route("/workflows/{workflow_id}/execute", get(execute_workflow))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn test_non_numeric_workflow_id_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/workflows/abc").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server.get("/workflows/abc/execute").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn test_invalid_pagination_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/workflows").add_query_param("limit", "-4").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }
}

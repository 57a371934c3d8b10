//! Workflows repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{NewWorkflow, UpdateWorkflow, Workflow};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Repository for workflow database operations.
pub trait WorkflowRepository {
    /// Creates a new workflow record.
    fn create_workflow(
        &mut self,
        new_workflow: NewWorkflow,
    ) -> impl Future<Output = PgResult<Workflow>> + Send;

    /// Finds a workflow by its unique identifier.
    fn find_workflow_by_id(
        &mut self,
        workflow_id: i32,
    ) -> impl Future<Output = PgResult<Option<Workflow>>> + Send;

    /// Lists workflows ordered by identifier.
    fn list_workflows(
        &mut self,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Workflow>>> + Send;

    /// Updates a workflow, returning `None` when it does not exist.
    fn update_workflow(
        &mut self,
        workflow_id: i32,
        updates: UpdateWorkflow,
    ) -> impl Future<Output = PgResult<Option<Workflow>>> + Send;

    /// Deletes a workflow together with its nodes and edges.
    ///
    /// Returns whether a row was deleted.
    fn delete_workflow(&mut self, workflow_id: i32) -> impl Future<Output = PgResult<bool>> + Send;
}

impl WorkflowRepository for PgConnection {
    async fn create_workflow(&mut self, new_workflow: NewWorkflow) -> PgResult<Workflow> {
        use schema::workflows;

        let workflow = diesel::insert_into(workflows::table)
            .values(&new_workflow)
            .returning(Workflow::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            workflow_id = workflow.id,
            "Workflow created"
        );

        Ok(workflow)
    }

    async fn find_workflow_by_id(&mut self, workflow_id: i32) -> PgResult<Option<Workflow>> {
        use schema::workflows::{self, dsl};

        let workflow = workflows::table
            .filter(dsl::id.eq(workflow_id))
            .select(Workflow::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(workflow)
    }

    async fn list_workflows(&mut self, pagination: OffsetPagination) -> PgResult<Vec<Workflow>> {
        use schema::workflows::{self, dsl};

        let workflows = workflows::table
            .order(dsl::id.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Workflow::as_select())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(workflows)
    }

    async fn update_workflow(
        &mut self,
        workflow_id: i32,
        updates: UpdateWorkflow,
    ) -> PgResult<Option<Workflow>> {
        use schema::workflows::{self, dsl};

        // Diesel refuses empty changesets.
        if updates.is_empty() {
            return self.find_workflow_by_id(workflow_id).await;
        }

        let workflow = diesel::update(workflows::table.filter(dsl::id.eq(workflow_id)))
            .set(&updates)
            .returning(Workflow::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(workflow)
    }

    async fn delete_workflow(&mut self, workflow_id: i32) -> PgResult<bool> {
        use schema::workflows::{self, dsl};

        let deleted = diesel::delete(workflows::table.filter(dsl::id.eq(workflow_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            workflow_id,
            deleted,
            "Workflow deleted"
        );

        Ok(deleted > 0)
    }
}

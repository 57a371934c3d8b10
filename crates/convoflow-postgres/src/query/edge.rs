//! Edges repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{Edge, NewEdge};
use crate::{PgConnection, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Repository for edge database operations.
pub trait EdgeRepository {
    /// Creates a new edge record.
    fn create_edge(&mut self, new_edge: NewEdge) -> impl Future<Output = PgResult<Edge>> + Send;

    /// Finds an edge by its unique identifier.
    fn find_edge_by_id(
        &mut self,
        edge_id: i32,
    ) -> impl Future<Output = PgResult<Option<Edge>>> + Send;

    /// Lists all edges of a workflow in insertion order.
    fn list_workflow_edges(
        &mut self,
        workflow_id: i32,
    ) -> impl Future<Output = PgResult<Vec<Edge>>> + Send;

    /// Deletes an edge.
    ///
    /// Returns whether a row was deleted.
    fn delete_edge(&mut self, edge_id: i32) -> impl Future<Output = PgResult<bool>> + Send;
}

impl EdgeRepository for PgConnection {
    async fn create_edge(&mut self, new_edge: NewEdge) -> PgResult<Edge> {
        use schema::edges;

        let edge = diesel::insert_into(edges::table)
            .values(&new_edge)
            .returning(Edge::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            edge_id = edge.id,
            workflow_id = edge.workflow_id,
            from = edge.start_node_id,
            to = edge.end_node_id,
            "Edge created"
        );

        Ok(edge)
    }

    async fn find_edge_by_id(&mut self, edge_id: i32) -> PgResult<Option<Edge>> {
        use schema::edges::{self, dsl};

        let edge = edges::table
            .filter(dsl::id.eq(edge_id))
            .select(Edge::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(edge)
    }

    async fn list_workflow_edges(&mut self, workflow_id: i32) -> PgResult<Vec<Edge>> {
        use schema::edges::{self, dsl};

        let edges = edges::table
            .filter(dsl::workflow_id.eq(workflow_id))
            .order(dsl::id.asc())
            .select(Edge::as_select())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(edges)
    }

    async fn delete_edge(&mut self, edge_id: i32) -> PgResult<bool> {
        use schema::edges::{self, dsl};

        let deleted = diesel::delete(edges::table.filter(dsl::id.eq(edge_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}

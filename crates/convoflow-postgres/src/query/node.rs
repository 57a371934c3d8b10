//! Nodes repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::model::{NewNode, Node, UpdateNode};
use crate::types::OffsetPagination;
use crate::{PgConnection, PgError, PgResult, TRACING_TARGET_QUERY, schema};

/// Repository for node database operations.
pub trait NodeRepository {
    /// Creates a new node record.
    fn create_node(&mut self, new_node: NewNode) -> impl Future<Output = PgResult<Node>> + Send;

    /// Finds a node by its unique identifier.
    fn find_node_by_id(
        &mut self,
        node_id: i32,
    ) -> impl Future<Output = PgResult<Option<Node>>> + Send;

    /// Lists nodes of every workflow ordered by identifier.
    fn list_nodes(
        &mut self,
        pagination: OffsetPagination,
    ) -> impl Future<Output = PgResult<Vec<Node>>> + Send;

    /// Lists all nodes of a workflow in insertion order.
    fn list_workflow_nodes(
        &mut self,
        workflow_id: i32,
    ) -> impl Future<Output = PgResult<Vec<Node>>> + Send;

    /// Updates a node, returning `None` when it does not exist.
    fn update_node(
        &mut self,
        node_id: i32,
        updates: UpdateNode,
    ) -> impl Future<Output = PgResult<Option<Node>>> + Send;

    /// Deletes a node and every edge touching it.
    ///
    /// Returns whether a row was deleted.
    fn delete_node(&mut self, node_id: i32) -> impl Future<Output = PgResult<bool>> + Send;
}

impl NodeRepository for PgConnection {
    async fn create_node(&mut self, new_node: NewNode) -> PgResult<Node> {
        use schema::nodes;

        let node = diesel::insert_into(nodes::table)
            .values(&new_node)
            .returning(Node::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        tracing::debug!(
            target: TRACING_TARGET_QUERY,
            node_id = node.id,
            workflow_id = node.workflow_id,
            node_type = %node.node_type,
            "Node created"
        );

        Ok(node)
    }

    async fn find_node_by_id(&mut self, node_id: i32) -> PgResult<Option<Node>> {
        use schema::nodes::{self, dsl};

        let node = nodes::table
            .filter(dsl::id.eq(node_id))
            .select(Node::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(node)
    }

    async fn list_nodes(&mut self, pagination: OffsetPagination) -> PgResult<Vec<Node>> {
        use schema::nodes::{self, dsl};

        let nodes = nodes::table
            .order(dsl::id.asc())
            .limit(pagination.limit)
            .offset(pagination.offset)
            .select(Node::as_select())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(nodes)
    }

    async fn list_workflow_nodes(&mut self, workflow_id: i32) -> PgResult<Vec<Node>> {
        use schema::nodes::{self, dsl};

        let nodes = nodes::table
            .filter(dsl::workflow_id.eq(workflow_id))
            .order(dsl::id.asc())
            .select(Node::as_select())
            .load(self)
            .await
            .map_err(PgError::from)?;

        Ok(nodes)
    }

    async fn update_node(&mut self, node_id: i32, updates: UpdateNode) -> PgResult<Option<Node>> {
        use schema::nodes::{self, dsl};

        // Diesel refuses empty changesets.
        if updates.is_empty() {
            return self.find_node_by_id(node_id).await;
        }

        let node = diesel::update(nodes::table.filter(dsl::id.eq(node_id)))
            .set(&updates)
            .returning(Node::as_returning())
            .get_result(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(node)
    }

    async fn delete_node(&mut self, node_id: i32) -> PgResult<bool> {
        use schema::nodes::{self, dsl};

        let deleted = diesel::delete(nodes::table.filter(dsl::id.eq(node_id)))
            .execute(self)
            .await
            .map_err(PgError::from)?;

        Ok(deleted > 0)
    }
}

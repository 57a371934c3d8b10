//! Edge model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::edges;

/// Edge model connecting two nodes of the same workflow.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = edges)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Edge {
    /// Unique edge identifier.
    pub id: i32,
    /// Reference to the owning workflow.
    pub workflow_id: i32,
    /// Optional edge name, `yes`/`no` on condition branches.
    pub name: Option<String>,
    /// Source node.
    pub start_node_id: i32,
    /// Target node.
    pub end_node_id: i32,
    /// Timestamp when the edge was created.
    pub created_at: Timestamp,
}

/// Data for creating a new edge.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = edges)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewEdge {
    /// Workflow ID (required).
    pub workflow_id: i32,
    /// Edge name.
    pub name: Option<String>,
    /// Source node ID (required).
    pub start_node_id: i32,
    /// Target node ID (required).
    pub end_node_id: i32,
}

//! Workflow model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::workflows;

/// Workflow model representing a named conversation flow.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = workflows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Workflow {
    /// Unique workflow identifier.
    pub id: i32,
    /// Workflow name.
    pub name: String,
    /// Timestamp when the workflow was created.
    pub created_at: Timestamp,
    /// Timestamp when the workflow was last updated.
    pub updated_at: Timestamp,
}

/// Data for creating a new workflow.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = workflows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewWorkflow {
    /// Workflow name.
    pub name: String,
}

/// Data for updating a workflow.
#[derive(Debug, Clone, Default, AsChangeset)]
#[diesel(table_name = workflows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UpdateWorkflow {
    /// Workflow name.
    pub name: Option<String>,
}

impl UpdateWorkflow {
    /// Returns whether the changeset is empty.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

//! Database constraint violations organized by table.

mod edges;
mod nodes;
mod workflows;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use self::edges::EdgeConstraints;
pub use self::nodes::NodeConstraints;
pub use self::workflows::WorkflowConstraints;

/// Unified constraint violation enum that can represent any database constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ConstraintViolation {
    Workflow(WorkflowConstraints),
    Node(NodeConstraints),
    Edge(EdgeConstraints),
}

/// Categories of database constraint violations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintCategory {
    /// Data validation constraints (format, length, payload checks).
    Validation,
    /// Chronological integrity constraints (timestamp relationships).
    Chronological,
    /// Uniqueness constraints (unique indexes).
    Uniqueness,
    /// Foreign key constraints.
    Reference,
}

impl ConstraintViolation {
    /// Creates a new [`ConstraintViolation`] from the constraint name.
    ///
    /// Returns `None` if the constraint name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use convoflow_postgres::types::ConstraintViolation;
    ///
    /// let violation = ConstraintViolation::new("nodes_single_start_idx");
    /// assert!(violation.is_some());
    ///
    /// let unknown = ConstraintViolation::new("unknown_constraint");
    /// assert!(unknown.is_none());
    /// ```
    pub fn new(constraint: &str) -> Option<Self> {
        let prefix = constraint.split('_').next()?;
        match prefix {
            "workflows" => WorkflowConstraints::new(constraint).map(Self::Workflow),
            "nodes" => NodeConstraints::new(constraint).map(Self::Node),
            "edges" => EdgeConstraints::new(constraint).map(Self::Edge),
            _ => None,
        }
    }

    /// Returns the table name associated with this constraint.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConstraintViolation::Workflow(_) => "workflows",
            ConstraintViolation::Node(_) => "nodes",
            ConstraintViolation::Edge(_) => "edges",
        }
    }

    /// Returns the category of this constraint violation.
    pub fn constraint_category(&self) -> ConstraintCategory {
        match self {
            ConstraintViolation::Workflow(c) => c.categorize(),
            ConstraintViolation::Node(c) => c.categorize(),
            ConstraintViolation::Edge(c) => c.categorize(),
        }
    }

    /// Returns the underlying constraint name as used in the database.
    #[inline]
    pub fn constraint_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintViolation::Workflow(c) => write!(f, "{}", c),
            ConstraintViolation::Node(c) => write!(f, "{}", c),
            ConstraintViolation::Edge(c) => write!(f, "{}", c),
        }
    }
}

impl From<ConstraintViolation> for String {
    #[inline]
    fn from(val: ConstraintViolation) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for ConstraintViolation {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| format!("Unknown constraint: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_parsing() {
        assert_eq!(
            ConstraintViolation::new("nodes_single_end_idx"),
            Some(ConstraintViolation::Node(NodeConstraints::SingleEnd))
        );
        assert_eq!(
            ConstraintViolation::new("edges_start_node_id_fkey"),
            Some(ConstraintViolation::Edge(EdgeConstraints::StartNodeReference))
        );
        assert_eq!(
            ConstraintViolation::new("workflows_name_not_blank"),
            Some(ConstraintViolation::Workflow(WorkflowConstraints::NameNotBlank))
        );
        assert_eq!(ConstraintViolation::new("unknown_constraint"), None);
        assert_eq!(ConstraintViolation::new("nodes_unknown"), None);
    }

    #[test]
    fn test_constraint_categorization() {
        let violation = ConstraintViolation::Node(NodeConstraints::SingleStart);
        assert_eq!(violation.table_name(), "nodes");
        assert_eq!(
            violation.constraint_category(),
            ConstraintCategory::Uniqueness
        );

        let violation = ConstraintViolation::Edge(EdgeConstraints::EndNodeReference);
        assert_eq!(
            violation.constraint_category(),
            ConstraintCategory::Reference
        );
    }

    #[test]
    fn test_constraint_serde() {
        let violation = ConstraintViolation::Node(NodeConstraints::MessagePayload);
        let json = serde_json::to_string(&violation).unwrap();
        assert_eq!(json, "\"nodes_message_payload\"");
        let back: ConstraintViolation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, violation);
        assert_eq!(violation.constraint_name(), "nodes_message_payload");
    }
}

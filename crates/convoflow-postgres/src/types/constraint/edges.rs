//! Edges table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Edges table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum EdgeConstraints {
    // Edge name validation constraints
    #[strum(serialize = "edges_name_length")]
    NameLength,

    // Edge reference constraints
    #[strum(serialize = "edges_workflow_id_fkey")]
    WorkflowReference,
    #[strum(serialize = "edges_start_node_id_fkey")]
    StartNodeReference,
    #[strum(serialize = "edges_end_node_id_fkey")]
    EndNodeReference,
}

impl EdgeConstraints {
    /// Creates a new [`EdgeConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            EdgeConstraints::NameLength => ConstraintCategory::Validation,
            EdgeConstraints::WorkflowReference
            | EdgeConstraints::StartNodeReference
            | EdgeConstraints::EndNodeReference => ConstraintCategory::Reference,
        }
    }
}

impl From<EdgeConstraints> for String {
    #[inline]
    fn from(val: EdgeConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for EdgeConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

//! Workflows table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Workflows table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum WorkflowConstraints {
    // Workflow name validation constraints
    #[strum(serialize = "workflows_name_not_blank")]
    NameNotBlank,
    #[strum(serialize = "workflows_name_length")]
    NameLength,

    // Workflow chronological constraints
    #[strum(serialize = "workflows_updated_after_created")]
    UpdatedAfterCreated,
}

impl WorkflowConstraints {
    /// Creates a new [`WorkflowConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            WorkflowConstraints::NameNotBlank | WorkflowConstraints::NameLength => {
                ConstraintCategory::Validation
            }
            WorkflowConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,
        }
    }
}

impl From<WorkflowConstraints> for String {
    #[inline]
    fn from(val: WorkflowConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for WorkflowConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

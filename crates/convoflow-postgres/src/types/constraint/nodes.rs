//! Nodes table constraint violations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::ConstraintCategory;

/// Nodes table constraint violations.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[derive(Serialize, Deserialize, Display, EnumIter, EnumString)]
#[serde(into = "String", try_from = "String")]
pub enum NodeConstraints {
    // Node payload constraints
    #[strum(serialize = "nodes_message_payload")]
    MessagePayload,
    #[strum(serialize = "nodes_condition_payload")]
    ConditionPayload,
    #[strum(serialize = "nodes_payload_matches_type")]
    PayloadMatchesType,
    #[strum(serialize = "nodes_text_length")]
    TextLength,

    // Node uniqueness constraints
    #[strum(serialize = "nodes_single_start_idx")]
    SingleStart,
    #[strum(serialize = "nodes_single_end_idx")]
    SingleEnd,

    // Node reference constraints
    #[strum(serialize = "nodes_workflow_id_fkey")]
    WorkflowReference,

    // Node chronological constraints
    #[strum(serialize = "nodes_updated_after_created")]
    UpdatedAfterCreated,
}

impl NodeConstraints {
    /// Creates a new [`NodeConstraints`] from the constraint name.
    pub fn new(constraint: &str) -> Option<Self> {
        constraint.parse().ok()
    }

    /// Returns the category of this constraint violation.
    pub fn categorize(&self) -> ConstraintCategory {
        match self {
            NodeConstraints::MessagePayload
            | NodeConstraints::ConditionPayload
            | NodeConstraints::PayloadMatchesType
            | NodeConstraints::TextLength => ConstraintCategory::Validation,

            NodeConstraints::SingleStart | NodeConstraints::SingleEnd => {
                ConstraintCategory::Uniqueness
            }

            NodeConstraints::WorkflowReference => ConstraintCategory::Reference,

            NodeConstraints::UpdatedAfterCreated => ConstraintCategory::Chronological,
        }
    }
}

impl From<NodeConstraints> for String {
    #[inline]
    fn from(val: NodeConstraints) -> Self {
        val.to_string()
    }
}

impl TryFrom<String> for NodeConstraints {
    type Error = strum::ParseError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

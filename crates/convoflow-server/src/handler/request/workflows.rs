//! Workflow request types.

use convoflow_postgres::model::{NewWorkflow, UpdateWorkflow as UpdateWorkflowModel};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validations::not_blank;

/// Request payload for creating a workflow.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateWorkflow {
    /// Workflow name (1-255 characters).
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: String,
}

impl CreateWorkflow {
    /// Converts this request into a [`NewWorkflow`] model.
    #[inline]
    pub fn into_model(self) -> NewWorkflow {
        NewWorkflow { name: self.name }
    }
}

/// Request payload for renaming a workflow.
#[must_use]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateWorkflow {
    /// New workflow name (1-255 characters).
    #[validate(length(min = 1, max = 255), custom(function = "not_blank"))]
    pub name: Option<String>,
}

impl UpdateWorkflow {
    #[inline]
    pub fn into_model(self) -> UpdateWorkflowModel {
        UpdateWorkflowModel { name: self.name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_name_validation() {
        let valid = CreateWorkflow {
            name: "onboarding".into(),
        };
        assert!(valid.validate().is_ok());

        let blank = CreateWorkflow { name: "   ".into() };
        assert!(blank.validate().is_err());

        let long = CreateWorkflow {
            name: "x".repeat(256),
        };
        assert!(long.validate().is_err());

        assert!(UpdateWorkflow::default().validate().is_ok());
    }
}

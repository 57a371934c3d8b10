//! Contains constraints, enumerations and other custom types.

mod constraint;
mod enums;
mod pagination;

pub use constraint::{
    ConstraintCategory, ConstraintViolation, EdgeConstraints, NodeConstraints,
    WorkflowConstraints,
};
pub use enums::{MessageStatus, NodeType};
pub use pagination::{MAX_LIMIT, OffsetPagination};

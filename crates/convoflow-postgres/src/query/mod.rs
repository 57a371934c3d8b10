//! Repository traits implemented for [`PgConnection`].
//!
//! [`PgConnection`]: crate::PgConnection

mod edge;
mod node;
mod workflow;

pub use edge::EdgeRepository;
pub use node::NodeRepository;
pub use workflow::WorkflowRepository;

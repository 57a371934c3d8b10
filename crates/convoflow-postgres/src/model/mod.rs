//! Database models for workflows, nodes and edges.
//!
//! Each table has a queryable row type, an insertable `New*` type and, where
//! rows are mutable, an `Update*` changeset.

mod edge;
mod node;
mod workflow;

pub use edge::{Edge, NewEdge};
pub use node::{NewNode, Node, UpdateNode};
pub use workflow::{NewWorkflow, UpdateWorkflow, Workflow};

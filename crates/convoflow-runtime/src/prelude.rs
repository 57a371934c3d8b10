//! Prelude module for convenient imports.
//!
//! ```rust
//! use convoflow_runtime::prelude::*;
//! ```

pub use crate::engine::{execute, execute_stored, resolve_path, validate_edge};
pub use crate::error::{WorkflowError, WorkflowResult};
pub use crate::graph::{
    Edge, EdgeLabel, MessageStatus, Node, NodeId, NodeKind, NodeType, NodeUpdate, Workflow,
    WorkflowGraph, WorkflowId,
};
pub use crate::store::{MemoryStore, WorkflowStore};

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod engine;
mod error;
pub mod graph;
pub mod store;

#[doc(hidden)]
pub mod prelude;

pub use error::{
    BoxError, EdgeViolation, ExecutionError, StoreError, StructuralError, UpdateError,
    WorkflowError, WorkflowResult,
};

/// Tracing target for runtime operations.
pub const TRACING_TARGET: &str = "convoflow_runtime";

/// Tracing target for graph construction and edge validation.
pub const TRACING_TARGET_GRAPH: &str = "convoflow_runtime::graph";

/// Tracing target for path resolution.
pub const TRACING_TARGET_ENGINE: &str = "convoflow_runtime::engine";

/// Tracing target for workflow loading.
pub const TRACING_TARGET_STORE: &str = "convoflow_runtime::store";

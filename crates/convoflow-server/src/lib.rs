#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;

pub mod extract;
pub mod handler;
pub mod middleware;
pub mod service;

#[doc(hidden)]
pub mod prelude;

pub use crate::error::{BoxedError, Error, ErrorKind, Result};

/// Tracing target for request handlers.
pub const TRACING_TARGET_HANDLER: &str = "convoflow_server::handler";

/// Tracing target for request extraction.
pub const TRACING_TARGET_EXTRACT: &str = "convoflow_server::extract";

/// Tracing target for service setup and health checks.
pub const TRACING_TARGET_SERVICE: &str = "convoflow_server::service";

//! Workflow validation and execution.
//!
//! - [`validate_edge`]: Ordered fan-in/fan-out rules applied per edge
//! - [`resolve_path`]: Walk from start to end following condition branches
//! - [`execute`]: Build, validate and resolve a workflow in one call

mod executor;
mod resolver;
mod validator;

pub use executor::{execute, execute_stored};
pub use resolver::resolve_path;
pub use validator::validate_edge;

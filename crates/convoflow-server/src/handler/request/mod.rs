//! Request types for HTTP handlers.

mod edges;
mod nodes;
mod paginations;
mod paths;
mod validations;
mod workflows;

pub use edges::*;
pub use nodes::*;
pub use paginations::*;
pub use paths::*;
pub use workflows::*;

//! Response types for HTTP handlers.

mod edges;
mod errors;
mod monitors;
mod nodes;
mod workflows;

pub use edges::*;
pub use errors::*;
pub use monitors::*;
pub use nodes::*;
pub use workflows::*;

//! Prelude module for convenient imports.
//!
//! ```rust
//! use convoflow_server::prelude::*;
//! ```

pub use crate::extract::*;
pub use crate::handler::routes;
pub use crate::middleware::*;
pub use crate::service::*;

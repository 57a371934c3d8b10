//! Request extractors that reject with [`Error`] instead of plain text.
//!
//! - [`Json`] and [`ValidateJson`] for request bodies
//! - [`Path`] and [`Query`] for URL parameters
//! - [`PgPool`] for a pooled database connection
//!
//! [`Error`]: crate::handler::Error

mod pg_pool;
mod reject;

pub use crate::extract::pg_pool::PgPool;
pub use crate::extract::reject::{Json, Path, Query, ValidateJson};

//! HTTP server startup and graceful shutdown.

mod error;
mod http_server;
mod shutdown;

use error::{ServerError, ServerResult};
pub use http_server::serve;
use shutdown::shutdown_signal;

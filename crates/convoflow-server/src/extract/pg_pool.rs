//! Database connection extractor.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use convoflow_postgres::{PgClient, PgConn};
use derive_more::{Deref, DerefMut};

use crate::TRACING_TARGET_EXTRACT;
use crate::handler::{Error, ErrorKind};

/// Extractor that checks a [`PgConn`] out of the pool for one request.
///
/// The connection implements every repository trait as well as
/// [`WorkflowStore`], and returns to the pool when the handler finishes.
///
/// ```rust
/// use convoflow_server::extract::PgPool;
///
/// async fn handler(PgPool(conn): PgPool) {
///     // use conn with the repository traits
/// }
/// ```
///
/// [`WorkflowStore`]: convoflow_runtime::store::WorkflowStore
#[derive(Debug, Deref, DerefMut)]
pub struct PgPool(pub PgConn);

impl<S> FromRequestParts<S> for PgPool
where
    PgClient: FromRef<S>,
    S: Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pg_client = PgClient::from_ref(state);
        let conn = pg_client.get_connection().await.map_err(|e| {
            tracing::error!(
                target: TRACING_TARGET_EXTRACT,
                error = %e,
                "Failed to acquire database connection"
            );
            ErrorKind::ServiceUnavailable
                .with_message("Database connection unavailable")
                .with_context(e.to_string())
        })?;

        Ok(PgPool(conn))
    }
}

//! Health check handler.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use convoflow_postgres::PgClient;
use jiff::Timestamp;

use crate::extract::Json;
use crate::handler::response::{MonitorStatus, ServiceStatus};
use crate::service::{HealthCache, ServiceState};

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "convoflow_server::handler::monitors";

/// Reports whether the service can reach its database.
///
/// Answers `200` when healthy and `503` otherwise; results are cached.
#[tracing::instrument(skip_all)]
async fn health_status(
    State(pg_client): State<PgClient>,
    State(health_cache): State<HealthCache>,
) -> (StatusCode, Json<MonitorStatus>) {
    let is_healthy = health_cache.is_healthy(&pg_client).await;

    tracing::debug!(
        target: TRACING_TARGET,
        is_healthy,
        "Health status checked"
    );

    let (status_code, status) = if is_healthy {
        (StatusCode::OK, ServiceStatus::Healthy)
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, ServiceStatus::Unhealthy)
    };

    let response = MonitorStatus {
        status,
        checked_at: Timestamp::now(),
    };

    (status_code, Json(response))
}

/// Returns a [`Router`] with the health route.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn test_health_reports_unreachable_database() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/health").await;
        response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "unhealthy");
        Ok(())
    }
}

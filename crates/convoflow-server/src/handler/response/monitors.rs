//! Health check response types.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Service health status.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Healthy,
    Unhealthy,
}

/// Health check response.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorStatus {
    /// Overall status of the service.
    pub status: ServiceStatus,
    /// Time the status was reported.
    pub checked_at: Timestamp,
}

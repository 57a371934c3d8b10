//! Application state and dependency injection.

mod config;
mod health;

use convoflow_postgres::PgClient;

pub use crate::service::config::{ServiceConfig, ServiceConfigBuilder};
pub use crate::service::health::HealthCache;
pub use crate::{Error, Result};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    pg_client: PgClient,
    health_cache: HealthCache,
}

impl ServiceState {
    /// Creates state around an existing database client.
    pub fn new(pg_client: PgClient, health_cache: HealthCache) -> Self {
        Self {
            pg_client,
            health_cache,
        }
    }

    /// Connects to every external service named in `config`.
    ///
    /// Pending database migrations are applied before this returns.
    pub async fn from_config(config: &ServiceConfig) -> Result<Self> {
        let pg_client = config.connect_postgres().await?;
        Ok(Self::new(pg_client, config.health_cache()))
    }

    /// Returns the database client.
    #[inline]
    pub fn pg_client(&self) -> &PgClient {
        &self.pg_client
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(pg_client: PgClient);
impl_di!(health_cache: HealthCache);

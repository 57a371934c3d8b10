//! Cached database health checks.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use convoflow_postgres::PgClient;
use tokio::sync::RwLock;

use crate::TRACING_TARGET_SERVICE;

/// Default cache duration for health checks.
const DEFAULT_CACHE_DURATION: Duration = Duration::from_secs(30);

#[derive(Debug)]
struct HealthCacheEntry {
    is_healthy: AtomicBool,
    /// `None` until the first check completes.
    last_check: RwLock<Option<Instant>>,
    cache_duration: Duration,
}

impl HealthCacheEntry {
    fn new(cache_duration: Duration) -> Self {
        Self {
            is_healthy: AtomicBool::new(false),
            last_check: RwLock::new(None),
            cache_duration,
        }
    }

    fn is_fresh(&self, last_check: Option<Instant>, now: Instant) -> bool {
        last_check.is_some_and(|at| now.duration_since(at) < self.cache_duration)
    }

    async fn get_or_update<F, Fut>(&self, check_fn: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = bool>,
    {
        let now = Instant::now();
        let last_check = { *self.last_check.read().await };
        if self.is_fresh(last_check, now) {
            return self.is_healthy.load(Ordering::Relaxed);
        }

        let healthy = check_fn().await;
        self.is_healthy.store(healthy, Ordering::Relaxed);
        *self.last_check.write().await = Some(now);
        healthy
    }
}

/// Database health status cached for a fixed duration.
///
/// Clones share the same cache.
#[derive(Debug, Clone)]
pub struct HealthCache {
    cache: Arc<HealthCacheEntry>,
}

impl HealthCache {
    /// Creates a cache that keeps results for 30 seconds.
    pub fn new() -> Self {
        Self::with_cache_duration(DEFAULT_CACHE_DURATION)
    }

    /// Creates a cache that keeps results for `cache_duration`.
    pub fn with_cache_duration(cache_duration: Duration) -> Self {
        tracing::debug!(
            target: TRACING_TARGET_SERVICE,
            cache_duration_secs = cache_duration.as_secs(),
            "Health cache initialized"
        );

        Self {
            cache: Arc::new(HealthCacheEntry::new(cache_duration)),
        }
    }

    /// Returns whether the database answers, using the cached result when fresh.
    pub async fn is_healthy(&self, pg_client: &PgClient) -> bool {
        self.cache
            .get_or_update(|| check_database(pg_client))
            .await
    }

    /// Returns the last cached result without checking.
    #[inline]
    pub fn get_cached_health(&self) -> bool {
        self.cache.is_healthy.load(Ordering::Relaxed)
    }

    /// Forces the next [`is_healthy`](Self::is_healthy) call to check again.
    pub async fn invalidate(&self) {
        *self.cache.last_check.write().await = None;
    }
}

impl Default for HealthCache {
    fn default() -> Self {
        Self::new()
    }
}

#[tracing::instrument(skip_all, target = TRACING_TARGET_SERVICE)]
async fn check_database(pg_client: &PgClient) -> bool {
    let start = Instant::now();
    let result = pg_client.ping().await;

    match result {
        Ok(()) => {
            tracing::debug!(
                target: TRACING_TARGET_SERVICE,
                duration_ms = start.elapsed().as_millis(),
                "Database health check passed"
            );
            true
        }
        Err(error) => {
            tracing::warn!(
                target: TRACING_TARGET_SERVICE,
                %error,
                duration_ms = start.elapsed().as_millis(),
                "Database health check failed"
            );
            false
        }
    }
}

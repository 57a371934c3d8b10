//! Embedded schema migrations.

use std::time::Instant;

use diesel::migration::{Migration, MigrationSource};
use diesel::pg::Pg;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Applied and pending migration versions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Versions applied by this run, oldest first.
    pub applied_versions: Vec<String>,
    /// Versions embedded in the binary.
    pub known_versions: Vec<String>,
}

impl MigrationStatus {
    /// Returns whether this run applied nothing.
    #[inline]
    pub fn was_up_to_date(&self) -> bool {
        self.applied_versions.is_empty()
    }
}

impl PgClient {
    /// Applies every embedded migration that the database has not seen yet.
    #[tracing::instrument(skip(self), target = TRACING_TARGET_MIGRATION)]
    pub async fn run_pending_migrations(&self) -> PgResult<MigrationStatus> {
        let start = Instant::now();
        let known_versions = embedded_versions()?;

        let conn = self.get_pooled_connection().await?;
        let mut conn: AsyncConnectionWrapper<_> = conn.into();

        let applied = spawn_blocking(move || {
            conn.run_pending_migrations(MIGRATIONS)
                .map(|versions| versions.into_iter().map(|v| v.to_string()).collect::<Vec<_>>())
        })
        .await
        .map_err(|err| PgError::Migration(err.into()))?
        .map_err(|err| {
            tracing::error!(
                target: TRACING_TARGET_MIGRATION,
                error = %err,
                "Database migration failed"
            );
            PgError::Migration(err)
        })?;

        let status = MigrationStatus {
            applied_versions: applied,
            known_versions,
        };

        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?start.elapsed(),
            applied = status.applied_versions.len(),
            known = status.known_versions.len(),
            "Database migrations completed"
        );

        Ok(status)
    }
}

fn embedded_versions() -> PgResult<Vec<String>> {
    let migrations = MigrationSource::<Pg>::migrations(&MIGRATIONS).map_err(PgError::Migration)?;
    Ok(migrations
        .iter()
        .map(|migration| migration.name().version().to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_migrations_are_found() {
        let versions = embedded_versions().unwrap();
        assert_eq!(versions.len(), 1);
        assert!(versions[0].replace('-', "").starts_with("20250601"));
    }
}

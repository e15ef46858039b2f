//! Database migrations

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::DbEngine;

/// Schema steps, applied in order; entry `n` brings the schema to version `n + 1`
const MIGRATIONS: &[&str] = &[
    // lookup indexes for the grouping dimensions
    r#"
    CREATE INDEX IF NOT EXISTS idx_song_artist ON song(artist);
    CREATE INDEX IF NOT EXISTS idx_song_album ON song(album);
    CREATE INDEX IF NOT EXISTS idx_song_genre ON song(genre);
    "#,
];

/// Schema version after every step has run
const CURRENT_VERSION: i32 = MIGRATIONS.len() as i32;

/// Bring the schema up to `CURRENT_VERSION`.
///
/// Each step and its version bump commit together, so an interrupted run
/// resumes at the first step that did not land.
pub async fn run_migrations(engine: &DbEngine) -> Result<()> {
    let pool = engine.pool();
    let from = get_migration_version(pool).await?;

    if from >= CURRENT_VERSION {
        debug!("Schema already at version {}", from);
        return Ok(());
    }

    let pending = MIGRATIONS.iter().zip(1..).skip(from.max(0) as usize);
    for (sql, version) in pending {
        let mut tx = pool.begin().await?;

        sqlx::query(*sql)
            .execute(&mut *tx)
            .await
            .with_context(|| format!("Migration {} failed", version))?;
        sqlx::query("UPDATE dbmigration SET version = ? WHERE id = 1")
            .bind(version)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
    }

    info!("Schema migrated from version {} to {}", from, CURRENT_VERSION);
    Ok(())
}

/// Get the current migration version
pub async fn get_migration_version(pool: &SqlitePool) -> Result<i32> {
    let row: (i32,) = sqlx::query_as("SELECT version FROM dbmigration WHERE id = 1")
        .fetch_one(pool)
        .await?;

    Ok(row.0)
}

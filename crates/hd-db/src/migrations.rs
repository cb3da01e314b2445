//! Versioned startup migrations.
//!
//! Each entry in [`MIGRATIONS`] is applied at most once, in order, inside its
//! own transaction. Applied versions are recorded in `schema_version` so a
//! restart never re-runs or drops existing data.

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use log::info;
use sqlx::SqlitePool;

const MIGRATIONS: &[(i64, &str)] = &[
    (
        1,
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            identifier TEXT NOT NULL UNIQUE,
            type TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS queries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER REFERENCES users(id),
            user_context TEXT,
            problem TEXT NOT NULL,
            personality TEXT,
            style TEXT,
            language TEXT,
            answer TEXT NOT NULL,
            images TEXT NOT NULL DEFAULT '[]',
            is_public INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        );
        "#,
    ),
    (
        2,
        r#"
        CREATE INDEX IF NOT EXISTS idx_queries_user_id ON queries(user_id);
        CREATE INDEX IF NOT EXISTS idx_queries_public ON queries(is_public, created_at);
        "#,
    ),
];

/// Apply all pending migrations. Safe to call on every startup.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    sqlx::raw_sql(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at INTEGER NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    for (version, sql) in MIGRATIONS {
        let applied: Option<i64> =
            sqlx::query_scalar("SELECT version FROM schema_version WHERE version = ?")
                .bind(version)
                .fetch_optional(pool)
                .await?;

        if applied.is_some() {
            continue;
        }

        let mut tx = pool.begin().await?;

        sqlx::raw_sql(sql)
            .execute(&mut *tx)
            .await
            .map_err(|e| DbError::Migration {
                message: format!("migration {} failed: {}", version, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        sqlx::query("INSERT INTO schema_version (version, applied_at) VALUES (?, ?)")
            .bind(version)
            .bind(chrono::Utc::now().timestamp())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("Applied migration {}", version);
    }

    Ok(())
}

//! User repository - insert-if-absent login semantics.

use crate::{DbError, Result as DbErrorResult};

use hd_core::{IdentifierKind, User};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert-if-absent keyed on the identifier, then read the row back.
    /// A repeat login returns the existing row untouched.
    pub async fn find_or_create(&self, identifier: &str) -> DbErrorResult<User> {
        let kind = IdentifierKind::classify(identifier);
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO users (identifier, type, created_at)
                VALUES (?, ?, ?)
                ON CONFLICT(identifier) DO NOTHING
            "#,
        )
        .bind(identifier)
        .bind(kind.as_str())
        .bind(now)
        .execute(&self.pool)
        .await?;

        let row = sqlx::query(
            r#"
                SELECT id, identifier, type, created_at
                FROM users
                WHERE identifier = ?
            "#,
        )
        .bind(identifier)
        .fetch_one(&self.pool)
        .await?;

        map_user_row(&row)
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<User>> {
        let row = sqlx::query(
            r#"
                SELECT id, identifier, type, created_at
                FROM users
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| map_user_row(&r)).transpose()
    }
}

fn map_user_row(row: &SqliteRow) -> DbErrorResult<User> {
    let kind_str: String = row.try_get("type")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(User {
        id: row.try_get("id")?,
        identifier: row.try_get("identifier")?,
        kind: IdentifierKind::from_str(&kind_str).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid identifier kind in users.type: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::CorruptRow {
            message: "Invalid timestamp in users.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}

//! Query repository - append-only log of analysis results.

use crate::{DbError, Result as DbErrorResult};

use hd_core::{NewQuery, SavedQuery};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Maximum rows returned by the public feed.
const FEED_LIMIT: i64 = 50;

/// A public feed entry: the saved query plus the author's raw identifier.
/// Masking happens at the API boundary, never here.
#[derive(Debug, Clone)]
pub struct FeedRow {
    pub query: SavedQuery,
    pub identifier: String,
}

pub struct QueryRepository {
    pool: SqlitePool,
}

impl QueryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append a query row and return it with the assigned id and timestamp.
    pub async fn insert(&self, new: &NewQuery) -> DbErrorResult<SavedQuery> {
        let created_at = Utc::now();
        let images = serde_json::to_string(&new.images).map_err(|e| DbError::CorruptRow {
            message: format!("Cannot serialize query.images: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let result = sqlx::query(
            r#"
                INSERT INTO queries (
                    user_id, user_context, problem, personality, style,
                    language, answer, images, is_public, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.user_id)
        .bind(&new.user_context)
        .bind(&new.problem)
        .bind(&new.personality)
        .bind(&new.style)
        .bind(&new.language)
        .bind(&new.answer)
        .bind(&images)
        .bind(new.is_public)
        .bind(created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(SavedQuery {
            id: result.last_insert_rowid(),
            user_id: new.user_id,
            user_context: new.user_context.clone(),
            problem: new.problem.clone(),
            personality: new.personality.clone(),
            style: new.style.clone(),
            language: new.language.clone(),
            answer: new.answer.clone(),
            images: new.images.clone(),
            is_public: new.is_public,
            created_at: DateTime::from_timestamp(created_at.timestamp(), 0).ok_or_else(|| {
                DbError::CorruptRow {
                    message: "Invalid timestamp at query insert".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            })?,
        })
    }

    /// All queries for one user, newest first.
    pub async fn find_by_user(&self, user_id: i64) -> DbErrorResult<Vec<SavedQuery>> {
        let rows = sqlx::query(
            r#"
                SELECT id, user_id, user_context, problem, personality, style,
                    language, answer, images, is_public, created_at
                FROM queries
                WHERE user_id = ?
                ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_query_row).collect()
    }

    /// The most recent public queries joined with their author, newest first.
    pub async fn public_feed(&self) -> DbErrorResult<Vec<FeedRow>> {
        let rows = sqlx::query(
            r#"
                SELECT q.id, q.user_id, q.user_context, q.problem, q.personality,
                    q.style, q.language, q.answer, q.images, q.is_public,
                    q.created_at, u.identifier
                FROM queries q
                JOIN users u ON u.id = q.user_id
                WHERE q.is_public = 1
                ORDER BY q.created_at DESC, q.id DESC
                LIMIT ?
            "#,
        )
        .bind(FEED_LIMIT)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|r| {
                Ok(FeedRow {
                    query: map_query_row(r)?,
                    identifier: r.try_get("identifier")?,
                })
            })
            .collect()
    }
}

fn map_query_row(row: &SqliteRow) -> DbErrorResult<SavedQuery> {
    let images_json: String = row.try_get("images")?;
    let created_at: i64 = row.try_get("created_at")?;

    Ok(SavedQuery {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        user_context: row.try_get("user_context")?,
        problem: row.try_get("problem")?,
        personality: row.try_get("personality")?,
        style: row.try_get("style")?,
        language: row.try_get("language")?,
        answer: row.try_get("answer")?,
        images: serde_json::from_str(&images_json).map_err(|e| DbError::CorruptRow {
            message: format!("Invalid JSON in query.images: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        is_public: row.try_get("is_public")?,
        created_at: DateTime::from_timestamp(created_at, 0).ok_or_else(|| DbError::CorruptRow {
            message: "Invalid timestamp in query.created_at".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?,
    })
}

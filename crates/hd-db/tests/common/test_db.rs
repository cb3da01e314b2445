use hd_core::NewQuery;
use hd_db::run_migrations;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// A minimal query row for insert tests
pub fn sample_query(user_id: Option<i64>, is_public: bool) -> NewQuery {
    NewQuery {
        user_id,
        user_context: Some("I get anxious before exams".to_string()),
        problem: "How do I handle exam stress?".to_string(),
        personality: Some("anxious".to_string()),
        style: Some("friendly".to_string()),
        language: Some("fa".to_string()),
        answer: "Take a breath and plan small steps.".to_string(),
        images: vec![],
        is_public,
    }
}

#![allow(dead_code)]

//! Test infrastructure for hd-server API tests

use std::io::Write;
use std::sync::Arc;

use hd_config::GenAiConfig;
use hd_corpus::Corpus;
use hd_genai::GenAiClient;
use hd_server::AppState;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Create a test pool with in-memory SQLite and migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test database");

    hd_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// GenAI config pointed at a mock server (or a dead address for tests
/// that never call the provider)
pub fn test_genai_config(base_url: String) -> GenAiConfig {
    GenAiConfig {
        api_key: Some("test-key".to_string()),
        base_url,
        text_model: "text-model".to_string(),
        image_model: "image-model".to_string(),
        tts_model: "tts-model".to_string(),
        voice: "Kore".to_string(),
        temperature: 0.8,
        article_image_count: 3,
    }
}

/// AppState with an empty corpus
pub async fn create_test_app_state(genai_base_url: String) -> AppState {
    create_test_app_state_with_corpus(genai_base_url, Corpus::default()).await
}

/// AppState with the given corpus
pub async fn create_test_app_state_with_corpus(genai_base_url: String, corpus: Corpus) -> AppState {
    AppState {
        pool: create_test_pool().await,
        corpus: Arc::new(corpus),
        genai: Arc::new(GenAiClient::new(test_genai_config(genai_base_url))),
    }
}

/// A small corpus with two transcripts for scorer-backed tests
pub fn test_corpus() -> Corpus {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create corpus file");
    write!(
        file,
        r#"[
            {{"title": "Managing stress", "text": "how to manage stress at work", "link": "https://example.com/1", "mp3_url": ""}},
            {{"title": "Sleep hygiene", "text": "getting better sleep", "link": "https://example.com/2", "mp3_url": ""}}
        ]"#
    )
    .expect("Failed to write corpus file");

    Corpus::load(file.path()).expect("Failed to load test corpus")
}

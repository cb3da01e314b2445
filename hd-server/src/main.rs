use hd_server::app_state::AppState;
use hd_server::{build_router, logger};

use std::error::Error;
use std::sync::Arc;

use hd_corpus::Corpus;
use hd_genai::GenAiClient;
use log::{info, warn};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = hd_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = hd_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting hd-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    hd_db::run_migrations(&pool).await?;
    info!("Migrations complete");

    // Load the podcast corpus. A missing or unreadable file is not fatal;
    // the scorer just returns no sources.
    let corpus_path = config.corpus_path()?;
    let corpus = match Corpus::load(&corpus_path) {
        Ok(corpus) => {
            info!(
                "Corpus loaded: {} transcripts from {}",
                corpus.len(),
                corpus_path.display()
            );
            corpus
        }
        Err(e) => {
            warn!("Corpus unavailable ({}), serving without grounding", e);
            Corpus::default()
        }
    };

    if config.genai.api_key.is_none() {
        warn!("No GenAI API key configured; analyze and speak will fail");
    }

    // Build application state
    let app_state = AppState {
        pool,
        corpus: Arc::new(corpus),
        genai: Arc::new(GenAiClient::new(config.genai.clone())),
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on Ctrl+C
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for SIGINT: {}", e);
                return;
            }
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}

mod config;
mod corpus_config;
mod database_config;
mod error;
mod genai_config;
mod log_level;
mod logging_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use corpus_config::CorpusConfig;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use genai_config::GenAiConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;
const DEFAULT_DATABASE_FILENAME: &str = "hamdam.db";
const DEFAULT_CORPUS_FILENAME: &str = "podcasts_db.json";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_GENAI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TEXT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";
const DEFAULT_TTS_VOICE: &str = "Kore";
const DEFAULT_TEMPERATURE: f64 = 0.8;
const DEFAULT_ARTICLE_IMAGE_COUNT: u32 = 3;
const MAX_ARTICLE_IMAGE_COUNT: u32 = 8;

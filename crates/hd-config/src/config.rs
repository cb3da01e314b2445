use crate::{
    ConfigError, ConfigErrorResult, CorpusConfig, DatabaseConfig, GenAiConfig, LoggingConfig,
    ServerConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub corpus: CorpusConfig,
    pub genai: GenAiConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config with full production error handling.
    ///
    /// Loading order:
    /// 1. Check for HD_CONFIG_DIR env var, else use ./.hamdam/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply HD_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        // Auto-create config directory
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &PathBuf) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: HD_CONFIG_DIR env var > ./.hamdam/ (relative to cwd)
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        if let Ok(dir) = std::env::var("HD_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(".hamdam"))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.genai.validate()?;

        // Validate file paths don't escape the config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        let corpus_path = std::path::Path::new(&self.corpus.path);
        if corpus_path.is_absolute() || self.corpus.path.contains("..") {
            return Err(ConfigError::corpus(
                "corpus.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get absolute path to the podcast corpus file.
    pub fn corpus_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.corpus.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  database: {}", self.database.path);
        info!("  corpus: {}", self.corpus.path);

        info!(
            "  genai: text={}, image={}, tts={} (voice {}), temp={}, api_key {}",
            self.genai.text_model,
            self.genai.image_model,
            self.genai.tts_model,
            self.genai.voice,
            self.genai.temperature,
            if self.genai.api_key.is_some() {
                "set"
            } else {
                "missing"
            }
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("HD_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("HD_SERVER_PORT", &mut self.server.port);

        // Database
        Self::apply_env_string("HD_DATABASE_PATH", &mut self.database.path);

        // Corpus
        Self::apply_env_string("HD_CORPUS_PATH", &mut self.corpus.path);

        // GenAI
        Self::apply_env_option_string("HD_GENAI_API_KEY", &mut self.genai.api_key);
        Self::apply_env_option_string("GEMINI_API_KEY", &mut self.genai.api_key);
        Self::apply_env_string("HD_GENAI_BASE_URL", &mut self.genai.base_url);
        Self::apply_env_string("HD_GENAI_TEXT_MODEL", &mut self.genai.text_model);
        Self::apply_env_string("HD_GENAI_IMAGE_MODEL", &mut self.genai.image_model);
        Self::apply_env_string("HD_GENAI_TTS_MODEL", &mut self.genai.tts_model);
        Self::apply_env_string("HD_GENAI_VOICE", &mut self.genai.voice);
        Self::apply_env_parse("HD_GENAI_TEMPERATURE", &mut self.genai.temperature);
        Self::apply_env_parse(
            "HD_GENAI_ARTICLE_IMAGE_COUNT",
            &mut self.genai.article_image_count,
        );

        // Logging
        Self::apply_env_parse("HD_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("HD_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("HD_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}

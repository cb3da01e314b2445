use crate::DEFAULT_CORPUS_FILENAME;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to the podcast transcript JSON, relative to the config directory
    pub path: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_CORPUS_FILENAME),
        }
    }
}

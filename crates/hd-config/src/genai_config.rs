use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ARTICLE_IMAGE_COUNT, DEFAULT_GENAI_BASE_URL,
    DEFAULT_IMAGE_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TEXT_MODEL, DEFAULT_TTS_MODEL,
    DEFAULT_TTS_VOICE, MAX_ARTICLE_IMAGE_COUNT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenAiConfig {
    /// API key for the generative language service (never logged)
    pub api_key: Option<String>,
    pub base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub tts_model: String,
    pub voice: String,
    pub temperature: f64,
    /// Illustrations generated per article-mode answer
    pub article_image_count: u32,
}

impl Default for GenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: String::from(DEFAULT_GENAI_BASE_URL),
            text_model: String::from(DEFAULT_TEXT_MODEL),
            image_model: String::from(DEFAULT_IMAGE_MODEL),
            tts_model: String::from(DEFAULT_TTS_MODEL),
            voice: String::from(DEFAULT_TTS_VOICE),
            temperature: DEFAULT_TEMPERATURE,
            article_image_count: DEFAULT_ARTICLE_IMAGE_COUNT,
        }
    }
}

impl GenAiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.base_url.is_empty() {
            return Err(ConfigError::genai("genai.base_url cannot be empty"));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ConfigError::genai(format!(
                "genai.temperature must be 0.0-2.0, got {}",
                self.temperature
            )));
        }

        if self.article_image_count > MAX_ARTICLE_IMAGE_COUNT {
            return Err(ConfigError::genai(format!(
                "genai.article_image_count must be <= {}, got {}",
                MAX_ARTICLE_IMAGE_COUNT, self.article_image_count
            )));
        }

        Ok(())
    }
}

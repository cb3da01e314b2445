//! HTTP client for the generative language API.

use crate::audio::wav_from_pcm;
use crate::error::{GenAiError, Result as GenAiResult};
use crate::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    PrebuiltVoiceConfig, SpeechConfig, VoiceConfig,
};

use hd_config::GenAiConfig;

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use error_location::ErrorLocation;
use log::debug;

const ILLUSTRATION_ASPECT_RATIO: &str = "16:9";

pub struct GenAiClient {
    http: reqwest::Client,
    config: GenAiConfig,
}

impl GenAiClient {
    pub fn new(config: GenAiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &GenAiConfig {
        &self.config
    }

    /// Run the analysis prompt against the text model.
    pub async fn generate_text(&self, prompt: &str) -> GenAiResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: Some(GenerationConfig {
                temperature: Some(self.config.temperature),
                ..Default::default()
            }),
        };

        let response = self.generate(&self.config.text_model, &request).await?;

        response
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| GenAiError::EmptyResponse {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Generate one illustration and return it as a data URL.
    pub async fn generate_image(&self, prompt: &str) -> GenAiResult<String> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: ILLUSTRATION_ASPECT_RATIO.to_string(),
                }),
                ..Default::default()
            }),
        };

        let response = self.generate(&self.config.image_model, &request).await?;

        let inline = response
            .first_inline_data()
            .ok_or_else(|| GenAiError::EmptyResponse {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mime = if inline.mime_type.is_empty() {
            "image/png"
        } else {
            &inline.mime_type
        };

        Ok(format!("data:{};base64,{}", mime, inline.data))
    }

    /// Speak the text and return a complete WAV file.
    pub async fn synthesize_speech(&self, text: &str) -> GenAiResult<Vec<u8>> {
        let request = GenerateContentRequest {
            contents: vec![Content::user_text(text)],
            generation_config: Some(GenerationConfig {
                response_modalities: Some(vec!["AUDIO".to_string()]),
                speech_config: Some(SpeechConfig {
                    voice_config: VoiceConfig {
                        prebuilt_voice_config: PrebuiltVoiceConfig {
                            voice_name: self.config.voice.clone(),
                        },
                    },
                }),
                ..Default::default()
            }),
        };

        let response = self.generate(&self.config.tts_model, &request).await?;

        let inline = response
            .first_inline_data()
            .ok_or_else(|| GenAiError::EmptyResponse {
                location: ErrorLocation::from(Location::caller()),
            })?;

        let pcm = BASE64
            .decode(&inline.data)
            .map_err(|source| GenAiError::Decode {
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(wav_from_pcm(&pcm))
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> GenAiResult<GenerateContentResponse> {
        let api_key =
            self.config
                .api_key
                .as_deref()
                .ok_or_else(|| GenAiError::MissingApiKey {
                    location: ErrorLocation::from(Location::caller()),
                })?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            model
        );

        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenAiError::Status {
                status: status.as_u16(),
                body,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(response.json().await?)
    }
}

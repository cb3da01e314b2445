use serde::Deserialize;

/// POST /api/speak request body
#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: String,
}

use serde::{Deserialize, Serialize};

/// One reference document: a podcast episode with its transcript text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Podcast {
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub mp3_url: String,
}

use hd_core::Fragment;
use hd_corpus::ScoredPodcast;

use serde::Serialize;

/// POST /api/analyze response body
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub answer: String,
    pub images: Vec<String>,
    /// Parsed block markup of the answer, image placeholders resolved
    pub fragments: Vec<Fragment>,
    pub sources: Vec<SourceDto>,
}

/// Metadata of one transcript the answer was grounded on
#[derive(Debug, Serialize)]
pub struct SourceDto {
    pub title: String,
    pub link: String,
    pub mp3_url: String,
    pub score: u32,
}

impl From<&ScoredPodcast<'_>> for SourceDto {
    fn from(s: &ScoredPodcast<'_>) -> Self {
        Self {
            title: s.podcast.title.clone(),
            link: s.podcast.link.clone(),
            mp3_url: s.podcast.mp3_url.clone(),
            score: s.score,
        }
    }
}

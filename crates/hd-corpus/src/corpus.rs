//! Fixed in-memory corpus and the keyword relevance scorer.
//!
//! The corpus is loaded once at startup and read-only afterwards; handlers
//! receive it explicitly rather than reaching for ambient state.

use crate::error::{CorpusError, Result as CorpusErrorResult};
use crate::podcast::Podcast;

use std::path::Path;

/// Maximum number of documents returned by [`Corpus::relevant`].
const MAX_RESULTS: usize = 5;

/// Query tokens at or below this character count are ignored.
const MIN_TOKEN_CHARS: usize = 2;

/// The read-only reference collection used for grounding answers.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    podcasts: Vec<Podcast>,
}

/// A document selected by the scorer, with its keyword-overlap score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredPodcast<'a> {
    pub podcast: &'a Podcast,
    pub score: u32,
}

impl Corpus {
    pub fn new(podcasts: Vec<Podcast>) -> Self {
        Self { podcasts }
    }

    /// Load the corpus from a JSON file (an array of podcast records).
    pub fn load(path: &Path) -> CorpusErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let podcasts: Vec<Podcast> =
            serde_json::from_str(&contents).map_err(|e| CorpusError::Json {
                path: path.to_path_buf(),
                source: e,
            })?;
        Ok(Self { podcasts })
    }

    pub fn len(&self) -> usize {
        self.podcasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.podcasts.is_empty()
    }

    /// Rank documents against a free-text query.
    ///
    /// The query is lower-cased and split on whitespace; tokens of more than
    /// [`MIN_TOKEN_CHARS`] characters each add one point to every document
    /// whose lower-cased title+text contains the token as a substring.
    /// Tokens are NOT deduplicated: a query that repeats a matching token
    /// scores it once per occurrence. Zero-scoring documents are dropped,
    /// the rest are sorted by descending score (ties keep corpus order) and
    /// truncated to [`MAX_RESULTS`].
    pub fn relevant(&self, query: &str) -> Vec<ScoredPodcast<'_>> {
        if query.is_empty() || self.podcasts.is_empty() {
            return Vec::new();
        }

        let lowered = query.to_lowercase();
        let keywords: Vec<&str> = lowered
            .split_whitespace()
            .filter(|k| k.chars().count() > MIN_TOKEN_CHARS)
            .collect();

        let mut scored: Vec<ScoredPodcast<'_>> = self
            .podcasts
            .iter()
            .filter_map(|podcast| {
                let content = format!("{} {}", podcast.title, podcast.text).to_lowercase();
                let score = keywords.iter().filter(|k| content.contains(**k)).count() as u32;
                (score > 0).then_some(ScoredPodcast { podcast, score })
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(MAX_RESULTS);
        scored
    }
}

use hd_core::SavedQuery;

use serde::Serialize;

/// Saved query DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct QueryDto {
    pub id: i64,
    pub user_id: Option<i64>,
    pub user_context: Option<String>,
    pub problem: String,
    pub personality: Option<String>,
    pub style: Option<String>,
    pub language: Option<String>,
    pub answer: String,
    pub images: Vec<String>,
    pub is_public: bool,
    pub created_at: i64,
}

impl From<SavedQuery> for QueryDto {
    fn from(q: SavedQuery) -> Self {
        Self {
            id: q.id,
            user_id: q.user_id,
            user_context: q.user_context,
            problem: q.problem,
            personality: q.personality,
            style: q.style,
            language: q.language,
            answer: q.answer,
            images: q.images,
            is_public: q.is_public,
            created_at: q.created_at.timestamp(),
        }
    }
}

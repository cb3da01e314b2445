use serde::Deserialize;

/// POST /api/analyze request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub user_id: Option<i64>,
    pub problem: String,
    pub personality: Option<String>,
    pub style: Option<String>,
    pub language: Option<String>,
    pub user_context: Option<String>,
    #[serde(default)]
    pub article_mode: bool,
    /// Absent means private when the result is persisted
    pub is_public: Option<bool>,
}

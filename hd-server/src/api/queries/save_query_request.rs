use serde::Deserialize;

/// POST /api/save-query request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveQueryRequest {
    pub user_id: Option<i64>,
    pub user_context: Option<String>,
    pub problem: String,
    pub personality: Option<String>,
    pub style: Option<String>,
    pub language: Option<String>,
    pub answer: String,
    #[serde(default)]
    pub images: Vec<String>,
    /// Absent means private; queries are only shared when the client opts in
    pub is_public: Option<bool>,
}

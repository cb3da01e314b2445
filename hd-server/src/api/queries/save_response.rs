use serde::Serialize;

/// POST /api/save-query response body
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub success: bool,
}

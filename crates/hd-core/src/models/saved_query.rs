//! Query entity - one row per analysis request, append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted analysis result. Immutable once written; the query log is an
/// append-only record of interactions, not a managed data store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedQuery {
    pub id: i64,
    pub user_id: Option<i64>,
    pub user_context: Option<String>,
    pub problem: String,
    pub personality: Option<String>,
    pub style: Option<String>,
    pub language: Option<String>,
    pub answer: String,
    /// Generated image references, in placeholder order
    pub images: Vec<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields of a query to be inserted. `id` and `created_at` are assigned by
/// the repository at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewQuery {
    pub user_id: Option<i64>,
    pub user_context: Option<String>,
    pub problem: String,
    pub personality: Option<String>,
    pub style: Option<String>,
    pub language: Option<String>,
    pub answer: String,
    pub images: Vec<String>,
    pub is_public: bool,
}

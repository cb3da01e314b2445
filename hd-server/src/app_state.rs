use std::sync::Arc;

use hd_corpus::Corpus;
use hd_genai::GenAiClient;

use sqlx::SqlitePool;

/// Shared per-request state. Cheap to clone; the corpus is read-only after
/// startup and the client is stateless.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub corpus: Arc<Corpus>,
    pub genai: Arc<GenAiClient>,
}

pub mod error;
pub mod migrations;
pub mod repositories;

pub use error::{DbError, Result};
pub use migrations::run_migrations;
pub use repositories::query_repository::{FeedRow, QueryRepository};
pub use repositories::user_repository::UserRepository;

pub mod query_repository;
pub mod user_repository;

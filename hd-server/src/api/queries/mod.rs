pub mod feed_entry_dto;
pub mod queries;
pub mod query_dto;
pub mod save_query_request;
pub mod save_response;

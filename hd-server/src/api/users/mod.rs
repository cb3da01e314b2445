pub mod login_request;
pub mod user_dto;
pub mod users;

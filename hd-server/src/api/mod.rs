pub mod analysis;
pub mod error;
pub mod queries;
pub mod users;

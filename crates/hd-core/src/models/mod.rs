pub mod language;
pub mod personality_trait;
pub mod response_style;
pub mod saved_query;
pub mod user;

pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    analysis::{
        analysis::{analyze, speak},
        analyze_request::AnalyzeRequest,
        analyze_response::{AnalyzeResponse, SourceDto},
        speak_request::SpeakRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    queries::{
        feed_entry_dto::FeedEntryDto,
        queries::{history, public_feed, save_query},
        query_dto::QueryDto,
        save_query_request::SaveQueryRequest,
        save_response::SaveResponse,
    },
    users::{login_request::LoginRequest, user_dto::UserDto, users::login},
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;

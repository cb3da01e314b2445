//! Query log REST API handlers

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::queries::feed_entry_dto::FeedEntryDto;
use crate::api::queries::query_dto::QueryDto;
use crate::api::queries::save_query_request::SaveQueryRequest;
use crate::api::queries::save_response::SaveResponse;
use crate::app_state::AppState;

use hd_core::NewQuery;
use hd_db::QueryRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;

/// POST /api/save-query
///
/// Append an already-generated answer to the query log.
pub async fn save_query(
    State(state): State<AppState>,
    Json(request): Json<SaveQueryRequest>,
) -> ApiResult<Json<SaveResponse>> {
    if request.problem.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "problem is required".to_string(),
            field: Some("problem".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = QueryRepository::new(state.pool.clone());
    repo.insert(&NewQuery {
        user_id: request.user_id,
        user_context: request.user_context,
        problem: request.problem,
        personality: request.personality,
        style: request.style,
        language: request.language,
        answer: request.answer,
        images: request.images,
        is_public: request.is_public.unwrap_or(false),
    })
    .await?;

    Ok(Json(SaveResponse { success: true }))
}

/// GET /api/history/{user_id}
///
/// All queries for one user, newest first.
pub async fn history(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<QueryDto>>> {
    let repo = QueryRepository::new(state.pool.clone());
    let queries = repo.find_by_user(user_id).await?;

    Ok(Json(queries.into_iter().map(QueryDto::from).collect()))
}

/// GET /api/public-feed
///
/// The 50 newest public queries with masked author identifiers.
pub async fn public_feed(State(state): State<AppState>) -> ApiResult<Json<Vec<FeedEntryDto>>> {
    let repo = QueryRepository::new(state.pool.clone());
    let rows = repo.public_feed().await?;

    Ok(Json(rows.into_iter().map(FeedEntryDto::from).collect()))
}

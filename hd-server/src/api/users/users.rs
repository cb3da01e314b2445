//! Login handler
//!
//! Login is insert-if-absent: an unseen identifier registers, a known one
//! signs in. No credentials are involved.

use crate::api::error::{ApiError, Result as ApiResult};
use crate::api::users::login_request::LoginRequest;
use crate::api::users::user_dto::UserDto;
use crate::app_state::AppState;

use hd_db::UserRepository;

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<UserDto>> {
    let identifier = request.identifier.trim();
    if identifier.is_empty() {
        return Err(ApiError::Validation {
            message: "identifier is required".to_string(),
            field: Some("identifier".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = UserRepository::new(state.pool.clone());
    let user = repo.find_or_create(identifier).await?;

    Ok(Json(user.into()))
}
